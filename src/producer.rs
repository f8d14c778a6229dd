use crate::ringbuf::{RingBuffer, Status};
use std::sync::Arc;

/// Write half of a split [`RingBuffer`].
///
/// Exactly one `Producer` exists per buffer; it is `Send` but not
/// `Clone`, and `put` takes `&mut self`, so the write cursor has a
/// single owner at all times.
pub struct Producer {
    rb: Arc<RingBuffer>,
}

impl Producer {
    pub(crate) fn new(rb: Arc<RingBuffer>) -> Self {
        Producer { rb }
    }

    /// Copies up to `data.len()` bytes into the buffer and returns the
    /// number accepted. 0 means the buffer was full (or `data` was
    /// empty); the consumer freeing space makes a retry worthwhile.
    pub fn put(&mut self, data: &[u8]) -> usize {
        // SAFETY: this is the only Producer for the buffer and `&mut
        // self` keeps the call exclusive on the write side.
        unsafe { self.rb.put_shared(data) }
    }

    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }

    pub fn space_len(&self) -> usize {
        self.rb.space_len()
    }

    pub fn data_len(&self) -> usize {
        self.rb.data_len()
    }

    pub fn is_full(&self) -> bool {
        self.rb.is_full()
    }

    pub fn status(&self) -> Status {
        self.rb.status()
    }
}
