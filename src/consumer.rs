use crate::ringbuf::{RingBuffer, Status};
use std::sync::Arc;

/// Read half of a split [`RingBuffer`].
///
/// Exactly one `Consumer` exists per buffer; it is `Send` but not
/// `Clone`, and `get` takes `&mut self`, so the read cursor has a
/// single owner at all times.
pub struct Consumer {
    rb: Arc<RingBuffer>,
}

impl Consumer {
    pub(crate) fn new(rb: Arc<RingBuffer>) -> Self {
        Consumer { rb }
    }

    /// Copies up to `buf.len()` bytes out of the buffer and returns
    /// the number copied. 0 means the buffer was empty (or `buf` was
    /// empty); the producer committing data makes a retry worthwhile.
    pub fn get(&mut self, buf: &mut [u8]) -> usize {
        // SAFETY: this is the only Consumer for the buffer and `&mut
        // self` keeps the call exclusive on the read side.
        unsafe { self.rb.get_shared(buf) }
    }

    pub fn capacity(&self) -> usize {
        self.rb.capacity()
    }

    pub fn data_len(&self) -> usize {
        self.rb.data_len()
    }

    pub fn space_len(&self) -> usize {
        self.rb.space_len()
    }

    pub fn is_empty(&self) -> bool {
        self.rb.is_empty()
    }

    pub fn status(&self) -> Status {
        self.rb.status()
    }
}
