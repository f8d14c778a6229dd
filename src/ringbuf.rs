use crate::{
    common::{unlikely, Cursors},
    consumer::Consumer,
    error::SpscBufError,
    pool::Pool,
    producer::Producer,
    sync::Ordering,
};
use std::sync::Arc;

/// Largest capacity accepted by [`RingBuffer::with_capacity`] and
/// [`RingBuffer::from_pool`].
///
/// Cursor positions are free-running 64-bit counters, so the bound
/// comes from the largest allocation Rust can represent, not from any
/// packed index width.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// Fill state of a [`RingBuffer`], derived from the cursor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No unread bytes; `get` returns 0.
    Empty,
    /// Every slot holds an unread byte; `put` returns 0.
    Full,
    /// Anywhere in between.
    HalfFull,
}

/// Fixed-capacity byte ring buffer for one producer and one consumer.
///
/// The write and read cursors are free-running counters: the pool slot
/// is `position % capacity` and wrapping past the end of the pool is a
/// plain counter increment, which also flips the lap parity that
/// distinguishes full from empty when both cursors land on the same
/// slot.
pub struct RingBuffer {
    pool: Pool,
    cursors: Cursors,
}

impl RingBuffer {
    /// Allocates a zeroed pool of `capacity` bytes and an empty buffer
    /// over it.
    ///
    /// # Errors
    /// `ZeroCapacity` or `CapacityTooLarge` if `capacity` is outside
    /// `1..=MAX_CAPACITY`, `AllocationFailed` if the allocator cannot
    /// provide the pool.
    pub fn with_capacity(capacity: usize) -> Result<Self, SpscBufError> {
        check_capacity(capacity)?;
        let pool = Pool::alloc(capacity)?;
        Ok(RingBuffer {
            pool,
            cursors: Cursors::new(),
        })
    }

    /// Binds an already-owned pool to an empty buffer. The pool's
    /// length becomes the capacity; its current contents are kept but
    /// unreachable until overwritten by `put`.
    ///
    /// # Errors
    /// `ZeroCapacity` if the pool is empty.
    pub fn from_pool(pool: Box<[u8]>) -> Result<Self, SpscBufError> {
        check_capacity(pool.len())?;
        Ok(RingBuffer {
            pool: Pool::from_boxed(pool),
            cursors: Cursors::new(),
        })
    }

    /// Splits the buffer into its write and read halves.
    ///
    /// Exactly one [`Producer`] and one [`Consumer`] exist per buffer;
    /// that uniqueness is what makes the lock-free cursor protocol
    /// sound.
    pub fn split(self) -> (Producer, Consumer) {
        let rb = Arc::new(self);
        (Producer::new(rb.clone()), Consumer::new(rb))
    }

    /// Returns the pool to the caller, consuming the buffer.
    pub fn into_pool(self) -> Box<[u8]> {
        let RingBuffer { pool, .. } = self;
        pool.into_boxed()
    }

    /// Zeroes both cursors, discarding any unread data without erasing
    /// the underlying bytes.
    ///
    /// Requires `&mut self`, so it cannot overlap an in-flight `put`
    /// or `get` (and is unavailable once the buffer has been split).
    pub fn reset(&mut self) {
        self.cursors.zero();
    }

    pub fn capacity(&self) -> usize {
        self.pool.len()
    }

    /// Number of unread bytes, in `[0, capacity]`.
    ///
    /// The read cursor is loaded first: whichever side calls this, its
    /// own cursor is stable, and the stale snapshot of the other one
    /// only ever under-reports progress, never a length outside range.
    pub fn data_len(&self) -> usize {
        let read = self.cursors.read.load(Ordering::Acquire);
        let write = self.cursors.write.load(Ordering::Acquire);
        self.distance(write, read)
    }

    /// Number of writable bytes, `capacity - data_len()`.
    pub fn space_len(&self) -> usize {
        self.capacity() - self.data_len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.data_len() == self.capacity()
    }

    pub fn status(&self) -> Status {
        match self.data_len() {
            0 => Status::Empty,
            len if len == self.capacity() => Status::Full,
            _ => Status::HalfFull,
        }
    }

    /// Copies up to `data.len()` bytes into the pool at the write
    /// cursor, advancing it. Returns the number of bytes accepted,
    /// clamped to the available space; 0 means the buffer was full
    /// (or `data` was empty).
    pub fn put(&mut self, data: &[u8]) -> usize {
        // SAFETY: `&mut self` makes this call the only writer.
        unsafe { self.put_shared(data) }
    }

    /// Copies up to `buf.len()` bytes out of the pool at the read
    /// cursor, advancing it. Returns the number of bytes copied,
    /// clamped to the unread length; 0 means the buffer was empty
    /// (or `buf` was empty).
    pub fn get(&mut self, buf: &mut [u8]) -> usize {
        // SAFETY: `&mut self` makes this call the only reader.
        unsafe { self.get_shared(buf) }
    }

    /// # Safety
    ///
    /// The caller must be the sole producer: no other `put` may run
    /// concurrently on this buffer.
    pub(crate) unsafe fn put_shared(&self, data: &[u8]) -> usize {
        if unlikely(data.is_empty()) {
            return 0;
        }

        let write = self.cursors.write.load(Ordering::Relaxed);
        let read = self.cursors.read.load(Ordering::Acquire);
        let space = self.capacity() - self.distance(write, read);

        let len = data.len().min(space);
        if unlikely(len == 0) {
            crate::ring_trace!(
                write_pos = write,
                read_pos = read,
                requested = data.len(),
                "put rejected: pool full"
            );
            return 0;
        }

        let slot = (write % self.capacity() as u64) as usize;
        unsafe { self.copy_in(slot, &data[..len]) };
        self.cursors
            .write
            .store(write.wrapping_add(len as u64), Ordering::Release);

        crate::ring_trace!(
            write_pos = write.wrapping_add(len as u64),
            slot = slot,
            len = len,
            "put accepted"
        );

        len
    }

    /// # Safety
    ///
    /// The caller must be the sole consumer: no other `get` may run
    /// concurrently on this buffer.
    pub(crate) unsafe fn get_shared(&self, buf: &mut [u8]) -> usize {
        if unlikely(buf.is_empty()) {
            return 0;
        }

        let read = self.cursors.read.load(Ordering::Relaxed);
        let write = self.cursors.write.load(Ordering::Acquire);
        let available = self.distance(write, read);

        let len = buf.len().min(available);
        if unlikely(len == 0) {
            crate::ring_trace!(
                write_pos = write,
                read_pos = read,
                requested = buf.len(),
                "get rejected: pool empty"
            );
            return 0;
        }

        let slot = (read % self.capacity() as u64) as usize;
        unsafe { self.copy_out(slot, &mut buf[..len]) };
        self.cursors
            .read
            .store(read.wrapping_add(len as u64), Ordering::Release);

        crate::ring_trace!(
            read_pos = read.wrapping_add(len as u64),
            slot = slot,
            len = len,
            "get accepted"
        );

        len
    }

    fn distance(&self, write: u64, read: u64) -> usize {
        let len = write.wrapping_sub(read);
        debug_assert!(len <= self.capacity() as u64, "cursor pair out of range");
        len as usize
    }

    /// # Safety
    ///
    /// `index < capacity` and `data.len() <= space_len()`, so the
    /// copied range holds no unread bytes.
    unsafe fn copy_in(&self, index: usize, data: &[u8]) {
        let pool = self.pool.as_ptr();
        let run = self.capacity() - index;
        if data.len() <= run {
            unsafe { std::ptr::copy_nonoverlapping(data.as_ptr(), pool.add(index), data.len()) };
        } else {
            // Wraps: fill to the end of the pool, continue from slot 0.
            unsafe {
                std::ptr::copy_nonoverlapping(data.as_ptr(), pool.add(index), run);
                std::ptr::copy_nonoverlapping(data.as_ptr().add(run), pool, data.len() - run);
            }
        }
    }

    /// # Safety
    ///
    /// `index < capacity` and `buf.len() <= data_len()`, so the copied
    /// range holds only committed bytes.
    unsafe fn copy_out(&self, index: usize, buf: &mut [u8]) {
        let pool = self.pool.as_ptr();
        let run = self.capacity() - index;
        if buf.len() <= run {
            unsafe { std::ptr::copy_nonoverlapping(pool.add(index), buf.as_mut_ptr(), buf.len()) };
        } else {
            unsafe {
                std::ptr::copy_nonoverlapping(pool.add(index), buf.as_mut_ptr(), run);
                std::ptr::copy_nonoverlapping(pool, buf.as_mut_ptr().add(run), buf.len() - run);
            }
        }
    }
}

impl std::fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("data_len", &self.data_len())
            .field("status", &self.status())
            .finish()
    }
}

fn check_capacity(capacity: usize) -> Result<(), SpscBufError> {
    if capacity == 0 {
        return Err(SpscBufError::ZeroCapacity);
    }
    if capacity > MAX_CAPACITY {
        return Err(SpscBufError::CapacityTooLarge(capacity));
    }
    Ok(())
}
