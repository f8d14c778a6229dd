use crate::error::SpscBufError;
use core::ptr::NonNull;
use std::alloc::{alloc_zeroed, dealloc, Layout};

/// Fixed-size byte pool backing a [`crate::RingBuffer`].
///
/// Owns its storage whether it was allocated here or adopted from a
/// caller-supplied boxed slice; both forms share the byte-array layout,
/// so release and hand-back work the same way for either origin.
pub(crate) struct Pool {
    ptr: NonNull<u8>,
    len: usize,
}

impl Pool {
    /// Allocates a zeroed pool of `len` bytes.
    pub(crate) fn alloc(len: usize) -> Result<Self, SpscBufError> {
        debug_assert!(len > 0);
        let layout =
            Layout::array::<u8>(len).map_err(|_| SpscBufError::CapacityTooLarge(len))?;
        let ptr = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(ptr).ok_or(SpscBufError::AllocationFailed(len))?;
        Ok(Pool { ptr, len })
    }

    /// Adopts an already-owned pool.
    pub(crate) fn from_boxed(pool: Box<[u8]>) -> Self {
        debug_assert!(!pool.is_empty());
        let len = pool.len();
        let ptr = NonNull::from(Box::leak(pool)).cast::<u8>();
        Pool { ptr, len }
    }

    /// Hands the bytes back to the caller instead of freeing them.
    pub(crate) fn into_boxed(self) -> Box<[u8]> {
        let ptr = self.ptr.as_ptr();
        let len = self.len;
        std::mem::forget(self);
        unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len)) }
    }

    pub(crate) fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        // Layout was validated at construction.
        let layout = Layout::array::<u8>(self.len).unwrap();
        unsafe { dealloc(self.ptr.as_ptr(), layout) };
    }
}

unsafe impl Send for Pool {}
unsafe impl Sync for Pool {}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::Result;

    #[test]
    fn test_alloc_is_zeroed() -> Result<()> {
        let pool = Pool::alloc(64)?;
        assert_eq!(pool.len(), 64);

        let bytes = pool.into_boxed();
        assert!(bytes.iter().all(|&b| b == 0));

        Ok(())
    }

    #[test]
    fn test_adopted_pool_round_trips() {
        let pool = Pool::from_boxed(vec![7u8; 16].into_boxed_slice());
        assert_eq!(pool.len(), 16);

        unsafe { pool.as_ptr().write(42) };

        let bytes = pool.into_boxed();
        assert_eq!(bytes[0], 42);
        assert!(bytes[1..].iter().all(|&b| b == 7));
    }

    #[test]
    fn test_writes_visible_through_pointer() {
        let pool = Pool::alloc(8).unwrap();
        unsafe {
            for i in 0..8 {
                pool.as_ptr().add(i).write(i as u8);
            }
            for i in 0..8 {
                assert_eq!(pool.as_ptr().add(i).read(), i as u8);
            }
        }
    }
}
