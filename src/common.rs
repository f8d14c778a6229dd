//! Common internal types and utilities for spscbuf.

use crate::sync::{AtomicU64, Ordering};
use crossbeam::utils::CachePadded;

#[inline]
#[cold]
fn cold() {}

#[allow(unused)]
#[inline(always)]
pub(crate) fn likely(b: bool) -> bool {
    if !b {
        cold();
    }
    b
}

#[inline(always)]
pub(crate) fn unlikely(b: bool) -> bool {
    if b {
        cold();
    }
    b
}

/// Free-running cursor pair.
///
/// Positions only ever grow; the logical pool index is
/// `position % capacity` and the lap parity is
/// `(position / capacity) & 1`. Each side owns one counter and only
/// ever stores to its own.
pub(crate) struct Cursors {
    pub(crate) write: CachePadded<AtomicU64>,
    pub(crate) read: CachePadded<AtomicU64>,
}

impl Cursors {
    pub(crate) fn new() -> Self {
        Cursors {
            write: CachePadded::new(AtomicU64::new(0)),
            read: CachePadded::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn zero(&self) {
        self.write.store(0, Ordering::Release);
        self.read.store(0, Ordering::Release);
    }
}
