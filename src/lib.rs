//! # spscbuf - Single-Producer Single-Consumer byte ring buffer
//!
//! Fixed-capacity circular buffer passing a stream of bytes from one
//! producer to one consumer without per-transfer allocation.
//!
//! Both cursors are free-running 64-bit counters published with
//! release stores and read with acquire loads, so the two sides never
//! take a lock and never observe a torn cursor. Operations are
//! non-blocking: `put` and `get` move as many bytes as currently fit
//! and report the count, which may be 0.
//!
//! ## Creating a buffer
//!
//! Allocate a pool of a given capacity with [`RingBuffer::with_capacity`]:
//!
//! ```rust
//! use spscbuf::RingBuffer;
//!
//! let rb = RingBuffer::with_capacity(1024)?;
//! # Ok::<(), spscbuf::SpscBufError>(())
//! ```
//!
//! or bind a pool you already own with [`RingBuffer::from_pool`]:
//!
//! ```rust
//! use spscbuf::RingBuffer;
//!
//! let pool = vec![0u8; 1024].into_boxed_slice();
//! let rb = RingBuffer::from_pool(pool)?;
//! # Ok::<(), spscbuf::SpscBufError>(())
//! ```
//!
//! Capacity must be nonzero and at most [`MAX_CAPACITY`]; allocation
//! failure is reported, never ignored.
//!
//! ## Writing and reading
//!
//! On an unsplit buffer, `put` and `get` take `&mut self`:
//!
//! ```rust
//! use spscbuf::RingBuffer;
//!
//! let mut rb = RingBuffer::with_capacity(8)?;
//!
//! assert_eq!(rb.put(b"hello"), 5);
//!
//! let mut buf = [0u8; 8];
//! let n = rb.get(&mut buf);
//! assert_eq!(&buf[..n], b"hello");
//! # Ok::<(), spscbuf::SpscBufError>(())
//! ```
//!
//! A short count is the only overflow/underflow signal: a full buffer
//! accepts fewer bytes than offered (possibly 0), an empty one returns
//! 0, and callers that need every byte through simply loop:
//!
//! ```rust
//! use spscbuf::RingBuffer;
//!
//! let mut rb = RingBuffer::with_capacity(4)?;
//! let data = b"more than four bytes";
//!
//! let mut sent = 0;
//! while sent < data.len() {
//!     sent += rb.put(&data[sent..]);
//!     let mut sink = [0u8; 4];
//!     rb.get(&mut sink);
//! }
//! # Ok::<(), spscbuf::SpscBufError>(())
//! ```
//!
//! ## Concurrent use
//!
//! [`RingBuffer::split`] hands out exactly one [`Producer`] and one
//! [`Consumer`]; each is `Send`, so the two halves can move to their
//! own threads:
//!
//! ```rust
//! use spscbuf::RingBuffer;
//! use std::thread;
//!
//! let (mut producer, mut consumer) = RingBuffer::with_capacity(64)?.split();
//!
//! let writer = thread::spawn(move || {
//!     let mut sent = 0;
//!     while sent < 16 {
//!         sent += producer.put(&[sent as u8]);
//!     }
//! });
//!
//! let mut received = Vec::new();
//! let mut buf = [0u8; 8];
//! while received.len() < 16 {
//!     let n = consumer.get(&mut buf);
//!     received.extend_from_slice(&buf[..n]);
//! }
//!
//! writer.join().unwrap();
//! assert_eq!(received, (0..16).collect::<Vec<u8>>());
//! # Ok::<(), spscbuf::SpscBufError>(())
//! ```
//!
//! ## Status and length queries
//!
//! Either side may ask how full the buffer is:
//!
//! ```rust
//! use spscbuf::{RingBuffer, Status};
//!
//! let mut rb = RingBuffer::with_capacity(4)?;
//! assert_eq!(rb.status(), Status::Empty);
//!
//! rb.put(b"ab");
//! assert_eq!(rb.status(), Status::HalfFull);
//! assert_eq!(rb.data_len(), 2);
//! assert_eq!(rb.space_len(), 2);
//!
//! rb.put(b"cd");
//! assert_eq!(rb.status(), Status::Full);
//! # Ok::<(), spscbuf::SpscBufError>(())
//! ```
//!
//! `data_len() + space_len() == capacity()` holds in every reachable
//! state.
//!
//! ## Tracing
//!
//! With the `trace` feature enabled, `put` and `get` emit
//! `tracing::trace!` events carrying the cursor positions; without it
//! the [`ring_trace!`] call sites compile to nothing.

pub use consumer::Consumer;
pub use error::SpscBufError;
pub use producer::Producer;
pub use ringbuf::{RingBuffer, Status, MAX_CAPACITY};

pub(crate) mod common;
pub mod consumer;
pub mod error;
#[cfg(all(test, feature = "loom"))]
pub(crate) mod loom;
pub(crate) mod pool;
pub mod producer;
pub mod ringbuf;
pub(crate) mod sync;
mod trace_macro;
