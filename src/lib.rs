//! A growable ring buffer moving elements in bulk.
//!
//! `RingBuffer` keeps its elements in one heap store and a window that may
//! wrap around the end of it. Ranges are appended at the back and removed
//! or previewed from the front, oldest first. When an append does not fit,
//! the store grows by a multiplicative factor, so pushes are `O(1)`
//! amortized per element.
//!
//! It is meant as a building block for I/O buffering, producer/consumer
//! queues and streaming codecs. It has no internal locking.
//!
//! # Feature Flags
//! The **growring** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; implements `std::io::Read` and `std::io::Write` for
//!     `RingBuffer<u8>`
//!
//!
//! - `serde`
//!   - Optional
//!   - Serialize a `RingBuffer` as the sequence of its elements
//!
//! Without `std` the crate is `no_std` and only needs `alloc`.
//!
//! # Examples
//! ```
//! use growring::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4);
//! buf.push_range(&[1, 2, 3, 4]);
//!
//! let mut out = [0; 2];
//! assert_eq!(buf.pull_range(&mut out), 2);
//! assert_eq!(out, [1, 2]);
//!
//! // wraps around the end of the store
//! buf.push_range(&[5, 6]);
//! assert_eq!(buf.capacity(), 4);
//!
//! // grows
//! buf.push_range(&[7, 8, 9]);
//! assert_eq!(buf.capacity(), 8);
//!
//! let mut out = [0; 16];
//! assert_eq!(buf.pull_range(&mut out), 7);
//! assert_eq!(&out[..7], &[3, 4, 5, 6, 7, 8, 9]);
//! assert!(buf.empty());
//! ```
//!
//! # Growth
//! ```
//! use growring::{Factor, RingBuffer};
//!
//! let mut buf: RingBuffer<u8, Factor<4>> = RingBuffer::with_growth(1);
//! buf.push_range(b"ab");
//! assert_eq!(buf.capacity(), 4);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod ring_buffer;
mod utils;
pub mod error;
pub mod growth;
#[cfg(feature = "std")]
mod io;
#[cfg(feature = "serde")]
mod serde_impls;

pub use error::ReserveError;
pub use growth::{Doubling, Factor, Growth};
pub use ring_buffer::RingBuffer;
