//! Errors reported when a `RingBuffer` cannot grow.

use alloc::collections::TryReserveError;

/// Error value indicating that a `RingBuffer` could not grow.
///
/// Only returned by the `try_` variants; the buffer is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReserveError {
    /// The required capacity does not fit in a `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator refused to provide a store of `requested` slots.
    #[error("failed to allocate a store of {requested} slots")]
    AllocError {
        /// Capacity of the store that could not be allocated.
        requested: usize,
        /// Error reported by the allocator.
        #[source]
        source: TryReserveError,
    },
}
