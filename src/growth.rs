//! Growth policies for `RingBuffer`.

/// Tagging trait selecting how a `RingBuffer` grows when it runs out of room.
///
/// When a push needs `target` slots and the buffer holds `max < target`,
/// the new capacity is `max(target, max * FACTOR)`. A buffer with no store
/// at all grows to exactly `target`.
pub trait Growth {
    /// Multiplier applied to the current capacity.
    const FACTOR: usize;

    /// Capacity to allocate when `current` slots are not enough for `target`.
    #[inline]
    fn next_capacity(current: usize, target: usize) -> usize {
        if current == 0 {
            target
        } else {
            target.max(current.saturating_mul(Self::FACTOR))
        }
    }
}

/// Growth policy that at least doubles the capacity. This is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Doubling;
impl Growth for Doubling {
    const FACTOR: usize = 2;
}

/// Growth policy that multiplies the capacity by `N`.
///
/// `Factor<1>` (or `Factor<0>`) grows to exactly what is required, which
/// gives up amortized `O(1)` pushes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Factor<const N: usize>;
impl<const N: usize> Growth for Factor<N> {
    const FACTOR: usize = N;
}
