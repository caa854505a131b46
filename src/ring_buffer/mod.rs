use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::mem;

use crate::error::ReserveError;
use crate::growth::{Doubling, Growth};
use crate::utils::*;

mod trait_impls;

/// `RingBuffer` is a growable ring buffer moving elements in bulk.
///
/// Elements are appended at the back with `push_range` and removed from the
/// front with `pull_range`, oldest first. `peek_range` reads from the front
/// without removing anything. When a push does not fit, the store grows
/// according to the growth policy `G` and the live elements are moved to
/// the start of the new store.
///
/// Cloning a non-empty buffer gives a buffer whose capacity is the length of
/// the original, not its capacity.
pub struct RingBuffer<T, G: Growth = Doubling> {
    store: Box<[T]>,
    bot: usize,
    top: usize,
    is_empty: bool,
    growth: PhantomData<G>,
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[inline]
fn take_into<T: Default>(dst: &mut [T], src: &mut [T]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = mem::take(s);
    }
}

impl<T: Default + Clone> RingBuffer<T> {
    /// Creates an empty `RingBuffer` with room for exactly `capacity` elements.
    ///
    /// A capacity of 0 allocates nothing; the first push allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::RingBuffer;
    ///
    /// let buf: RingBuffer<u8> = RingBuffer::new(16);
    /// assert_eq!(buf.capacity(), 16);
    /// assert!(buf.empty());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> RingBuffer<T> {
        RingBuffer::with_growth(capacity)
    }
}

impl<T, G: Growth> RingBuffer<T, G> {
    #[inline]
    fn max(&self) -> usize {
        self.store.len()
    }

    /// The live slots starting at `start`, as the run up to the end of the
    /// store followed by the run from offset 0.
    #[inline]
    fn segments(&self, start: usize, len: usize) -> (&[T], &[T]) {
        let (first, second) = split(start, len, self.max());
        (&self.store[start..start + first], &self.store[..second])
    }

    #[inline]
    fn segments_mut(&mut self, start: usize, len: usize) -> (&mut [T], &mut [T]) {
        let (first, second) = split(start, len, self.max());
        let (head, tail) = self.store.split_at_mut(start);
        (&mut tail[..first], &mut head[..second])
    }

    /// Both runs of live elements, front first.
    #[inline]
    pub(crate) fn live(&self) -> (&[T], &[T]) {
        self.segments(self.bot, self.size())
    }

    /// Drops `num` slots from the front. `num` must not exceed `size()`.
    #[inline]
    fn consume(&mut self, num: usize) {
        let len = self.size();
        debug_assert!(num <= len);
        if num == len {
            self.bot = 0;
            self.top = 0;
            self.is_empty = true;
        } else {
            self.bot = wrap_add(self.bot, num, self.max());
        }
    }

    /// Returns the number of elements in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(2);
    /// buf.push_range(&[1, 2, 3]);
    /// assert_eq!(buf.size(), 3);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        if self.is_empty {
            0
        } else {
            count(self.bot, self.top, self.max())
        }
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn empty(&self) -> bool {
        self.is_empty
    }

    /// Returns the number of elements the buffer can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max()
    }

    /// Exchanges the whole state of two buffers. Never allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::RingBuffer;
    ///
    /// let mut a = RingBuffer::new(4);
    /// let mut b = RingBuffer::new(0);
    /// a.push_range(&[1, 2]);
    /// a.swap(&mut b);
    /// assert!(a.empty());
    /// assert_eq!(b.size(), 2);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Rebinds the buffer to another growth policy, keeping its store.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::{Factor, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new(2);
    /// buf.push_range(&[1, 2]);
    /// let mut buf = buf.regrow::<Factor<4>>();
    /// buf.push(3);
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    pub fn regrow<H: Growth>(self) -> RingBuffer<T, H> {
        let RingBuffer { store, bot, top, is_empty, .. } = self;
        RingBuffer {
            store,
            bot,
            top,
            is_empty,
            growth: PhantomData,
        }
    }
}

impl<T: Default + Clone, G: Growth> RingBuffer<T, G> {
    /// Creates an empty `RingBuffer` with room for exactly `capacity` elements
    /// and the growth policy `G`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::{Factor, RingBuffer};
    ///
    /// let mut buf: RingBuffer<u32, Factor<3>> = RingBuffer::with_growth(2);
    /// buf.push_range(&[1, 2, 3]);
    /// assert_eq!(buf.capacity(), 6);
    /// ```
    pub fn with_growth(capacity: usize) -> RingBuffer<T, G> {
        let mut store = Vec::with_capacity(capacity);
        store.resize_with(capacity, T::default);
        RingBuffer {
            store: store.into_boxed_slice(),
            bot: 0,
            top: 0,
            is_empty: true,
            growth: PhantomData,
        }
    }

    /// Appends all of `src` to the back of the buffer, in order.
    ///
    /// Grows the buffer first if the free slots are not enough.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.push_range(&[1, 2, 3, 4]);
    /// let mut out = [0; 2];
    /// buf.pull_range(&mut out);
    /// buf.push_range(&[5, 6]);
    /// assert_eq!(buf.capacity(), 4);
    /// assert_eq!(buf, [3, 4, 5, 6]);
    /// ```
    pub fn push_range(&mut self, src: &[T]) {
        if src.is_empty() {
            return;
        }
        let len = self.size();
        if self.max() - len < src.len() {
            let target = len
                .checked_add(src.len())
                .unwrap_or_else(|| capacity_overflow());
            self.resize(target);
        }
        self.write_back(src);
    }

    /// Like `push_range`, but reports a failure to grow instead of aborting.
    ///
    /// On error nothing is appended.
    pub fn try_push_range(&mut self, src: &[T]) -> Result<(), ReserveError> {
        if src.is_empty() {
            return Ok(());
        }
        let len = self.size();
        if self.max() - len < src.len() {
            let target = len
                .checked_add(src.len())
                .ok_or(ReserveError::CapacityOverflow)?;
            self.try_resize(target)?;
        }
        self.write_back(src);
        Ok(())
    }

    /// Appends one element to the back of the buffer.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.push_range(core::slice::from_ref(&value));
    }

    /// Writes `src` at `top`. The free slots must already be enough.
    fn write_back(&mut self, src: &[T]) {
        let num = src.len();
        debug_assert!(self.max() - self.size() >= num);
        let top = self.top;
        let (a, b) = self.segments_mut(top, num);
        let (src_a, src_b) = src.split_at(a.len());
        a.clone_from_slice(src_a);
        b.clone_from_slice(src_b);
        self.top = wrap_add(top, num, self.max());
        self.is_empty = false;
    }

    /// Moves up to `dst.len()` elements from the front of the buffer into
    /// `dst`, oldest first, and returns how many were moved.
    ///
    /// Asking for more than `size()` elements is not an error: the buffer is
    /// drained and the short count is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.push_range(&[1, 2, 3]);
    ///
    /// let mut out = [0; 8];
    /// assert_eq!(buf.pull_range(&mut out), 3);
    /// assert_eq!(&out[..3], &[1, 2, 3]);
    /// assert!(buf.empty());
    /// ```
    pub fn pull_range(&mut self, dst: &mut [T]) -> usize {
        let num = dst.len().min(self.size());
        if num == 0 {
            return 0;
        }
        let bot = self.bot;
        let (a, b) = self.segments_mut(bot, num);
        let (dst_a, dst_b) = dst[..num].split_at_mut(a.len());
        take_into(dst_a, a);
        take_into(dst_b, b);
        self.consume(num);
        num
    }

    /// Removes the front element, if any.
    pub fn pull(&mut self) -> Option<T> {
        if self.is_empty {
            return None;
        }
        let value = mem::take(&mut self.store[self.bot]);
        self.consume(1);
        Some(value)
    }

    /// Copies up to `dst.len()` elements from the front of the buffer into
    /// `dst` without removing them, and returns how many were copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.push_range(&[1, 2, 3]);
    ///
    /// let mut out = [0; 2];
    /// assert_eq!(buf.peek_range(&mut out), 2);
    /// assert_eq!(out, [1, 2]);
    /// assert_eq!(buf.size(), 3);
    /// ```
    pub fn peek_range(&self, dst: &mut [T]) -> usize {
        let num = dst.len().min(self.size());
        if num == 0 {
            return 0;
        }
        let (a, b) = self.segments(self.bot, num);
        let (dst_a, dst_b) = dst[..num].split_at_mut(a.len());
        dst_a.clone_from_slice(a);
        dst_b.clone_from_slice(b);
        num
    }

    /// Removes every element, keeping the store.
    pub fn clear(&mut self) {
        let (bot, len) = (self.bot, self.size());
        let (a, b) = self.segments_mut(bot, len);
        a.fill_with(T::default);
        b.fill_with(T::default);
        self.bot = 0;
        self.top = 0;
        self.is_empty = true;
    }

    /// Makes room for at least `target` elements and returns the capacity.
    ///
    /// Does nothing if the capacity is already `target` or more. Otherwise
    /// the store is reallocated to `max(target, capacity * G::FACTOR)` slots
    /// (exactly `target` for a buffer without a store) and the live elements
    /// are moved to its start.
    ///
    /// # Examples
    ///
    /// ```
    /// use growring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<u8> = RingBuffer::new(0);
    /// assert_eq!(buf.resize(3), 3);
    /// assert_eq!(buf.resize(4), 6);
    /// assert_eq!(buf.resize(2), 6);
    /// ```
    pub fn resize(&mut self, target: usize) -> usize {
        let max = self.max();
        if max >= target {
            return max;
        }
        let capacity = G::next_capacity(max, target);
        self.relocate(Vec::with_capacity(capacity), capacity);
        capacity
    }

    /// Like `resize`, but reports a failure to allocate instead of aborting.
    ///
    /// On error the buffer is unchanged.
    pub fn try_resize(&mut self, target: usize) -> Result<usize, ReserveError> {
        let max = self.max();
        if max >= target {
            return Ok(max);
        }
        let capacity = G::next_capacity(max, target);
        let mut store = Vec::new();
        store
            .try_reserve_exact(capacity)
            .map_err(|source| ReserveError::AllocError {
                requested: capacity,
                source,
            })?;
        self.relocate(store, capacity);
        Ok(capacity)
    }

    /// Moves the live elements to the start of `store`, pads it to
    /// `capacity` slots and installs it. `store` must be empty.
    fn relocate(&mut self, mut store: Vec<T>, capacity: usize) {
        debug_assert!(store.is_empty());
        let old = self.max();
        let (bot, len) = (self.bot, self.size());
        debug_assert!(len < capacity);
        {
            let (a, b) = self.segments_mut(bot, len);
            store.extend(a.iter_mut().map(mem::take));
            store.extend(b.iter_mut().map(mem::take));
        }
        store.resize_with(capacity, T::default);
        self.store = store.into_boxed_slice();
        self.bot = 0;
        self.top = len;
        tracing::trace!(from = old, to = capacity, len, "grew ring buffer");
    }

    /// Replaces the contents of `self` with a copy of `other`.
    ///
    /// The copy is built before anything in `self` changes, so `self` is
    /// either fully replaced or left as it was.
    pub fn assign(&mut self, other: &Self) {
        let mut copy = other.clone();
        self.swap(&mut copy);
    }
}
