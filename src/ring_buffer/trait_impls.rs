use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;

use super::RingBuffer;
use crate::growth::Growth;

impl<T: Default + Clone, G: Growth> Clone for RingBuffer<T, G> {
    fn clone(&self) -> RingBuffer<T, G> {
        let len = self.size();
        let mut copy = RingBuffer::with_growth(len);
        if len > 0 {
            let copied = self.peek_range(&mut copy.store);
            debug_assert_eq!(copied, len);
            // top == len wraps to 0
            copy.top = 0;
            copy.is_empty = false;
        }
        copy
    }

    fn clone_from(&mut self, source: &RingBuffer<T, G>) {
        self.assign(source);
    }
}

impl<T: Default + Clone, G: Growth> Default for RingBuffer<T, G> {
    #[inline]
    fn default() -> RingBuffer<T, G> {
        RingBuffer::with_growth(0)
    }
}

/// Takes over the vector as the store; the capacity is the vector's length.
impl<T, G: Growth> From<Vec<T>> for RingBuffer<T, G> {
    fn from(xs: Vec<T>) -> RingBuffer<T, G> {
        let is_empty = xs.is_empty();
        RingBuffer {
            store: xs.into_boxed_slice(),
            bot: 0,
            top: 0,
            is_empty,
            growth: core::marker::PhantomData,
        }
    }
}

impl<T, G, H> PartialEq<RingBuffer<T, H>> for RingBuffer<T, G>
    where T: PartialEq,
          G: Growth,
          H: Growth
{
    fn eq(&self, other: &RingBuffer<T, H>) -> bool {
        if self.size() != other.size() {
            return false;
        }
        let (sa, sb) = self.live();
        let (oa, ob) = other.live();
        sa.iter().chain(sb).eq(oa.iter().chain(ob))
    }
}

impl<T: Eq, G: Growth> Eq for RingBuffer<T, G> {}

impl<T: PartialEq, G: Growth> PartialEq<[T]> for RingBuffer<T, G> {
    fn eq(&self, other: &[T]) -> bool {
        if self.size() != other.len() {
            return false;
        }
        let (a, b) = self.live();
        let (oa, ob) = other.split_at(a.len());
        a == oa && b == ob
    }
}

impl<T: PartialEq, G: Growth> PartialEq<Vec<T>> for RingBuffer<T, G> {
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq, G: Growth, const N: usize> PartialEq<[T; N]> for RingBuffer<T, G> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Hash, G: Growth> Hash for RingBuffer<T, G> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.size().hash(state);
        let (a, b) = self.live();
        for x in a.iter().chain(b) {
            x.hash(state);
        }
    }
}

/// Extend the `RingBuffer` with an iterator, growing as needed.
impl<T: Default + Clone, G: Growth> Extend<T> for RingBuffer<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.resize(self.size().saturating_add(lower));
        for elt in iter {
            self.push(elt);
        }
    }
}

impl<'a, T: 'a + Default + Clone, G: Growth> Extend<&'a T> for RingBuffer<T, G> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Default + Clone, G: Growth> iter::FromIterator<T> for RingBuffer<T, G> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> RingBuffer<T, G> {
        let mut buf = RingBuffer::with_growth(0);
        buf.extend(iter);
        buf
    }
}

impl<T: fmt::Debug, G: Growth> fmt::Debug for RingBuffer<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.live();
        f.debug_list().entries(a.iter().chain(b)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{Doubling, Factor};
    use alloc::format;
    use alloc::vec;
    use std::collections::hash_map::DefaultHasher;

    fn wrapped() -> RingBuffer<i32> {
        let mut buf = RingBuffer::new(4);
        buf.push_range(&[1, 2, 3, 4]);
        let mut out = [0; 2];
        buf.pull_range(&mut out);
        buf.push_range(&[5, 6]);
        buf
    }

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn clone_is_sized_to_contents() {
        let buf = wrapped();
        let copy = buf.clone();
        assert_eq!(copy.capacity(), 4);
        assert_eq!((copy.bot, copy.top), (0, 0));
        assert_eq!(copy, [3, 4, 5, 6]);

        let mut buf = RingBuffer::new(16);
        buf.push_range(&[1, 2, 3]);
        let copy = buf.clone();
        assert_eq!(copy.capacity(), 3);
        assert_eq!(copy, [1, 2, 3]);
    }

    #[test]
    fn clone_of_empty_has_no_store() {
        let mut buf: RingBuffer<i32> = RingBuffer::new(8);
        buf.push(1);
        buf.pull();
        let copy = buf.clone();
        assert!(copy.empty());
        assert_eq!(copy.capacity(), 0);
    }

    #[test]
    fn clone_is_independent() {
        let mut buf = wrapped();
        let copy = buf.clone();
        buf.push_range(&[7, 8, 9]);
        buf.pull();
        assert_eq!(copy.size(), 4);
        assert_eq!(copy, [3, 4, 5, 6]);
        assert_eq!(buf, [4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn clone_from_replaces() {
        let mut buf = RingBuffer::new(1);
        buf.push(0);
        buf.clone_from(&wrapped());
        assert_eq!(buf, [3, 4, 5, 6]);
    }

    #[test]
    fn self_assignment_keeps_contents() {
        let mut buf = wrapped();
        buf = buf.clone();
        assert_eq!(buf.size(), 4);
        assert_eq!(buf, [3, 4, 5, 6]);
    }

    #[test]
    fn eq_ignores_layout() {
        let a = wrapped();
        let b: RingBuffer<i32> = vec![3, 4, 5, 6].into();
        let c: RingBuffer<i32, Factor<3>> = (3..7).collect();
        assert_eq!(a, b);
        assert!(a == c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, vec![3, 4, 5]);
        assert_ne!(a, [3, 4, 6, 5]);
    }

    #[test]
    fn from_vec() {
        let buf: RingBuffer<u8> = Vec::new().into();
        assert!(buf.empty());
        assert_eq!(buf.capacity(), 0);

        let mut buf: RingBuffer<u8> = vec![1, 2, 3].into();
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.size(), 3);
        buf.push(4);
        assert_eq!(buf.capacity(), 6);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn extend_and_collect() {
        let mut buf: RingBuffer<u32, Doubling> = (0..5).collect();
        assert_eq!(buf.capacity(), 5);
        buf.extend(&[5, 6]);
        buf.extend(vec![7]);
        assert_eq!(buf, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn debug_lists_front_to_back() {
        assert_eq!(format!("{:?}", wrapped()), "[3, 4, 5, 6]");
        assert_eq!(format!("{:?}", RingBuffer::<u8>::new(2)), "[]");
    }
}
