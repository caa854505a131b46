#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Number of live slots in a non-empty window `[bot, top)`.
///
/// `bot == top` means the window covers the whole store.
#[inline]
pub fn count(bot: usize, top: usize, capacity: usize) -> usize {
    debug_assert!(bot < capacity);
    debug_assert!(top < capacity);
    if top > bot {
        top - bot
    } else {
        capacity - (bot - top)
    }
}

/// Lengths of the two runs making up `len` slots starting at `start`:
/// the run up to the end of the store, then the run from offset 0.
#[inline]
pub fn split(start: usize, len: usize, capacity: usize) -> (usize, usize) {
    debug_assert!(len <= capacity);
    let first = len.min(capacity - start);
    (first, len - first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_unwrapped_and_wrapped() {
        assert_eq!(count(1, 3, 4), 2);
        assert_eq!(count(2, 0, 4), 2);
        assert_eq!(count(3, 1, 4), 2);
        assert_eq!(count(2, 2, 4), 4);
        assert_eq!(count(0, 0, 4), 4);
    }

    #[test]
    fn split_runs() {
        assert_eq!(split(0, 4, 4), (4, 0));
        assert_eq!(split(2, 2, 4), (2, 0));
        assert_eq!(split(3, 3, 4), (1, 2));
        assert_eq!(split(3, 0, 4), (0, 0));
    }

    #[test]
    fn wrap_add_wraps_at_capacity() {
        assert_eq!(wrap_add(3, 1, 4), 0);
        assert_eq!(wrap_add(1, 2, 4), 3);
        assert_eq!(wrap_add(2, 4, 4), 2);
    }
}
