//! `serde` support: a `RingBuffer` is a sequence of its elements, front first.

use alloc::vec::Vec;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::growth::Growth;
use crate::RingBuffer;

impl<T: Serialize, G: Growth> Serialize for RingBuffer<T, G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (a, b) = self.live();
        serializer.collect_seq(a.iter().chain(b))
    }
}

/// The buffer's capacity is the length of the sequence.
impl<'de, T: Deserialize<'de>, G: Growth> Deserialize<'de> for RingBuffer<T, G> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(RingBuffer::from)
    }
}
