//! Core pair type.
//!
//! This module defines:
//! - [`Pair`]: one owned (key, value) entry copied out of a mapping.

/// One key-value entry extracted from a mapping.
///
/// A `Pair` owns its key and value: the `Vec<Pair>` produced by
/// [`to_pairs`](crate::sort::to_pairs) and the `by_*` orderings is
/// independent of the source mapping's lifetime. Pairs are created once
/// at extraction time and never mutated by the sorting routines.
///
/// # Examples
///
/// ```
/// use sortmap::Pair;
///
/// let pair = Pair::new("apple", 4);
/// assert_eq!(pair.key, "apple");
/// assert_eq!(pair.value, 4);
///
/// let (k, v) = pair.into_tuple();
/// assert_eq!((k, v), ("apple", 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    /// The entry's key.
    pub key: K,
    /// The entry's value.
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair from a key and a value.
    pub fn new(key: K, value: V) -> Self {
        Pair { key, value }
    }

    /// Consumes the pair, returning its `(key, value)` tuple.
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair { key, value }
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> Self {
        (pair.key, pair.value)
    }
}
