//! Map extraction and the comparator-driven sort.
//!
//! This module implements the two moving parts and their compositions:
//! - [`to_pairs`]: copies a mapping's entries into an owned `Vec<Pair>`.
//! - [`sort_pairs`]: sorts a pair slice under a caller-supplied
//!   less-than predicate.
//! - [`by_key`], [`by_key_desc`], [`by_val`], [`by_val_desc`]: fixed
//!   total orders composing the two.
//! - [`by_func`]: extraction plus a custom comparator in one call.

use crate::pair::Pair;
use std::cmp::Ordering;

/// Copies a mapping's entries into an owned `Vec` of [`Pair`]s.
///
/// The mapping is read once, in its own iteration order; no ordering is
/// guaranteed. The output always has exactly one pair per entry, so its
/// length equals the mapping's entry count, and an empty mapping yields
/// an empty `Vec`.
///
/// Any mapping whose borrow iterates as `(&K, &V)` works, which covers
/// `HashMap`, `BTreeMap`, and foreign map types alike.
///
/// # Examples
///
/// ```
/// use sortmap::to_pairs;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("apple", 4), ("banana", 1)]);
/// let mut pairs = to_pairs(&m);
///
/// assert_eq!(pairs.len(), 2);
/// pairs.sort_by(|a, b| a.key.cmp(b.key));
/// assert_eq!(pairs[0].key, "apple");
/// ```
pub fn to_pairs<'a, K, V, M>(map: &'a M) -> Vec<Pair<K, V>>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter()
        .map(|(k, v)| Pair::new(k.clone(), v.clone()))
        .collect()
}

/// Sorts a pair slice in-place under a less-than predicate.
///
/// `less` must be a strict weak ordering over pairs. Afterwards, for
/// every adjacent position `i`, `less(&pairs[i + 1], &pairs[i])` is
/// false. Elements that compare equal under `less` keep their relative
/// order, so a predicate under which nothing is less than anything else
/// leaves the slice exactly as given.
///
/// # Examples
///
/// ```
/// use sortmap::{Pair, sort_pairs};
///
/// let mut pairs = vec![Pair::new("b", 2), Pair::new("a", 1)];
/// sort_pairs(&mut pairs, |x, y| x.key < y.key);
///
/// assert_eq!(pairs[0].key, "a");
/// assert_eq!(pairs[1].key, "b");
/// ```
pub fn sort_pairs<K, V, F>(pairs: &mut [Pair<K, V>], mut less: F)
where
    F: FnMut(&Pair<K, V>, &Pair<K, V>) -> bool,
{
    pairs.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

/// Extracts a mapping's entries and sorts them with a custom predicate.
///
/// Convenience composition of [`to_pairs`] and [`sort_pairs`]; the four
/// fixed orderings are thin wrappers around this.
///
/// # Examples
///
/// Sorting by key length, shortest first:
///
/// ```
/// use sortmap::by_func;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("cabbage", 3), ("fig", 9), ("plum", 5)]);
/// let sorted = by_func(&m, |a, b| a.key.len() < b.key.len());
///
/// let keys: Vec<&str> = sorted.iter().map(|p| p.key).collect();
/// assert_eq!(keys, vec!["fig", "plum", "cabbage"]);
/// ```
pub fn by_func<'a, K, V, M, F>(map: &'a M, less: F) -> Vec<Pair<K, V>>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    F: FnMut(&Pair<K, V>, &Pair<K, V>) -> bool,
{
    let mut pairs = to_pairs(map);
    sort_pairs(&mut pairs, less);
    pairs
}

/// Returns a mapping's entries sorted ascending by key.
///
/// # Examples
///
/// ```
/// use sortmap::by_key;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("daikon", 2), ("cabbage", 3), ("banana", 1), ("apple", 4)]);
/// let sorted = by_key(&m);
///
/// let keys: Vec<&str> = sorted.iter().map(|p| p.key).collect();
/// assert_eq!(keys, vec!["apple", "banana", "cabbage", "daikon"]);
/// ```
pub fn by_key<'a, K, V, M>(map: &'a M) -> Vec<Pair<K, V>>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Ord + Clone + 'a,
    V: Clone + 'a,
{
    by_func(map, |a, b| a.key < b.key)
}

/// Returns a mapping's entries sorted descending by key.
///
/// The exact reverse of [`by_key`].
///
/// # Examples
///
/// ```
/// use sortmap::by_key_desc;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("banana", 1), ("apple", 4)]);
/// let sorted = by_key_desc(&m);
///
/// assert_eq!(sorted[0].key, "banana");
/// assert_eq!(sorted[1].key, "apple");
/// ```
pub fn by_key_desc<'a, K, V, M>(map: &'a M) -> Vec<Pair<K, V>>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Ord + Clone + 'a,
    V: Clone + 'a,
{
    by_func(map, |a, b| b.key < a.key)
}

/// Returns a mapping's entries sorted ascending by value.
///
/// Entries with equal values are ordered ascending by key, so the
/// result is a deterministic total order whenever keys are unique.
///
/// # Examples
///
/// ```
/// use sortmap::by_val;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("daikon", 2), ("cabbage", 3), ("banana", 1), ("apple", 4)]);
/// let sorted = by_val(&m);
///
/// let keys: Vec<&str> = sorted.iter().map(|p| p.key).collect();
/// assert_eq!(keys, vec!["banana", "daikon", "cabbage", "apple"]);
/// ```
pub fn by_val<'a, K, V, M>(map: &'a M) -> Vec<Pair<K, V>>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Ord + Clone + 'a,
    V: Ord + Clone + 'a,
{
    by_func(map, |a, b| {
        a.value < b.value || (a.value == b.value && a.key < b.key)
    })
}

/// Returns a mapping's entries sorted descending by value.
///
/// Entries with equal values are ordered ascending by key, same as
/// [`by_val`]. The tie-break direction is deliberately not reversed:
/// ties come out key-ascending regardless of the primary direction.
///
/// # Examples
///
/// ```
/// use sortmap::by_val_desc;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("daikon", 2), ("cabbage", 3), ("banana", 1), ("apple", 4)]);
/// let sorted = by_val_desc(&m);
///
/// let keys: Vec<&str> = sorted.iter().map(|p| p.key).collect();
/// assert_eq!(keys, vec!["apple", "cabbage", "daikon", "banana"]);
/// ```
pub fn by_val_desc<'a, K, V, M>(map: &'a M) -> Vec<Pair<K, V>>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Ord + Clone + 'a,
    V: Ord + Clone + 'a,
{
    by_func(map, |a, b| {
        b.value < a.value || (a.value == b.value && a.key < b.key)
    })
}
