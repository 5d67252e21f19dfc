//! # Sortmap
//!
//! `sortmap` turns an unordered map into a deterministically ordered sequence of
//! key-value pairs, sorted by key or by value, ascending or descending, or by a
//! caller-supplied comparison rule.
//!
//! Maps are great at lookup and terrible at iteration order. Whenever entries need
//! to be printed, diffed, or ranked, the same dance repeats: collect the entries
//! into a `Vec`, write a comparator, sort, and remember to break value ties so the
//! output is reproducible. This crate packages that dance as a handful of pure
//! functions over an owned [`Pair`] sequence.
//!
//! ## Key Features
//!
//! - **Deterministic output**: the value orderings break ties by key, so equal
//!   values always come out in the same order, run after run.
//! - **Any mapping type**: the entry points accept anything whose borrow iterates
//!   as `(&K, &V)`, whether that is `HashMap`, `BTreeMap`, or your own map type.
//! - **Owned results**: extraction clones keys and values once; the returned
//!   `Vec<Pair<K, V>>` is independent of the source map's lifetime.
//! - **Comparator pass-through**: [`sort_pairs`] and [`by_func`] take a plain
//!   less-than closure for orderings the fixed variants don't cover.
//!
//! ## Usage
//!
//! ### Fixed orderings
//!
//! ```rust
//! use sortmap::{by_key, by_val_desc};
//! use std::collections::HashMap;
//!
//! let m = HashMap::from([("daikon", 2), ("cabbage", 3), ("banana", 1), ("apple", 4)]);
//!
//! for pair in by_key(&m) {
//!     println!("{}: {}", pair.key, pair.value);
//! }
//! // apple: 4
//! // banana: 1
//! // cabbage: 3
//! // daikon: 2
//!
//! let ranked = by_val_desc(&m);
//! assert_eq!(ranked[0].key, "apple"); // highest value first
//! ```
//!
//! ### Custom comparators
//!
//! For orderings the fixed variants don't cover, hand [`by_func`] a less-than
//! predicate over pairs:
//!
//! ```rust
//! use sortmap::by_func;
//! use std::collections::HashMap;
//!
//! let m = HashMap::from([("plum", 5), ("fig", 9), ("cabbage", 3)]);
//! let sorted = by_func(&m, |a, b| a.key.len() < b.key.len());
//!
//! assert_eq!(sorted[0].key, "fig");
//! ```
//!
//! ## Ordering Rules
//!
//! [`by_val`] and [`by_val_desc`] both break value ties **ascending by key**.
//! The tie-break direction is intentionally not reversed for the descending
//! variant: a value-ranked listing flips with the primary direction while ties
//! within it stay in the same, predictable key order.
//!
//! ## Performance Characteristics
//!
//! - Extraction is a single O(N) pass; sorting is the standard library's
//!   O(N log N) stable sort.
//! - Memory overhead is one owned `Pair` per entry; the source map is never
//!   mutated or consumed.
//!
//! This is a convenience shim, not a sorting library: if you need top-k
//! selection, incremental ordering, or an ordered map proper, reach for a
//! different tool.

pub mod pair;
pub mod sort;
pub use pair::Pair;
pub use sort::{by_func, by_key, by_key_desc, by_val, by_val_desc, sort_pairs, to_pairs};

pub mod prelude {
    pub use crate::pair::Pair;
    pub use crate::sort::{by_func, by_key, by_key_desc, by_val, by_val_desc, sort_pairs, to_pairs};
}
