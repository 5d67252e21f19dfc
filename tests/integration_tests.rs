use sortmap::prelude::*;
use std::collections::{BTreeMap, HashMap};

fn sample() -> HashMap<&'static str, i32> {
    HashMap::from([("daikon", 2), ("cabbage", 3), ("banana", 1), ("apple", 4)])
}

fn as_tuples<'a>(pairs: &'a [Pair<&'a str, i32>]) -> Vec<(&'a str, i32)> {
    pairs.iter().map(|p| (p.key, p.value)).collect()
}

#[test]
fn test_by_key_ascending() {
    let sorted = by_key(&sample());
    assert_eq!(
        as_tuples(&sorted),
        vec![("apple", 4), ("banana", 1), ("cabbage", 3), ("daikon", 2)]
    );
}

#[test]
fn test_by_key_desc_is_exact_reverse() {
    let map = sample();
    let mut asc = by_key(&map);
    let desc = by_key_desc(&map);

    asc.reverse();
    assert_eq!(asc, desc);
    assert_eq!(desc[0].key, "daikon");
}

#[test]
fn test_by_val_ascending() {
    let sorted = by_val(&sample());
    assert_eq!(
        as_tuples(&sorted),
        vec![("banana", 1), ("daikon", 2), ("cabbage", 3), ("apple", 4)]
    );
}

#[test]
fn test_by_val_desc_descending() {
    let sorted = by_val_desc(&sample());
    assert_eq!(
        as_tuples(&sorted),
        vec![("apple", 4), ("cabbage", 3), ("daikon", 2), ("banana", 1)]
    );
}

#[test]
fn test_value_ties_break_ascending_by_key_both_directions() {
    let map = HashMap::from([("d", 1), ("c", 0), ("b", 1), ("a", 0)]);

    let asc = by_val(&map);
    assert_eq!(
        as_tuples(&asc),
        vec![("a", 0), ("c", 0), ("b", 1), ("d", 1)]
    );

    // Ties stay key-ascending even though the values are descending.
    let desc = by_val_desc(&map);
    assert_eq!(
        as_tuples(&desc),
        vec![("b", 1), ("d", 1), ("a", 0), ("c", 0)]
    );
}

#[test]
fn test_length_matches_and_keys_unique() {
    let map = sample();
    let sorted = by_key(&map);

    assert_eq!(sorted.len(), map.len());
    for pair in &sorted {
        assert_eq!(map.get(pair.key), Some(&pair.value));
    }
}

#[test]
fn test_empty_map() {
    let map: HashMap<String, i64> = HashMap::new();

    assert!(by_key(&map).is_empty());
    assert!(by_key_desc(&map).is_empty());
    assert!(by_val(&map).is_empty());
    assert!(by_val_desc(&map).is_empty());
    assert!(to_pairs(&map).is_empty());
}

#[test]
fn test_always_false_comparator_is_noop() {
    let map = sample();

    let extracted = to_pairs(&map);
    let mut sorted = extracted.clone();
    sort_pairs(&mut sorted, |_, _| false);

    assert_eq!(sorted, extracted);
}

#[test]
fn test_resort_is_idempotent() {
    let map = sample();

    let mut once = by_val_desc(&map);
    let twice = once.clone();
    sort_pairs(&mut once, |a, b| {
        b.value < a.value || (a.value == b.value && a.key < b.key)
    });

    assert_eq!(once, twice);
}

#[test]
fn test_by_func_custom_ordering() {
    // Longest key first, so none of the fixed orderings apply.
    let sorted = by_func(&sample(), |a, b| a.key.len() > b.key.len());

    assert_eq!(sorted[0].key, "cabbage");
    assert_eq!(sorted.last().unwrap().key, "apple");
}

#[test]
fn test_by_func_agrees_with_by_key() {
    let map = sample();
    let fixed = by_key(&map);
    let custom = by_func(&map, |a, b| a.key < b.key);

    assert_eq!(fixed, custom);
}

#[test]
fn test_btree_map_input() {
    let map: BTreeMap<String, u32> =
        BTreeMap::from([("beta".to_string(), 2), ("alpha".to_string(), 1)]);

    let sorted = by_val_desc(&map);
    assert_eq!(sorted[0].key, "beta");
    assert_eq!(sorted[1].key, "alpha");
}

#[test]
fn test_to_pairs_owns_its_contents() {
    let map = HashMap::from([("alpha".to_string(), 1u8)]);
    let pairs = to_pairs(&map);
    drop(map);

    assert_eq!(pairs[0].key, "alpha");
    assert_eq!(pairs[0].value, 1);
}

#[test]
fn test_single_entry() {
    let map = HashMap::from([(7u8, "seven")]);

    for sorted in [by_key(&map), by_key_desc(&map)] {
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0], Pair::new(7, "seven"));
    }
}
