#![cfg(test)]

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::*;
use crate::collections::traits::{Set, SetMap};

fn zoo() -> BTreeSetMap<&'static str, i32> {
    BTreeMap::from([("Giraffe", BTreeSet::from([4, 5]))])
}

#[test]
fn test_add_value_to_empty_map() {
    let mut map = HashSetMap::<String, i32>::new();
    map.add_value("Elephant".into(), 1);

    assert_eq!(map.len(), 1, "Adding a value should create exactly one key.");
    assert_eq!(
        map.get("Elephant"),
        Some(&HashSet::from([1])),
        "The new key should own a set containing only the added value."
    );
}

#[test]
fn test_add_value_to_new_and_existing_keys() {
    let mut map = zoo();
    map.add_value("Elephant", 1);

    assert_eq!(
        map,
        BTreeMap::from([
            ("Elephant", BTreeSet::from([1])),
            ("Giraffe", BTreeSet::from([4, 5])),
        ]),
        "Adding against a new key shouldn't touch other keys."
    );

    map.add_value("Elephant", 2);
    map.add_value("Elephant", 2);
    assert_eq!(
        map["Elephant"],
        BTreeSet::from([1, 2]),
        "Adding against an existing key should extend its set, ignoring duplicates."
    );
}

#[test]
fn test_add_values() {
    let mut map = zoo();
    map.add_values("Elephant", [1, 2]);
    map.add_values("Giraffe", vec![3, 4]);

    assert_eq!(
        map,
        BTreeMap::from([
            ("Elephant", BTreeSet::from([1, 2])),
            ("Giraffe", BTreeSet::from([3, 4, 5])),
        ]),
        "All values should be unioned into the set for their key."
    );

    map.add_values("Zebra", []);
    assert!(
        !map.contains_key("Zebra"),
        "Adding no values shouldn't create an empty set."
    );
}

#[test]
fn test_remove_value() {
    let mut map = zoo();
    map.add_value("Elephant", 1);

    assert!(map.remove_value(&"Giraffe", &4), "Removing a present value should return true.");
    assert_eq!(
        map,
        BTreeMap::from([
            ("Elephant", BTreeSet::from([1])),
            ("Giraffe", BTreeSet::from([5])),
        ])
    );

    assert!(map.remove_value(&"Giraffe", &5));
    assert_eq!(
        map,
        BTreeMap::from([("Elephant", BTreeSet::from([1]))]),
        "Removing the last value for a key should remove the key."
    );
}

#[test]
fn test_remove_missing_value() {
    let mut map = zoo();

    assert!(!map.remove_value(&"Elephant", &1), "Removing from a missing key should return false.");
    assert!(!map.remove_value(&"Giraffe", &1), "Removing a missing value should return false.");
    assert_eq!(map, zoo(), "Failed removals shouldn't modify the map.");
}

#[test]
fn test_remove_prunes_created_set() {
    let mut map = HashSetMap::<u8, u8>::new();
    map.values_or_create(3);

    assert!(!map.remove_value(&3, &7));
    assert!(
        map.is_empty(),
        "An empty set should be pruned even when nothing was removed from it."
    );
}

#[test]
fn test_values_or_create() {
    let mut map = zoo();

    assert!(map.values_or_create("Elephant").is_empty(), "A new key should start with an empty set.");
    assert_eq!(map.len(), 2, "The empty set should be stored in the map.");

    map.values_or_create("Elephant").insert(9);
    assert_eq!(
        map.values_or_create("Elephant"),
        &BTreeSet::from([9]),
        "Subsequent calls should return the same set."
    );
    assert_eq!(map.len(), 2);

    assert_eq!(
        map.values_or_create("Giraffe"),
        &BTreeSet::from([4, 5]),
        "Existing sets should be returned untouched."
    );
}

#[test]
fn test_contains_value() {
    let mut map = HashSetMap::<&str, &str>::new();
    map.add_value("Elephant", "trunk");

    assert!(map.contains_value(&"Elephant", &"trunk"));
    assert!(!map.contains_value(&"Elephant", &"tail"), "Missing values aren't contained.");
    assert!(!map.contains_value(&"Giraffe", &"trunk"), "Missing keys contain nothing.");

    assert!(map.remove_value(&"Elephant", &"trunk"));
    assert!(
        !map.contains_value(&"Elephant", &"trunk"),
        "Removed values should no longer be contained."
    );
}

#[test]
fn test_value_count() {
    let mut map = zoo();

    assert_eq!(map.value_count(&"Giraffe"), 2);
    assert_eq!(map.value_count(&"Elephant"), 0, "Missing keys should count as 0.");

    map.remove_value(&"Giraffe", &4);
    assert_eq!(map.value_count(&"Giraffe"), 1);
}

#[test]
fn test_generic_over_set_maps() {
    fn fill<M>(map: &mut M)
    where
        M: SetMap<Key = char, Values: Set<Item = u32> + Default>,
    {
        for (i, c) in "abcab".chars().enumerate() {
            map.add_value(c, i as u32);
        }
    }

    let mut hashed = HashSetMap::new();
    let mut ordered = BTreeSetMap::new();
    fill(&mut hashed);
    fill(&mut ordered);

    assert_eq!(hashed.len(), 3, "Should hold one key per distinct character.");
    assert_eq!(ordered.len(), 3, "Should hold one key per distinct character.");
    assert_eq!(hashed[&'a'], HashSet::from([0, 3]));
    assert_eq!(ordered[&'b'], BTreeSet::from([1, 4]));
}
