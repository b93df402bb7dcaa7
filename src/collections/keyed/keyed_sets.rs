use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::trace;

use crate::collections::traits::{Set, SetItem, SetMap};

/// A [`HashMap`] storing a [`HashSet`] of values against each key.
pub type HashSetMap<K, V> = HashMap<K, HashSet<V>>;

/// A [`BTreeMap`] storing a [`BTreeSet`] of values against each key.
pub type BTreeSetMap<K, V> = BTreeMap<K, BTreeSet<V>>;

/// Extensions for maps which store a set of values against each key.
///
/// Every key in the map is expected to own a non-empty set. The mutating methods here maintain
/// that: sets are created when the first value is added for a key and the key is removed along
/// with its last value. [`values_or_create`](KeyedSets::values_or_create) is the only method that
/// can leave an empty set in the map, because returning one is its whole purpose.
///
/// None of the methods are atomic. Maps shared between threads need to be locked for the duration
/// of each call.
///
/// # Time Complexity
/// Each method performs a constant number of map and set operations, so the complexity is that of
/// the underlying containers (`O(1)` for hash-based, `O(log n)` for tree-based). The exception is
/// [`add_values`](KeyedSets::add_values), which is linear in the number of values added.
pub trait KeyedSets: SetMap<Values: Set + Default> {
    /// Adds `value` to the set stored against `key`, creating the set if this is the first value
    /// for `key`.
    fn add_value(&mut self, key: Self::Key, value: SetItem<Self>);

    /// Adds all of `values` to the set stored against `key`, creating the set if required.
    ///
    /// If `values` is empty, the map isn't modified at all, so no empty set is created.
    fn add_values<I: IntoIterator<Item = SetItem<Self>>>(&mut self, key: Self::Key, values: I);

    /// Removes `value` from the set stored against `key`, returning true if it was present.
    ///
    /// Returns false if `key` isn't in the map or its set doesn't contain `value`. If the set is
    /// empty afterwards, `key` is removed from the map.
    fn remove_value(&mut self, key: &Self::Key, value: &SetItem<Self>) -> bool;

    /// Returns the set stored against `key`, inserting an empty set first if there isn't one.
    fn values_or_create(&mut self, key: Self::Key) -> &mut Self::Values;

    /// Returns true if `key` is in the map and its set contains `value`.
    fn contains_value(&self, key: &Self::Key, value: &SetItem<Self>) -> bool;

    /// Returns the number of values stored against `key`, which is 0 if the key isn't present.
    fn value_count(&self, key: &Self::Key) -> usize;
}

impl<M> KeyedSets for M
where
    M: SetMap<Values: Set + Default>,
{
    fn add_value(&mut self, key: M::Key, value: SetItem<Self>) {
        self.values_or_create(key).insert(value);
    }

    fn add_values<I: IntoIterator<Item = SetItem<Self>>>(&mut self, key: M::Key, values: I) {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return;
        }

        self.values_or_create(key).union_with(values);
    }

    fn remove_value(&mut self, key: &M::Key, value: &SetItem<Self>) -> bool {
        let Some(values) = self.get_mut(key) else {
            return false;
        };

        let removed = values.remove(value);

        // Checked regardless of removed, a set left empty by values_or_create goes too.
        if values.is_empty() {
            self.remove(key);
            trace!(keys = self.len(), "pruned empty value set");
        }

        removed
    }

    fn values_or_create(&mut self, key: M::Key) -> &mut M::Values {
        self.get_or_insert_with(key, || {
            trace!("created value set for new key");
            M::Values::default()
        })
    }

    fn contains_value(&self, key: &M::Key, value: &SetItem<Self>) -> bool {
        match self.get(key) {
            Some(values) => values.contains(value),
            None => false,
        }
    }

    fn value_count(&self, key: &M::Key) -> usize {
        self.get(key).map_or(0, |values| values.len())
    }
}
