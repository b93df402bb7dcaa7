use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::Set;

/// A map of keys to (usually set-valued) entries, providing the access patterns needed to
/// auto-vivify and prune entries.
///
/// The key and value types are associated rather than generic so that a map type fully determines
/// what it stores, which lets [`KeyedSets`] be implemented for every SetMap at once.
///
/// Implemented for [`HashMap`] (with any hasher) and [`BTreeMap`].
///
/// [`KeyedSets`]: crate::collections::keyed::KeyedSets
pub trait SetMap {
    /// The type of the keys in the map.
    type Key;
    /// The type stored against each key.
    type Values;

    /// Returns the number of keys in the map.
    fn len(&self) -> usize;

    /// Returns true if the map contains no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the entry stored against `key`, if any.
    fn get(&self, key: &Self::Key) -> Option<&Self::Values>;

    /// Returns a mutable reference to the entry stored against `key`, if any.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Values>;

    /// Returns a mutable reference to the entry stored against `key`, inserting the value
    /// returned by `create` first if the key is absent.
    fn get_or_insert_with<F>(&mut self, key: Self::Key, create: F) -> &mut Self::Values
    where
        F: FnOnce() -> Self::Values;

    /// Removes `key`, returning its entry if it existed.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Values>;
}

impl<K: Hash + Eq, S, B: BuildHasher> SetMap for HashMap<K, S, B> {
    type Key = K;
    type Values = S;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&S> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut S> {
        HashMap::get_mut(self, key)
    }

    fn get_or_insert_with<F: FnOnce() -> S>(&mut self, key: K, create: F) -> &mut S {
        self.entry(key).or_insert_with(create)
    }

    fn remove(&mut self, key: &K) -> Option<S> {
        HashMap::remove(self, key)
    }
}

impl<K: Ord, S> SetMap for BTreeMap<K, S> {
    type Key = K;
    type Values = S;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&S> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut S> {
        BTreeMap::get_mut(self, key)
    }

    fn get_or_insert_with<F: FnOnce() -> S>(&mut self, key: K, create: F) -> &mut S {
        self.entry(key).or_insert_with(create)
    }

    fn remove(&mut self, key: &K) -> Option<S> {
        BTreeMap::remove(self, key)
    }
}

/// The type of the values stored in each of the sets of a [`SetMap`].
pub type SetItem<M> = <<M as SetMap>::Values as Set>::Item;
