use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A collection of unique items, supporting the handful of operations that [`KeyedSets`] relies
/// on.
///
/// Implemented for [`HashSet`] (with any hasher) and [`BTreeSet`].
///
/// [`KeyedSets`]: crate::collections::keyed::KeyedSets
pub trait Set {
    /// The type of the items in the Set.
    type Item;

    /// Returns the number of items in the Set.
    fn len(&self) -> usize;

    /// Returns true if the Set contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the Set contains `item`.
    fn contains(&self, item: &Self::Item) -> bool;

    /// Adds `item` to the Set, returning true if it wasn't already present.
    fn insert(&mut self, item: Self::Item) -> bool;

    /// Removes `item` from the Set, returning true if it was present.
    fn remove(&mut self, item: &Self::Item) -> bool;

    /// Adds every item of `items` to the Set. (`self ∪= items`)
    fn union_with<I: IntoIterator<Item = Self::Item>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set for HashSet<T, B> {
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn insert(&mut self, item: T) -> bool {
        HashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    fn union_with<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items);
    }
}

impl<T: Ord> Set for BTreeSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn insert(&mut self, item: T) -> bool {
        BTreeSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        BTreeSet::remove(self, item)
    }

    fn union_with<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items);
    }
}
