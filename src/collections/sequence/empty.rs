use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A collection which can report its number of elements without being iterated.
pub trait Counted {
    /// Returns the number of elements in the collection.
    fn count(&self) -> usize;
}

macro_rules! counted_by_len {
    ($([$($generics:tt)*] $ty:ty;)*) => {
        $(
            impl<$($generics)*> Counted for $ty {
                fn count(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

counted_by_len! {
    [T] [T];
    [T, const N: usize] [T; N];
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T] LinkedList<T>;
    [T] BinaryHeap<T>;
    [T, S] HashSet<T, S>;
    [T] BTreeSet<T>;
    [K, V, S] HashMap<K, V, S>;
    [K, V] BTreeMap<K, V>;
    [] str;
    [] String;
}

/// Returns true if `sequence` is [`None`] or contains no elements.
///
/// The iterator's [`size_hint`](Iterator::size_hint) is checked first, so iterators which know
/// their length are never advanced. Otherwise, at most one element is pulled, which matters for
/// lazily-produced sequences.
pub fn is_empty<I: IntoIterator>(sequence: Option<I>) -> bool {
    let Some(sequence) = sequence else {
        return true;
    };

    let mut iter = sequence.into_iter();
    match iter.size_hint() {
        (_, Some(0)) => true,
        (1.., _) => false,
        _ => iter.next().is_none(),
    }
}

/// Returns true if `sequence` exists and contains at least one element. This is the exact
/// negation of [`is_empty`].
pub fn is_not_empty<I: IntoIterator>(sequence: Option<I>) -> bool {
    !is_empty(sequence)
}

/// Returns true if `collection` is [`None`] or its [`count`](Counted::count) is zero.
pub fn is_empty_collection<C: Counted + ?Sized>(collection: Option<&C>) -> bool {
    collection.is_none_or(|c| c.count() == 0)
}

/// Returns true if `collection` exists and has a non-zero [`count`](Counted::count).
pub fn is_not_empty_collection<C: Counted + ?Sized>(collection: Option<&C>) -> bool {
    !is_empty_collection(collection)
}
