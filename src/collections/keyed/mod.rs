//! A module containing [`KeyedSets`], which treats a map of sets as a multimap.
//!
//! Each key owns a set of values. Sets are created the first time a value is added against a key
//! and the key is removed again once its last value is removed, so keys with empty sets don't
//! pile up in the map.
//!
//! [`HashSetMap`] and [`BTreeSetMap`] are provided as shorthand for the common map types, but any
//! [`SetMap`](super::traits::SetMap) whose values implement [`Set`](super::traits::Set) and
//! [`Default`] will work.

mod keyed_sets;
mod tests;

pub use keyed_sets::*;
