//! Extensions for general-purpose collections.
//!
//! # Purpose
//! The collections in [`std`] are great, but a few patterns come up often enough that repeating
//! them by hand gets old: a map holding a set of values per key, checking whether something that
//! might not exist is empty, and printing a list of values for a log line or error message.
//!
//! # Method
//! Rather than introducing new collection types, the helpers here are written against small
//! traits ([`traits::Set`] and [`traits::SetMap`]) which describe what they need from a container.
//! Implementations are provided for the hash- and tree-based collections in [`std`], so callers
//! keep whichever container they already use.

#[cfg(feature = "keyed")]
pub mod keyed;
#[cfg(feature = "sequence")]
pub mod sequence;
#[cfg(feature = "traits")]
pub mod traits;
