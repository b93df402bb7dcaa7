//! Helpers for sequences which might not exist at all.
//!
//! The emptiness checks treat a missing ([`None`]) sequence the same as an empty one. There are two
//! flavours: [`is_empty`] accepts anything iterable and inspects at most one element, while
//! [`is_empty_collection`] is for collections that already know their length, see [`Counted`].
//!
//! [`to_csv`] and [`csv`] render a sequence's elements as a comma separated list, for log lines and
//! error messages. The output isn't escaped, so it isn't suitable for writing actual CSV files.

mod csv;
mod empty;

pub use csv::*;
pub use empty::*;
