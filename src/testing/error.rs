use derive_more::{Display, Error};

/// An exclusive bound was passed to an assertion, which leaves no value that could satisfy it.
/// For example, no value is less than `i32::MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("exclusive bound {bound} leaves no value in range for {type_name}")]
pub struct BoundOverflow {
    pub bound: i128,
    pub type_name: &'static str,
}
