//! Traits describing the containers that the helpers in this crate operate on.

mod map;
mod set;

pub use map::*;
pub use set::*;
