//! Assertion helpers for tests dealing with integers.
//!
//! Only compiled for this crate's own tests or when the `testing` feature is enabled, so add this
//! crate to `[dev-dependencies]` with the feature to use them elsewhere.
//!
//! Every assertion panics with a message describing the expected range, and is annotated with
//! `#[track_caller]` so that failures point at the test rather than this module.

mod error;
mod integral;

pub use error::*;
pub use integral::*;
