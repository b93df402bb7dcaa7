//! A handful of small, general-purpose helpers that keep turning up in my other projects.
//!
//! # Contents
//! - [`collections`]: extensions for maps of sets ("keyed sets") and for possibly-absent
//!   sequences, including emptiness checks and CSV rendering.
//! - [`guard`]: guard clauses rejecting numeric arguments that are zero, or zero or less, with an
//!   error naming the offending parameter.
//! - [`testing`]: assertion helpers for numeric ranges, only available to tests or with the
//!   `testing` feature.
//!
//! None of these components depend on each other and none of them hold any state of their own.
//! Everything operates on caller-owned data for the duration of a single call.
//!
//! # Error Handling
//! Where a helper can fail, it does so with a strongly typed error: small structs implementing
//! [`Error`](std::error::Error), wrapped in an enum for static dispatch. Quite a few failure modes
//! of similar helpers in other languages (null maps, null keys) simply can't happen here, because
//! references and owned values are never null. Those operations are infallible.
//!
//! Test assertions are the exception, they panic, because that's what a failing test is.
//!
//! # Thread Safety
//! The keyed set helpers perform unguarded check-then-insert sequences. If a map is shared
//! between threads, wrap it in a lock and hold the lock for each call.
//!
//! # Dependencies
//! This crate depends on some derive macros for its errors, `num-traits` for the numeric guards
//! and `tracing` for (very quiet) diagnostics. No subscriber is installed, that's up to the
//! binary.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "guard")]
pub mod guard;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub(crate) mod util;
