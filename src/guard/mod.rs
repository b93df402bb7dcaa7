//! Guard clauses for rejecting numeric arguments early.
//!
//! [`ensure_not_zero`] and [`ensure_positive`] accept any numeric type implementing
//! [`Zero`](num_traits::Zero): every integer width, floats and third-party decimal types alike.
//! When a guard fails, the [`ArgumentZeroError`] names the offending parameter.
//!
//! The [`ensure_not_zero!`](crate::ensure_not_zero) and
//! [`ensure_positive!`](crate::ensure_positive) macros fill the parameter name in from the
//! expression being checked.
//!
//! ```
//! use utility_lib::ensure_positive;
//! use utility_lib::guard::GuardError;
//!
//! fn split(total: u32, parts: i64) -> Result<i64, GuardError> {
//!     ensure_positive!(parts)?;
//!     Ok(total as i64 / parts)
//! }
//!
//! let error = split(10, 0).unwrap_err();
//! assert_eq!(error.to_string(), "The provided argument was zero or less. (Parameter 'parts')");
//! ```

mod error;
mod zero;

pub use error::*;
pub use zero::*;
