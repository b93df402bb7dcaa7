use num_traits::Zero;
use tracing::debug;

use super::{ArgumentZeroError, GuardError, MissingParamName, ZeroRule};

/// Returns an error if `argument` is zero.
///
/// # Errors
/// - [`GuardError::ArgumentZero`] with [`ZeroRule::Zero`] if `argument` is zero.
/// - [`GuardError::MissingParamName`] if `argument` is zero and `param_name` is empty.
pub fn ensure_not_zero<T: Zero>(argument: T, param_name: &str) -> Result<(), GuardError> {
    if argument.is_zero() {
        return Err(rejection(ZeroRule::Zero, param_name));
    }
    Ok(())
}

/// Returns an error if `argument` is zero or less.
///
/// Values which don't compare with zero at all (like NaN) are accepted.
///
/// # Errors
/// - [`GuardError::ArgumentZero`] with [`ZeroRule::ZeroOrLess`] if `argument <= 0`.
/// - [`GuardError::MissingParamName`] if `argument <= 0` and `param_name` is empty.
pub fn ensure_positive<T>(argument: T, param_name: &str) -> Result<(), GuardError>
where
    T: Zero + PartialOrd,
{
    if argument <= T::zero() {
        return Err(rejection(ZeroRule::ZeroOrLess, param_name));
    }
    Ok(())
}

fn rejection(rule: ZeroRule, param_name: &str) -> GuardError {
    if param_name.is_empty() {
        return MissingParamName.into();
    }

    debug!(param_name, %rule, "rejected argument");
    ArgumentZeroError::new(rule, param_name).into()
}

/// Checks that an expression isn't zero, using the expression's source text as the parameter
/// name unless one is given. Evaluates to a `Result<(), GuardError>`.
///
/// See [`ensure_not_zero`](crate::guard::ensure_not_zero).
#[macro_export]
macro_rules! ensure_not_zero {
    ($argument:expr $(,)?) => {
        $crate::guard::ensure_not_zero($argument, stringify!($argument))
    };
    ($argument:expr, $param_name:expr $(,)?) => {
        $crate::guard::ensure_not_zero($argument, $param_name)
    };
}

/// Checks that an expression is greater than zero, using the expression's source text as the
/// parameter name unless one is given. Evaluates to a `Result<(), GuardError>`.
///
/// See [`ensure_positive`](crate::guard::ensure_positive).
#[macro_export]
macro_rules! ensure_positive {
    ($argument:expr $(,)?) => {
        $crate::guard::ensure_positive($argument, stringify!($argument))
    };
    ($argument:expr, $param_name:expr $(,)?) => {
        $crate::guard::ensure_positive($argument, $param_name)
    };
}
