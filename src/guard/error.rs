use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The rule broken by an argument which failed a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ZeroRule {
    /// The argument was zero.
    #[display("The provided argument was zero.")]
    Zero,
    /// The argument was zero or negative.
    #[display("The provided argument was zero or less.")]
    ZeroOrLess,
}

/// An argument was zero, or zero or less, when it wasn't allowed to be.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{rule} (Parameter '{param_name}')")]
pub struct ArgumentZeroError {
    rule: ZeroRule,
    param_name: String,
}

impl ArgumentZeroError {
    pub(crate) fn new(rule: ZeroRule, param_name: impl Into<String>) -> ArgumentZeroError {
        ArgumentZeroError {
            rule,
            param_name: param_name.into(),
        }
    }

    /// Returns the rule that the argument broke.
    pub const fn rule(&self) -> ZeroRule {
        self.rule
    }

    /// Returns the name of the parameter which held the argument.
    pub fn param_name(&self) -> &str {
        &self.param_name
    }
}

/// A guard failed, but was invoked without the name of the parameter being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("guard failed for an argument with no parameter name")]
pub struct MissingParamName;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum GuardError {
    ArgumentZero(ArgumentZeroError),
    MissingParamName(MissingParamName),
}
