use super::BoundOverflow;
use crate::util::result::ResultExtension;

/// Assertions available for every integer type.
pub trait IntegralAssertions: Sized {
    /// Asserts that the value is zero.
    fn assert_zero(self);

    /// Asserts that the value is not zero.
    fn assert_non_zero(self);

    /// Asserts that the value is positive, in `[1, MAX]`.
    fn assert_positive(self);

    /// Asserts that the value is less than `maximum`.
    ///
    /// # Panics
    /// Also panics with a [`BoundOverflow`] if `maximum` is the type's minimum value.
    fn assert_less_than(self, maximum: Self);

    /// Asserts that the value is less than or equal to `maximum`.
    fn assert_less_than_or_equal_to(self, maximum: Self);

    /// Asserts that the value is greater than `minimum`.
    ///
    /// # Panics
    /// Also panics with a [`BoundOverflow`] if `minimum` is the type's maximum value.
    fn assert_greater_than(self, minimum: Self);

    /// Asserts that the value is greater than or equal to `minimum`.
    fn assert_greater_than_or_equal_to(self, minimum: Self);
}

/// Assertions only meaningful for signed integers.
pub trait SignedAssertions: IntegralAssertions {
    /// Asserts that the value is negative, in `[MIN, -1]`.
    fn assert_negative(self);
}

#[track_caller]
fn assert_in_range<T: PartialOrd + std::fmt::Display>(actual: T, low: T, high: T) {
    assert!(
        low <= actual && actual <= high,
        "value {actual} is not in range [{low}, {high}]"
    );
}

/// Converts an exclusive bound into an inclusive one, failing if there's no value on the right
/// side of it.
fn exclusive<T>(shifted: Option<T>, bound: T, type_name: &'static str) -> Result<T, BoundOverflow>
where
    T: Into<i128>,
{
    shifted.ok_or_else(|| BoundOverflow {
        bound: bound.into(),
        type_name,
    })
}

macro_rules! impl_integral_assertions {
    ($($int:ty),*) => {
        $(
            impl IntegralAssertions for $int {
                #[track_caller]
                fn assert_zero(self) {
                    assert_eq!(self, 0, "expected zero");
                }

                #[track_caller]
                fn assert_non_zero(self) {
                    assert_ne!(self, 0, "expected a non-zero value");
                }

                #[track_caller]
                fn assert_positive(self) {
                    assert_in_range(self, 1, <$int>::MAX);
                }

                #[track_caller]
                fn assert_less_than(self, maximum: $int) {
                    let high = exclusive(maximum.checked_sub(1), maximum, stringify!($int)).throw();
                    assert_in_range(self, <$int>::MIN, high);
                }

                #[track_caller]
                fn assert_less_than_or_equal_to(self, maximum: $int) {
                    assert_in_range(self, <$int>::MIN, maximum);
                }

                #[track_caller]
                fn assert_greater_than(self, minimum: $int) {
                    let low = exclusive(minimum.checked_add(1), minimum, stringify!($int)).throw();
                    assert_in_range(self, low, <$int>::MAX);
                }

                #[track_caller]
                fn assert_greater_than_or_equal_to(self, minimum: $int) {
                    assert_in_range(self, minimum, <$int>::MAX);
                }
            }
        )*
    };
}

macro_rules! impl_signed_assertions {
    ($($int:ty),*) => {
        $(
            impl SignedAssertions for $int {
                #[track_caller]
                fn assert_negative(self) {
                    assert_in_range(self, <$int>::MIN, -1);
                }
            }
        )*
    };
}

impl_integral_assertions!(i16, i32, i64, u8, u16, u32, u64);
impl_signed_assertions!(i16, i32, i64);
