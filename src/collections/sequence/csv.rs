use std::fmt::{self, Display, Formatter};

/// The separator placed between values by [`to_csv`] and [`Csv`].
pub const SEPARATOR: &str = ", ";

/// Renders the elements of `values` as a comma separated list, in iteration order, using their
/// [`Display`] implementations.
///
/// A [`None`] or empty sequence produces an empty String. Commas and quotes within values aren't
/// escaped.
///
/// # Example
/// ```
/// use utility_lib::collections::sequence::to_csv;
///
/// assert_eq!(to_csv(Some([1, 2, 3])), "1, 2, 3");
/// assert_eq!(to_csv(None::<Vec<u8>>), "");
/// ```
pub fn to_csv<I>(values: Option<I>) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    // TODO: Escape values containing the separator or quotes, once a caller needs parseable output.
    match values {
        Some(values) => csv(values).into_string(),
        None => String::new(),
    }
}

/// Creates a lazy [`Csv`] over `values`, which renders the same text as [`to_csv`] when
/// formatted.
pub const fn csv<I>(values: I) -> Csv<I> {
    Csv { values }
}

/// A comma separated rendering of a sequence, produced when the type is formatted with
/// [`Display`].
///
/// Formatting requires `I: Clone` because [`Display::fmt`] only borrows the Csv, while iteration
/// consumes the sequence. References to collections and most borrowed iterators are cheap to
/// clone.
#[derive(Debug, Clone)]
pub struct Csv<I> {
    values: I,
}

impl<I> Csv<I>
where
    I: IntoIterator,
    I::Item: Display,
{
    /// Consumes the Csv, rendering it into a String without requiring `I: Clone`.
    pub fn into_string(self) -> String {
        self.values
            .into_iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl<I> Display for Csv<I>
where
    I: IntoIterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut values = self.values.clone().into_iter();

        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, "{SEPARATOR}{value}")?;
            }
        }

        Ok(())
    }
}

/// Method syntax for [`to_csv`] and [`csv`] on any sequence of [`Display`] values.
pub trait Sequence: IntoIterator + Sized
where
    Self::Item: Display,
{
    /// Renders the sequence as a comma separated list, see [`to_csv`].
    fn to_csv(self) -> String {
        csv(self).into_string()
    }

    /// Wraps the sequence in a lazy [`Csv`].
    fn csv(self) -> Csv<Self> {
        csv(self)
    }
}

impl<I> Sequence for I
where
    I: IntoIterator,
    I::Item: Display,
{
}
