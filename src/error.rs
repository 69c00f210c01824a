//! The single error type returned by every scan operation.
//!
//! A scan failure is always one human-readable message. When several
//! placeholders fail independently their messages are joined with `"; "`
//! into one [`ScanError`], so there is never a list of errors to walk.

use std::io;
use thiserror::Error;

/// Separator placed between per-field messages of a combined error.
pub const ERROR_SEPARATOR: &str = "; ";

/// Error of a failed scan, carrying one flattened message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ScanError {
    message: String,
}

impl ScanError {
    /// Creates an error from an arbitrary message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The full error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Joins several errors into one, in the given order.
    ///
    /// An empty iterator gives an error with an empty message.
    pub fn combine(errors: impl IntoIterator<Item = ScanError>) -> Self {
        let mut errors = errors.into_iter();
        let Some(first) = errors.next() else {
            return Self::new(String::new());
        };
        let message = errors.fold(first.message, |mut message, error| {
            message.push_str(ERROR_SEPARATOR);
            message.push_str(&error.message);
            message
        });
        Self { message }
    }

    pub(crate) fn unformatted_text() -> Self {
        Self::new("Unformatted text in input and format string are different")
    }

    pub(crate) fn input_count_mismatch(placeholders: usize, inputs: usize) -> Self {
        Self::new(format!(
            "The number of placeholders({placeholders}) does not match the number of inputs({inputs})"
        ))
    }

    pub(crate) fn parameter_count_mismatch(placeholders: usize, parameters: usize) -> Self {
        Self::new(format!(
            "The number of placeholders({placeholders}) does not match the number of parameters({parameters})"
        ))
    }

    pub(crate) fn incorrect_format(got: &str, expected: &str, type_name: &str) -> Self {
        Self::new(format!(
            "Incorrect format specified - \"{got}\", expected - \"{expected}\" for type \"{type_name}\""
        ))
    }

    pub(crate) fn invalid_argument(input: &str, type_name: &str) -> Self {
        Self::new(format!(
            "Invalid argument - \"{input}\" this is not a number for \"{type_name}\""
        ))
    }

    pub(crate) fn out_of_range(input: &str, type_name: &str) -> Self {
        Self::new(format!(
            "Numerical result out of range - \"{input}\" is out of range for \"{type_name}\""
        ))
    }
}

impl From<ScanError> for io::Error {
    #[inline]
    fn from(error: ScanError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, error.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_joins_in_order() {
        let combined = ScanError::combine([
            ScanError::new("first"),
            ScanError::new("second"),
            ScanError::new("third"),
        ]);
        assert_eq!(combined.message(), "first; second; third");
    }

    #[test]
    fn test_combine_single_error_is_unchanged() {
        let combined = ScanError::combine([ScanError::new("only")]);
        assert_eq!(combined, ScanError::new("only"));
    }

    #[test]
    fn test_display_is_the_message() {
        let error = ScanError::out_of_range("128", "i8");
        assert_eq!(
            error.to_string(),
            "Numerical result out of range - \"128\" is out of range for \"i8\""
        );
    }

    #[test]
    fn test_into_io_error() {
        let error: io::Error = ScanError::unformatted_text().into();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(
            error.to_string(),
            "Unformatted text in input and format string are different"
        );
    }
}
