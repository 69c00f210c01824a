//! Typed scanning of text with a format template, the inverse of `format!`.
//!
//! A template such as `"I want to sum {} and {%f} numbers."` is matched
//! against an input string. Literal text must be present in the input and
//! every `{...}` placeholder captures the input text between its
//! neighbouring literals, which is then converted to the requested type.
//!
//! ```
//! use typescan::scan;
//!
//! let result = scan::<(i32, f32)>(
//!     "I want to sum 42 and 3.5 numbers.",
//!     "I want to sum {} and {%f} numbers.",
//! )
//! .unwrap();
//! assert_eq!(result.0, 42);
//! assert_eq!(result.1, 3.5);
//! ```
//!
//! # Architecture
//!
//! A scan runs in three steps:
//! 1. **Tokenization** (`format`): the template is split into literal
//!    segments and placeholder specifiers, and the input into the
//!    substrings filling each placeholder
//! 2. **Conversion** (`value`): each substring is checked against its
//!    specifier and converted into its target type
//! 3. **Aggregation** (`tuple`): the values are collected into a tuple, or
//!    every field error is joined into one [`ScanError`]
//!
//! # Placeholders
//!
//! - `{}`: the kind is inferred from the target type
//! - `{%d}`: signed integer (`i8`, `i16`, `i32`, `i64`)
//! - `{%u}`: unsigned integer (`u8`, `u16`, `u32`, `u64`)
//! - `{%f}`: floating point (`f32`, `f64`)
//! - `{%s}`: text (`String`, `&str`)
//!
//! # Errors
//!
//! Every failure is a [`ScanError`] holding one message:
//! - literal text missing from the input, or a placeholder count that does
//!   not match the number of requested types, stops the scan at once
//! - specifier mismatches, malformed numbers and out of range numbers are
//!   collected from every field and joined with `"; "`
//!
//! # Known Limitations
//!
//! - **Leftmost matching**: each literal segment matches its first
//!   occurrence in the rest of the input. Backtracking is not supported.
//! - **Unanchored start**: input text in front of the first literal segment
//!   is skipped.
//! - **Unclosed braces**: an unclosed `{` ends placeholder scanning and the
//!   rest of the template is matched as literal text.
//! - **Consecutive placeholders**: `{}{}` has no literal to split on and
//!   always fails.
//!
//! # Compile-time checks
//!
//! With the default `macros` feature, `scan!(input, "format", T1, T2, ...)`
//! checks the template against the listed types during compilation and then
//! calls [`scan()`].

#![forbid(unsafe_code)]

// ============================================================================
// Module Organization
// ============================================================================

mod error;
mod format;
mod tuple;
mod value;

// ============================================================================
// Re-exports for Public API
// ============================================================================

pub use error::{ERROR_SEPARATOR, ScanError};
pub use format::{Sources, parse_sources};
pub use tuple::{MAX_ARITY, ScanResult, ScanTuple};
pub use value::{ScanValue, TypeTag, parse_value, parse_value_with_format};

#[cfg(feature = "macros")]
pub use typescan_proc_macro::scan;

// ============================================================================
// Entry Point
// ============================================================================

/// Scans `input` with `format` into the tuple of types `T`.
///
/// Literal text and placeholder count problems fail right away. Otherwise
/// every placeholder is converted, and all conversion errors are joined
/// into the returned error.
///
/// ```
/// use typescan::scan;
///
/// let error = scan::<(i32,)>(
///     "I want to sum 42 and 3.5 numbers.",
///     "I want to sum {} and {%f} numbers.",
/// )
/// .unwrap_err();
/// assert_eq!(
///     error.message(),
///     "The number of placeholders(2) does not match the number of parameters(1)"
/// );
/// ```
pub fn scan<'a, T: ScanTuple<'a>>(input: &'a str, format: &str) -> Result<ScanResult<T>, ScanError> {
    let Sources {
        format_parts,
        input_parts,
    } = parse_sources(input, format)?;

    if format_parts.len() != input_parts.len() {
        return Err(ScanError::input_count_mismatch(
            format_parts.len(),
            input_parts.len(),
        ));
    }

    if format_parts.len() != T::ARITY {
        return Err(ScanError::parameter_count_mismatch(
            format_parts.len(),
            T::ARITY,
        ));
    }

    T::parse_fields(&input_parts, &format_parts).map(ScanResult::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_scan_sum_example() {
        let result = scan::<(i32, f32)>(
            "I want to sum 42 and 2.5 numbers.",
            "I want to sum {} and {%f} numbers.",
        )
        .unwrap();
        assert_eq!(result.into_values(), (42, 2.5));
    }

    #[test]
    fn test_structural_error_short_circuits() {
        let error = scan::<(u8, u8)>("1 + 2", "{} - {}").unwrap_err();
        assert_eq!(
            error.message(),
            "Unformatted text in input and format string are different"
        );
    }

    #[test]
    fn test_arity_checked_before_values() {
        let error = scan::<(u8, u8, u8)>("BAD - BAD", "{} - {}").unwrap_err();
        assert_eq!(
            error.message(),
            "The number of placeholders(2) does not match the number of parameters(3)"
        );
    }

    #[test]
    fn test_inputs_mismatch_is_reported() {
        let error = scan::<(u8, u8)>("12", "{}{}").unwrap_err();
        assert_eq!(
            error.message(),
            "The number of placeholders(2) does not match the number of inputs(1)"
        );
    }

    #[test]
    fn test_empty_tuple_never_matches() {
        let error = scan::<()>("text", "text").unwrap_err();
        assert_eq!(
            error.message(),
            "The number of placeholders(0) does not match the number of inputs(1)"
        );
    }

    #[test]
    fn test_borrowed_text() {
        let input = String::from("key=value");
        let result = scan::<(&str, &str)>(&input, "{}={}").unwrap();
        assert_eq!(*result.values(), ("key", "value"));
    }
}
