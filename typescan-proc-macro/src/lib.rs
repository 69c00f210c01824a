//! Procedural macro for compile-time checked typed scanning.
//!
//! This crate provides the `scan!` macro re-exported by `typescan`. It
//! checks a format string against the listed target types while
//! compiling, then expands to a call to `typescan::scan`.
//!
//! # Architecture
//!
//! The macro works in three phases:
//! 1. **Parsing**: the macro input is split into input expression, format
//!    literal and target types
//! 2. **Tokenization**: the format literal is split into literal text and
//!    placeholders, the same way the run-time scanner splits it
//! 3. **Validation and expansion**: placeholders are checked against the
//!    types and the call to `typescan::scan` is generated
//!
//! The implementation is organized into focused modules:
//! - `constants`: compile-time limits and capacity hints
//! - `types`: core type definitions
//! - `validation`: specifier/type compatibility
//! - `parsing`: macro argument parsing
//! - `tokenization`: format string tokenization
//! - `codegen`: checks and code generation
//!
//! # Compile-Time Checks
//!
//! - Placeholder count must equal the number of types
//! - Placeholders must be separated by literal text
//! - Specifiers must be empty, `%d`, `%u`, `%f` or `%s`
//! - An explicit specifier must fit a primitive type written literally
//!   (`i32`, `u8`, `f64`, `String`, `&str`, ...); other types (aliases,
//!   paths) are checked when the scan runs
//!
//! # Limits
//!
//! - **Format strings**: Maximum 10,000 bytes
//! - **Placeholders**: Maximum 16 per format string

#![forbid(unsafe_code)]

// ============================================================================
// Module Organization
// ============================================================================

mod codegen;
mod constants;
mod parsing;
mod tokenization;
mod types;
mod validation;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use codegen::generate_scan_implementation;
use parsing::ScanArgs;

// ============================================================================
// Public Macros
// ============================================================================

/// Scans a string into a tuple of typed values, checking the format string
/// at compile-time.
///
/// # Syntax
///
/// ```ignore
/// scan!(input_expr, "format string", Types...)
/// ```
///
/// - `input_expr`: Expression that evaluates to a `&str`
/// - `format string`: String literal with `{}` or `{%d}`, `{%u}`, `{%f}`,
///   `{%s}` placeholders
/// - `Types...`: One target type per placeholder, in order
///
/// # Returns
///
/// Returns `Result<typescan::ScanResult<(Types...,)>, typescan::ScanError>`.
///
/// # Examples
///
/// ```ignore
/// use typescan::scan;
///
/// let result = scan!("Candy -> 2.75", "{} -> {%f}", String, f64).unwrap();
/// assert_eq!(result.0, "Candy");
/// assert_eq!(result.1, 2.75);
/// ```
#[proc_macro]
pub fn scan(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ScanArgs);

    match generate_scan_implementation(&args) {
        Ok(code) => TokenStream::from(code),
        Err(err) => err.to_compile_error().into(),
    }
}
