//! Limits and capacity hints for the `scan!` macro.
//!
//! Format strings are processed during compilation, so their size is
//! bounded to keep macro expansion cheap.

// ============================================================================
// Compile-Time Limits
// ============================================================================

/// Maximum length of a format string in bytes.
pub const MAX_FORMAT_STRING_LEN: usize = 10_000;

/// Maximum number of placeholders in a format string.
///
/// Matches the largest tuple `typescan::ScanTuple` is implemented for.
pub const MAX_PLACEHOLDERS: usize = 16;

// ============================================================================
// Memory Pre-Allocation Hints
// ============================================================================

/// Initial capacity hint for the token vector.
///
/// Most format strings have 2-4 tokens, so this avoids initial reallocations.
pub const TOKENS_INITIAL_CAPACITY: usize = 4;
