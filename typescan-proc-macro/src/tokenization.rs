//! Format string tokenization at compile-time.
//!
//! Follows the run-time tokenizer of `typescan`: a placeholder runs from a
//! `{` to the first `}` after it, and an unclosed `{` ends placeholder
//! scanning so the rest of the format is literal text.

use crate::constants::{MAX_FORMAT_STRING_LEN, MAX_PLACEHOLDERS, TOKENS_INITIAL_CAPACITY};
use crate::types::{FormatToken, Specifier};
use syn::LitStr;

/// Tokenize format string into text/placeholders.
///
/// Enforces `MAX_FORMAT_STRING_LEN` and `MAX_PLACEHOLDERS`, and rejects
/// specifiers other than `%d`, `%u`, `%f`, `%s` or empty.
pub fn tokenize_format_string(
    format_str: &str,
    format_lit: &LitStr,
) -> syn::Result<Vec<FormatToken>> {
    if format_str.len() > MAX_FORMAT_STRING_LEN {
        return Err(syn::Error::new(
            format_lit.span(),
            format!(
                "Format string too long ({} bytes). Maximum allowed: {} bytes.",
                format_str.len(),
                MAX_FORMAT_STRING_LEN
            ),
        ));
    }

    let mut tokens: Vec<FormatToken> = Vec::with_capacity(TOKENS_INITIAL_CAPACITY);
    let mut placeholders = 0usize;
    let mut remaining = format_str;

    while let Some(open) = remaining.find('{') {
        let Some(close) = remaining[open..].find('}').map(|offset| open + offset) else {
            break;
        };

        if open > 0 {
            tokens.push(FormatToken::Text(remaining[..open].into()));
        }

        let content = &remaining[open + 1..close];
        let Some(specifier) = Specifier::parse(content) else {
            return Err(syn::Error::new(
                format_lit.span(),
                format!(
                    "Unknown format specifier '{content}' in placeholder. \
                     Use '{{}}', '{{%d}}', '{{%u}}', '{{%f}}' or '{{%s}}'."
                ),
            ));
        };

        placeholders += 1;
        if placeholders > MAX_PLACEHOLDERS {
            return Err(syn::Error::new(
                format_lit.span(),
                format!(
                    "Too many placeholders in format string. Maximum allowed: {MAX_PLACEHOLDERS}."
                ),
            ));
        }

        tokens.push(FormatToken::Placeholder(specifier));
        remaining = &remaining[close + 1..];
    }

    if !remaining.is_empty() {
        tokens.push(FormatToken::Text(remaining.into()));
    }

    Ok(tokens)
}
