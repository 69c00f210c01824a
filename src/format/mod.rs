//! Co-tokenization of a format template and the input it describes.
//!
//! The format is walked placeholder by placeholder. Every literal segment
//! in front of a placeholder is searched in the unconsumed input (leftmost
//! match, not anchored), and the input skipped over to reach it becomes the
//! value text of the previous placeholder.

use crate::error::ScanError;

mod format_parser;

/// Parallel placeholder specifiers and input substrings of one scan.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Sources<'f, 'i> {
    /// Text between `{` and `}` of every placeholder, in order.
    pub format_parts: Vec<&'f str>,
    /// Input text captured for every placeholder, in order.
    pub input_parts: Vec<&'i str>,
}

/// Splits `format` into placeholder specifiers and `input` into the
/// substrings that fill them.
///
/// An unclosed `{` stops placeholder scanning; everything from the last
/// closed placeholder on is then matched as trailing literal text. When the
/// format has no placeholders at all the whole input (or the part in front
/// of the literal) is still captured, so the two sequences differ in length.
pub fn parse_sources<'f, 'i>(input: &'i str, format: &'f str) -> Result<Sources<'f, 'i>, ScanError> {
    let mut sources = Sources::default();
    let mut input = input;
    let mut format = format;

    while let Ok((rest, (literal, specifier))) = format_parser::placeholder(format) {
        if !literal.is_empty() {
            let (after, captured) = find_literal(input, literal)?;
            // Text in front of the first literal belongs to no placeholder.
            if !sources.format_parts.is_empty() {
                sources.input_parts.push(captured);
            }
            input = after;
        }
        sources.format_parts.push(specifier);
        format = rest;
    }

    if format.is_empty() {
        sources.input_parts.push(input);
    } else {
        let (_, captured) = find_literal(input, format)?;
        sources.input_parts.push(captured);
    }

    Ok(sources)
}

fn find_literal<'i>(input: &'i str, literal: &str) -> Result<(&'i str, &'i str), ScanError> {
    format_parser::until_literal(input, literal).map_err(|_| ScanError::unformatted_text())
}
