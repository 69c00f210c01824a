use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_until},
    character::complete::char,
    sequence::{delimited, pair, terminated},
};

/// Splits the next placeholder off a format string.
///
/// Yields the literal text in front of the `{` and the specifier between
/// `{` and the first following `}`. Fails when there is no `{` left or the
/// `{` is never closed.
pub(super) fn placeholder(format: &str) -> IResult<&str, (&str, &str)> {
    pair(
        take_until("{"),
        delimited(char('{'), take_until("}"), char('}')),
    )
    .parse(format)
}

/// Consumes input up to and including the leftmost occurrence of `literal`.
///
/// Yields the text found in front of the literal.
pub(super) fn until_literal<'i>(input: &'i str, literal: &str) -> IResult<&'i str, &'i str> {
    terminated(take_until(literal), tag(literal)).parse(input)
}
