//! Utility parsers.

use crate::parsers::{parse_name, ParseResult, Span};
use crate::search::Name;
use nom::{
    bytes::complete::is_not,
    character::complete::{char, multispace0},
    combinator::{opt, value},
    multi::{many0_count, separated_list0},
    sequence::{delimited, pair, preceded},
};

/// Consumes any number of `;` line comments, each optionally preceded by
/// whitespace.
pub fn ignore_comments(input: Span) -> ParseResult<()> {
    value(
        (),
        many0_count(preceded(multispace0, pair(char(';'), opt(is_not("\r\n"))))),
    )(input)
}

/// Consumes whatever may legitimately trail a document: whitespace and
/// comments.
pub fn ignore_trailing(input: Span) -> ParseResult<()> {
    value((), pair(ignore_comments, multispace0))(input)
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading whitespace and comments, returning the output of `inner`.
pub fn leading_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    preceded(ignore_trailing, inner)
}

/// A combinator that takes a parser `inner` and produces a parser that also
/// consumes leading and trailing whitespace, returning the output of `inner`.
pub fn surrounding_whitespace<'a, F, O>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: FnMut(Span<'a>) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parses a parenthesised, comma separated list of names, i.e. `(C1, P1)`.
pub fn argument_list(input: Span) -> ParseResult<Vec<Name>> {
    delimited(
        char('('),
        separated_list0(char(','), surrounding_whitespace(parse_name)),
        preceded(multispace0, char(')')),
    )(input)
}
