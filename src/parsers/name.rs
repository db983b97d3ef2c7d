use crate::parsers::{ParseResult, Span};
use crate::search::Name;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1},
    combinator::{map, recognize},
    multi::many0_count,
    sequence::pair,
};

/// Parses an object name: a letter or underscore followed by letters, digits,
/// underscores and dashes.
pub fn parse_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Name> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0_count(alt((alphanumeric1, tag("_"), tag("-")))),
        )),
        |span: Span| Name::new(span.fragment()),
    )(input.into())
}

impl crate::parsers::Parser for Name {
    type Item = Name;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_name(input)
    }
}
