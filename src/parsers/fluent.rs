//! Provides parsers for fluents such as `At(C1, SFO)` and `In(C1, P1)`.

use crate::parsers::{argument_list, surrounding_whitespace, ParseResult, Parser, Span};
use crate::search::{Fluent, Name, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value, verify},
    sequence::tuple,
};

#[derive(Debug, Clone, Copy)]
enum FluentPredicate {
    At,
    In,
}

fn parse_predicate(input: Span) -> ParseResult<FluentPredicate> {
    alt((
        value(FluentPredicate::At, tag("At")),
        value(FluentPredicate::In, tag("In")),
    ))(input)
}

/// Parses a single fluent. Both predicates take exactly two arguments.
///
/// ## Example
/// ```
/// # use aircargo::parsers::{parse_fluent, Span};
/// # use aircargo::search::Fluent;
/// let (_, fluent) = parse_fluent(Span::new("At(C1, SFO)")).unwrap();
/// assert_eq!(fluent, Fluent::at("C1", "SFO"));
/// ```
pub fn parse_fluent<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Fluent> {
    map(
        tuple((
            parse_predicate,
            verify(surrounding_whitespace(argument_list), |arguments: &Vec<Name>| {
                arguments.len() == 2
            }),
        )),
        |(predicate, arguments)| match predicate {
            FluentPredicate::At => Fluent::at(arguments[0], arguments[1]),
            FluentPredicate::In => Fluent::inside(arguments[0], arguments[1]),
        },
    )(input.into())
}

/// Parses a complete fluent from text, failing on anything left over.
pub fn parse_fluent_text(input: &str) -> Result<Fluent> {
    Fluent::from_text(input.trim())
}

impl Parser for Fluent {
    type Item = Fluent;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_fluent(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::PlanningError;

    #[test]
    fn parses_both_predicates() {
        assert_eq!(
            parse_fluent_text("At(C1, SFO)").unwrap(),
            Fluent::at("C1", "SFO")
        );
        assert_eq!(
            parse_fluent_text("  In( C2 ,P1 ) ").unwrap(),
            Fluent::inside("C2", "P1")
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(parse_fluent(Span::new("At(C1, P1, SFO)")).is_err());
        assert!(matches!(
            parse_fluent_text("In(C1)"),
            Err(PlanningError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(matches!(
            parse_fluent_text("At(C1, SFO) At(C2, JFK)"),
            Err(PlanningError::Parse { .. })
        ));
    }
}
