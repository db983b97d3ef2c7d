//! Provides parsers for parsing a plan.

use crate::{
    parsed_types::Plan,
    parsers::{leading_whitespace, parse_plan_step, ParseResult, Span},
};
use nom::{combinator::map, multi::many0};

/// Parses a plan: one step per line, with `;` starting a comment that runs to
/// the end of the line.
///
/// ## Example
/// ```
/// # use aircargo::parsers::{parse_plan, Span};
/// let input = r#"Load(C1, P1, SFO)
/// Fly(P1, SFO, JFK)
/// ; cost = 2 (unit cost)
/// "#;
/// let (_, plan) = parse_plan(Span::new(input)).unwrap();
/// assert_eq!(plan.steps().len(), 2);
/// ```
pub fn parse_plan<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Plan> {
    map(many0(leading_whitespace(parse_plan_step)), Plan::new)(input.into())
}

impl crate::parsers::Parser for Plan {
    type Item = Plan;

    /// Parses a plan.
    ///
    /// ## See also
    /// See [`parse_plan`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Parser;
    use crate::search::ActionSchemaName;

    #[test]
    fn plan_with_comments() {
        let input = "; found by astar\nLoad(C1, P1, SFO) ; first\n\n  Fly(P1, SFO, JFK)\n; cost = 2\n";
        let plan = Plan::from_text(input).unwrap();
        let schemas: Vec<_> = plan.steps().iter().map(|step| step.schema()).collect();
        assert_eq!(schemas, vec![ActionSchemaName::Load, ActionSchemaName::Fly]);
    }

    #[test]
    fn empty_plan() {
        assert!(Plan::from_text("").unwrap().steps().is_empty());
        assert!(Plan::from_text("; nothing to do\n").unwrap().steps().is_empty());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(Plan::from_text("Load(C1, P1, SFO)\nteleport C1").is_err());
    }
}
