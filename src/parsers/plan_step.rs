//! Provides parsers for a single plan step such as `Load(C1, P1, SFO)`.

use crate::{
    parsed_types::PlanStep,
    parsers::{argument_list, surrounding_whitespace, ParseResult, Span},
    search::ActionSchemaName,
};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    sequence::tuple,
};

/// Parses the name of an action schema.
pub fn parse_schema_name<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, ActionSchemaName> {
    alt((
        value(ActionSchemaName::Load, tag("Load")),
        value(ActionSchemaName::Unload, tag("Unload")),
        value(ActionSchemaName::Fly, tag("Fly")),
    ))(input.into())
}

/// Parses a single step of a plan. The number of arguments is not checked
/// here, resolving the step against a scenario does that.
///
/// ## Example
/// ```
/// # use aircargo::parsed_types::PlanStep;
/// # use aircargo::parsers::{parse_plan_step, Span};
/// # use aircargo::search::{ActionSchemaName, Name};
/// let (_, step) = parse_plan_step(Span::new("Fly(P1, SFO, JFK)")).unwrap();
/// assert_eq!(
///     step,
///     PlanStep::new(
///         ActionSchemaName::Fly,
///         vec![Name::new("P1"), Name::new("SFO"), Name::new("JFK")],
///     )
/// );
/// ```
pub fn parse_plan_step<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, PlanStep> {
    map(
        tuple((parse_schema_name, surrounding_whitespace(argument_list))),
        |(schema, arguments)| PlanStep::new(schema, arguments),
    )(input.into())
}

impl crate::parsers::Parser for PlanStep {
    type Item = PlanStep;

    /// Parses a plan step.
    ///
    /// ## See also
    /// See [`parse_plan_step`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_plan_step(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Name;

    #[test]
    fn unload_step() {
        let (remainder, step) = parse_plan_step(Span::new("Unload(C1, P1, JFK)\n")).unwrap();
        assert!(remainder.is_empty());
        assert_eq!(step.schema(), ActionSchemaName::Unload);
        assert_eq!(
            step.arguments(),
            &[Name::new("C1"), Name::new("P1"), Name::new("JFK")]
        );
    }

    #[test]
    fn unknown_schema() {
        assert!(parse_plan_step(Span::new("Drive(T1, A, B)")).is_err());
    }
}
