//! Parsers for the text formats of the crate: fluents such as `At(C1, SFO)`
//! and plans, one action such as `Load(C1, P1, SFO)` per line.

mod fluent;
mod name;
mod plan;
mod plan_step;
mod utilities;

use crate::search::{PlanningError, Result};
use nom::combinator::all_consuming;
use nom::sequence::terminated;
use nom_greedyerror::error_position;

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    fn parse_span(input: Span) -> ParseResult<Self::Item> {
        Self::parse(input)
    }

    /// Parse a string slice into the desired type. Trailing whitespace and
    /// comments are allowed, anything else left over is an error.
    fn from_text(input: &str) -> Result<Self::Item> {
        let result = all_consuming(terminated(Self::parse_span, ignore_trailing))(Span::new(input));
        match result {
            Ok((_, item)) => Ok(item),
            Err(nom::Err::Error(error)) | Err(nom::Err::Failure(error)) => {
                let reason = match error_position(&error) {
                    Some(offset) => format!("unexpected input at offset {}", offset),
                    None => "unexpected input".to_string(),
                };
                Err(PlanningError::Parse {
                    input: input.to_string(),
                    reason,
                })
            }
            Err(nom::Err::Incomplete(_)) => Err(PlanningError::Parse {
                input: input.to_string(),
                reason: "incomplete input".to_string(),
            }),
        }
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

// Parsers
pub use fluent::{parse_fluent, parse_fluent_text};
pub use name::parse_name;
pub use plan::parse_plan;
pub use plan_step::{parse_plan_step, parse_schema_name};

// Parser combinators
pub(crate) use utilities::{
    argument_list, ignore_trailing, leading_whitespace, surrounding_whitespace,
};
