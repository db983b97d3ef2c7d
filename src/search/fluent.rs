use crate::parsers::parse_fluent_text;
use crate::search::{Name, PlanningError};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// A ground proposition of the air cargo domain. `At` places a cargo or a
/// plane at an airport, `In` puts a cargo inside a plane.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fluent {
    At { mobile: Name, location: Name },
    In { cargo: Name, plane: Name },
}

impl Fluent {
    pub fn at(mobile: impl Into<Name>, location: impl Into<Name>) -> Self {
        Fluent::At {
            mobile: mobile.into(),
            location: location.into(),
        }
    }

    pub fn inside(cargo: impl Into<Name>, plane: impl Into<Name>) -> Self {
        Fluent::In {
            cargo: cargo.into(),
            plane: plane.into(),
        }
    }

    pub fn predicate(&self) -> &'static str {
        match self {
            Fluent::At { .. } => "At",
            Fluent::In { .. } => "In",
        }
    }

    pub fn arguments(&self) -> [Name; 2] {
        match *self {
            Fluent::At { mobile, location } => [mobile, location],
            Fluent::In { cargo, plane } => [cargo, plane],
        }
    }
}

impl Display for Fluent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [first, second] = self.arguments();
        write!(f, "{}({}, {})", self.predicate(), first, second)
    }
}

impl Debug for Fluent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Fluent {
    type Err = PlanningError;

    /// Parses `At(C1, SFO)` or `In(C1, P1)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fluent_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_text_format() {
        assert_eq!(Fluent::at("C1", "SFO").to_string(), "At(C1, SFO)");
        assert_eq!(Fluent::inside("C2", "P1").to_string(), "In(C2, P1)");
    }

    #[test]
    fn parses_its_own_rendering() {
        for fluent in [Fluent::at("P2", "JFK"), Fluent::inside("C1", "P2")] {
            assert_eq!(fluent.to_string().parse::<Fluent>().unwrap(), fluent);
        }
    }

    #[test]
    fn parse_tolerates_missing_spaces() {
        assert_eq!(
            "At(C1,JFK)".parse::<Fluent>().unwrap(),
            Fluent::at("C1", "JFK")
        );
    }

    #[test]
    fn rejects_unknown_predicates() {
        assert!(matches!(
            "On(C1, P1)".parse::<Fluent>(),
            Err(PlanningError::Parse { .. })
        ));
        assert!("At(C1)".parse::<Fluent>().is_err());
    }
}
