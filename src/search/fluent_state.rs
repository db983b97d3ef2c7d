use crate::search::{Fluent, Name};
use std::collections::HashSet;

/// A (positive, negative) partition of fluents. Scenarios are declared with
/// one, and decoding a [`crate::search::states::State`] yields one in
/// vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FluentState {
    pub positive: Vec<Fluent>,
    pub negative: Vec<Fluent>,
}

impl FluentState {
    pub fn new(positive: Vec<Fluent>, negative: Vec<Fluent>) -> Self {
        Self { positive, negative }
    }

    /// Builds the partition in which every `At` and `In` fluent over the
    /// given objects that is not listed as positive is negative. Negative
    /// fluents follow the order cargos and planes by airport, then cargos by
    /// plane.
    pub fn closed_world(
        cargos: &[Name],
        planes: &[Name],
        airports: &[Name],
        positive: Vec<Fluent>,
    ) -> Self {
        let known: HashSet<Fluent> = positive.iter().copied().collect();
        let at_fluents = cargos.iter().chain(planes.iter()).flat_map(|&mobile| {
            airports
                .iter()
                .map(move |&airport| Fluent::at(mobile, airport))
        });
        let in_fluents = cargos
            .iter()
            .flat_map(|&cargo| planes.iter().map(move |&plane| Fluent::inside(cargo, plane)));
        let negative = at_fluents
            .chain(in_fluents)
            .filter(|fluent| !known.contains(fluent))
            .collect();

        Self { positive, negative }
    }

    pub fn positive_set(&self) -> HashSet<Fluent> {
        self.positive.iter().copied().collect()
    }

    pub fn negative_set(&self) -> HashSet<Fluent> {
        self.negative.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}
