//! Bidirectional mapping between fluent partitions and [`State`] vectors.

use crate::search::{states::State, Fluent, FluentState, PlanningError, Result};
use std::collections::{HashMap, HashSet};

/// The fixed, ordered sequence of fluents a scenario tracks. It defines the
/// meaning of every position of a [`State`].
#[derive(Debug, Clone)]
pub struct Vocabulary {
    fluents: Vec<Fluent>,
    positions: HashMap<Fluent, usize>,
}

impl Vocabulary {
    /// Creates a vocabulary from an ordered list of distinct fluents.
    pub fn new(fluents: Vec<Fluent>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(fluents.len());
        for (index, &fluent) in fluents.iter().enumerate() {
            if positions.insert(fluent, index).is_some() {
                return Err(PlanningError::malformed(format!(
                    "fluent {} is tracked more than once",
                    fluent
                )));
            }
        }
        Ok(Self { fluents, positions })
    }

    /// The vocabulary of a scenario: its initial positive fluents followed by
    /// its initial negative fluents. A fluent in both sets is an error.
    pub fn from_partition(initial: &FluentState) -> Result<Self> {
        let positive = initial.positive_set();
        if let Some(fluent) = initial.negative.iter().find(|&f| positive.contains(f)) {
            return Err(PlanningError::malformed(format!(
                "fluent {} is both initially true and initially false",
                fluent
            )));
        }

        Self::new(
            initial
                .positive
                .iter()
                .chain(initial.negative.iter())
                .copied()
                .collect(),
        )
    }

    pub fn fluents(&self) -> &[Fluent] {
        &self.fluents
    }

    pub fn len(&self) -> usize {
        self.fluents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fluents.is_empty()
    }

    #[inline(always)]
    pub fn position(&self, fluent: &Fluent) -> Option<usize> {
        self.positions.get(fluent).copied()
    }

    pub fn contains(&self, fluent: &Fluent) -> bool {
        self.positions.contains_key(fluent)
    }

    /// Encodes a partition: each position is true iff its fluent is positive.
    /// Every vocabulary fluent must be in one of the two sets; fluents outside
    /// the vocabulary are ignored.
    pub fn encode(&self, partition: &FluentState) -> Result<State> {
        let positive = partition.positive_set();
        let negative = partition.negative_set();

        let values = self
            .fluents
            .iter()
            .map(|fluent| {
                if positive.contains(fluent) {
                    Ok(true)
                } else if negative.contains(fluent) {
                    Ok(false)
                } else {
                    Err(PlanningError::Encoding {
                        fluent: fluent.to_string(),
                    })
                }
            })
            .collect::<Result<Vec<bool>>>()?;

        Ok(State::new(values))
    }

    /// Partitions the vocabulary by the values of the state. The result is
    /// always disjoint and exhaustive over the vocabulary.
    pub fn decode(&self, state: &State) -> FluentState {
        debug_assert_eq!(
            state.len(),
            self.len(),
            "State was not encoded against this vocabulary"
        );

        let (positive, negative): (Vec<_>, Vec<_>) = self
            .fluents
            .iter()
            .zip(state.values())
            .partition(|(_, value)| **value);

        FluentState::new(
            positive.into_iter().map(|(&fluent, _)| fluent).collect(),
            negative.into_iter().map(|(&fluent, _)| fluent).collect(),
        )
    }

    /// True iff the fluent is tracked and currently holds, i.e. it is in
    /// `decode(state).positive`.
    #[inline(always)]
    pub fn holds(&self, state: &State, fluent: &Fluent) -> bool {
        self.position(fluent)
            .is_some_and(|position| state.get(position))
    }

    /// True iff the fluent is tracked and currently false, i.e. it is in
    /// `decode(state).negative`. Untracked fluents are never negative.
    #[inline(always)]
    pub fn is_tracked_negative(&self, state: &State, fluent: &Fluent) -> bool {
        self.position(fluent)
            .is_some_and(|position| !state.get(position))
    }

    pub fn positive_fluents<'a>(&'a self, state: &'a State) -> impl Iterator<Item = &'a Fluent> {
        self.fluents
            .iter()
            .zip(state.values())
            .filter_map(|(fluent, &value)| value.then_some(fluent))
    }

    pub fn positive_set(&self, state: &State) -> HashSet<Fluent> {
        self.positive_fluents(state).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition() -> FluentState {
        FluentState::new(
            vec![Fluent::at("C1", "SFO"), Fluent::at("P1", "SFO")],
            vec![
                Fluent::at("C1", "JFK"),
                Fluent::at("P1", "JFK"),
                Fluent::inside("C1", "P1"),
            ],
        )
    }

    #[test]
    fn vocabulary_is_positive_then_negative() {
        let vocabulary = Vocabulary::from_partition(&partition()).unwrap();
        assert_eq!(vocabulary.len(), 5);
        assert_eq!(vocabulary.position(&Fluent::at("P1", "SFO")), Some(1));
        assert_eq!(vocabulary.position(&Fluent::inside("C1", "P1")), Some(4));
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let initial = partition();
        let vocabulary = Vocabulary::from_partition(&initial).unwrap();
        let state = vocabulary.encode(&initial).unwrap();
        assert_eq!(state.to_string(), "TTFFF");
        assert_eq!(vocabulary.decode(&state), initial);
    }

    #[test]
    fn round_trips_other_partitions_of_the_same_vocabulary() {
        let vocabulary = Vocabulary::from_partition(&partition()).unwrap();
        let other = FluentState::new(
            vec![Fluent::at("P1", "JFK"), Fluent::inside("C1", "P1")],
            vec![
                Fluent::at("C1", "SFO"),
                Fluent::at("P1", "SFO"),
                Fluent::at("C1", "JFK"),
            ],
        );
        let decoded = vocabulary.decode(&vocabulary.encode(&other).unwrap());
        assert_eq!(decoded.positive_set(), other.positive_set());
        assert_eq!(decoded.negative_set(), other.negative_set());
    }

    #[test]
    fn encode_fails_on_uncovered_fluent() {
        let vocabulary = Vocabulary::from_partition(&partition()).unwrap();
        let incomplete = FluentState::new(vec![Fluent::at("C1", "SFO")], vec![]);
        assert!(matches!(
            vocabulary.encode(&incomplete),
            Err(PlanningError::Encoding { fluent }) if fluent == "At(P1, SFO)"
        ));
    }

    #[test]
    fn fluent_in_both_polarities_is_malformed() {
        let initial = FluentState::new(
            vec![Fluent::at("C1", "SFO")],
            vec![Fluent::at("C1", "SFO")],
        );
        assert!(matches!(
            Vocabulary::from_partition(&initial),
            Err(PlanningError::MalformedScenario(_))
        ));
    }

    #[test]
    fn membership_queries_respect_tracking() {
        let vocabulary = Vocabulary::from_partition(&partition()).unwrap();
        let state = vocabulary.encode(&partition()).unwrap();
        let untracked = Fluent::at("C1", "ATL");

        assert!(vocabulary.holds(&state, &Fluent::at("C1", "SFO")));
        assert!(vocabulary.is_tracked_negative(&state, &Fluent::at("C1", "JFK")));
        assert!(!vocabulary.holds(&state, &untracked));
        assert!(!vocabulary.is_tracked_negative(&state, &untracked));
    }
}
