use crate::search::{states::State, states::Vocabulary, FactStore, Fluent};
use itertools::Itertools;

/// The goal of a scenario: fluents that must all hold in a terminal state.
#[derive(Debug, Clone)]
pub struct Goal {
    fluents: Vec<Fluent>,
}

impl Goal {
    pub fn new(fluents: Vec<Fluent>) -> Self {
        Self { fluents }
    }

    pub fn fluents(&self) -> &[Fluent] {
        &self.fluents
    }

    /// Returns true if every goal fluent is in the positive part of the
    /// decoded state. Every tracked fluent is always decided, so this is
    /// plain membership.
    pub fn is_satisfied(&self, state: &State, vocabulary: &Vocabulary) -> bool {
        self.fluents
            .iter()
            .all(|fluent| vocabulary.holds(state, fluent))
    }

    /// Returns true if the store holds every goal fluent.
    pub fn is_entailed_by(&self, store: &impl FactStore) -> bool {
        self.fluents.iter().all(|fluent| store.query(fluent))
    }

    /// Number of distinct goal fluents that are tracked as false in the state.
    pub fn count_unsatisfied(&self, state: &State, vocabulary: &Vocabulary) -> usize {
        self.fluents
            .iter()
            .unique()
            .filter(|fluent| vocabulary.is_tracked_negative(state, fluent))
            .count()
    }
}
