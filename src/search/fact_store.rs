use crate::search::Fluent;
use std::collections::HashSet;

/// A store of ground facts that can be told facts and asked whether a fact
/// holds. Only ground, positive fluents are supported, so asking is plain
/// membership.
pub trait FactStore {
    fn assert(&mut self, fact: Fluent);

    fn query(&self, fact: &Fluent) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct HashFactStore {
    facts: HashSet<Fluent>,
}

impl HashFactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl FactStore for HashFactStore {
    fn assert(&mut self, fact: Fluent) {
        self.facts.insert(fact);
    }

    fn query(&self, fact: &Fluent) -> bool {
        self.facts.contains(fact)
    }
}

impl FromIterator<Fluent> for HashFactStore {
    fn from_iter<I: IntoIterator<Item = Fluent>>(iter: I) -> Self {
        Self {
            facts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asserted_facts_are_queryable() {
        let mut store = HashFactStore::new();
        assert!(!store.query(&Fluent::at("C1", "SFO")));

        store.assert(Fluent::at("C1", "SFO"));
        store.assert(Fluent::at("C1", "SFO"));
        assert!(store.query(&Fluent::at("C1", "SFO")));
        assert!(!store.query(&Fluent::at("C1", "JFK")));
        assert_eq!(store.len(), 1);
    }
}
