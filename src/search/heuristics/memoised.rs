use crate::search::{states::State, Heuristic, HeuristicValue, ScenarioId, Task};
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(8192) {
    Some(capacity) => capacity,
    None => panic!("cache capacity must be positive"),
};

/// Wraps a heuristic with a bounded cache keyed by scenario and state. Once
/// the cache is full the least recently used entry is evicted.
#[derive(Debug)]
pub struct Memoised<H> {
    inner: H,
    cache: LruCache<(ScenarioId, State), HeuristicValue>,
    hits: usize,
    misses: usize,
}

impl<H: Heuristic> Memoised<H> {
    pub fn new(inner: H, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn log_statistics(&self, heuristic: &str) {
        debug!(
            heuristic = heuristic,
            cache_hits = self.hits,
            cache_misses = self.misses,
            cache_entries = self.cache.len(),
            cache_capacity = self.cache.cap().get(),
        );
    }
}

impl<H: Heuristic> Heuristic for Memoised<H> {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        let key = (task.id(), state.clone());
        if let Some(&value) = self.cache.get(&key) {
            self.hits += 1;
            return value;
        }
        self.misses += 1;
        let value = self.inner.evaluate(state, task);
        self.cache.put(key, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::IgnorePreconditionsHeuristic;
    use crate::test_utils::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Debug)]
    struct CountingHeuristic {
        calls: Rc<Cell<usize>>,
    }

    impl Heuristic for CountingHeuristic {
        fn evaluate(&mut self, state: &State, _task: &Task) -> HeuristicValue {
            self.calls.set(self.calls.get() + 1);
            (state.count_true() as f64).into()
        }
    }

    #[test]
    fn repeated_states_hit_the_cache() {
        let task = air_cargo_p1().unwrap();
        let calls = Rc::new(Cell::new(0));
        let mut heuristic = Memoised::new(
            CountingHeuristic {
                calls: calls.clone(),
            },
            DEFAULT_CACHE_CAPACITY,
        );

        let first = heuristic.evaluate(&task.initial_state, &task);
        let second = heuristic.evaluate(&task.initial_state, &task);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!((heuristic.hits(), heuristic.misses()), (1, 1));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let task = air_cargo_p1().unwrap();
        let calls = Rc::new(Cell::new(0));
        let mut heuristic = Memoised::new(
            CountingHeuristic {
                calls: calls.clone(),
            },
            NonZeroUsize::new(2).unwrap(),
        );

        let first = task.initial_state.clone();
        let mut second = first.clone();
        second.set(4, true);
        let mut third = first.clone();
        third.set(5, true);

        heuristic.evaluate(&first, &task);
        heuristic.evaluate(&second, &task);
        heuristic.evaluate(&first, &task);
        heuristic.evaluate(&third, &task);
        assert_eq!(calls.get(), 3);
        assert_eq!(heuristic.len(), 2);

        // `second` was the least recently used entry.
        heuristic.evaluate(&second, &task);
        assert_eq!(calls.get(), 4);
        heuristic.evaluate(&third, &task);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn scenarios_do_not_share_entries() {
        let first_task = air_cargo_p1().unwrap();
        let second_task = air_cargo_p1().unwrap();
        let mut heuristic = Memoised::new(IgnorePreconditionsHeuristic, DEFAULT_CACHE_CAPACITY);

        heuristic.evaluate(&first_task.initial_state, &first_task);
        heuristic.evaluate(&second_task.initial_state, &second_task);
        assert_eq!(heuristic.misses(), 2);
        assert_eq!(heuristic.len(), 2);
    }
}
