use crate::search::{
    heuristics::{
        ConstantHeuristic, HeuristicName, IgnorePreconditionsHeuristic, LevelSumHeuristic,
        Memoised, DEFAULT_CACHE_CAPACITY,
    },
    planning_graph::{PlanningGraphFactory, RelaxedPlanningGraphFactory},
    states::State,
    Heuristic, HeuristicValue, Task,
};
use std::num::NonZeroUsize;

/// The heuristics a problem offers to search. `h_ignore_preconditions` and
/// `h_pg_levelsum` are memoised, `h_1` is not worth caching.
#[derive(Debug)]
pub struct HeuristicBank {
    h_1: ConstantHeuristic,
    ignore_preconditions: Memoised<IgnorePreconditionsHeuristic>,
    pg_levelsum: Memoised<LevelSumHeuristic>,
}

impl HeuristicBank {
    pub fn new() -> Self {
        Self::with_planning_graph(Box::new(RelaxedPlanningGraphFactory), DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_planning_graph(
        factory: Box<dyn PlanningGraphFactory>,
        cache_capacity: NonZeroUsize,
    ) -> Self {
        Self {
            h_1: ConstantHeuristic::new(1.),
            ignore_preconditions: Memoised::new(IgnorePreconditionsHeuristic, cache_capacity),
            pg_levelsum: Memoised::new(LevelSumHeuristic::new(factory), cache_capacity),
        }
    }

    pub fn evaluate(&mut self, name: HeuristicName, state: &State, task: &Task) -> HeuristicValue {
        match name {
            HeuristicName::H1 => self.h_1.evaluate(state, task),
            HeuristicName::IgnorePreconditions => self.ignore_preconditions.evaluate(state, task),
            HeuristicName::PgLevelsum => self.pg_levelsum.evaluate(state, task),
        }
    }

    pub fn log_statistics(&self) {
        self.ignore_preconditions
            .log_statistics(&HeuristicName::IgnorePreconditions.to_string());
        self.pg_levelsum
            .log_statistics(&HeuristicName::PgLevelsum.to_string());
    }
}

impl Default for HeuristicBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::planning_graph::PlanningGraph;
    use crate::test_utils::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Debug)]
    struct FixedGraph;

    impl PlanningGraph for FixedGraph {
        fn level_sum(&self) -> HeuristicValue {
            7.0.into()
        }
    }

    #[derive(Debug)]
    struct CountingFactory {
        constructions: Rc<Cell<usize>>,
    }

    impl PlanningGraphFactory for CountingFactory {
        fn construct(&self, _task: &Task, _state: &State) -> Box<dyn PlanningGraph> {
            self.constructions.set(self.constructions.get() + 1);
            Box::new(FixedGraph)
        }
    }

    #[test]
    fn level_sum_is_computed_once_per_state() {
        let task = air_cargo_p1().unwrap();
        let constructions = Rc::new(Cell::new(0));
        let mut bank = HeuristicBank::with_planning_graph(
            Box::new(CountingFactory {
                constructions: constructions.clone(),
            }),
            DEFAULT_CACHE_CAPACITY,
        );

        for _ in 0..3 {
            assert_eq!(
                bank.evaluate(HeuristicName::PgLevelsum, &task.initial_state, &task),
                HeuristicValue::from(7.)
            );
        }
        assert_eq!(constructions.get(), 1);
    }

    #[test]
    fn default_bank_on_p1() {
        let task = air_cargo_p1().unwrap();
        let mut bank = HeuristicBank::new();
        let evaluate = |bank: &mut HeuristicBank, name| bank.evaluate(name, &task.initial_state, &task);
        assert_eq!(evaluate(&mut bank, HeuristicName::H1), HeuristicValue::from(1.));
        assert_eq!(
            evaluate(&mut bank, HeuristicName::IgnorePreconditions),
            HeuristicValue::from(2.)
        );
        assert_eq!(
            evaluate(&mut bank, HeuristicName::PgLevelsum),
            HeuristicValue::from(4.)
        );
    }
}
