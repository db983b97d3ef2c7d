use crate::search::{
    planning_graph::PlanningGraphFactory, states::State, Heuristic, HeuristicValue, Task,
};

/// Builds a fresh planning graph for every evaluated state and returns its
/// level sum.
#[derive(Debug)]
pub struct LevelSumHeuristic {
    factory: Box<dyn PlanningGraphFactory>,
}

impl LevelSumHeuristic {
    pub fn new(factory: Box<dyn PlanningGraphFactory>) -> Self {
        Self { factory }
    }
}

impl Heuristic for LevelSumHeuristic {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        self.factory.construct(task, state).level_sum()
    }
}
