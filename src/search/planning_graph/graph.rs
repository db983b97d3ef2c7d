use crate::search::{states::State, HeuristicValue, Task};
use std::fmt::Debug;

/// A leveled structure of fluents and actions built from one state of a
/// scenario. Only its level sum is consumed.
pub trait PlanningGraph: Debug {
    /// Sum over the goal fluents of the level at which each first appears.
    /// A goal fluent that never appears makes the sum infinite.
    fn level_sum(&self) -> HeuristicValue;
}

pub trait PlanningGraphFactory: Debug {
    fn construct(&self, task: &Task, state: &State) -> Box<dyn PlanningGraph>;
}
