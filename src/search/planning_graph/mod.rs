mod graph;
mod relaxed_planning_graph;

pub use graph::{PlanningGraph, PlanningGraphFactory};
pub use relaxed_planning_graph::{RelaxedPlanningGraph, RelaxedPlanningGraphFactory};
