mod action;
mod action_schema;
mod error;
mod fact_store;
mod fluent;
mod fluent_state;
mod goal;
pub mod heuristics;
mod name;
mod object;
mod plan;
pub mod planning_graph;
pub mod problem_formulations;
pub mod runner;
pub mod scenarios;
pub mod search_engines;
pub mod states;
pub mod successor_generators;
mod task;
mod validate;
mod verbosity;

pub use action::{Action, ActionArguments};
pub use action_schema::{ground_actions, ActionSchemaName};
pub use error::{PlanningError, Result};
pub use fact_store::{FactStore, HashFactStore};
pub use fluent::Fluent;
pub use fluent_state::FluentState;
pub use goal::Goal;
pub use heuristics::{
    Heuristic, HeuristicBank, HeuristicName, HeuristicValue, IgnorePreconditionsHeuristic,
};
pub use name::Name;
pub use object::{ObjectKind, Objects};
pub use plan::Plan;
pub use problem_formulations::{AirCargoProblem, SearchProblem};
pub use scenarios::ScenarioCatalog;
pub use task::{ScenarioId, Task};
pub use validate::validate;
pub use verbosity::Verbosity;
