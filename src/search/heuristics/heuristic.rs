use crate::search::{states::State, Task};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use strum_macros::{Display, EnumIter};

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the given task.
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(name = "h1", help = "The constant heuristic, 1 everywhere.")]
    #[strum(serialize = "h_1")]
    H1,
    #[clap(help = "The number of goal fluents currently false, ignoring preconditions.")]
    #[strum(serialize = "h_ignore_preconditions")]
    IgnorePreconditions,
    #[clap(help = "The level sum of a relaxed planning graph.")]
    #[strum(serialize = "h_pg_levelsum")]
    PgLevelsum,
}
