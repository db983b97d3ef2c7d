mod bank;
mod constant;
mod heuristic;
mod ignore_preconditions;
mod level_sum;
mod memoised;

pub use bank::HeuristicBank;
pub use constant::ConstantHeuristic;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use ignore_preconditions::IgnorePreconditionsHeuristic;
pub use level_sum::LevelSumHeuristic;
pub use memoised::{Memoised, DEFAULT_CACHE_CAPACITY};
