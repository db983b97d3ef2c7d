mod best_first;
mod bfs;
mod dfs;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

pub use best_first::{BestFirstSearch, Priority};
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{SearchSpace, StateId};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
