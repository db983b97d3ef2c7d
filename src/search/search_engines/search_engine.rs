use crate::search::{
    search_engines::{BestFirstSearch, SearchStatistics, TerminationCondition, BFS, DFS},
    HeuristicName, Plan, Result, SearchProblem,
};
use std::fmt::Debug;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// Every reachable state was explored without reaching the goal
    ProvablyUnsolvable,
    /// The search expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

impl SearchResult {
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            SearchResult::Success(_) => "success",
            SearchResult::ProvablyUnsolvable => "provably unsolvable",
            SearchResult::ExpansionLimitExceeded => "expansion limit exceeded",
            SearchResult::TimeLimitExceeded => "time limit exceeded",
            SearchResult::MemoryLimitExceeded => "memory limit exceeded",
        }
    }
}

pub trait SearchEngine: Debug {
    /// Search from the problem's initial state until a goal is found, the
    /// reachable states are exhausted or the termination condition fires.
    /// Errors only if the problem rejects one of its own enabled actions.
    fn search(
        &mut self,
        problem: &mut dyn SearchProblem,
        termination_condition: TerminationCondition,
    ) -> Result<(SearchResult, SearchStatistics)>;
}

/// Logs the final statistics of a search and hands back its outcome.
pub(crate) fn finalise(
    result: SearchResult,
    mut statistics: SearchStatistics,
    mut termination_condition: TerminationCondition,
) -> (SearchResult, SearchStatistics) {
    statistics.finalise_search();
    termination_condition.finalise();
    (result, statistics)
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "bfs", help = "Breadth first graph search, goal tests on generation.")]
    #[strum(serialize = "breadth_first_search")]
    Bfs,
    #[clap(name = "dfs", help = "Depth first graph search.")]
    #[strum(serialize = "depth_first_graph_search")]
    Dfs,
    #[clap(name = "ucs", help = "Uniform cost search.")]
    #[strum(serialize = "uniform_cost_search")]
    Ucs,
    #[clap(name = "gbfs", help = "Greedy best first graph search, requires a heuristic.")]
    #[strum(serialize = "greedy_best_first_graph_search")]
    Gbfs,
    #[clap(name = "astar", help = "A* search, requires a heuristic.")]
    #[strum(serialize = "astar_search")]
    Astar,
}

impl SearchEngineName {
    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::Gbfs | SearchEngineName::Astar)
    }

    /// Informed engines fall back to `h_1` when no heuristic is given,
    /// uninformed ones ignore it.
    pub fn create(&self, heuristic: Option<HeuristicName>) -> Box<dyn SearchEngine> {
        let heuristic = heuristic.unwrap_or(HeuristicName::H1);
        match self {
            SearchEngineName::Bfs => Box::new(BFS::new()),
            SearchEngineName::Dfs => Box::new(DFS::new()),
            SearchEngineName::Ucs => Box::new(BestFirstSearch::uniform_cost()),
            SearchEngineName::Gbfs => Box::new(BestFirstSearch::greedy(heuristic)),
            SearchEngineName::Astar => Box::new(BestFirstSearch::astar(heuristic)),
        }
    }
}
