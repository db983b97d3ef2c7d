//! Runs configured searches on problems and collects the outcome of each run
//! into a serialisable report.

use crate::search::{
    search_engines::{SearchEngineName, SearchStatistics, TerminationCondition},
    AirCargoProblem, HeuristicName, Result, SearchProblem,
};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path, time::Instant};
use tracing::info;

/// Which engine to run, what to call it and which heuristic it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfiguration {
    pub engine: SearchEngineName,
    pub display_name: String,
    pub heuristic: Option<HeuristicName>,
}

impl SearchConfiguration {
    pub fn new(engine: SearchEngineName, heuristic: Option<HeuristicName>) -> Self {
        Self {
            engine,
            display_name: engine.to_string(),
            heuristic,
        }
    }

    /// `astar_search with h_1`, or just the display name for uninformed
    /// searches.
    pub fn label(&self) -> String {
        match self.heuristic {
            Some(heuristic) => format!("{} with {}", self.display_name, heuristic),
            None => self.display_name.clone(),
        }
    }
}

/// The searches offered by default: the three uninformed searches, then
/// greedy best first search and A* with each heuristic.
pub fn default_configurations() -> Vec<SearchConfiguration> {
    let heuristics = [
        HeuristicName::H1,
        HeuristicName::IgnorePreconditions,
        HeuristicName::PgLevelsum,
    ];
    let mut configurations = vec![
        SearchConfiguration::new(SearchEngineName::Bfs, None),
        SearchConfiguration::new(SearchEngineName::Dfs, None),
        SearchConfiguration::new(SearchEngineName::Ucs, None),
    ];
    for engine in [SearchEngineName::Gbfs, SearchEngineName::Astar] {
        configurations.extend(
            heuristics
                .iter()
                .map(|&heuristic| SearchConfiguration::new(engine, Some(heuristic))),
        );
    }
    configurations
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub problem: String,
    pub search: String,
    pub heuristic: Option<String>,
    pub status: String,
    #[serde(flatten)]
    pub statistics: SearchStatistics,
    /// The plan, one action per line, if one was found
    pub solution: Option<String>,
    pub plan_length: Option<usize>,
    /// Wall clock seconds
    pub time: f64,
}

/// Runs one configured search on the problem.
pub fn run_search(
    problem: &mut AirCargoProblem,
    configuration: &SearchConfiguration,
    termination_condition: TerminationCondition,
) -> Result<RunReport> {
    info!(
        problem = problem.name(),
        search = %configuration.display_name,
        heuristic = ?configuration.heuristic,
    );
    let start = Instant::now();
    let mut engine = configuration.engine.create(configuration.heuristic);
    let (result, statistics) = engine.search(problem, termination_condition)?;
    let time = start.elapsed().as_secs_f64();
    problem.log_heuristic_statistics();

    let plan = result.plan();
    info!(status = result.status(), plan_length = plan.map(|plan| plan.len()));
    Ok(RunReport {
        problem: problem.name().to_string(),
        search: configuration.display_name.clone(),
        heuristic: configuration.heuristic.map(|heuristic| heuristic.to_string()),
        status: result.status().to_string(),
        statistics,
        solution: plan.map(|plan| plan.to_string()),
        plan_length: plan.map(|plan| plan.len()),
        time,
    })
}

/// Writes the reports as a JSON array.
pub fn write_reports(path: &Path, reports: &[RunReport]) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, reports)?;
    Ok(())
}
