use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    /// Number of nodes expanded, i.e. states whose actions were asked for
    expanded_nodes: usize,
    /// Number of goal tests performed
    goal_tests: usize,
    /// Number of successor states generated
    generated_nodes: usize,
    /// Number of nodes evaluated by the heuristic
    evaluated_nodes: usize,
    /// Number of reopened nodes
    reopened_nodes: usize,
    /// Number of applicable actions generated
    generated_actions: usize,
    /// Largest depth of any generated node
    max_depth: usize,
    /// Time when the search started
    #[serde(skip)]
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    #[serde(skip)]
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            goal_tests: 0,
            generated_nodes: 0,
            evaluated_nodes: 0,
            reopened_nodes: 0,
            generated_actions: 0,
            max_depth: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_goal_tests(&mut self) {
        self.goal_tests += 1;
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_generated_actions(&mut self, num_actions: usize) {
        self.generated_actions += num_actions;
    }

    pub fn register_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn goal_tests(&self) -> usize {
        self.goal_tests
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            goal_tests = self.goal_tests,
            generated_nodes = self.generated_nodes,
            evaluated_nodes = self.evaluated_nodes,
            reopened_nodes = self.reopened_nodes,
            generated_actions = self.generated_actions,
            max_depth = self.max_depth,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
