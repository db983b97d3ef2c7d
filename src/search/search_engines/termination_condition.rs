use crate::search::search_engines::{SearchResult, SearchStatistics};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Limits a search may run under. None of them are enforced by the problem
/// itself, so engines consult this before every expansion.
#[derive(Debug)]
pub struct TerminationCondition {
    max_expansions: Option<usize>,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(
        max_expansions: Option<usize>,
        time_limit: Option<Duration>,
        memory_limit_mb: Option<usize>,
    ) -> Self {
        info!(
            max_expansions = max_expansions,
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        let mut condition = Self {
            max_expansions,
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        };
        if memory_limit_mb.is_some() {
            condition.record_memory_usage();
        }
        condition
    }

    /// No limits at all.
    pub fn unlimited() -> Self {
        Self::new(None, None, None)
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn record_memory_usage(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.record_memory_usage();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    pub fn should_terminate(&mut self, statistics: &SearchStatistics) -> Option<SearchResult> {
        self.log_if_needed();
        if let Some(max_expansions) = self.max_expansions {
            if statistics.expanded_nodes() >= max_expansions {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_budget() {
        let mut condition = TerminationCondition::new(Some(2), None, None);
        let mut statistics = SearchStatistics::new();
        assert_eq!(condition.should_terminate(&statistics), None);
        statistics.increment_expanded_nodes();
        statistics.increment_expanded_nodes();
        assert_eq!(
            condition.should_terminate(&statistics),
            Some(SearchResult::ExpansionLimitExceeded)
        );
    }

    #[test]
    fn time_limit() {
        let mut condition = TerminationCondition::new(None, Some(Duration::ZERO), None);
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(
            condition.should_terminate(&SearchStatistics::new()),
            Some(SearchResult::TimeLimitExceeded)
        );
    }

    #[test]
    fn unlimited_never_terminates() {
        let mut condition = TerminationCondition::unlimited();
        assert_eq!(condition.should_terminate(&SearchStatistics::new()), None);
    }
}
