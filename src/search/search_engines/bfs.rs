//! Breadth first search

use crate::search::{
    search_engines::{
        search_engine::finalise, SearchEngine, SearchNodeStatus, SearchResult, SearchSpace,
        SearchStatistics, TerminationCondition,
    },
    Plan, Result, SearchProblem,
};
use ordered_float::OrderedFloat;
use std::collections::VecDeque;

/// Breadth first graph search. The goal test is applied when a state is
/// generated rather than when it is expanded, so the plan found is shortest
/// but the last layer is never expanded.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(
        &mut self,
        problem: &mut dyn SearchProblem,
        mut termination_condition: TerminationCondition,
    ) -> Result<(SearchResult, SearchStatistics)> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));
        let root_id = root_node.get_state_id();

        statistics.increment_goal_tests();
        if problem.goal_test(problem.initial_state()) {
            return Ok(finalise(
                SearchResult::Success(Plan::empty()),
                statistics,
                termination_condition,
            ));
        }

        let mut queue = VecDeque::from([root_id]);
        while let Some(state_id) = queue.pop_front() {
            if let Some(result) = termination_condition.should_terminate(&statistics) {
                return Ok(finalise(result, statistics, termination_condition));
            }

            let node = search_space.get_node_mut(state_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(state_id).clone();
            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());

            for action in &actions {
                let successor = problem.result(&state, action)?;
                statistics.increment_generated_nodes(1);
                let child_node = search_space.insert_or_get_node(successor, action, state_id);
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                child_node.open(g_value + 1., OrderedFloat(0.));
                let child_id = child_node.get_state_id();
                statistics.register_depth(child_node.get_depth());

                statistics.increment_goal_tests();
                if problem.goal_test(search_space.get_state(child_id)) {
                    let plan = search_space.extract_plan(child_id);
                    return Ok(finalise(
                        SearchResult::Success(plan),
                        statistics,
                        termination_condition,
                    ));
                }
                queue.push_back(child_id);
            }
        }

        Ok(finalise(
            SearchResult::ProvablyUnsolvable,
            statistics,
            termination_condition,
        ))
    }
}
