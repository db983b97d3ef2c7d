//! Depth first search

use crate::search::{
    search_engines::{
        search_engine::finalise, SearchEngine, SearchNodeStatus, SearchResult, SearchSpace,
        SearchStatistics, TerminationCondition,
    },
    Result, SearchProblem,
};
use ordered_float::OrderedFloat;

/// Depth first graph search. States already seen are never pushed again, and
/// the goal test is applied when a state is popped.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for DFS {
    fn search(
        &mut self,
        problem: &mut dyn SearchProblem,
        mut termination_condition: TerminationCondition,
    ) -> Result<(SearchResult, SearchStatistics)> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let root_node = search_space.get_root_node_mut();
        root_node.open(OrderedFloat(0.), OrderedFloat(0.));

        let mut stack = vec![root_node.get_state_id()];
        while let Some(state_id) = stack.pop() {
            if let Some(result) = termination_condition.should_terminate(&statistics) {
                return Ok(finalise(result, statistics, termination_condition));
            }

            let state = search_space.get_state(state_id).clone();
            statistics.increment_goal_tests();
            if problem.goal_test(&state) {
                let plan = search_space.extract_plan(state_id);
                return Ok(finalise(
                    SearchResult::Success(plan),
                    statistics,
                    termination_condition,
                ));
            }

            let node = search_space.get_node_mut(state_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());
            for action in &actions {
                let successor = problem.result(&state, action)?;
                statistics.increment_generated_nodes(1);
                let child_node = search_space.insert_or_get_node(successor, action, state_id);
                if child_node.get_status() == SearchNodeStatus::New {
                    child_node.open(g_value + 1., OrderedFloat(0.));
                    statistics.register_depth(child_node.get_depth());
                    stack.push(child_node.get_state_id());
                }
            }
        }

        Ok(finalise(
            SearchResult::ProvablyUnsolvable,
            statistics,
            termination_condition,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, AirCargoProblem};
    use crate::test_utils::*;

    #[test]
    fn p1_finds_a_valid_plan() {
        let mut problem = AirCargoProblem::new(air_cargo_p1().unwrap());
        let (result, statistics) = DFS::new()
            .search(&mut problem, TerminationCondition::unlimited())
            .unwrap();

        let plan = result.plan().unwrap();
        assert!(plan.len() >= 6);
        assert!(validate(plan, &problem).is_ok());
        assert_eq!(statistics.goal_tests(), statistics.expanded_nodes() + 1);
    }

    #[test]
    fn stranded_cargo_is_unsolvable() {
        let mut problem = AirCargoProblem::new(stranded_cargo().unwrap());
        let (result, _) = DFS::new()
            .search(&mut problem, TerminationCondition::unlimited())
            .unwrap();
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }
}
