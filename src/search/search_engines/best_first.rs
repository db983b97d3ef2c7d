//! Best first graph search. Uniform cost search, greedy best first search
//! and A* differ only in the value the open list is ordered by.

use crate::search::{
    search_engines::{
        search_engine::finalise, SearchEngine, SearchNode, SearchNodeStatus, SearchResult,
        SearchSpace, SearchStatistics, TerminationCondition,
    },
    states::State,
    HeuristicName, HeuristicValue, Result, SearchProblem,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Order by g, the cost so far
    Cost,
    /// Order by h, the heuristic estimate
    Heuristic,
    /// Order by f = g + h
    CostPlusHeuristic,
}

/// Nodes are expanded in order of priority, ties broken first in first out.
/// A state already on the open list moves under a new parent when reached
/// more cheaply; closed states are never reopened. States the heuristic
/// values at infinity are dead ends and never queued.
#[derive(Debug)]
pub struct BestFirstSearch {
    priority: Priority,
    heuristic: Option<HeuristicName>,
}

impl BestFirstSearch {
    pub fn new(priority: Priority, heuristic: Option<HeuristicName>) -> Self {
        Self {
            priority,
            heuristic,
        }
    }

    pub fn uniform_cost() -> Self {
        Self::new(Priority::Cost, None)
    }

    pub fn greedy(heuristic: HeuristicName) -> Self {
        Self::new(Priority::Heuristic, Some(heuristic))
    }

    pub fn astar(heuristic: HeuristicName) -> Self {
        Self::new(Priority::CostPlusHeuristic, Some(heuristic))
    }

    fn priority_of(&self, node: &SearchNode) -> HeuristicValue {
        match self.priority {
            Priority::Cost => node.get_g(),
            Priority::Heuristic => node.get_h(),
            Priority::CostPlusHeuristic => node.get_f(),
        }
    }

    fn evaluate(
        &self,
        problem: &mut dyn SearchProblem,
        state: &State,
        statistics: &mut SearchStatistics,
    ) -> HeuristicValue {
        match self.heuristic {
            Some(heuristic) => {
                statistics.increment_evaluated_nodes();
                problem.evaluate(heuristic, state)
            }
            None => OrderedFloat(0.),
        }
    }
}

impl SearchEngine for BestFirstSearch {
    fn search(
        &mut self,
        problem: &mut dyn SearchProblem,
        mut termination_condition: TerminationCondition,
    ) -> Result<(SearchResult, SearchStatistics)> {
        let mut statistics = SearchStatistics::new();
        let initial_state = problem.initial_state().clone();
        let root_h = self.evaluate(problem, &initial_state, &mut statistics);
        let mut search_space = SearchSpace::new(initial_state);
        let mut open_list = PriorityQueue::new();
        let mut insertion_counter: usize = 0;

        let root_node = search_space.get_root_node_mut();
        if root_h.0.is_infinite() {
            root_node.mark_as_deadend();
            return Ok(finalise(
                SearchResult::ProvablyUnsolvable,
                statistics,
                termination_condition,
            ));
        }
        root_node.open(OrderedFloat(0.), root_h);
        open_list.push(
            root_node.get_state_id(),
            Reverse((self.priority_of(root_node), insertion_counter)),
        );

        while let Some((state_id, _)) = open_list.pop() {
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
            let depth = node.get_depth();
            statistics.increment_expanded_nodes();

            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());
            for action in &actions {
                let successor = problem.result(&state, action)?;
                statistics.increment_generated_nodes(1);
                let child_g = g_value + 1.;
                let child_node = search_space.insert_or_get_node(successor, action, state_id);
                let child_id = child_node.get_state_id();

                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        statistics.register_depth(child_node.get_depth());
                        let h_value =
                            self.evaluate(problem, search_space.get_state(child_id), &mut statistics);
                        let child_node = search_space.get_node_mut(child_id);
                        if h_value.0.is_infinite() {
                            child_node.mark_as_deadend();
                            continue;
                        }
                        child_node.open(child_g, h_value);
                        insertion_counter += 1;
                        open_list.push(
                            child_id,
                            Reverse((self.priority_of(child_node), insertion_counter)),
                        );
                    }
                    SearchNodeStatus::Open if child_g < child_node.get_g() => {
                        child_node.reparent(state_id, action.clone(), child_g, depth + 1);
                        statistics.increment_reopened_nodes();
                        insertion_counter += 1;
                        let priority = Reverse((self.priority_of(child_node), insertion_counter));
                        open_list.change_priority(&child_id, priority);
                    }
                    _ => {}
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
