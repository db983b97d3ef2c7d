use crate::search::{
    search_engines::{SearchNode, SearchNodeStatus},
    states::State,
    Action, Plan,
};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, rc::Rc};

/// Index of a state in the search space it was registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

/// Every state seen during one search, each registered once together with
/// its search node.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<State, Linear>,
    registered_states: HashMap<State, StateId>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_state_id = StateId(0);
        registered_states.insert(initial_state.clone(), root_state_id);
        nodes.push(SearchNode::new_without_parent(root_state_id));
        states.push(initial_state);

        Self {
            nodes,
            states,
            registered_states,
        }
    }

    /// Returns the node of the state, registering the state as a child of
    /// `parent_id` reached by `action` if it is new.
    pub fn insert_or_get_node(
        &mut self,
        state: State,
        action: &Rc<Action>,
        parent_id: StateId,
    ) -> &mut SearchNode {
        if let Some(&state_id) = self.registered_states.get(&state) {
            return self.get_node_mut(state_id);
        }

        let state_id = StateId(self.nodes.len());
        let depth = self.get_node(parent_id).get_depth() + 1;
        self.registered_states.insert(state.clone(), state_id);
        self.states.push(state);
        self.nodes.push(SearchNode::new_with_parent(
            state_id,
            parent_id,
            action.clone(),
            depth,
        ));
        self.get_node_mut(state_id)
    }

    pub fn contains(&self, state: &State) -> bool {
        self.registered_states.contains_key(state)
    }

    /// Follows parent links from the node back to the root.
    pub fn extract_plan(&self, goal_id: StateId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let (Some(parent_id), Some(action)) =
            (current_node.get_parent_id(), current_node.get_action())
        {
            steps.push(action.clone());
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }

    pub fn get_root_id(&self) -> StateId {
        StateId(0)
    }

    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(StateId(0))
    }

    pub fn get_node(&self, state_id: StateId) -> &SearchNode {
        self.nodes.get(state_id.0).expect("Invalid state id")
    }

    pub fn get_node_mut(&mut self, state_id: StateId) -> &mut SearchNode {
        self.nodes.get_mut(state_id.0).expect("Invalid state id")
    }

    pub fn get_state(&self, state_id: StateId) -> &State {
        self.states.get(state_id.0).expect("Invalid state id")
    }

    pub fn is_closed(&self, state_id: StateId) -> bool {
        self.get_node(state_id).get_status() == SearchNodeStatus::Closed
    }

    pub fn len(&self) -> usize {
        self.registered_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchProblem;
    use crate::search::AirCargoProblem;
    use crate::test_utils::*;

    #[test]
    fn states_are_registered_once() {
        let problem = AirCargoProblem::new(air_cargo_p1().unwrap());
        let root = problem.initial_state().clone();
        let mut search_space = SearchSpace::new(root.clone());
        let root_id = search_space.get_root_id();

        let actions = problem.actions(&root);
        let child = problem.result(&root, &actions[0]).unwrap();
        let child_id = search_space
            .insert_or_get_node(child.clone(), &actions[0], root_id)
            .get_state_id();
        let again = search_space
            .insert_or_get_node(child, &actions[1], root_id)
            .get_state_id();

        assert_eq!(child_id, again);
        assert_eq!(search_space.len(), 2);
        assert_eq!(search_space.get_node(child_id).get_depth(), 1);
        assert_eq!(search_space.extract_plan(child_id).steps(), &actions[..1]);
        assert!(search_space.extract_plan(root_id).is_empty());
    }
}
