use crate::search::{search_engines::StateId, Action, HeuristicValue};
use ordered_float::OrderedFloat;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
    /// Node is a deadend
    Deadend,
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the state within its search space
    state_id: StateId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, different depending on the search algorithm.
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost to reach this node.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Uninformed searches leave it at zero.
    h: HeuristicValue,
    /// Number of actions from the root
    depth: usize,
    /// Action that led to this node, `None` for the root
    action: Option<Rc<Action>>,
    /// Parent state, `None` for the root
    parent_id: Option<StateId>,
}

impl SearchNode {
    pub fn new_without_parent(state_id: StateId) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            f: OrderedFloat(f64::INFINITY),
            g: OrderedFloat(0.),
            h: OrderedFloat(0.),
            depth: 0,
            action: None,
            parent_id: None,
        }
    }

    pub fn new_with_parent(
        state_id: StateId,
        parent_id: StateId,
        action: Rc<Action>,
        depth: usize,
    ) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            f: OrderedFloat(f64::INFINITY),
            g: OrderedFloat(f64::INFINITY),
            h: OrderedFloat(0.),
            depth,
            action: Some(action),
            parent_id: Some(parent_id),
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Moves the node under a new parent after a cheaper path to it was
    /// found. The heuristic value is kept.
    pub fn reparent(
        &mut self,
        parent_id: StateId,
        action: Rc<Action>,
        g: HeuristicValue,
        depth: usize,
    ) {
        self.parent_id = Some(parent_id);
        self.action = Some(action);
        self.depth = depth;
        let h = self.h;
        self.open(g, h);
    }

    pub fn mark_as_deadend(&mut self) {
        self.status = SearchNodeStatus::Deadend;
        self.f = OrderedFloat(f64::INFINITY);
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_state_id(&self) -> StateId {
        self.state_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_action(&self) -> Option<&Rc<Action>> {
        self.action.as_ref()
    }

    pub fn get_parent_id(&self) -> Option<StateId> {
        self.parent_id
    }
}
