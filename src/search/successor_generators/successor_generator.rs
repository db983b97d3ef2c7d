use crate::search::{states::State, Action, Result};
use std::{fmt::Debug, rc::Rc};

/// A successor generator decides which actions are applicable in a state and
/// computes the state that results from applying one.
pub trait SuccessorGenerator: Debug {
    /// Returns true if every positive precondition of the action holds in the
    /// state and every negative precondition is tracked as false.
    fn is_applicable(&self, state: &State, action: &Action) -> bool;

    /// Get every applicable action in the given state, in grounding order.
    fn get_applicable_actions(&self, state: &State) -> Vec<Rc<Action>>;

    /// Apply an action to a state. Fails with
    /// [`crate::search::PlanningError::InvalidAction`] if the action is not
    /// enabled in the state.
    fn generate_successor(&self, state: &State, action: &Action) -> Result<State>;
}
