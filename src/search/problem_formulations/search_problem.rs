use crate::search::{states::State, Action, HeuristicName, HeuristicValue, Result};
use std::{fmt::Debug, rc::Rc};

/// The interface search engines drive. A problem has one initial state, and
/// search repeatedly asks for the actions enabled in a state, the result of
/// applying one, whether a state is a goal and, for informed search, a
/// heuristic estimate.
pub trait SearchProblem: Debug {
    fn name(&self) -> &str;

    fn initial_state(&self) -> &State;

    fn actions(&self, state: &State) -> Vec<Rc<Action>>;

    /// Fails with [`crate::search::PlanningError::InvalidAction`] if the
    /// action is not enabled in the state.
    fn result(&self, state: &State, action: &Action) -> Result<State>;

    fn goal_test(&self, state: &State) -> bool;

    fn evaluate(&mut self, heuristic: HeuristicName, state: &State) -> HeuristicValue;
}
