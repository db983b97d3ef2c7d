use crate::search::{
    AirCargoProblem, HashFactStore, Plan, PlanningError, Result, SearchProblem,
};
use itertools::Itertools;

/// Replays the plan from the initial state and checks that the final state
/// entails the goal. An action that is not enabled when its turn comes fails
/// with [`PlanningError::InvalidAction`].
pub fn validate(plan: &Plan, problem: &AirCargoProblem) -> Result<()> {
    let mut cur_state = problem.initial_state().clone();
    for action in plan.steps() {
        cur_state = problem.result(&cur_state, action)?;
    }

    let task = problem.task();
    let store: HashFactStore = task
        .vocabulary
        .positive_fluents(&cur_state)
        .copied()
        .collect();
    if !task.goal.is_entailed_by(&store) {
        return Err(PlanningError::GoalNotReached {
            final_state: task
                .vocabulary
                .positive_fluents(&cur_state)
                .join(", "),
        });
    }

    Ok(())
}
