use crate::search::{states::State, Heuristic, HeuristicValue, Task};

/// Counts the goal fluents that are tracked as false in the state. This
/// ignores whether any action could make them true, so it is a count of the
/// goals remaining rather than a relaxed plan length.
#[derive(Clone, Debug, Default)]
pub struct IgnorePreconditionsHeuristic;

impl Heuristic for IgnorePreconditionsHeuristic {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        (task.goal.count_unsatisfied(state, &task.vocabulary) as f64).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn p1_initial_state() {
        let task = air_cargo_p1().unwrap();
        let mut heuristic = IgnorePreconditionsHeuristic;
        assert_eq!(
            heuristic.evaluate(&task.initial_state, &task),
            HeuristicValue::from(2.)
        );
    }

    #[test]
    fn satisfied_goals_do_not_count() {
        let task = air_cargo_p1().unwrap();
        let mut state = task.initial_state.clone();
        let first_goal = task.goal.fluents()[0];
        state.set(task.vocabulary.position(&first_goal).unwrap(), true);
        assert_eq!(
            IgnorePreconditionsHeuristic.evaluate(&state, &task),
            HeuristicValue::from(1.)
        );
    }
}
