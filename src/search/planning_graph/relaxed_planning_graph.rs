use crate::search::{
    planning_graph::{PlanningGraph, PlanningGraphFactory},
    states::State,
    HeuristicValue, Task,
};
use tracing::trace;

/// A planning graph of the delete relaxation. Level 0 holds the fluents true
/// in the state. Every further level adds the add effects of all actions
/// whose positive preconditions appeared at an earlier level, until nothing
/// new appears.
#[derive(Debug, Clone)]
pub struct RelaxedPlanningGraph {
    /// First level at which each vocabulary position appears.
    fluent_levels: Vec<Option<usize>>,
    goal_positions: Vec<usize>,
    num_levels: usize,
}

impl RelaxedPlanningGraph {
    pub fn new(task: &Task, state: &State) -> Self {
        let vocabulary = &task.vocabulary;
        let mut fluent_levels: Vec<Option<usize>> = state
            .values()
            .iter()
            .map(|&value| value.then_some(0))
            .collect();

        let relaxed_actions: Vec<(Vec<usize>, Vec<usize>)> = task
            .actions()
            .iter()
            .filter_map(|action| {
                let preconditions: Option<Vec<usize>> = action
                    .precondition_positive()
                    .iter()
                    .map(|fluent| vocabulary.position(fluent))
                    .collect();
                let add_effects = action
                    .add_effects()
                    .iter()
                    .filter_map(|fluent| vocabulary.position(fluent))
                    .collect();
                preconditions.map(|preconditions| (preconditions, add_effects))
            })
            .collect();

        let mut level = 0;
        loop {
            let reached: Vec<usize> = relaxed_actions
                .iter()
                .filter(|(preconditions, _)| {
                    preconditions.iter().all(|&position| {
                        fluent_levels[position].is_some_and(|appeared| appeared <= level)
                    })
                })
                .flat_map(|(_, add_effects)| add_effects.iter().copied())
                .filter(|&position| fluent_levels[position].is_none())
                .collect();
            if reached.is_empty() {
                break;
            }
            level += 1;
            for position in reached {
                fluent_levels[position].get_or_insert(level);
            }
        }
        trace!(num_levels = level + 1, "levelled off");

        let goal_positions = task
            .goal
            .fluents()
            .iter()
            .filter_map(|fluent| vocabulary.position(fluent))
            .collect();

        Self {
            fluent_levels,
            goal_positions,
            num_levels: level + 1,
        }
    }

    /// The level at which the fluent at the vocabulary position first
    /// appears, if it appears at all.
    pub fn level(&self, position: usize) -> Option<usize> {
        self.fluent_levels[position]
    }

    pub fn num_levels(&self) -> usize {
        self.num_levels
    }
}

impl PlanningGraph for RelaxedPlanningGraph {
    fn level_sum(&self) -> HeuristicValue {
        self.goal_positions
            .iter()
            .map(|&position| self.fluent_levels[position])
            .sum::<Option<usize>>()
            .map_or(f64::INFINITY.into(), |sum| (sum as f64).into())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedPlanningGraphFactory;

impl PlanningGraphFactory for RelaxedPlanningGraphFactory {
    fn construct(&self, task: &Task, state: &State) -> Box<dyn PlanningGraph> {
        Box::new(RelaxedPlanningGraph::new(task, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Fluent, FluentState, Name, Objects};
    use crate::test_utils::*;

    #[test]
    fn p1_initial_levels() {
        let task = air_cargo_p1().unwrap();
        let graph = RelaxedPlanningGraph::new(&task, &task.initial_state);
        let level_of = |fluent: Fluent| graph.level(task.vocabulary.position(&fluent).unwrap());

        assert_eq!(level_of(Fluent::at("C1", "SFO")), Some(0));
        assert_eq!(level_of(Fluent::inside("C1", "P1")), Some(1));
        assert_eq!(level_of(Fluent::at("P1", "JFK")), Some(1));
        assert_eq!(level_of(Fluent::at("C1", "JFK")), Some(2));
        assert_eq!(level_of(Fluent::inside("C1", "P2")), Some(2));
        assert_eq!(graph.level_sum(), HeuristicValue::from(4.0));
    }

    #[test]
    fn goal_state_sums_to_zero() {
        let task = air_cargo_p1().unwrap();
        let mut state = task.initial_state.clone();
        for fluent in task.goal.fluents() {
            state.set(task.vocabulary.position(fluent).unwrap(), true);
        }
        let graph = RelaxedPlanningGraphFactory.construct(&task, &state);
        assert_eq!(graph.level_sum(), HeuristicValue::from(0.0));
    }

    #[test]
    fn unreachable_goal_is_infinite() {
        let objects = Objects::new(
            vec![Name::new("C1")],
            vec![Name::new("P1")],
            vec![Name::new("SFO"), Name::new("JFK")],
        )
        .unwrap();
        // The only plane is at neither airport, so the cargo never moves.
        let initial = FluentState::new(
            vec![Fluent::at("C1", "SFO")],
            vec![
                Fluent::at("C1", "JFK"),
                Fluent::at("P1", "SFO"),
                Fluent::at("P1", "JFK"),
                Fluent::inside("C1", "P1"),
            ],
        );
        let task = Task::new("stranded", objects, initial, vec![Fluent::at("C1", "JFK")]).unwrap();
        let graph = RelaxedPlanningGraph::new(&task, &task.initial_state);
        assert_eq!(graph.num_levels(), 1);
        assert!(graph.level_sum().0.is_infinite());
    }
}
