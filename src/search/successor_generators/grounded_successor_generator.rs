use crate::search::{
    states::State, successor_generators::SuccessorGenerator, Action, Fluent, PlanningError,
    Result, Task,
};
use std::rc::Rc;

/// An action with its fluents replaced by vocabulary positions.
#[derive(Debug, Clone)]
struct CompiledAction {
    /// `None` if some precondition is not tracked, in which case the action is
    /// never applicable.
    preconditions: Option<(Vec<usize>, Vec<usize>)>,
    add_effects: Vec<usize>,
    delete_effects: Vec<usize>,
}

impl CompiledAction {
    fn new(action: &Action, task: &Task) -> Self {
        let positions = |fluents: &[Fluent]| -> Option<Vec<usize>> {
            fluents
                .iter()
                .map(|fluent| task.vocabulary.position(fluent))
                .collect()
        };
        // Effects on untracked fluents vanish when the state is re-encoded.
        let tracked = |fluents: &[Fluent]| -> Vec<usize> {
            fluents
                .iter()
                .filter_map(|fluent| task.vocabulary.position(fluent))
                .collect()
        };

        let preconditions = positions(action.precondition_positive())
            .zip(positions(action.precondition_negative()));
        Self {
            preconditions,
            add_effects: tracked(action.add_effects()),
            delete_effects: tracked(action.delete_effects()),
        }
    }

    fn is_applicable(&self, state: &State) -> bool {
        match &self.preconditions {
            Some((positive, negative)) => {
                positive.iter().all(|&position| state.get(position))
                    && negative.iter().all(|&position| !state.get(position))
            }
            None => false,
        }
    }
}

/// Tests applicability by scanning the full list of ground actions. This is
/// the dominant cost of expanding a node.
#[derive(Debug)]
pub struct GroundedSuccessorGenerator {
    task: Rc<Task>,
    compiled_actions: Vec<CompiledAction>,
}

impl GroundedSuccessorGenerator {
    pub fn new(task: Rc<Task>) -> Self {
        let compiled_actions = task
            .actions()
            .iter()
            .map(|action| CompiledAction::new(action, &task))
            .collect();
        Self {
            task,
            compiled_actions,
        }
    }
}

impl SuccessorGenerator for GroundedSuccessorGenerator {
    fn is_applicable(&self, state: &State, action: &Action) -> bool {
        self.task
            .action_index(action)
            .is_some_and(|index| self.compiled_actions[index].is_applicable(state))
    }

    fn get_applicable_actions(&self, state: &State) -> Vec<Rc<Action>> {
        self.task
            .actions()
            .iter()
            .zip(&self.compiled_actions)
            .filter(|(_, compiled)| compiled.is_applicable(state))
            .map(|(action, _)| action.clone())
            .collect()
    }

    fn generate_successor(&self, state: &State, action: &Action) -> Result<State> {
        let compiled = match self.task.action_index(action) {
            Some(index) if self.compiled_actions[index].is_applicable(state) => {
                &self.compiled_actions[index]
            }
            _ => {
                return Err(PlanningError::InvalidAction {
                    action: action.to_string(),
                    enabled: self
                        .get_applicable_actions(state)
                        .iter()
                        .map(|enabled| enabled.to_string())
                        .collect(),
                })
            }
        };

        let mut successor = state.clone();
        for &position in &compiled.delete_effects {
            successor.set(position, false);
        }
        for &position in &compiled.add_effects {
            successor.set(position, true);
        }
        Ok(successor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ActionSchemaName, Name};
    use crate::test_utils::*;

    fn p1_setup() -> (Rc<Task>, GroundedSuccessorGenerator) {
        let task = Rc::new(air_cargo_p1().unwrap());
        let generator = GroundedSuccessorGenerator::new(task.clone());
        (task, generator)
    }

    fn action(task: &Task, schema: ActionSchemaName, arguments: [&str; 3]) -> Rc<Action> {
        let arguments: Vec<Name> = arguments.into_iter().map(Name::new).collect();
        task.find_action(schema, &arguments).unwrap().clone()
    }

    #[test]
    fn p1_initial_applicable_actions() {
        let (task, generator) = p1_setup();
        let rendered: Vec<String> = generator
            .get_applicable_actions(&task.initial_state)
            .iter()
            .map(|action| action.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Load(C2, P2, JFK)",
                "Load(C1, P1, SFO)",
                "Fly(P2, JFK, SFO)",
                "Fly(P1, SFO, JFK)",
            ]
        );
    }

    #[test]
    fn applying_load_moves_cargo_into_plane() {
        let (task, generator) = p1_setup();
        let load = action(&task, ActionSchemaName::Load, ["C1", "P1", "SFO"]);
        let successor = generator
            .generate_successor(&task.initial_state, &load)
            .unwrap();

        let decoded = task.decode(&successor);
        assert!(decoded.positive_set().contains(&Fluent::inside("C1", "P1")));
        assert!(decoded.negative_set().contains(&Fluent::at("C1", "SFO")));
        assert_eq!(decoded.len(), task.vocabulary.len());
        assert!(decoded
            .positive_set()
            .is_disjoint(&decoded.negative_set()));
    }

    #[test]
    fn applicability_soundness() {
        let (task, generator) = p1_setup();
        let enabled = generator.get_applicable_actions(&task.initial_state);
        for action in task.actions() {
            let result = generator.generate_successor(&task.initial_state, action);
            if enabled.contains(action) {
                assert!(result.is_ok(), "{} should be applicable", action);
                assert!(generator.is_applicable(&task.initial_state, action));
            } else {
                assert!(
                    matches!(result, Err(PlanningError::InvalidAction { .. })),
                    "{} should not be applicable",
                    action
                );
            }
        }
    }

    #[test]
    fn invalid_action_lists_enabled_actions() {
        let (task, generator) = p1_setup();
        let unload = action(&task, ActionSchemaName::Unload, ["C1", "P1", "JFK"]);
        match generator.generate_successor(&task.initial_state, &unload) {
            Err(PlanningError::InvalidAction { action, enabled }) => {
                assert_eq!(action, "Unload(C1, P1, JFK)");
                assert_eq!(enabled.len(), 4);
                assert!(enabled.contains(&"Fly(P1, SFO, JFK)".to_string()));
            }
            other => panic!("expected an invalid action error, got {:?}", other),
        }
    }

    #[test]
    fn foreign_actions_are_rejected() {
        let (task, generator) = p1_setup();
        let foreign = Action::new(
            ActionSchemaName::Fly,
            smallvec::smallvec![Name::new("P9"), Name::new("SFO"), Name::new("JFK")],
            vec![Fluent::at("P9", "SFO")],
            vec![],
            vec![Fluent::at("P9", "JFK")],
            vec![Fluent::at("P9", "SFO")],
        );
        assert!(!generator.is_applicable(&task.initial_state, &foreign));
        assert!(generator
            .generate_successor(&task.initial_state, &foreign)
            .is_err());
    }

    #[test]
    fn negative_preconditions_need_tracked_negatives() {
        let objects = crate::search::Objects::new(
            vec![Name::new("C1")],
            vec![Name::new("P1")],
            vec![Name::new("SFO"), Name::new("JFK")],
        )
        .unwrap();
        let initial = crate::search::FluentState::new(
            vec![Fluent::at("C1", "SFO"), Fluent::at("P1", "SFO")],
            vec![Fluent::at("P1", "JFK")],
        );
        let task = Rc::new(Task::new("partial", objects, initial, vec![]).unwrap());
        let generator = GroundedSuccessorGenerator::new(task.clone());

        let tracked = Action::new(
            ActionSchemaName::Fly,
            smallvec::smallvec![Name::new("P1"), Name::new("SFO"), Name::new("JFK")],
            vec![Fluent::at("P1", "SFO")],
            vec![Fluent::at("P1", "JFK")],
            vec![],
            vec![],
        );
        let untracked = Action::new(
            ActionSchemaName::Fly,
            smallvec::smallvec![Name::new("P1"), Name::new("SFO"), Name::new("JFK")],
            vec![Fluent::at("P1", "SFO")],
            vec![Fluent::inside("C1", "P1")],
            vec![],
            vec![],
        );
        let compiled = CompiledAction::new(&tracked, &task);
        assert!(compiled.is_applicable(&task.initial_state));
        let compiled = CompiledAction::new(&untracked, &task);
        assert!(!compiled.is_applicable(&task.initial_state));
    }
}
