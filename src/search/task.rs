use crate::parsed_types::ScenarioFile;
use crate::search::{
    ground_actions, states::State, states::Vocabulary, Action, ActionArguments, ActionSchemaName,
    Fluent, FluentState, Goal, Name, Objects, PlanningError, Result,
};
use global_counter::global_counter;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use tracing::info;

pub type ScenarioId = usize;
global_counter!(SCENARIO_COUNTER, ScenarioId, 0);

/// A fully constructed air cargo scenario: its objects, tracked vocabulary,
/// initial state, goal and every ground action. Nothing here changes after
/// construction.
#[derive(Debug)]
pub struct Task {
    id: ScenarioId,
    name: String,
    pub objects: Objects,
    pub vocabulary: Vocabulary,
    pub initial_state: State,
    pub goal: Goal,
    actions: Vec<Rc<Action>>,
    action_table: HashMap<(ActionSchemaName, ActionArguments), usize>,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        objects: Objects,
        initial: FluentState,
        goal: Vec<Fluent>,
    ) -> Result<Self> {
        let name = name.into();
        let vocabulary = Vocabulary::from_partition(&initial)?;
        for fluent in vocabulary.fluents() {
            objects.check_fluent(fluent)?;
        }
        if let Some(fluent) = goal.iter().find(|&fluent| !vocabulary.contains(fluent)) {
            return Err(PlanningError::malformed(format!(
                "goal fluent {} is not declared in the initial state",
                fluent
            )));
        }

        let initial_state = vocabulary.encode(&initial)?;
        let actions: Vec<Rc<Action>> = ground_actions(&objects).into_iter().map(Rc::new).collect();
        let action_table = actions
            .iter()
            .enumerate()
            .map(|(index, action)| {
                (
                    (action.schema(), ActionArguments::from(action.arguments())),
                    index,
                )
            })
            .collect();

        let id = SCENARIO_COUNTER.get_cloned();
        SCENARIO_COUNTER.inc();
        info!(
            scenario = %name,
            scenario_id = id,
            num_objects = objects.len(),
            num_fluents = vocabulary.len(),
            num_actions = actions.len(),
            num_goals = goal.len(),
        );

        Ok(Self {
            id,
            name,
            objects,
            vocabulary,
            initial_state,
            goal: Goal::new(goal),
            actions,
            action_table,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Builds a scenario from its TOML description.
    pub fn from_text(text: &str) -> Result<Self> {
        let file: ScenarioFile = toml::from_str(text)?;
        Self::from_scenario_file(file)
    }

    pub fn from_scenario_file(file: ScenarioFile) -> Result<Self> {
        let to_names = |names: &[String]| -> Vec<Name> { names.iter().map(Name::from).collect() };
        let parse_all = |fluents: &[String]| -> Result<Vec<Fluent>> {
            fluents.iter().map(|text| text.parse::<Fluent>()).collect()
        };

        let cargos = to_names(&file.cargos);
        let planes = to_names(&file.planes);
        let airports = to_names(&file.airports);
        let positive = parse_all(&file.positive)?;
        let initial = match &file.negative {
            Some(negative) => FluentState::new(positive, parse_all(negative)?),
            None => FluentState::closed_world(&cargos, &planes, &airports, positive),
        };
        let goal = parse_all(&file.goal)?;

        let objects = Objects::new(cargos, planes, airports)?;
        Self::new(file.name, objects, initial, goal)
    }

    #[inline(always)]
    pub fn id(&self) -> ScenarioId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every ground action, in grounding order.
    pub fn actions(&self) -> &[Rc<Action>] {
        &self.actions
    }

    pub fn find_action(&self, schema: ActionSchemaName, arguments: &[Name]) -> Option<&Rc<Action>> {
        self.action_table
            .get(&(schema, ActionArguments::from(arguments)))
            .map(|&index| &self.actions[index])
    }

    /// Position of the action in [`Task::actions`], if it is one of this
    /// scenario's ground actions.
    pub fn action_index(&self, action: &Action) -> Option<usize> {
        self.action_table
            .get(&(action.schema(), ActionArguments::from(action.arguments())))
            .copied()
            .filter(|&index| *self.actions[index] == *action)
    }

    pub fn is_grounded(&self, action: &Action) -> bool {
        self.action_index(action).is_some()
    }

    pub fn decode(&self, state: &State) -> FluentState {
        self.vocabulary.decode(state)
    }
}
