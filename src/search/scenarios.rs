//! The standard air cargo scenarios and a catalog to pick scenarios from by
//! index.

use crate::search::{Fluent, FluentState, Name, Objects, PlanningError, Result, Task};
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;

pub type ScenarioBuilder = Box<dyn Fn() -> Result<Task>>;

pub struct ScenarioEntry {
    name: String,
    builder: ScenarioBuilder,
}

impl ScenarioEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds a fresh task. Every call grounds the scenario again.
    pub fn build(&self) -> Result<Task> {
        (self.builder)()
    }
}

impl Debug for ScenarioEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An ordered list of named scenarios. Scenarios are built on demand, so a
/// catalog is cheap to hold even when its scenarios are large.
#[derive(Debug, Default)]
pub struct ScenarioCatalog {
    entries: Vec<ScenarioEntry>,
}

impl ScenarioCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Air cargo problems 1 to 4.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.add("Air Cargo Problem 1", air_cargo_p1);
        catalog.add("Air Cargo Problem 2", air_cargo_p2);
        catalog.add("Air Cargo Problem 3", air_cargo_p3);
        catalog.add("Air Cargo Problem 4", air_cargo_p4);
        catalog
    }

    pub fn add(&mut self, name: impl Into<String>, builder: impl Fn() -> Result<Task> + 'static) {
        self.entries.push(ScenarioEntry {
            name: name.into(),
            builder: Box::new(builder),
        });
    }

    /// Adds a scenario read from a TOML file whenever it is built.
    pub fn add_file(&mut self, path: PathBuf) {
        let name = path.display().to_string();
        self.add(name, move || Task::from_path(&path));
    }

    pub fn get(&self, index: usize) -> Option<&ScenarioEntry> {
        self.entries.get(index)
    }

    /// Builds the scenario at the zero-based index.
    pub fn build(&self, index: usize) -> Result<Task> {
        match self.get(index) {
            Some(entry) => entry.build(),
            None => Err(PlanningError::malformed(format!(
                "no scenario {} in a catalog of {}",
                index + 1,
                self.len()
            ))),
        }
    }

    pub fn entries(&self) -> &[ScenarioEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn names(names: &[&str]) -> Vec<Name> {
    names.iter().map(|&name| Name::new(name)).collect()
}

fn at_all(pairs: &[(&str, &str)]) -> Vec<Fluent> {
    pairs
        .iter()
        .map(|&(mobile, location)| Fluent::at(mobile, location))
        .collect()
}

/// Builds a scenario whose negative fluents are the closed world complement
/// of the positive ones.
fn closed_world_scenario(
    name: &str,
    cargos: &[&str],
    planes: &[&str],
    airports: &[&str],
    positive: &[(&str, &str)],
    goal: &[(&str, &str)],
) -> Result<Task> {
    let (cargos, planes, airports) = (names(cargos), names(planes), names(airports));
    let initial = FluentState::closed_world(&cargos, &planes, &airports, at_all(positive));
    let objects = Objects::new(cargos, planes, airports)?;
    Task::new(name, objects, initial, at_all(goal))
}

pub fn air_cargo_p1() -> Result<Task> {
    let objects = Objects::new(
        names(&["C1", "C2"]),
        names(&["P1", "P2"]),
        names(&["JFK", "SFO"]),
    )?;
    let positive = at_all(&[("C1", "SFO"), ("C2", "JFK"), ("P1", "SFO"), ("P2", "JFK")]);
    let mut negative = at_all(&[("C1", "JFK"), ("C2", "SFO"), ("P1", "JFK"), ("P2", "SFO")]);
    negative.extend([
        Fluent::inside("C1", "P1"),
        Fluent::inside("C1", "P2"),
        Fluent::inside("C2", "P1"),
        Fluent::inside("C2", "P2"),
    ]);
    let goal = at_all(&[("C1", "JFK"), ("C2", "SFO")]);
    Task::new(
        "Air Cargo Problem 1",
        objects,
        FluentState::new(positive, negative),
        goal,
    )
}

pub fn air_cargo_p2() -> Result<Task> {
    closed_world_scenario(
        "Air Cargo Problem 2",
        &["C1", "C2", "C3"],
        &["P1", "P2", "P3"],
        &["JFK", "SFO", "ATL"],
        &[
            ("C1", "SFO"),
            ("C2", "JFK"),
            ("C3", "ATL"),
            ("P1", "SFO"),
            ("P2", "JFK"),
            ("P3", "ATL"),
        ],
        &[("C1", "JFK"), ("C2", "SFO"), ("C3", "SFO")],
    )
}

pub fn air_cargo_p3() -> Result<Task> {
    closed_world_scenario(
        "Air Cargo Problem 3",
        &["C1", "C2", "C3", "C4"],
        &["P1", "P2"],
        &["JFK", "SFO", "ATL", "ORD"],
        &[
            ("C1", "SFO"),
            ("C2", "JFK"),
            ("C3", "ATL"),
            ("C4", "ORD"),
            ("P1", "SFO"),
            ("P2", "JFK"),
        ],
        &[("C1", "JFK"), ("C2", "SFO"), ("C4", "SFO"), ("C3", "JFK")],
    )
}

/// P2 starts at two airports at once and P3 at none, so the scenario is
/// searched as declared.
pub fn air_cargo_p4() -> Result<Task> {
    closed_world_scenario(
        "Air Cargo Problem 4",
        &["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8"],
        &["P1", "P2", "P3"],
        &["JFK", "SFO", "ATL", "ORD", "SIN", "HKG", "YYZ"],
        &[
            ("C1", "SFO"),
            ("C2", "JFK"),
            ("C3", "ATL"),
            ("C4", "ORD"),
            ("C5", "ORD"),
            ("C6", "ORD"),
            ("C7", "HKG"),
            ("C8", "SIN"),
            ("P1", "SFO"),
            ("P2", "JFK"),
            ("P2", "YYZ"),
        ],
        &[
            ("C1", "JFK"),
            ("C2", "SFO"),
            ("C4", "SFO"),
            ("C3", "JFK"),
            ("C5", "HKG"),
            ("C6", "ATL"),
            ("C7", "SIN"),
            ("C8", "JFK"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn standard_catalog_sizes() {
        let catalog = ScenarioCatalog::standard();
        assert_eq!(catalog.len(), 4);

        // (vocabulary, actions) for C cargos, P planes and A airports:
        // (C + P) * A + C * P fluents and 2 * C * P * A + P * A * (A - 1)
        // actions.
        let expected = [(12, 20), (27, 72), (32, 88), (101, 462)];
        for (index, (fluents, actions)) in expected.into_iter().enumerate() {
            let task = catalog.build(index).unwrap();
            assert_eq!(task.name(), catalog.get(index).unwrap().name());
            assert_eq!(task.vocabulary.len(), fluents);
            assert_eq!(task.actions().len(), actions);
        }
    }

    #[test]
    fn p4_declares_p2_twice_and_p3_nowhere() {
        let task = air_cargo_p4().unwrap();
        let positive = task.decode(&task.initial_state).positive_set();
        assert!(positive.contains(&Fluent::at("P2", "JFK")));
        assert!(positive.contains(&Fluent::at("P2", "YYZ")));
        assert!(!positive.iter().any(|fluent| fluent.arguments()[0] == Name::new("P3")));
        assert_eq!(task.goal.fluents().len(), 8);
    }

    #[test]
    fn out_of_range_index() {
        let catalog = ScenarioCatalog::standard();
        assert!(matches!(
            catalog.build(4),
            Err(PlanningError::MalformedScenario(_))
        ));
    }

    #[test]
    fn scenario_files_are_built_on_demand() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, P1_SCENARIO_TOML.as_bytes()).unwrap();

        let mut catalog = ScenarioCatalog::new();
        catalog.add_file(file.path().to_path_buf());
        assert_eq!(catalog.build(0).unwrap().name(), "Air Cargo Problem 1");
    }
}
