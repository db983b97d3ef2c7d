//! The three schemas of the air cargo domain and their grounding over a
//! scenario's objects.

use crate::search::{Action, Fluent, Objects};
use smallvec::smallvec;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ActionSchemaName {
    /// `Load(cargo, plane, airport)`
    Load,
    /// `Unload(cargo, plane, airport)`
    Unload,
    /// `Fly(plane, from, to)` with `from != to`
    Fly,
}

impl ActionSchemaName {
    pub fn arity(&self) -> usize {
        3
    }

    /// Substitutes every combination of objects into this schema. Iteration
    /// follows the order of the object lists, so the result is reproducible.
    pub fn ground(&self, objects: &Objects) -> Vec<Action> {
        match self {
            ActionSchemaName::Load => ground_load(objects),
            ActionSchemaName::Unload => ground_unload(objects),
            ActionSchemaName::Fly => ground_fly(objects),
        }
    }
}

/// Grounds all schemas: every `Load`, then every `Unload`, then every `Fly`.
pub fn ground_actions(objects: &Objects) -> Vec<Action> {
    ActionSchemaName::iter()
        .flat_map(|schema| schema.ground(objects))
        .collect()
}

fn ground_load(objects: &Objects) -> Vec<Action> {
    let mut loads = Vec::with_capacity(
        objects.airports.len() * objects.planes.len() * objects.cargos.len(),
    );
    for &airport in &objects.airports {
        for &plane in &objects.planes {
            for &cargo in &objects.cargos {
                loads.push(Action::new(
                    ActionSchemaName::Load,
                    smallvec![cargo, plane, airport],
                    vec![Fluent::at(plane, airport), Fluent::at(cargo, airport)],
                    vec![],
                    vec![Fluent::inside(cargo, plane)],
                    vec![Fluent::at(cargo, airport)],
                ));
            }
        }
    }
    loads
}

fn ground_unload(objects: &Objects) -> Vec<Action> {
    let mut unloads = Vec::with_capacity(
        objects.airports.len() * objects.planes.len() * objects.cargos.len(),
    );
    for &airport in &objects.airports {
        for &plane in &objects.planes {
            for &cargo in &objects.cargos {
                unloads.push(Action::new(
                    ActionSchemaName::Unload,
                    smallvec![cargo, plane, airport],
                    vec![Fluent::at(plane, airport), Fluent::inside(cargo, plane)],
                    vec![],
                    vec![Fluent::at(cargo, airport)],
                    vec![Fluent::inside(cargo, plane)],
                ));
            }
        }
    }
    unloads
}

fn ground_fly(objects: &Objects) -> Vec<Action> {
    let mut flights = Vec::new();
    for &from in &objects.airports {
        for &to in &objects.airports {
            if from == to {
                continue;
            }
            for &plane in &objects.planes {
                flights.push(Action::new(
                    ActionSchemaName::Fly,
                    smallvec![plane, from, to],
                    vec![Fluent::at(plane, from)],
                    vec![],
                    vec![Fluent::at(plane, to)],
                    vec![Fluent::at(plane, from)],
                ));
            }
        }
    }
    flights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Name;

    fn objects(cargos: usize, planes: usize, airports: usize) -> Objects {
        let names = |prefix: &str, count: usize| -> Vec<Name> {
            (1..=count)
                .map(|i| Name::new(&format!("{}{}", prefix, i)))
                .collect()
        };
        Objects::new(names("C", cargos), names("P", planes), names("A", airports)).unwrap()
    }

    #[test]
    fn grounding_cardinality() {
        for (c, p, a) in [(2, 2, 2), (3, 3, 3), (4, 2, 4), (8, 3, 7), (1, 1, 2)] {
            let actions = ground_actions(&objects(c, p, a));
            assert_eq!(actions.len(), 2 * c * p * a + p * a * (a - 1));

            let count = |schema: ActionSchemaName| {
                actions
                    .iter()
                    .filter(|action| action.schema() == schema)
                    .count()
            };
            assert_eq!(count(ActionSchemaName::Load), c * p * a);
            assert_eq!(count(ActionSchemaName::Unload), c * p * a);
            assert_eq!(count(ActionSchemaName::Fly), p * a * (a - 1));
        }
    }

    #[test]
    fn grounding_order_is_stable() {
        let actions = ground_actions(&objects(2, 2, 2));
        let rendered: Vec<String> = actions.iter().map(|a| a.to_string()).collect();
        assert_eq!(rendered[0], "Load(C1, P1, A1)");
        assert_eq!(rendered[1], "Load(C2, P1, A1)");
        assert_eq!(rendered[2], "Load(C1, P2, A1)");
        assert_eq!(rendered[8], "Unload(C1, P1, A1)");
        assert_eq!(rendered[16], "Fly(P1, A1, A2)");
        assert_eq!(rendered[19], "Fly(P2, A2, A1)");
        assert_eq!(ground_actions(&objects(2, 2, 2)), actions);
    }

    #[test]
    fn load_schema_shape() {
        let objects = objects(1, 1, 2);
        let load = &ActionSchemaName::Load.ground(&objects)[0];
        assert_eq!(
            load.precondition_positive(),
            &[Fluent::at("P1", "A1"), Fluent::at("C1", "A1")]
        );
        assert!(load.precondition_negative().is_empty());
        assert_eq!(load.add_effects(), &[Fluent::inside("C1", "P1")]);
        assert_eq!(load.delete_effects(), &[Fluent::at("C1", "A1")]);
    }

    #[test]
    fn fly_never_stays_put() {
        let flights = ActionSchemaName::Fly.ground(&objects(1, 2, 3));
        assert!(flights
            .iter()
            .all(|action| action.arguments()[1] != action.arguments()[2]));
    }
}
