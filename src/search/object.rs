use crate::search::{Fluent, Name, PlanningError, Result};
use std::collections::HashMap;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ObjectKind {
    Cargo,
    Plane,
    Airport,
}

/// The objects of a scenario. The order of each list is kept as given, since
/// grounding iterates over them and fixtures depend on a stable action order.
#[derive(Debug, Clone)]
pub struct Objects {
    pub cargos: Vec<Name>,
    pub planes: Vec<Name>,
    pub airports: Vec<Name>,
    kinds: HashMap<Name, ObjectKind>,
}

impl Objects {
    /// Fails if any name is declared more than once, across all kinds.
    pub fn new(cargos: Vec<Name>, planes: Vec<Name>, airports: Vec<Name>) -> Result<Self> {
        let mut kinds = HashMap::new();
        let declared = cargos
            .iter()
            .map(|&name| (name, ObjectKind::Cargo))
            .chain(planes.iter().map(|&name| (name, ObjectKind::Plane)))
            .chain(airports.iter().map(|&name| (name, ObjectKind::Airport)));
        for (name, kind) in declared {
            if let Some(previous) = kinds.insert(name, kind) {
                return Err(PlanningError::malformed(format!(
                    "object {} is declared both as {} and as {}",
                    name, previous, kind
                )));
            }
        }

        Ok(Self {
            cargos,
            planes,
            airports,
            kinds,
        })
    }

    pub fn kind_of(&self, name: Name) -> Option<ObjectKind> {
        self.kinds.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Checks that the fluent only mentions declared objects, in positions
    /// that match their kind.
    pub fn check_fluent(&self, fluent: &Fluent) -> Result<()> {
        let well_typed = match *fluent {
            Fluent::At { mobile, location } => {
                matches!(
                    self.kind_of(mobile),
                    Some(ObjectKind::Cargo | ObjectKind::Plane)
                ) && self.kind_of(location) == Some(ObjectKind::Airport)
            }
            Fluent::In { cargo, plane } => {
                self.kind_of(cargo) == Some(ObjectKind::Cargo)
                    && self.kind_of(plane) == Some(ObjectKind::Plane)
            }
        };

        if well_typed {
            Ok(())
        } else {
            Err(PlanningError::malformed(format!(
                "fluent {} refers to undeclared or ill-typed objects",
                fluent
            )))
        }
    }
}
