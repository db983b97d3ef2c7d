use crate::search::{ActionSchemaName, Fluent, Name};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// The arguments of a ground action. No schema takes more than three.
pub type ActionArguments = SmallVec<[Name; 3]>;

/// A ground action: an action schema with every parameter substituted by an
/// object. Ground actions are built once per scenario and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    schema: ActionSchemaName,
    arguments: ActionArguments,
    precondition_positive: Vec<Fluent>,
    precondition_negative: Vec<Fluent>,
    add_effects: Vec<Fluent>,
    delete_effects: Vec<Fluent>,
}

impl Action {
    pub fn new(
        schema: ActionSchemaName,
        arguments: ActionArguments,
        precondition_positive: Vec<Fluent>,
        precondition_negative: Vec<Fluent>,
        add_effects: Vec<Fluent>,
        delete_effects: Vec<Fluent>,
    ) -> Self {
        Self {
            schema,
            arguments,
            precondition_positive,
            precondition_negative,
            add_effects,
            delete_effects,
        }
    }

    #[inline(always)]
    pub fn schema(&self) -> ActionSchemaName {
        self.schema
    }

    #[inline(always)]
    pub fn arguments(&self) -> &[Name] {
        &self.arguments
    }

    pub fn precondition_positive(&self) -> &[Fluent] {
        &self.precondition_positive
    }

    pub fn precondition_negative(&self) -> &[Fluent] {
        &self.precondition_negative
    }

    pub fn add_effects(&self) -> &[Fluent] {
        &self.add_effects
    }

    pub fn delete_effects(&self) -> &[Fluent] {
        &self.delete_effects
    }
}

impl Display for Action {
    /// Renders as `Load(C1, P1, SFO)`, the same format plan files use.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.schema, self.arguments.iter().join(", "))
    }
}
