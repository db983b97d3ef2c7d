//! Contains definitions for a single step of a plan via the [`PlanStep`] type.

use crate::search::{ActionSchemaName, Name};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanStep {
    schema: ActionSchemaName,
    arguments: Vec<Name>,
}

impl PlanStep {
    pub const fn new(schema: ActionSchemaName, arguments: Vec<Name>) -> Self {
        Self { schema, arguments }
    }

    pub const fn schema(&self) -> ActionSchemaName {
        self.schema
    }

    pub fn arguments(&self) -> &[Name] {
        &self.arguments
    }
}
