//! Contains definitions for an unresolved plan via the [`Plan`] type.

use crate::parsed_types::PlanStep;

#[derive(Debug, Clone, PartialEq)]
pub struct Plan(Vec<PlanStep>);

impl Plan {
    pub const fn new(steps: Vec<PlanStep>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[PlanStep] {
        &self.0
    }
}
