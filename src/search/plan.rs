//! A plan is a sequence of actions that can be executed to achieve a goal. This
//! module provides the [`Plan`] struct, which represents a plan.

use crate::parsers::Parser;
use crate::search::{Action, PlanningError, Result, Task};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<Rc<Action>>,
}

impl Plan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(steps: Vec<Rc<Action>>) -> Self {
        Self { steps }
    }

    pub fn from_path(path: &Path, task: &Task) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_text(&contents, task)
    }

    /// Parses a plan and resolves every step against the task's ground
    /// actions.
    pub fn from_text(text: &str, task: &Task) -> Result<Self> {
        let parsed_plan = crate::parsed_types::Plan::from_text(text)?;

        let mut steps = Vec::with_capacity(parsed_plan.steps().len());
        for step in parsed_plan.steps() {
            let rendered = format!("{}({})", step.schema(), step.arguments().iter().join(", "));
            if step.arguments().len() != step.schema().arity() {
                return Err(PlanningError::Parse {
                    input: rendered,
                    reason: format!(
                        "{} takes {} arguments",
                        step.schema(),
                        step.schema().arity()
                    ),
                });
            }
            match task.find_action(step.schema(), step.arguments()) {
                Some(action) => steps.push(action.clone()),
                None => {
                    return Err(PlanningError::Parse {
                        input: rendered,
                        reason: format!("not an action of {}", task.name()),
                    })
                }
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Rc<Action>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Display for Plan {
    /// One action per line, the format [`Plan::from_text`] reads.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl IntoIterator for Plan {
    type Item = Rc<Action>;
    type IntoIter = std::vec::IntoIter<Rc<Action>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Rc<Action>];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn from_text_works() {
        let task = air_cargo_p1().unwrap();
        let plan = Plan::from_text(P1_PLAN_TEXT, &task).unwrap();
        assert_eq!(plan.len(), 6);
        assert_eq!(plan[0].to_string(), "Load(C1, P1, SFO)");
        assert_eq!(plan[5].to_string(), "Unload(C2, P2, SFO)");
        assert!(Rc::ptr_eq(&plan[1], task.find_action(plan[1].schema(), plan[1].arguments()).unwrap()));
    }

    #[test]
    fn display_round_trips() {
        let task = air_cargo_p1().unwrap();
        let plan = Plan::from_text(P1_PLAN_TEXT, &task).unwrap();
        assert_eq!(Plan::from_text(&plan.to_string(), &task).unwrap(), plan);
    }

    #[test]
    fn unknown_objects_are_rejected() {
        let task = air_cargo_p1().unwrap();
        let result = Plan::from_text("Load(C9, P1, SFO)", &task);
        assert!(matches!(result, Err(PlanningError::Parse { .. })));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let task = air_cargo_p1().unwrap();
        let result = Plan::from_text("Fly(P1, JFK)", &task);
        assert!(matches!(result, Err(PlanningError::Parse { .. })));
    }
}
