//! Types produced by parsing text inputs, before they are resolved against a
//! scenario.

mod plan;
mod plan_step;
mod scenario;

pub use plan::Plan;
pub use plan_step::PlanStep;
pub use scenario::ScenarioFile;
