//! Errors raised by the planning core. Every variant is a synchronous usage
//! error: nothing here is retried, and callers receive them unmodified.

use itertools::Itertools;

pub type Result<T> = std::result::Result<T, PlanningError>;

#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    /// A vocabulary fluent was in neither polarity set of the partition being
    /// encoded.
    #[error("fluent {fluent} is in neither the positive nor the negative set")]
    Encoding { fluent: String },
    /// An action was applied in a state where it is not enabled.
    #[error(
        "action {action} is not enabled, enabled actions are: [{}]",
        enabled.iter().join(", ")
    )]
    InvalidAction {
        action: String,
        enabled: Vec<String>,
    },
    #[error("malformed scenario: {0}")]
    MalformedScenario(String),
    #[error("plan does not reach the goal, final state is {final_state}")]
    GoalNotReached { final_state: String },
    #[error("failed to parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("invalid scenario file")]
    Toml(#[from] toml::de::Error),
    #[error("failed to serialise report")]
    Json(#[from] serde_json::Error),
}

impl PlanningError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        PlanningError::MalformedScenario(message.into())
    }
}
