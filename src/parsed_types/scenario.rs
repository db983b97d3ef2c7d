//! The on-disk description of a scenario.

use serde::Deserialize;

/// A scenario as written in a TOML file. Fluents are given in their text
/// form, e.g. `At(C1, SFO)`. When `negative` is omitted, every `At` and `In`
/// fluent over the declared objects that is not positive is taken to be
/// negative.
///
/// ```toml
/// name = "Air Cargo Problem 1"
/// cargos = ["C1", "C2"]
/// planes = ["P1", "P2"]
/// airports = ["JFK", "SFO"]
/// positive = ["At(C1, SFO)", "At(C2, JFK)", "At(P1, SFO)", "At(P2, JFK)"]
/// goal = ["At(C1, JFK)", "At(C2, SFO)"]
/// ```
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub name: String,
    pub cargos: Vec<String>,
    pub planes: Vec<String>,
    pub airports: Vec<String>,
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Option<Vec<String>>,
    pub goal: Vec<String>,
}
