mod air_cargo_problem;
mod search_problem;

pub use air_cargo_problem::AirCargoProblem;
pub use search_problem::SearchProblem;
