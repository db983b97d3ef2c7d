mod grounded_successor_generator;
mod successor_generator;

pub use grounded_successor_generator::GroundedSuccessorGenerator;
pub use successor_generator::SuccessorGenerator;
