mod state;
mod vocabulary;

pub use state::State;
pub use vocabulary::Vocabulary;
