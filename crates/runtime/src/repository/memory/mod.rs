//! In-memory repositories for tests and local runs.

mod high_score;
mod state;

pub use high_score::InMemoryHighScoreRepository;
pub use state::InMemoryStateRepository;
