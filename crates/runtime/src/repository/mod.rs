//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during gameplay:
//! - Game state (the save document)
//! - Mini-game high scores
//!
//! Static content (the decoration catalog) is handled by oracles, not
//! repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileHighScoreRepository, FileStateRepository, decode_state};
pub use memory::{InMemoryHighScoreRepository, InMemoryStateRepository};
pub use traits::{HighScoreRepository, StateRepository};
