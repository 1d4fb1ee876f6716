//! In-memory StateRepository implementation for tests and local runs.

use std::sync::RwLock;

use tank_core::GameState;

use crate::repository::{RepositoryError, Result, StateRepository};

/// Holds the latest saved state in memory.
#[derive(Default)]
pub struct InMemoryStateRepository {
    state: RwLock<Option<GameState>>,
    saves: RwLock<u64>,
}

impl InMemoryStateRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a previously saved game.
    pub fn with_state(state: GameState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
            saves: RwLock::new(0),
        }
    }

    /// The last saved state, if any.
    pub fn saved(&self) -> Option<GameState> {
        self.state.read().ok().and_then(|state| state.clone())
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> u64 {
        self.saves.read().map(|count| *count).unwrap_or(0)
    }
}

impl StateRepository for InMemoryStateRepository {
    fn load(&self, _now_millis: i64) -> Result<Option<GameState>> {
        let state = self
            .state
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(state.clone())
    }

    fn save(&self, state: &GameState) -> Result<()> {
        let mut slot = self
            .state
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *slot = Some(state.clone());

        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *saves += 1;
        Ok(())
    }
}
