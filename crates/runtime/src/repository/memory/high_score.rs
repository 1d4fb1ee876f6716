//! In-memory HighScoreRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use tank_core::MiniGameKind;

use crate::repository::{HighScoreRepository, RepositoryError, Result};

#[derive(Default)]
pub struct InMemoryHighScoreRepository {
    scores: RwLock<HashMap<MiniGameKind, u32>>,
}

impl InMemoryHighScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreRepository for InMemoryHighScoreRepository {
    fn high_score(&self, kind: MiniGameKind) -> Result<u32> {
        let scores = self
            .scores
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(scores.get(&kind).copied().unwrap_or(0))
    }

    fn record_if_greater(&self, kind: MiniGameKind, score: u32) -> Result<bool> {
        let mut scores = self
            .scores
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let best = scores.entry(kind).or_insert(0);
        if score > *best {
            *best = score;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
