//! Repository contracts for saving and loading mutable runtime state.

use tank_core::{GameState, MiniGameKind};

use super::Result;

/// Storage for the single save document.
pub trait StateRepository: Send + Sync {
    /// Loads the saved game, or `None` when nothing was saved yet.
    ///
    /// Implementations recover what they can from damaged saves: fields that
    /// are missing or malformed fall back to their defaults one by one, and
    /// `now_millis` stands in for a missing decay timestamp.
    fn load(&self, now_millis: i64) -> Result<Option<GameState>>;

    /// Replaces the saved game.
    fn save(&self, state: &GameState) -> Result<()>;
}

/// Best score per mini-game.
pub trait HighScoreRepository: Send + Sync {
    /// Best score recorded for `kind`, zero when none.
    fn high_score(&self, kind: MiniGameKind) -> Result<u32>;

    /// Stores `score` if it beats the current best. Returns whether it did.
    fn record_if_greater(&self, kind: MiniGameKind, score: u32) -> Result<bool>;
}
