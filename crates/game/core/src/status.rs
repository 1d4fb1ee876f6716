//! Read-only status snapshot for widgets and the status screen.

use crate::config::DecayTuning;
use crate::decay::apply_decay_with;
use crate::mood::Mood;
use crate::state::{GameState, PetNeeds};

/// Current needs and progress as a glanceable view.
///
/// Derived on demand; deriving never mutates the session state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusView {
    pub needs: PetNeeds,
    pub mood: Mood,
    pub level: u32,
    pub xp: u64,
    pub xp_for_next_level: u64,
    pub coins: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub tasks_completed: usize,
    pub tasks_total: usize,
}

impl StatusView {
    /// Builds the view with the needs decayed to `now_millis`.
    pub fn derive(state: &GameState, now_millis: i64, tuning: &DecayTuning) -> Self {
        let needs = apply_decay_with(&state.needs, now_millis, tuning);
        Self {
            mood: Mood::classify(&needs),
            needs,
            level: state.progression.level,
            xp: state.progression.xp,
            xp_for_next_level: state.progression.xp_for_next_level(),
            coins: state.economy.coins,
            current_streak: state.daily_tasks.current_streak,
            longest_streak: state.daily_tasks.longest_streak,
            tasks_completed: state.daily_tasks.completed_count(),
            tasks_total: state.daily_tasks.tasks.len(),
        }
    }
}
