//! Authoritative game state representation.
//!
//! [`GameState`] is the aggregate root persisted between sessions. The
//! runtime owns exactly one copy in memory and mutates it only through
//! [`crate::engine::GameEngine`].
mod economy;
mod needs;
mod settings;
mod tank;

pub use economy::Economy;
pub use needs::{PetNeeds, STAT_MAX, STAT_MIN, clamp_stat};
pub use settings::{Settings, SettingsError, SettingsUpdate, parse_clock_time};
pub use tank::{PlacedDecoration, TankLayout, normalize_coordinate};

use crate::progression::ProgressionState;
use crate::tasks::DailyTasksState;

/// Canonical snapshot of a player's save.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub needs: PetNeeds,
    pub progression: ProgressionState,
    pub economy: Economy,
    pub tank: TankLayout,
    pub daily_tasks: DailyTasksState,
    pub settings: Settings,
}

impl GameState {
    /// First-run state with the needs stamped at `now_millis`.
    ///
    /// The task list stays empty until the first daily rollover.
    pub fn new(now_millis: i64) -> Self {
        Self {
            needs: PetNeeds::new(now_millis),
            progression: ProgressionState::default(),
            economy: Economy::default(),
            tank: TankLayout::default(),
            daily_tasks: DailyTasksState::default(),
            settings: Settings::default(),
        }
    }
}
