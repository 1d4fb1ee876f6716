//! Deterministic rules of the fish tank shared across clients.
//!
//! `tank-core` defines the canonical simulation (needs decay, mood,
//! progression, daily tasks, economy) and exposes pure APIs that never read a
//! clock or touch storage. All state mutation flows through
//! [`engine::GameEngine`]; the runtime supplies time and reference data.
pub mod action;
pub mod config;
pub mod decay;
pub mod engine;
pub mod env;
pub mod minigame;
pub mod mood;
pub mod nudge;
pub mod progression;
pub mod state;
pub mod status;
pub mod tasks;

pub use action::Action;
pub use config::{ActionTuning, ConfigError, DecayTuning, TuningConfig};
pub use decay::{apply_decay, apply_decay_with};
pub use engine::{ActionContext, ActionReport, DailyReset, GameEngine, Rejection};
pub use env::{Decoration, DecorationCatalog, DecorationKind};
pub use minigame::{Difficulty, MiniGameKind, MiniGameResult, MiniGameReward};
pub use mood::Mood;
pub use nudge::{NudgeContext, NudgeKind, status_nudge};
pub use progression::{LevelUp, ProgressionState, level_for_xp, resolve_level, xp_required_for_level};
pub use state::{
    Economy, GameState, PetNeeds, PlacedDecoration, Settings, SettingsError, SettingsUpdate,
    TankLayout,
};
pub use status::StatusView;
pub use tasks::{DailyTask, DailyTasksState, TaskKind, TaskReward};
