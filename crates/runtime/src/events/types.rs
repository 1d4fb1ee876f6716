//! Event types for different topics.

use serde::{Deserialize, Serialize};
use tank_core::{Action, DailyReset, GameState, LevelUp, Rejection, TaskReward};

/// Events related to game state changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StateEvent {
    /// An action was accepted; `state` is the committed snapshot.
    Changed {
        action: Action,
        state: Box<GameState>,
    },

    /// An action was refused and the state left untouched.
    Rejected { action: Action, reason: Rejection },
}

/// Events related to experience and levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionEvent {
    LevelUp {
        previous_level: u32,
        new_level: u32,
        xp: u64,
        xp_for_next_level: u64,
    },
}

impl From<LevelUp> for ProgressionEvent {
    fn from(level_up: LevelUp) -> Self {
        ProgressionEvent::LevelUp {
            previous_level: level_up.previous_level,
            new_level: level_up.new_level,
            xp: level_up.xp,
            xp_for_next_level: level_up.xp_for_next_level,
        }
    }
}

/// Events related to daily tasks and streaks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskEvent {
    Completed {
        task_id: String,
        coins: u64,
        xp: u64,
    },
    DailyReset {
        date: String,
        current_streak: u32,
        longest_streak: u32,
    },
}

impl From<TaskReward> for TaskEvent {
    fn from(reward: TaskReward) -> Self {
        TaskEvent::Completed {
            task_id: reward.task_id,
            coins: reward.coins,
            xp: reward.xp,
        }
    }
}

impl From<DailyReset> for TaskEvent {
    fn from(reset: DailyReset) -> Self {
        TaskEvent::DailyReset {
            date: reset.date,
            current_streak: reset.current_streak,
            longest_streak: reset.longest_streak,
        }
    }
}
