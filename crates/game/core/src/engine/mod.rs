//! Action execution pipeline.
//!
//! [`GameEngine`] is the only writer of [`GameState`]. Every action runs the
//! same sequence inside one read-modify-write:
//! catch-up (decay + daily rollover) → effect → task completion → rewards →
//! level recompute. The work happens on a scratch copy that is committed only
//! when the action is accepted, so a rejection leaves the state untouched.

mod rejection;

pub use rejection::Rejection;

use crate::action::Action;
use crate::config::TuningConfig;
use crate::decay::apply_decay_with;
use crate::env::DecorationCatalog;
use crate::minigame::{MiniGameReward, scaled_rewards};
use crate::progression::LevelUp;
use crate::state::{GameState, PlacedDecoration, STAT_MAX, clamp_stat};
use crate::tasks::{TaskKind, TaskReward, complete_task, reset_if_needed};

/// Time and reference data an action executes against.
#[derive(Clone, Copy)]
pub struct ActionContext<'a> {
    pub now_millis: i64,
    /// Local calendar date, `YYYY-MM-DD`.
    pub today: &'a str,
    pub yesterday: &'a str,
    pub tuning: &'a TuningConfig,
    pub catalog: &'a dyn DecorationCatalog,
}

/// Daily rollover observed during catch-up.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyReset {
    pub date: String,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Everything an accepted action granted, for events and result screens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub daily_reset: Option<DailyReset>,
    pub task_reward: Option<TaskReward>,
    /// Total coins credited, task reward included.
    pub coins_awarded: u64,
    /// Total XP granted, task reward included.
    pub xp_awarded: u64,
    pub level_up: Option<LevelUp>,
    pub minigame_reward: Option<MiniGameReward>,
}

pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Brings the needs current and rolls the daily tasks over if the date
    /// changed. Always commits.
    pub fn catch_up(&mut self, ctx: &ActionContext<'_>) -> Option<DailyReset> {
        catch_up(self.state, ctx)
    }

    /// Executes `action`, committing only when it is accepted.
    pub fn execute(
        &mut self,
        action: &Action,
        ctx: &ActionContext<'_>,
    ) -> Result<ActionReport, Rejection> {
        let mut next = self.state.clone();
        let report = apply(&mut next, action, ctx)?;
        *self.state = next;
        Ok(report)
    }
}

fn catch_up(state: &mut GameState, ctx: &ActionContext<'_>) -> Option<DailyReset> {
    state.needs = apply_decay_with(&state.needs, ctx.now_millis, &ctx.tuning.decay);

    if state.daily_tasks.last_reset_date == ctx.today {
        return None;
    }
    state.daily_tasks = reset_if_needed(&state.daily_tasks, ctx.today, ctx.yesterday);
    Some(DailyReset {
        date: state.daily_tasks.last_reset_date.clone(),
        current_streak: state.daily_tasks.current_streak,
        longest_streak: state.daily_tasks.longest_streak,
    })
}

/// Rewards collected by an effect before they are applied.
#[derive(Default)]
struct Grant<'a> {
    task: Option<&'a str>,
    coins: u64,
    xp: u64,
    minigame: Option<MiniGameReward>,
}

fn apply(
    state: &mut GameState,
    action: &Action,
    ctx: &ActionContext<'_>,
) -> Result<ActionReport, Rejection> {
    let daily_reset = catch_up(state, ctx);
    let grant = apply_effect(state, action, ctx)?;

    let task_reward = grant
        .task
        .and_then(|task_id| complete_task(&mut state.daily_tasks, task_id, ctx.today));

    let (task_coins, task_xp) = task_reward
        .as_ref()
        .map_or((0, 0), |reward| (reward.coins, reward.xp));
    let coins_awarded = grant.coins.saturating_add(task_coins);
    let xp_awarded = grant.xp.saturating_add(task_xp);

    state.economy.credit(coins_awarded);
    let level_up = state.progression.gain(xp_awarded);

    Ok(ActionReport {
        daily_reset,
        task_reward,
        coins_awarded,
        xp_awarded,
        level_up,
        minigame_reward: grant.minigame,
    })
}

fn apply_effect<'a>(
    state: &mut GameState,
    action: &'a Action,
    ctx: &ActionContext<'_>,
) -> Result<Grant<'a>, Rejection> {
    let tuning = &ctx.tuning.actions;
    let needs = &mut state.needs;

    let grant = match action {
        Action::Feed => {
            let was_hungry = needs.hunger < STAT_MAX;
            needs.hunger = clamp_stat(needs.hunger + tuning.feed_hunger);
            needs.happiness = clamp_stat(needs.happiness + tuning.feed_happiness);
            Grant {
                task: Some(TaskKind::FeedFish.id()),
                xp: if was_hungry { tuning.feed_base_xp } else { 0 },
                ..Grant::default()
            }
        }
        Action::Clean => {
            let was_dirty = needs.cleanliness < STAT_MAX;
            needs.cleanliness = STAT_MAX;
            needs.happiness = clamp_stat(needs.happiness + tuning.clean_happiness);
            Grant {
                task: Some(TaskKind::CleanTank.id()),
                xp: if was_dirty { tuning.clean_base_xp } else { 0 },
                ..Grant::default()
            }
        }
        Action::IncreaseHappiness { amount } => {
            needs.happiness = clamp_stat(needs.happiness + non_negative(*amount));
            Grant::default()
        }
        Action::AddCoins { amount } => Grant {
            coins: u64::try_from(*amount).unwrap_or(0),
            ..Grant::default()
        },
        Action::AddXp { amount } => Grant {
            xp: u64::try_from(*amount).unwrap_or(0),
            ..Grant::default()
        },
        Action::CompleteTask { task_id } => {
            let task = state
                .daily_tasks
                .task(task_id)
                .ok_or_else(|| Rejection::UnknownTask {
                    task_id: task_id.clone(),
                })?;
            if task.is_completed {
                return Err(Rejection::TaskAlreadyCompleted {
                    task_id: task_id.clone(),
                });
            }
            Grant {
                task: Some(task_id.as_str()),
                ..Grant::default()
            }
        }
        Action::Purchase { item_id } => {
            let decoration =
                ctx.catalog
                    .lookup(item_id)
                    .ok_or_else(|| Rejection::UnknownItem {
                        item_id: item_id.clone(),
                    })?;
            let available = state.economy.coins;
            if !state.economy.try_debit(decoration.price) {
                return Err(Rejection::InsufficientCoins {
                    needed: decoration.price,
                    available,
                });
            }
            state.economy.stock(&decoration.id);
            Grant::default()
        }
        Action::PlaceDecoration {
            item_id,
            placement_id,
            x,
            y,
        } => {
            if state.tank.contains(placement_id) {
                return Err(Rejection::DuplicatePlacement {
                    placement_id: placement_id.clone(),
                });
            }
            if !state.economy.take(item_id) {
                return Err(Rejection::OutOfStock {
                    item_id: item_id.clone(),
                });
            }
            state
                .tank
                .placed
                .push(PlacedDecoration::new(placement_id, item_id, *x, *y));
            Grant {
                task: Some(TaskKind::DecorateTank.id()),
                ..Grant::default()
            }
        }
        Action::RemoveDecoration { placement_id } => {
            if state.settings.decorations_locked {
                return Err(Rejection::DecorationsLocked);
            }
            let removed =
                state
                    .tank
                    .remove(placement_id)
                    .ok_or_else(|| Rejection::UnknownPlacement {
                        placement_id: placement_id.clone(),
                    })?;
            state.economy.stock(&removed.decoration_id);
            Grant::default()
        }
        Action::RecordMiniGame {
            difficulty, score, ..
        } => {
            let reward = scaled_rewards(*score, *difficulty);
            Grant {
                task: Some(TaskKind::PlayMiniGame.id()),
                coins: reward.coins,
                xp: reward.xp,
                minigame: Some(reward),
            }
        }
        Action::UpdateSettings(update) => {
            state
                .settings
                .apply(update.clone())
                .map_err(Rejection::InvalidSettings)?;
            Grant::default()
        }
        Action::Refresh => Grant::default(),
    };
    Ok(grant)
}

fn non_negative(amount: f32) -> f32 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests;
