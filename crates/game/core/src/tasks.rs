//! Daily tasks and streak bookkeeping.
//!
//! The state machine is implicit in [`DailyTasksState`]: the stored
//! `last_reset_date` is compared against the caller-supplied `today` string
//! and that comparison is the only transition trigger. Dates are local
//! calendar dates formatted `YYYY-MM-DD`; callers compute `today` and
//! `yesterday` so these functions never read a clock.

/// Stable identifiers of the fixed task catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TaskKind {
    FeedFish,
    CleanTank,
    #[strum(serialize = "play_minigame")]
    #[cfg_attr(feature = "serde", serde(rename = "play_minigame"))]
    PlayMiniGame,
    DecorateTank,
}

impl TaskKind {
    /// Catalog order, which is also display order.
    pub const ALL: [TaskKind; 4] = [
        TaskKind::FeedFish,
        TaskKind::CleanTank,
        TaskKind::PlayMiniGame,
        TaskKind::DecorateTank,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TaskKind::FeedFish => "feed_fish",
            TaskKind::CleanTank => "clean_tank",
            TaskKind::PlayMiniGame => "play_minigame",
            TaskKind::DecorateTank => "decorate_tank",
        }
    }

    /// Fresh, incomplete task for this catalog entry.
    pub fn definition(self) -> DailyTask {
        let (name, description, reward_coins, reward_xp) = match self {
            TaskKind::FeedFish => ("Feed Your Fish", "Feed your fish once", 10, 5),
            TaskKind::CleanTank => ("Clean the Tank", "Clean your fish tank", 15, 10),
            TaskKind::PlayMiniGame => ("Play Mini-Game", "Complete a mini-game", 20, 15),
            TaskKind::DecorateTank => {
                ("Decorate Tank", "Place a decoration in your tank", 25, 20)
            }
        };
        DailyTask {
            id: self.id().to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            reward_coins,
            reward_xp,
            is_completed: false,
        }
    }
}

/// One of the day's objectives.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTask {
    pub id: String,
    pub name: String,
    pub description: String,
    pub reward_coins: u64,
    pub reward_xp: u64,
    pub is_completed: bool,
}

/// Reward captured when a task flips to completed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskReward {
    pub task_id: String,
    pub coins: u64,
    pub xp: u64,
}

/// Today's tasks and the streak counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyTasksState {
    pub tasks: Vec<DailyTask>,
    /// Date the task list was generated; empty before the first reset.
    pub last_reset_date: String,
    pub current_streak: u32,
    /// Running maximum of `current_streak`.
    pub longest_streak: u32,
    /// Date of the most recent completion; empty when none since the last reset.
    pub last_completed_date: String,
}

impl DailyTasksState {
    pub fn task(&self, task_id: &str) -> Option<&DailyTask> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed).count()
    }
}

/// The full catalog, all incomplete, in catalog order.
pub fn generate_daily_tasks() -> Vec<DailyTask> {
    TaskKind::ALL.iter().map(|kind| kind.definition()).collect()
}

/// True when the stored task list was generated on a different day.
pub fn should_reset(state: &DailyTasksState, today: &str) -> bool {
    state.last_reset_date != today
}

/// Rolls the state over to `today` if needed.
///
/// The streak grows by one when the last completion was `yesterday`, is kept
/// when it was already `today`, and drops to zero otherwise.
pub fn reset_if_needed(state: &DailyTasksState, today: &str, yesterday: &str) -> DailyTasksState {
    if !should_reset(state, today) {
        return state.clone();
    }

    let completed_today = state.last_completed_date == today;
    let current_streak = if state.last_completed_date == yesterday {
        state.current_streak.saturating_add(1)
    } else if completed_today {
        state.current_streak
    } else {
        0
    };

    DailyTasksState {
        tasks: generate_daily_tasks(),
        last_reset_date: today.to_owned(),
        current_streak,
        longest_streak: state.longest_streak.max(current_streak),
        last_completed_date: if completed_today {
            today.to_owned()
        } else {
            String::new()
        },
    }
}

/// Marks `task_id` completed and returns its reward.
///
/// Returns `None` and leaves `state` untouched when the task is unknown or
/// was already completed today, so a reward can never be granted twice.
pub fn complete_task(state: &mut DailyTasksState, task_id: &str, today: &str) -> Option<TaskReward> {
    let task = state
        .tasks
        .iter_mut()
        .find(|task| task.id == task_id && !task.is_completed)?;

    task.is_completed = true;
    let reward = TaskReward {
        task_id: task.id.clone(),
        coins: task.reward_coins,
        xp: task.reward_xp,
    };
    state.last_completed_date = today.to_owned();
    Some(reward)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: &str = "2024-05-10";
    const YESTERDAY: &str = "2024-05-09";

    fn fresh_today() -> DailyTasksState {
        reset_if_needed(&DailyTasksState::default(), TODAY, YESTERDAY)
    }

    #[test]
    fn catalog_is_fixed() {
        let tasks = generate_daily_tasks();
        let summary: Vec<_> = tasks
            .iter()
            .map(|t| (t.id.as_str(), t.reward_coins, t.reward_xp, t.is_completed))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("feed_fish", 10, 5, false),
                ("clean_tank", 15, 10, false),
                ("play_minigame", 20, 15, false),
                ("decorate_tank", 25, 20, false),
            ]
        );
    }

    #[test]
    fn task_kind_parses_from_id() {
        for kind in TaskKind::ALL {
            assert_eq!(kind.id().parse::<TaskKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.id());
        }
    }

    #[test]
    fn first_reset_generates_tasks() {
        let state = fresh_today();
        assert_eq!(state.tasks.len(), 4);
        assert_eq!(state.last_reset_date, TODAY);
        assert_eq!(state.current_streak, 0);
        assert!(!should_reset(&state, TODAY));
    }

    #[test]
    fn same_day_reset_is_noop() {
        let mut state = fresh_today();
        complete_task(&mut state, "feed_fish", TODAY);
        assert_eq!(reset_if_needed(&state, TODAY, YESTERDAY), state);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let state = DailyTasksState {
            last_reset_date: YESTERDAY.into(),
            last_completed_date: YESTERDAY.into(),
            current_streak: 3,
            longest_streak: 3,
            tasks: generate_daily_tasks(),
        };
        let rolled = reset_if_needed(&state, TODAY, YESTERDAY);
        assert_eq!(rolled.current_streak, 4);
        assert_eq!(rolled.longest_streak, 4);
        assert_eq!(rolled.last_completed_date, "");
        assert!(rolled.tasks.iter().all(|t| !t.is_completed));
    }

    #[test]
    fn gap_breaks_streak_but_keeps_longest() {
        let state = DailyTasksState {
            last_reset_date: "2024-05-07".into(),
            last_completed_date: "2024-05-07".into(),
            current_streak: 6,
            longest_streak: 9,
            tasks: generate_daily_tasks(),
        };
        let rolled = reset_if_needed(&state, TODAY, YESTERDAY);
        assert_eq!(rolled.current_streak, 0);
        assert_eq!(rolled.longest_streak, 9);
    }

    #[test]
    fn completion_dated_today_keeps_streak() {
        let state = DailyTasksState {
            last_reset_date: YESTERDAY.into(),
            last_completed_date: TODAY.into(),
            current_streak: 2,
            longest_streak: 2,
            tasks: Vec::new(),
        };
        let rolled = reset_if_needed(&state, TODAY, YESTERDAY);
        assert_eq!(rolled.current_streak, 2);
        assert_eq!(rolled.last_completed_date, TODAY);
    }

    #[test]
    fn completion_is_idempotent() {
        let mut state = fresh_today();

        let reward = complete_task(&mut state, "feed_fish", TODAY);
        assert_eq!(
            reward,
            Some(TaskReward {
                task_id: "feed_fish".into(),
                coins: 10,
                xp: 5,
            })
        );
        let after_first = state.clone();

        assert_eq!(complete_task(&mut state, "feed_fish", TODAY), None);
        assert_eq!(state, after_first);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.last_completed_date, TODAY);
    }

    #[test]
    fn unknown_task_is_ignored() {
        let mut state = fresh_today();
        let before = state.clone();
        assert_eq!(complete_task(&mut state, "walk_dog", TODAY), None);
        assert_eq!(state, before);
    }
}
