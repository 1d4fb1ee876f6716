use super::*;
use crate::env::{Decoration, DecorationKind};
use crate::minigame::{Difficulty, MiniGameKind};
use crate::state::SettingsUpdate;
use crate::tasks::DailyTask;

const TODAY: &str = "2024-05-10";
const YESTERDAY: &str = "2024-05-09";
const HOUR: i64 = 3_600_000;
const START: i64 = 1_715_299_200_000;

struct FixedCatalog(Vec<Decoration>);

impl DecorationCatalog for FixedCatalog {
    fn lookup(&self, id: &str) -> Option<Decoration> {
        self.0.iter().find(|d| d.id == id).cloned()
    }

    fn all(&self) -> Vec<Decoration> {
        self.0.clone()
    }
}

fn catalog() -> FixedCatalog {
    FixedCatalog(vec![
        Decoration::new("plant_1", "Aquatic Plant", "decoration_plant", 50, DecorationKind::Plant),
        Decoration::new("rock_1", "Decorative Rock", "decoration_rock", 30, DecorationKind::Rock),
    ])
}

struct Harness {
    state: GameState,
    tuning: TuningConfig,
    catalog: FixedCatalog,
    now: i64,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: GameState::new(START),
            tuning: TuningConfig::default(),
            catalog: catalog(),
            now: START,
        }
    }

    fn run(&mut self, action: Action) -> Result<ActionReport, Rejection> {
        let ctx = ActionContext {
            now_millis: self.now,
            today: TODAY,
            yesterday: YESTERDAY,
            tuning: &self.tuning,
            catalog: &self.catalog,
        };
        GameEngine::new(&mut self.state).execute(&action, &ctx)
    }
}

#[test]
fn first_action_rolls_over_and_feeds() {
    let mut h = Harness::new();
    let report = h.run(Action::Feed).expect("feed accepted");

    assert_eq!(
        report.daily_reset,
        Some(DailyReset {
            date: TODAY.into(),
            current_streak: 0,
            longest_streak: 0,
        })
    );
    assert_eq!(h.state.needs.hunger, 80.0);
    assert_eq!(h.state.needs.happiness, 55.0);

    // 2 base XP plus the feed_fish task reward.
    let reward = report.task_reward.expect("feed_fish completed");
    assert_eq!(reward.task_id, "feed_fish");
    assert_eq!(report.xp_awarded, 7);
    assert_eq!(report.coins_awarded, 10);
    assert_eq!(h.state.progression.xp, 7);
    assert_eq!(h.state.economy.coins, 10);
    assert_eq!(h.state.daily_tasks.last_completed_date, TODAY);
}

#[test]
fn second_feed_grants_no_task_reward() {
    let mut h = Harness::new();
    h.run(Action::Feed).expect("first feed");
    let report = h.run(Action::Feed).expect("second feed");

    assert_eq!(report.task_reward, None);
    assert_eq!(report.daily_reset, None);
    assert_eq!(report.xp_awarded, 2);
    assert_eq!(h.state.needs.hunger, 100.0);
    assert_eq!(h.state.economy.coins, 10);

    // Hunger is full, so feeding again grants no base XP.
    let report = h.run(Action::Feed).expect("third feed");
    assert_eq!(report.xp_awarded, 0);
}

#[test]
fn clean_applies_decay_first() {
    let mut h = Harness::new();
    h.now += 2 * HOUR;
    let report = h.run(Action::Clean).expect("clean accepted");

    assert_eq!(h.state.needs.cleanliness, 100.0);
    // 50 - 4 decay + 10.
    assert_eq!(h.state.needs.happiness, 56.0);
    assert_eq!(h.state.needs.hunger, 40.0);
    assert_eq!(h.state.needs.last_updated_epoch_millis, h.now);
    assert_eq!(report.xp_awarded, 3 + 10);
}

#[test]
fn negative_amounts_are_clamped_to_zero() {
    let mut h = Harness::new();
    h.run(Action::AddCoins { amount: -40 }).expect("accepted");
    h.run(Action::AddXp { amount: -40 }).expect("accepted");
    h.run(Action::IncreaseHappiness { amount: f32::NAN })
        .expect("accepted");
    h.run(Action::IncreaseHappiness { amount: -10.0 })
        .expect("accepted");

    assert_eq!(h.state.economy.coins, 0);
    assert_eq!(h.state.progression.xp, 0);
    assert_eq!(h.state.needs.happiness, 50.0);

    h.run(Action::IncreaseHappiness { amount: 500.0 })
        .expect("accepted");
    assert_eq!(h.state.needs.happiness, 100.0);
}

#[test]
fn xp_grant_can_cross_levels() {
    let mut h = Harness::new();
    let report = h.run(Action::AddXp { amount: 950 }).expect("accepted");
    let level_up = report.level_up.expect("levelled");
    assert_eq!(level_up.previous_level, 1);
    assert_eq!(level_up.new_level, 3);
    assert_eq!(h.state.progression.level, 3);
}

#[test]
fn purchase_with_insufficient_coins_is_rejected() {
    let mut h = Harness::new();
    h.run(Action::AddCoins { amount: 10 }).expect("accepted");
    let before = h.state.clone();

    let rejection = h
        .run(Action::Purchase {
            item_id: "plant_1".into(),
        })
        .expect_err("too poor");
    assert_eq!(
        rejection,
        Rejection::InsufficientCoins {
            needed: 50,
            available: 10,
        }
    );
    assert_eq!(h.state, before);
}

#[test]
fn purchase_of_unknown_item_is_rejected() {
    let mut h = Harness::new();
    h.run(Action::AddCoins { amount: 1_000 }).expect("accepted");
    assert!(matches!(
        h.run(Action::Purchase {
            item_id: "castle_9".into()
        }),
        Err(Rejection::UnknownItem { .. })
    ));
}

#[test]
fn place_then_remove_restores_inventory() {
    let mut h = Harness::new();
    h.run(Action::AddCoins { amount: 100 }).expect("accepted");
    h.run(Action::Purchase {
        item_id: "rock_1".into(),
    })
    .expect("bought");
    assert_eq!(h.state.economy.coins, 70);
    assert_eq!(h.state.economy.quantity("rock_1"), 1);

    let report = h
        .run(Action::PlaceDecoration {
            item_id: "rock_1".into(),
            placement_id: "p-1".into(),
            x: 1.7,
            y: -0.2,
        })
        .expect("placed");
    assert_eq!(
        report.task_reward.map(|r| r.task_id),
        Some("decorate_tank".to_owned())
    );
    assert_eq!(h.state.economy.quantity("rock_1"), 0);
    let placed = h.state.tank.get("p-1").expect("placed instance");
    assert_eq!((placed.x, placed.y), (1.0, 0.0));

    h.run(Action::RemoveDecoration {
        placement_id: "p-1".into(),
    })
    .expect("removed");
    assert_eq!(h.state.economy.quantity("rock_1"), 1);
    assert!(h.state.tank.placed.is_empty());
}

#[test]
fn placement_preconditions() {
    let mut h = Harness::new();
    assert!(matches!(
        h.run(Action::PlaceDecoration {
            item_id: "rock_1".into(),
            placement_id: "p-1".into(),
            x: 0.5,
            y: 0.5,
        }),
        Err(Rejection::OutOfStock { .. })
    ));
    assert!(matches!(
        h.run(Action::RemoveDecoration {
            placement_id: "missing".into()
        }),
        Err(Rejection::UnknownPlacement { .. })
    ));

    h.state.economy.inventory.insert("rock_1".into(), 2);
    h.run(Action::PlaceDecoration {
        item_id: "rock_1".into(),
        placement_id: "p-1".into(),
        x: 0.5,
        y: 0.5,
    })
    .expect("placed");
    assert!(matches!(
        h.run(Action::PlaceDecoration {
            item_id: "rock_1".into(),
            placement_id: "p-1".into(),
            x: 0.1,
            y: 0.1,
        }),
        Err(Rejection::DuplicatePlacement { .. })
    ));
    assert_eq!(h.state.economy.quantity("rock_1"), 1);
}

#[test]
fn locked_decorations_cannot_be_removed() {
    let mut h = Harness::new();
    h.state.economy.inventory.insert("plant_1".into(), 1);
    h.run(Action::PlaceDecoration {
        item_id: "plant_1".into(),
        placement_id: "p-1".into(),
        x: 0.5,
        y: 0.5,
    })
    .expect("placed");
    h.run(Action::UpdateSettings(SettingsUpdate::DecorationsLocked(true)))
        .expect("locked");

    assert_eq!(
        h.run(Action::RemoveDecoration {
            placement_id: "p-1".into()
        }),
        Err(Rejection::DecorationsLocked)
    );
    assert!(h.state.tank.contains("p-1"));
}

#[test]
fn explicit_task_completion() {
    let mut h = Harness::new();
    assert!(matches!(
        h.run(Action::CompleteTask {
            task_id: "walk_dog".into()
        }),
        Err(Rejection::UnknownTask { .. })
    ));

    let report = h
        .run(Action::CompleteTask {
            task_id: "clean_tank".into(),
        })
        .expect("completed");
    assert_eq!(report.coins_awarded, 15);
    assert_eq!(report.xp_awarded, 10);

    assert!(matches!(
        h.run(Action::CompleteTask {
            task_id: "clean_tank".into()
        }),
        Err(Rejection::TaskAlreadyCompleted { .. })
    ));
    assert_eq!(h.state.economy.coins, 15);
}

#[test]
fn saved_task_outside_catalog_completes_by_id() {
    let mut h = Harness::new();
    h.run(Action::Feed).expect("rollover");
    h.state.daily_tasks.tasks.push(DailyTask {
        id: "water_plants".into(),
        name: "Water Plants".into(),
        description: "Water the tank plants".into(),
        reward_coins: 12,
        reward_xp: 4,
        is_completed: false,
    });
    let coins = h.state.economy.coins;

    let report = h
        .run(Action::CompleteTask {
            task_id: "water_plants".into(),
        })
        .expect("completed");
    assert_eq!(
        report.task_reward.map(|reward| reward.task_id),
        Some("water_plants".to_owned())
    );
    assert_eq!(report.coins_awarded, 12);
    assert_eq!(h.state.economy.coins, coins + 12);
    assert!(h.state.daily_tasks.task("water_plants").expect("kept").is_completed);
}

#[test]
fn minigame_rewards_include_task() {
    let mut h = Harness::new();
    let report = h
        .run(Action::RecordMiniGame {
            kind: MiniGameKind::BubblePop,
            difficulty: Difficulty::Hard,
            score: 240,
        })
        .expect("recorded");

    assert_eq!(
        report.minigame_reward,
        Some(MiniGameReward { coins: 36, xp: 18 })
    );
    assert_eq!(report.coins_awarded, 36 + 20);
    assert_eq!(report.xp_awarded, 18 + 15);
}

#[test]
fn invalid_settings_are_rejected() {
    let mut h = Harness::new();
    let rejection = h
        .run(Action::UpdateSettings(SettingsUpdate::DailyReminder {
            enabled: true,
            time: "25:00".into(),
        }))
        .expect_err("bad time");
    assert!(matches!(rejection, Rejection::InvalidSettings(_)));
    assert_eq!(h.state.settings.daily_reminder_time, "19:00");
}

#[test]
fn rejection_discards_catch_up() {
    let mut h = Harness::new();
    h.now += 3 * HOUR;
    let before = h.state.clone();
    let _ = h.run(Action::RemoveDecoration {
        placement_id: "missing".into(),
    });
    assert_eq!(h.state, before);

    let report = h.run(Action::Refresh).expect("refresh");
    assert!(report.daily_reset.is_some());
    assert_eq!(h.state.needs.hunger, 35.0);
}

#[test]
fn catch_up_commits_directly() {
    let mut h = Harness::new();
    let ctx = ActionContext {
        now_millis: START + HOUR,
        today: TODAY,
        yesterday: YESTERDAY,
        tuning: &h.tuning,
        catalog: &h.catalog,
    };
    let mut engine = GameEngine::new(&mut h.state);
    assert!(engine.catch_up(&ctx).is_some());
    assert!(engine.catch_up(&ctx).is_none());
    assert_eq!(h.state.needs.hunger, 45.0);
}
