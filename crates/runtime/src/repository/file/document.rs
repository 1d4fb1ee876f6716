//! Lenient decoding of the save document.
//!
//! Saves written by older builds, or damaged on disk, must still produce a
//! playable state. The document is read as untyped JSON and every field is
//! recovered on its own: a missing or mistyped value falls back to its
//! first-run default without affecting its neighbours.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tank_core::state::{STAT_MAX, clamp_stat, normalize_coordinate};
use tank_core::{
    DailyTask, DailyTasksState, Economy, GameState, PetNeeds, PlacedDecoration, ProgressionState,
    Settings, TankLayout, resolve_level,
};

/// Decodes a save document, never failing.
///
/// `now_millis` is used when the decay timestamp is missing.
pub fn decode_state(text: &str, now_millis: i64) -> GameState {
    let root = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(root)) => root,
        Ok(_) | Err(_) => {
            tracing::warn!(
                target: "runtime::persistence",
                "Save document is not a JSON object, using defaults"
            );
            return GameState::new(now_millis);
        }
    };

    GameState {
        needs: decode_needs(object(&root, "needs"), now_millis),
        progression: decode_progression(object(&root, "progression")),
        economy: decode_economy(object(&root, "economy")),
        tank: decode_tank(object(&root, "tank")),
        daily_tasks: decode_daily_tasks(object(&root, "daily_tasks")),
        settings: decode_settings(object(&root, "settings")),
    }
}

/// Borrowed view of a JSON object that tolerates absence.
#[derive(Clone, Copy)]
struct Fields<'a>(Option<&'a Map<String, Value>>);

fn object<'a>(map: &'a Map<String, Value>, key: &str) -> Fields<'a> {
    Fields(map.get(key).and_then(Value::as_object))
}

impl<'a> Fields<'a> {
    fn get(self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    fn f32_or(self, key: &str, default: f32) -> f32 {
        self.get(key)
            .and_then(Value::as_f64)
            .map(|value| value as f32)
            .unwrap_or(default)
    }

    fn i64(self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    fn u64_or(self, key: &str, default: u64) -> u64 {
        self.get(key).and_then(Value::as_u64).unwrap_or(default)
    }

    fn u32_or(self, key: &str, default: u32) -> u32 {
        self.get(key)
            .and_then(Value::as_u64)
            .map(|value| u32::try_from(value).unwrap_or(u32::MAX))
            .unwrap_or(default)
    }

    fn bool(self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    fn string(self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_owned)
    }

    fn array(self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn decode_needs(fields: Fields<'_>, now_millis: i64) -> PetNeeds {
    PetNeeds {
        hunger: clamp_stat(fields.f32_or("hunger", PetNeeds::DEFAULT_HUNGER)),
        cleanliness: clamp_stat(fields.f32_or("cleanliness", PetNeeds::DEFAULT_CLEANLINESS)),
        happiness: clamp_stat(fields.f32_or("happiness", PetNeeds::DEFAULT_HAPPINESS)),
        last_updated_epoch_millis: fields
            .i64("last_updated_epoch_millis")
            .unwrap_or(now_millis),
    }
}

fn decode_progression(fields: Fields<'_>) -> ProgressionState {
    // A level behind its xp is raised; a level ahead of it is kept.
    resolve_level(fields.u32_or("level", 1), fields.u64_or("xp", 0), 0)
}

fn decode_economy(fields: Fields<'_>) -> Economy {
    let inventory: BTreeMap<String, u32> = fields
        .get("inventory")
        .and_then(Value::as_object)
        .map(|items| {
            items
                .iter()
                .filter_map(|(id, quantity)| {
                    let quantity = quantity.as_u64()?;
                    Some((id.clone(), u32::try_from(quantity).unwrap_or(u32::MAX)))
                })
                .collect()
        })
        .unwrap_or_default();

    Economy {
        coins: fields.u64_or("coins", 0),
        inventory,
    }
}

fn decode_tank(fields: Fields<'_>) -> TankLayout {
    let placed = fields
        .array("placed")
        .iter()
        .filter_map(|entry| {
            let entry = Fields(entry.as_object());
            // Without a catalog id the instance cannot be drawn or returned.
            let decoration_id = entry.string("decoration_id")?;
            let id = entry
                .string("id")
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            Some(PlacedDecoration {
                id,
                decoration_id,
                x: normalize_coordinate(entry.f32_or("x", 0.5)),
                y: normalize_coordinate(entry.f32_or("y", 0.5)),
            })
        })
        .collect();

    TankLayout { placed }
}

fn decode_daily_tasks(fields: Fields<'_>) -> DailyTasksState {
    let tasks = fields
        .array("tasks")
        .iter()
        .filter_map(|entry| {
            let entry = Fields(entry.as_object());
            Some(DailyTask {
                id: entry.string("id")?,
                name: entry.string("name").unwrap_or_default(),
                description: entry.string("description").unwrap_or_default(),
                reward_coins: entry.u64_or("reward_coins", 0),
                reward_xp: entry.u64_or("reward_xp", 0),
                is_completed: entry.bool("is_completed").unwrap_or(false),
            })
        })
        .collect();

    let current_streak = fields.u32_or("current_streak", 0);
    DailyTasksState {
        tasks,
        last_reset_date: fields.string("last_reset_date").unwrap_or_default(),
        current_streak,
        longest_streak: fields.u32_or("longest_streak", 0).max(current_streak),
        last_completed_date: fields.string("last_completed_date").unwrap_or_default(),
    }
}

fn decode_settings(fields: Fields<'_>) -> Settings {
    let defaults = Settings::default();
    let notifications_enabled = fields
        .bool("notifications_enabled")
        .unwrap_or(defaults.notifications_enabled);

    let reminder_times = fields
        .array("reminder_times")
        .iter()
        .filter_map(|time| time.as_str().map(str::to_owned))
        .collect();

    Settings {
        notifications_enabled,
        reminder_times,
        daily_reminder_enabled: fields
            .bool("daily_reminder_enabled")
            .unwrap_or(notifications_enabled),
        daily_reminder_time: fields
            .string("daily_reminder_time")
            .unwrap_or(defaults.daily_reminder_time),
        status_nudges_enabled: fields
            .bool("status_nudges_enabled")
            .unwrap_or(defaults.status_nudges_enabled),
        persistent_notification_enabled: fields
            .bool("persistent_notification_enabled")
            .unwrap_or(defaults.persistent_notification_enabled),
        quiet_hours_enabled: fields
            .bool("quiet_hours_enabled")
            .unwrap_or(defaults.quiet_hours_enabled),
        quiet_hours_start: fields
            .string("quiet_hours_start")
            .unwrap_or(defaults.quiet_hours_start),
        quiet_hours_end: fields
            .string("quiet_hours_end")
            .unwrap_or(defaults.quiet_hours_end),
        sfx_enabled: fields.bool("sfx_enabled").unwrap_or(defaults.sfx_enabled),
        bg_music_enabled: fields
            .bool("bg_music_enabled")
            .unwrap_or(defaults.bg_music_enabled),
        has_completed_tutorial: fields
            .bool("has_completed_tutorial")
            .unwrap_or(defaults.has_completed_tutorial),
        decorations_locked: fields
            .bool("decorations_locked")
            .unwrap_or(defaults.decorations_locked),
    }
}
