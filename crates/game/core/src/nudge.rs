//! Decides which status reminder, if any, is due.
//!
//! Delivery and scheduling live outside the core; callers pass in what they
//! remember about previous nudges through [`NudgeContext`].

use crate::state::{PetNeeds, Settings, parse_clock_time};

/// A need strictly below this is worth a reminder.
pub const NUDGE_THRESHOLD: f32 = 25.0;
/// Minimum gap between two nudges of the same kind.
pub const NUDGE_COOLDOWN_MILLIS: i64 = 8 * 3_600_000;
pub const MAX_NUDGES_PER_DAY: u32 = 2;
/// No nudge when the app was opened more recently than this.
pub const APP_OPEN_COOLDOWN_MILLIS: i64 = 3 * 3_600_000;

/// Kind of status reminder, in priority order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NudgeKind {
    Hungry,
    Dirty,
    Sad,
}

impl NudgeKind {
    pub const PRIORITY: [NudgeKind; 3] = [NudgeKind::Hungry, NudgeKind::Dirty, NudgeKind::Sad];

    fn needs_attention(self, needs: &PetNeeds) -> bool {
        let value = match self {
            NudgeKind::Hungry => needs.hunger,
            NudgeKind::Dirty => needs.cleanliness,
            NudgeKind::Sad => needs.happiness,
        };
        value < NUDGE_THRESHOLD
    }
}

/// Caller-held nudge bookkeeping plus the current time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NudgeContext {
    pub now_millis: i64,
    /// Local wall-clock time as minutes after midnight.
    pub minutes_of_day: u16,
    pub last_app_open_millis: i64,
    pub nudges_sent_today: u32,
    pub last_hungry_millis: Option<i64>,
    pub last_dirty_millis: Option<i64>,
    pub last_sad_millis: Option<i64>,
}

impl NudgeContext {
    pub fn last_sent(&self, kind: NudgeKind) -> Option<i64> {
        match kind {
            NudgeKind::Hungry => self.last_hungry_millis,
            NudgeKind::Dirty => self.last_dirty_millis,
            NudgeKind::Sad => self.last_sad_millis,
        }
    }

    /// Records that a nudge of `kind` went out at `now_millis`.
    pub fn record_sent(&mut self, kind: NudgeKind) {
        let slot = match kind {
            NudgeKind::Hungry => &mut self.last_hungry_millis,
            NudgeKind::Dirty => &mut self.last_dirty_millis,
            NudgeKind::Sad => &mut self.last_sad_millis,
        };
        *slot = Some(self.now_millis);
        self.nudges_sent_today = self.nudges_sent_today.saturating_add(1);
    }
}

/// Picks the highest-priority reminder that is due, or `None`.
pub fn status_nudge(needs: &PetNeeds, settings: &Settings, ctx: &NudgeContext) -> Option<NudgeKind> {
    if !settings.notifications_enabled || !settings.status_nudges_enabled {
        return None;
    }
    if ctx.now_millis.saturating_sub(ctx.last_app_open_millis) < APP_OPEN_COOLDOWN_MILLIS {
        return None;
    }
    if settings.quiet_hours_enabled && in_quiet_hours(settings, ctx.minutes_of_day) {
        return None;
    }
    if ctx.nudges_sent_today >= MAX_NUDGES_PER_DAY {
        return None;
    }

    NudgeKind::PRIORITY.into_iter().find(|kind| {
        kind.needs_attention(needs)
            && ctx
                .last_sent(*kind)
                .is_none_or(|last| ctx.now_millis.saturating_sub(last) >= NUDGE_COOLDOWN_MILLIS)
    })
}

/// True when `minutes_of_day` falls inside the quiet window. The window is
/// half-open and may wrap past midnight. Unparseable bounds count as 22:00.
pub fn in_quiet_hours(settings: &Settings, minutes_of_day: u16) -> bool {
    const FALLBACK: u16 = 22 * 60;
    let start = parse_clock_time(&settings.quiet_hours_start).unwrap_or(FALLBACK);
    let end = parse_clock_time(&settings.quiet_hours_end).unwrap_or(FALLBACK);

    if start <= end {
        (start..end).contains(&minutes_of_day)
    } else {
        minutes_of_day >= start || minutes_of_day < end
    }
}
