//! Status reminder preview.
//!
//! Delivery belongs to the platform's notification service; this command
//! only shows what the reminder rules would pick right now.

use anyhow::Result;
use chrono::{Local, Timelike};
use clap::Args;
use console::style;

use tank_core::{NudgeContext, NudgeKind, status_nudge};
use tank_runtime::SessionHandle;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Show which status reminder would be due now
#[derive(Args, Debug)]
pub struct Nudge {
    /// Minutes since the app was last opened
    #[arg(long, default_value_t = 24 * 60)]
    pub opened_minutes_ago: i64,

    /// Reminders already sent today
    #[arg(long, default_value_t = 0)]
    pub sent_today: u32,
}

impl Nudge {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        let state = handle.query_state().await?;
        let status = handle.status().await?;

        let now = Local::now();
        let now_millis = now.timestamp_millis();
        let ctx = NudgeContext {
            now_millis,
            minutes_of_day: minutes_of_day(now.hour(), now.minute()),
            last_app_open_millis: now_millis
                .saturating_sub(self.opened_minutes_ago.saturating_mul(MILLIS_PER_MINUTE)),
            nudges_sent_today: self.sent_today,
            ..NudgeContext::default()
        };

        match status_nudge(&status.needs, &state.settings, &ctx) {
            Some(kind) => println!("{} {}", style("Due:").bold(), message(kind)),
            None => println!("{}", style("No reminder due").dim()),
        }
        Ok(())
    }
}

fn minutes_of_day(hour: u32, minute: u32) -> u16 {
    u16::try_from(hour * 60 + minute).unwrap_or(0)
}

fn message(kind: NudgeKind) -> &'static str {
    match kind {
        NudgeKind::Hungry => "Your fish is hungry!",
        NudgeKind::Dirty => "The tank needs cleaning.",
        NudgeKind::Sad => "Your fish looks lonely.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_of_day_counts_from_midnight() {
        assert_eq!(minutes_of_day(0, 0), 0);
        assert_eq!(minutes_of_day(22, 30), 1350);
        assert_eq!(minutes_of_day(23, 59), 1439);
    }
}
