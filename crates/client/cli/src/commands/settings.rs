//! Preference updates.

use anyhow::Result;
use clap::{ArgAction, Subcommand};

use tank_core::SettingsUpdate;
use tank_runtime::SessionHandle;

use crate::output::print_outcome;

/// Change preferences
#[derive(Subcommand, Debug)]
pub enum Settings {
    /// Turn notifications on or off and set reminder times
    Notifications {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
        /// Reminder times as HH:MM
        times: Vec<String>,
    },
    /// Configure the daily reminder
    DailyReminder {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
        /// Time as HH:MM
        #[arg(default_value = "19:00")]
        time: String,
    },
    /// Turn status reminders on or off
    Nudges {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Turn the persistent status notification on or off
    PersistentNotification {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Configure quiet hours
    QuietHours {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
        #[arg(default_value = "22:00")]
        start: String,
        #[arg(default_value = "08:00")]
        end: String,
    },
    /// Turn sound effects on or off
    Sfx {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Turn background music on or off
    Music {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Mark the tutorial as completed
    TutorialDone,
    /// Lock or unlock decorations against removal
    LockDecorations {
        #[arg(action = ArgAction::Set)]
        locked: bool,
    },
}

impl Settings {
    pub async fn execute(self, handle: &SessionHandle) -> Result<()> {
        print_outcome(&handle.update_settings(self.into_update()).await?);
        Ok(())
    }

    fn into_update(self) -> SettingsUpdate {
        match self {
            Settings::Notifications { enabled, times } => SettingsUpdate::Notifications {
                enabled,
                reminder_times: times,
            },
            Settings::DailyReminder { enabled, time } => {
                SettingsUpdate::DailyReminder { enabled, time }
            }
            Settings::Nudges { enabled } => SettingsUpdate::StatusNudges(enabled),
            Settings::PersistentNotification { enabled } => {
                SettingsUpdate::PersistentNotification(enabled)
            }
            Settings::QuietHours {
                enabled,
                start,
                end,
            } => SettingsUpdate::QuietHours {
                enabled,
                start,
                end,
            },
            Settings::Sfx { enabled } => SettingsUpdate::Sfx(enabled),
            Settings::Music { enabled } => SettingsUpdate::BackgroundMusic(enabled),
            Settings::TutorialDone => SettingsUpdate::TutorialCompleted,
            Settings::LockDecorations { locked } => SettingsUpdate::DecorationsLocked(locked),
        }
    }
}
