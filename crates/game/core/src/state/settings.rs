//! Player preferences stored alongside the game state.

/// Player preferences.
///
/// Reminder and quiet-hour times are local wall-clock `"HH:MM"` strings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub notifications_enabled: bool,
    pub reminder_times: Vec<String>,
    pub daily_reminder_enabled: bool,
    pub daily_reminder_time: String,
    pub status_nudges_enabled: bool,
    pub persistent_notification_enabled: bool,
    pub quiet_hours_enabled: bool,
    pub quiet_hours_start: String,
    pub quiet_hours_end: String,
    pub sfx_enabled: bool,
    pub bg_music_enabled: bool,
    pub has_completed_tutorial: bool,
    pub decorations_locked: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: false,
            reminder_times: Vec::new(),
            daily_reminder_enabled: false,
            daily_reminder_time: "19:00".to_owned(),
            status_nudges_enabled: true,
            persistent_notification_enabled: false,
            quiet_hours_enabled: false,
            quiet_hours_start: "22:00".to_owned(),
            quiet_hours_end: "08:00".to_owned(),
            sfx_enabled: true,
            bg_music_enabled: true,
            has_completed_tutorial: false,
            decorations_locked: false,
        }
    }
}

/// A single settings change requested by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettingsUpdate {
    Notifications {
        enabled: bool,
        reminder_times: Vec<String>,
    },
    DailyReminder {
        enabled: bool,
        time: String,
    },
    StatusNudges(bool),
    PersistentNotification(bool),
    QuietHours {
        enabled: bool,
        start: String,
        end: String,
    },
    Sfx(bool),
    BackgroundMusic(bool),
    TutorialCompleted,
    DecorationsLocked(bool),
}

/// Why a settings update was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettingsError {
    #[error("`{0}` is not a valid HH:MM time")]
    InvalidTime(String),
}

impl Settings {
    /// Applies `update`, leaving `self` untouched when validation fails.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), SettingsError> {
        match update {
            SettingsUpdate::Notifications {
                enabled,
                reminder_times,
            } => {
                for time in &reminder_times {
                    parse_clock_time(time)?;
                }
                // Turning notifications on for the first time also arms the daily reminder.
                if enabled && !self.notifications_enabled {
                    self.daily_reminder_enabled = true;
                }
                self.notifications_enabled = enabled;
                self.reminder_times = reminder_times;
            }
            SettingsUpdate::DailyReminder { enabled, time } => {
                parse_clock_time(&time)?;
                self.daily_reminder_enabled = enabled;
                self.daily_reminder_time = time;
            }
            SettingsUpdate::StatusNudges(enabled) => self.status_nudges_enabled = enabled,
            SettingsUpdate::PersistentNotification(enabled) => {
                self.persistent_notification_enabled = enabled
            }
            SettingsUpdate::QuietHours {
                enabled,
                start,
                end,
            } => {
                parse_clock_time(&start)?;
                parse_clock_time(&end)?;
                self.quiet_hours_enabled = enabled;
                self.quiet_hours_start = start;
                self.quiet_hours_end = end;
            }
            SettingsUpdate::Sfx(enabled) => self.sfx_enabled = enabled,
            SettingsUpdate::BackgroundMusic(enabled) => self.bg_music_enabled = enabled,
            SettingsUpdate::TutorialCompleted => self.has_completed_tutorial = true,
            SettingsUpdate::DecorationsLocked(locked) => self.decorations_locked = locked,
        }
        Ok(())
    }
}

/// Parses `"HH:MM"` into minutes after midnight.
pub fn parse_clock_time(value: &str) -> Result<u16, SettingsError> {
    let invalid = || SettingsError::InvalidTime(value.to_owned());

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}
