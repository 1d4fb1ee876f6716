//! Player and system actions accepted by the engine.

use crate::minigame::{Difficulty, MiniGameKind};
use crate::state::SettingsUpdate;

/// A single serialized mutation request.
///
/// Amount fields carry whatever the caller sent; the engine clamps negative
/// or non-finite amounts to zero instead of rejecting them.
#[derive(Clone, Debug, PartialEq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Feed,
    Clean,
    IncreaseHappiness {
        amount: f32,
    },
    AddCoins {
        amount: i64,
    },
    AddXp {
        amount: i64,
    },
    CompleteTask {
        task_id: String,
    },
    Purchase {
        item_id: String,
    },
    /// `placement_id` is minted by the caller so the engine stays deterministic.
    PlaceDecoration {
        item_id: String,
        placement_id: String,
        x: f32,
        y: f32,
    },
    RemoveDecoration {
        placement_id: String,
    },
    RecordMiniGame {
        kind: MiniGameKind,
        difficulty: Difficulty,
        score: u32,
    },
    UpdateSettings(SettingsUpdate),
    /// Catch-up only: decay and daily rollover.
    Refresh,
}

impl Action {
    /// Short label for logs and events.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_snake_case() {
        assert_eq!(Action::Feed.name(), "feed");
        assert_eq!(
            Action::RemoveDecoration {
                placement_id: "p".into()
            }
            .name(),
            "remove_decoration"
        );
        assert_eq!(Action::UpdateSettings(SettingsUpdate::Sfx(false)).name(), "update_settings");
    }
}
