//! Reasons an action was refused.

use crate::state::SettingsError;

/// Why an action left the state untouched.
///
/// Rejections are ordinary gameplay outcomes, not failures: the runtime
/// reports them to observers and carries on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    #[error("not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u64, available: u64 },

    #[error("no `{item_id}` left in the inventory")]
    OutOfStock { item_id: String },

    #[error("`{item_id}` is not in the decoration catalog")]
    UnknownItem { item_id: String },

    #[error("no placed decoration with id `{placement_id}`")]
    UnknownPlacement { placement_id: String },

    #[error("a decoration with id `{placement_id}` is already placed")]
    DuplicatePlacement { placement_id: String },

    #[error("decorations are locked")]
    DecorationsLocked,

    #[error("`{task_id}` is not one of today's tasks")]
    UnknownTask { task_id: String },

    #[error("`{task_id}` was already completed today")]
    TaskAlreadyCompleted { task_id: String },

    #[error("invalid settings: {0}")]
    InvalidSettings(SettingsError),
}
