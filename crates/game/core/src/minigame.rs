//! Mini-game reward rules.
//!
//! Mini-game UIs only report a raw score; everything the engine grants for it
//! is computed here.

/// The mini-games offered in the arcade.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MiniGameKind {
    BubblePop,
    TimingBar,
    CleanupRush,
    FoodDrop,
    MemoryShells,
    FishFollow,
}

impl MiniGameKind {
    pub const ALL: [MiniGameKind; 6] = [
        MiniGameKind::BubblePop,
        MiniGameKind::TimingBar,
        MiniGameKind::CleanupRush,
        MiniGameKind::FoodDrop,
        MiniGameKind::MemoryShells,
        MiniGameKind::FishFollow,
    ];
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Reward multiplier; scaled rewards are truncated towards zero.
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 1.5,
        }
    }
}

pub const MIN_COINS: u64 = 5;
pub const MAX_COINS: u64 = 50;
pub const MIN_XP: u64 = 3;
pub const MAX_XP: u64 = 25;

/// Coins and XP granted for a finished round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MiniGameReward {
    pub coins: u64,
    pub xp: u64,
}

/// Base reward for `score`: `(score / 10, score / 20)` clamped to
/// `[MIN_COINS, MAX_COINS]` and `[MIN_XP, MAX_XP]`.
pub fn rewards(score: u32) -> MiniGameReward {
    let score = u64::from(score);
    MiniGameReward {
        coins: (score / 10).clamp(MIN_COINS, MAX_COINS),
        xp: (score / 20).clamp(MIN_XP, MAX_XP),
    }
}

/// Base reward scaled by the difficulty multiplier.
pub fn scaled_rewards(score: u32, difficulty: Difficulty) -> MiniGameReward {
    let base = rewards(score);
    let scale = |value: u64| (value as f64 * difficulty.multiplier()) as u64;
    MiniGameReward {
        coins: scale(base.coins),
        xp: scale(base.xp),
    }
}

/// What the results screen shows after a round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MiniGameResult {
    pub kind: MiniGameKind,
    pub score: u32,
    pub coins_earned: u64,
    pub xp_earned: u64,
    pub is_high_score: bool,
}
