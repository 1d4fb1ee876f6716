//! The three decaying needs of the pet.

/// Lower bound of every need.
pub const STAT_MIN: f32 = 0.0;
/// Upper bound of every need.
pub const STAT_MAX: f32 = 100.0;

/// Hunger, cleanliness and happiness plus the time they were last brought current.
///
/// Every value stays within `[STAT_MIN, STAT_MAX]`. Only the decay calculator
/// and the engine's action effects write to this struct.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetNeeds {
    pub hunger: f32,
    pub cleanliness: f32,
    pub happiness: f32,
    pub last_updated_epoch_millis: i64,
}

impl PetNeeds {
    pub const DEFAULT_HUNGER: f32 = 50.0;
    pub const DEFAULT_CLEANLINESS: f32 = 100.0;
    pub const DEFAULT_HAPPINESS: f32 = 50.0;

    /// First-run needs, stamped at `now_millis`.
    pub const fn new(now_millis: i64) -> Self {
        Self {
            hunger: Self::DEFAULT_HUNGER,
            cleanliness: Self::DEFAULT_CLEANLINESS,
            happiness: Self::DEFAULT_HAPPINESS,
            last_updated_epoch_millis: now_millis,
        }
    }

    /// Builds needs from raw values, clamping each into range.
    pub fn clamped(hunger: f32, cleanliness: f32, happiness: f32, at_millis: i64) -> Self {
        Self {
            hunger: clamp_stat(hunger),
            cleanliness: clamp_stat(cleanliness),
            happiness: clamp_stat(happiness),
            last_updated_epoch_millis: at_millis,
        }
    }
}

/// Clamps a stat into `[STAT_MIN, STAT_MAX]`. NaN collapses to `STAT_MIN`.
pub fn clamp_stat(value: f32) -> f32 {
    if value.is_nan() {
        STAT_MIN
    } else {
        value.clamp(STAT_MIN, STAT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_defaults() {
        let needs = PetNeeds::new(42);
        assert_eq!(needs.hunger, 50.0);
        assert_eq!(needs.cleanliness, 100.0);
        assert_eq!(needs.happiness, 50.0);
        assert_eq!(needs.last_updated_epoch_millis, 42);
    }

    #[test]
    fn clamp_handles_out_of_range_and_nan() {
        assert_eq!(clamp_stat(-3.0), 0.0);
        assert_eq!(clamp_stat(250.0), 100.0);
        assert_eq!(clamp_stat(f32::INFINITY), 100.0);
        assert_eq!(clamp_stat(f32::NAN), 0.0);
        assert_eq!(clamp_stat(64.5), 64.5);
    }
}
