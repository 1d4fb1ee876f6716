//! Tunable constants for decay and action effects.
//!
//! Defaults reproduce the shipped balance. Content loaders may override them
//! from TOML; [`TuningConfig::validate`] must pass before a config is used.

/// Errors raised when a tuning config is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("tuning value `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("tuning value `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("minimum decay interval must not be negative, got {0} ms")]
    NegativeInterval(i64),
}

/// Complete tuning for the simulation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TuningConfig {
    pub decay: DecayTuning,
    pub actions: ActionTuning,
}

impl TuningConfig {
    /// Checks every rate and delta for finiteness and sign.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decay.validate()?;
        self.actions.validate()
    }
}

/// Per-hour decay rates and the neglect penalty applied to happiness.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecayTuning {
    pub hunger_per_hour: f32,
    pub cleanliness_per_hour: f32,
    pub happiness_per_hour: f32,
    /// Extra happiness loss per hour for each need below `neglect_threshold`.
    pub neglect_penalty_per_hour: f32,
    /// Strict upper bound: a need is neglected when `value < neglect_threshold`.
    pub neglect_threshold: f32,
    /// Intervals shorter than this only advance the timestamp.
    pub min_interval_millis: i64,
}

impl DecayTuning {
    pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

    fn validate(&self) -> Result<(), ConfigError> {
        check_rate("decay.hunger_per_hour", self.hunger_per_hour)?;
        check_rate("decay.cleanliness_per_hour", self.cleanliness_per_hour)?;
        check_rate("decay.happiness_per_hour", self.happiness_per_hour)?;
        check_rate(
            "decay.neglect_penalty_per_hour",
            self.neglect_penalty_per_hour,
        )?;
        check_rate("decay.neglect_threshold", self.neglect_threshold)?;
        if self.min_interval_millis < 0 {
            return Err(ConfigError::NegativeInterval(self.min_interval_millis));
        }
        Ok(())
    }
}

impl Default for DecayTuning {
    fn default() -> Self {
        Self {
            hunger_per_hour: 5.0,
            cleanliness_per_hour: 3.0,
            happiness_per_hour: 2.0,
            neglect_penalty_per_hour: 3.0,
            neglect_threshold: 30.0,
            min_interval_millis: 60_000,
        }
    }
}

/// Stat deltas and base XP granted by care actions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionTuning {
    pub feed_hunger: f32,
    pub feed_happiness: f32,
    /// Granted only when hunger was below the maximum before feeding.
    pub feed_base_xp: u64,
    pub clean_happiness: f32,
    /// Granted only when cleanliness was below the maximum before cleaning.
    pub clean_base_xp: u64,
}

impl ActionTuning {
    fn validate(&self) -> Result<(), ConfigError> {
        check_rate("actions.feed_hunger", self.feed_hunger)?;
        check_rate("actions.feed_happiness", self.feed_happiness)?;
        check_rate("actions.clean_happiness", self.clean_happiness)
    }
}

impl Default for ActionTuning {
    fn default() -> Self {
        Self {
            feed_hunger: 30.0,
            feed_happiness: 5.0,
            feed_base_xp: 2,
            clean_happiness: 10.0,
            clean_base_xp: 3,
        }
    }
}

fn check_rate(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TuningConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_rate() {
        let mut config = TuningConfig::default();
        config.decay.hunger_per_hour = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "decay.hunger_per_hour",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_finite_delta() {
        let mut config = TuningConfig::default();
        config.actions.feed_hunger = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_negative_interval() {
        let mut config = TuningConfig::default();
        config.decay.min_interval_millis = -5;
        assert_eq!(config.validate(), Err(ConfigError::NegativeInterval(-5)));
    }
}
