//! Time-based decay of the pet's needs.
//!
//! Decay is applied lazily: whenever the needs are read for an action (or on
//! load) they are brought current with the wall-clock time elapsed since
//! `last_updated_epoch_millis`.

use crate::config::DecayTuning;
use crate::state::{PetNeeds, clamp_stat};

/// Brings `needs` current as of `now_millis` using the default rates.
pub fn apply_decay(needs: &PetNeeds, now_millis: i64) -> PetNeeds {
    apply_decay_with(needs, now_millis, &DecayTuning::default())
}

/// Brings `needs` current as of `now_millis`.
///
/// - Intervals shorter than `min_interval_millis`, including negative ones
///   caused by the clock moving backwards, only move the timestamp to
///   `now_millis`.
/// - Hunger and cleanliness drop linearly.
/// - Happiness drops linearly plus a neglect penalty for each of the
///   *already decayed* hunger and cleanliness values below the threshold.
pub fn apply_decay_with(needs: &PetNeeds, now_millis: i64, tuning: &DecayTuning) -> PetNeeds {
    let elapsed_millis = now_millis.saturating_sub(needs.last_updated_epoch_millis);
    if elapsed_millis < tuning.min_interval_millis {
        return PetNeeds {
            last_updated_epoch_millis: now_millis,
            ..*needs
        };
    }

    let elapsed_hours = elapsed_millis as f64 / DecayTuning::MILLIS_PER_HOUR;
    let over = |rate: f32| (elapsed_hours * f64::from(rate)) as f32;

    let hunger = clamp_stat(needs.hunger - over(tuning.hunger_per_hour));
    let cleanliness = clamp_stat(needs.cleanliness - over(tuning.cleanliness_per_hour));

    let mut happiness_loss = over(tuning.happiness_per_hour);
    if hunger < tuning.neglect_threshold {
        happiness_loss += over(tuning.neglect_penalty_per_hour);
    }
    if cleanliness < tuning.neglect_threshold {
        happiness_loss += over(tuning.neglect_penalty_per_hour);
    }

    PetNeeds {
        hunger,
        cleanliness,
        happiness: clamp_stat(needs.happiness - happiness_loss),
        last_updated_epoch_millis: now_millis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;

    fn needs(hunger: f32, cleanliness: f32, happiness: f32) -> PetNeeds {
        PetNeeds {
            hunger,
            cleanliness,
            happiness,
            last_updated_epoch_millis: 1_000_000,
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sub_minute_only_moves_timestamp() {
        let start = needs(50.0, 100.0, 50.0);
        let decayed = apply_decay(&start, start.last_updated_epoch_millis + 30_000);
        assert_eq!(decayed.hunger, start.hunger);
        assert_eq!(decayed.cleanliness, start.cleanliness);
        assert_eq!(decayed.happiness, start.happiness);
        assert_eq!(decayed.last_updated_epoch_millis, start.last_updated_epoch_millis + 30_000);
    }

    #[test]
    fn linear_decay_over_two_hours() {
        let start = needs(80.0, 90.0, 70.0);
        let decayed = apply_decay(&start, start.last_updated_epoch_millis + 2 * HOUR);
        assert_close(decayed.hunger, 70.0);
        assert_close(decayed.cleanliness, 84.0);
        assert_close(decayed.happiness, 66.0);
    }

    #[test]
    fn penalty_uses_post_decay_values() {
        // Hunger starts at 32 (not neglected) but lands at 27 after one hour,
        // so the hunger penalty applies. Cleanliness stays above 30.
        let start = needs(32.0, 60.0, 50.0);
        let decayed = apply_decay(&start, start.last_updated_epoch_millis + HOUR);
        assert_close(decayed.hunger, 27.0);
        assert_close(decayed.cleanliness, 57.0);
        assert_close(decayed.happiness, 45.0);
    }

    #[test]
    fn both_penalties_stack() {
        let start = needs(10.0, 10.0, 90.0);
        let decayed = apply_decay(&start, start.last_updated_epoch_millis + HOUR);
        assert_close(decayed.happiness, 82.0);
    }

    #[test]
    fn huge_interval_clamps_to_zero() {
        let start = needs(100.0, 100.0, 100.0);
        let decayed = apply_decay(&start, i64::MAX);
        assert_eq!(decayed.hunger, 0.0);
        assert_eq!(decayed.cleanliness, 0.0);
        assert_eq!(decayed.happiness, 0.0);
        assert_eq!(decayed.last_updated_epoch_millis, i64::MAX);
    }

    #[test]
    fn backwards_clock_changes_no_stat() {
        let start = needs(40.0, 40.0, 40.0);
        let earlier = start.last_updated_epoch_millis - 5 * HOUR;
        let decayed = apply_decay(&start, earlier);
        assert_eq!(
            (decayed.hunger, decayed.cleanliness, decayed.happiness),
            (40.0, 40.0, 40.0)
        );
        assert_eq!(decayed.last_updated_epoch_millis, earlier);
    }

    #[test]
    fn hunger_is_monotonic_in_time() {
        let start = needs(100.0, 100.0, 100.0);
        let mut previous = start.hunger;
        for minutes in (0..=3_000).step_by(15) {
            let decayed = apply_decay(&start, start.last_updated_epoch_millis + minutes * 60_000);
            assert!(decayed.hunger <= previous);
            for value in [decayed.hunger, decayed.cleanliness, decayed.happiness] {
                assert!((0.0..=100.0).contains(&value));
            }
            previous = decayed.hunger;
        }
    }

    #[test]
    fn custom_rates_are_honoured() {
        let tuning = DecayTuning {
            hunger_per_hour: 10.0,
            ..DecayTuning::default()
        };
        let start = needs(50.0, 100.0, 50.0);
        let decayed = apply_decay_with(&start, start.last_updated_epoch_millis + HOUR, &tuning);
        assert_close(decayed.hunger, 40.0);
    }
}
