//! Mood derived from the current needs.

use crate::state::PetNeeds;

/// Stat at or below which the pet is sad regardless of other needs.
pub const SAD_HAPPINESS_THRESHOLD: f32 = 20.0;
/// Hunger at or below which the pet is hungry.
pub const HUNGRY_THRESHOLD: f32 = 30.0;
/// Cleanliness at or below which the pet is dirty.
pub const DIRTY_THRESHOLD: f32 = 30.0;
/// Every need must be at or above this for the pet to be happy.
pub const HAPPY_THRESHOLD: f32 = 70.0;

/// Discrete mood shown to the player. Never stored.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mood {
    Happy,
    Neutral,
    Hungry,
    Dirty,
    Sad,
}

impl Mood {
    /// Classifies `needs`; the first matching rule wins:
    /// sad, hungry, dirty, happy, then neutral.
    pub fn classify(needs: &PetNeeds) -> Mood {
        let PetNeeds {
            hunger,
            cleanliness,
            happiness,
            ..
        } = *needs;

        if happiness <= SAD_HAPPINESS_THRESHOLD
            || (hunger <= HUNGRY_THRESHOLD && cleanliness <= DIRTY_THRESHOLD)
        {
            Mood::Sad
        } else if hunger <= HUNGRY_THRESHOLD {
            Mood::Hungry
        } else if cleanliness <= DIRTY_THRESHOLD {
            Mood::Dirty
        } else if hunger >= HAPPY_THRESHOLD
            && cleanliness >= HAPPY_THRESHOLD
            && happiness >= HAPPY_THRESHOLD
        {
            Mood::Happy
        } else {
            Mood::Neutral
        }
    }
}

/// Free-function form of [`Mood::classify`].
pub fn classify(needs: &PetNeeds) -> Mood {
    Mood::classify(needs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood(hunger: f32, cleanliness: f32, happiness: f32) -> Mood {
        classify(&PetNeeds::clamped(hunger, cleanliness, happiness, 0))
    }

    #[test]
    fn both_low_is_sad_even_with_fine_happiness() {
        assert_eq!(mood(20.0, 20.0, 50.0), Mood::Sad);
    }

    #[test]
    fn low_happiness_is_sad() {
        assert_eq!(mood(90.0, 90.0, 20.0), Mood::Sad);
        assert_eq!(mood(90.0, 90.0, 20.01), Mood::Neutral);
    }

    #[test]
    fn single_low_need() {
        assert_eq!(mood(30.0, 80.0, 50.0), Mood::Hungry);
        assert_eq!(mood(80.0, 30.0, 50.0), Mood::Dirty);
        assert_eq!(mood(30.01, 80.0, 50.0), Mood::Neutral);
    }

    #[test]
    fn all_high_is_happy() {
        assert_eq!(mood(80.0, 80.0, 80.0), Mood::Happy);
        assert_eq!(mood(70.0, 70.0, 70.0), Mood::Happy);
        assert_eq!(mood(69.99, 70.0, 70.0), Mood::Neutral);
    }

    #[test]
    fn middle_is_neutral() {
        assert_eq!(mood(50.0, 50.0, 50.0), Mood::Neutral);
    }

    #[test]
    fn labels_are_snake_case() {
        assert_eq!(Mood::Hungry.to_string(), "hungry");
        assert_eq!("SAD".parse::<Mood>(), Ok(Mood::Sad));
    }
}
