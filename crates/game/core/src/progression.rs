//! Experience and level progression.
//!
//! Cumulative XP required for a level follows the triangular curve
//! `100 × L × (L + 1) / 2`: 100, 300, 600, 1000, 1500, ... There is no level
//! cap. Level and XP are only ever updated together through [`resolve_level`].

/// XP step of the triangular curve.
pub const XP_STEP: u64 = 100;

/// Cumulative XP required to reach `level` (saturates at `u64::MAX`).
pub fn xp_required_for_level(level: u32) -> u64 {
    u64::try_from(required_exact(level)).unwrap_or(u64::MAX)
}

fn required_exact(level: u32) -> u128 {
    let level = u128::from(level);
    u128::from(XP_STEP) * level * (level + 1) / 2
}

/// Level reached from level 1 with `xp` cumulative experience.
///
/// Level 1 is the floor; level `L >= 2` is reached once
/// `xp >= xp_required_for_level(L)`.
pub fn level_for_xp(xp: u64) -> u32 {
    // Closed-form estimate, then nudged onto the exact integer boundary.
    let estimate = ((1.0 + 8.0 * xp as f64 / XP_STEP as f64).sqrt() - 1.0) / 2.0;
    let mut level = (estimate.floor() as u32).max(1);
    let xp = u128::from(xp);

    while level > 1 && required_exact(level) > xp {
        level -= 1;
    }
    while level < u32::MAX && required_exact(level + 1) <= xp {
        level += 1;
    }
    level
}

/// Applies `xp_gained` on top of `(current_level, current_xp)`.
///
/// Equivalent to incrementing the level while `xp >= xp_required_for_level(level + 1)`,
/// so one grant may cross several levels. Neither value ever decreases.
pub fn resolve_level(current_level: u32, current_xp: u64, xp_gained: u64) -> ProgressionState {
    let xp = current_xp.saturating_add(xp_gained);
    let level = current_level.max(1).max(level_for_xp(xp));
    ProgressionState { level, xp }
}

/// Persisted level and cumulative XP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionState {
    pub level: u32,
    pub xp: u64,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self { level: 1, xp: 0 }
    }
}

impl ProgressionState {
    /// Cumulative XP needed for the next level.
    pub fn xp_for_next_level(&self) -> u64 {
        xp_required_for_level(self.level.saturating_add(1))
    }

    /// Adds experience, returning the level-up if one happened.
    pub fn gain(&mut self, xp_gained: u64) -> Option<LevelUp> {
        let previous_level = self.level;
        *self = resolve_level(self.level, self.xp, xp_gained);

        (self.level > previous_level).then(|| LevelUp {
            previous_level,
            new_level: self.level,
            xp: self.xp,
            xp_for_next_level: self.xp_for_next_level(),
        })
    }
}

/// Summary of a level increase, surfaced to the level-up screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub previous_level: u32,
    pub new_level: u32,
    pub xp: u64,
    pub xp_for_next_level: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_round_numbers() {
        assert_eq!(xp_required_for_level(1), 100);
        assert_eq!(xp_required_for_level(2), 300);
        assert_eq!(xp_required_for_level(3), 600);
        assert_eq!(xp_required_for_level(4), 1000);
        assert_eq!(xp_required_for_level(5), 1500);
    }

    #[test]
    fn curve_saturates_instead_of_overflowing() {
        assert_eq!(xp_required_for_level(u32::MAX), u64::MAX);
    }

    #[test]
    fn below_level_two_threshold_stays_at_one() {
        assert_eq!(resolve_level(1, 0, 250), ProgressionState { level: 1, xp: 250 });
    }

    #[test]
    fn large_grant_crosses_multiple_levels() {
        assert_eq!(resolve_level(1, 0, 950), ProgressionState { level: 3, xp: 950 });
        assert_eq!(resolve_level(1, 0, 1000), ProgressionState { level: 4, xp: 1000 });
    }

    #[test]
    fn zero_gain_is_noop() {
        assert_eq!(resolve_level(3, 700, 0), ProgressionState { level: 3, xp: 700 });
    }

    #[test]
    fn never_decreases_level() {
        // A level ahead of its XP (e.g. restored from an old save) is kept.
        assert_eq!(resolve_level(9, 10, 5), ProgressionState { level: 9, xp: 15 });
    }

    #[test]
    fn closed_form_matches_iteration() {
        fn iterate(xp: u64) -> u32 {
            let mut level = 1;
            while xp >= xp_required_for_level(level + 1) {
                level += 1;
            }
            level
        }
        for xp in (0..20_000).step_by(7) {
            assert_eq!(level_for_xp(xp), iterate(xp), "xp = {xp}");
        }
        for level in 2..200 {
            let boundary = xp_required_for_level(level);
            assert_eq!(level_for_xp(boundary), level);
            assert_eq!(level_for_xp(boundary - 1), level - 1);
        }
    }

    #[test]
    fn huge_xp_resolves_quickly() {
        let resolved = resolve_level(1, 0, u64::MAX);
        assert_eq!(resolved.xp, u64::MAX);
        assert!(required_exact(resolved.level) <= u128::from(u64::MAX));
        assert!(required_exact(resolved.level + 1) > u128::from(u64::MAX));
    }

    #[test]
    fn gain_reports_level_up() {
        let mut progression = ProgressionState::default();
        assert_eq!(progression.gain(50), None);

        let level_up = progression.gain(260).expect("crossed 300");
        assert_eq!(
            level_up,
            LevelUp {
                previous_level: 1,
                new_level: 2,
                xp: 310,
                xp_for_next_level: 600,
            }
        );
    }
}
