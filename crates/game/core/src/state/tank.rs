//! Decorations placed in the tank.

/// A single placed decoration instance.
///
/// `x`/`y` are normalized tank coordinates in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedDecoration {
    /// Unique id of this instance (not the catalog id).
    pub id: String,
    /// Catalog id the instance was taken from.
    pub decoration_id: String,
    pub x: f32,
    pub y: f32,
}

impl PlacedDecoration {
    /// Creates an instance with coordinates clamped into the tank.
    pub fn new(id: impl Into<String>, decoration_id: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            decoration_id: decoration_id.into(),
            x: normalize_coordinate(x),
            y: normalize_coordinate(y),
        }
    }
}

/// Ordered list of placed decorations (draw order).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TankLayout {
    pub placed: Vec<PlacedDecoration>,
}

impl TankLayout {
    pub fn get(&self, placement_id: &str) -> Option<&PlacedDecoration> {
        self.placed.iter().find(|p| p.id == placement_id)
    }

    pub fn contains(&self, placement_id: &str) -> bool {
        self.get(placement_id).is_some()
    }

    /// Removes and returns the instance with `placement_id`.
    pub fn remove(&mut self, placement_id: &str) -> Option<PlacedDecoration> {
        let index = self.placed.iter().position(|p| p.id == placement_id)?;
        Some(self.placed.remove(index))
    }
}

/// Clamps a coordinate into `[0, 1]`. NaN falls back to the tank centre.
pub fn normalize_coordinate(value: f32) -> f32 {
    if value.is_nan() {
        0.5
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_clamped() {
        let placed = PlacedDecoration::new("p1", "plant_1", -0.4, 1.7);
        assert_eq!((placed.x, placed.y), (0.0, 1.0));

        let centred = PlacedDecoration::new("p2", "plant_1", f32::NAN, 0.25);
        assert_eq!((centred.x, centred.y), (0.5, 0.25));
    }

    #[test]
    fn remove_returns_instance() {
        let mut layout = TankLayout::default();
        layout.placed.push(PlacedDecoration::new("a", "rock_1", 0.1, 0.1));
        layout.placed.push(PlacedDecoration::new("b", "toy_1", 0.2, 0.2));

        let removed = layout.remove("a").map(|p| p.decoration_id);
        assert_eq!(removed.as_deref(), Some("rock_1"));
        assert!(!layout.contains("a"));
        assert!(layout.remove("missing").is_none());
        assert_eq!(layout.placed.len(), 1);
    }
}
