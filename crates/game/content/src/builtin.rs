//! Content shipped with the game.

use tank_core::{Decoration, DecorationKind};

/// The default shop catalog, in display order.
pub fn decorations() -> Vec<Decoration> {
    vec![
        Decoration::new(
            "plant_1",
            "Aquatic Plant",
            "decoration_plant",
            50,
            DecorationKind::Plant,
        ),
        Decoration::new(
            "rock_1",
            "Decorative Rock",
            "decoration_rock",
            30,
            DecorationKind::Rock,
        ),
        Decoration::new("toy_1", "Fish Toy", "decoration_toy", 75, DecorationKind::Toy),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let catalog = decorations();
        let mut ids: Vec<_> = catalog.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
