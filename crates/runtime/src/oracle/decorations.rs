//! [`tank_core::DecorationCatalog`] backed by an in-memory map.
use std::collections::HashMap;

use tank_core::{Decoration, DecorationCatalog};

/// DecorationCatalog implementation with static definitions
pub struct DecorationCatalogImpl {
    definitions: HashMap<String, Decoration>,
    /// Ids in display order.
    order: Vec<String>,
}

impl DecorationCatalogImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The catalog shipped with the game.
    pub fn builtin() -> Self {
        Self::from_definitions(tank_content::decorations())
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = Decoration>) -> Self {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.add_definition(definition);
        }
        catalog
    }

    /// Add a decoration, replacing any previous one with the same id
    pub fn add_definition(&mut self, def: Decoration) {
        if !self.definitions.contains_key(&def.id) {
            self.order.push(def.id.clone());
        }
        self.definitions.insert(def.id.clone(), def);
    }
}

impl Default for DecorationCatalogImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl DecorationCatalog for DecorationCatalogImpl {
    fn lookup(&self, id: &str) -> Option<Decoration> {
        self.definitions.get(id).cloned()
    }

    fn all(&self) -> Vec<Decoration> {
        self.order
            .iter()
            .filter_map(|id| self.definitions.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tank_core::DecorationKind;

    #[test]
    fn builtin_catalog_keeps_display_order() {
        let catalog = DecorationCatalogImpl::builtin();
        let ids: Vec<_> = catalog.all().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, ["plant_1", "rock_1", "toy_1"]);
        assert_eq!(catalog.lookup("toy_1").map(|d| d.price), Some(75));
        assert!(catalog.lookup("castle").is_none());
    }

    #[test]
    fn redefinition_replaces_in_place() {
        let mut catalog = DecorationCatalogImpl::builtin();
        catalog.add_definition(Decoration::new(
            "plant_1",
            "Kelp",
            "decoration_kelp",
            10,
            DecorationKind::Plant,
        ));
        let all = catalog.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Kelp");
    }
}
