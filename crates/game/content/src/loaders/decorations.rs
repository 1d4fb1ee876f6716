//! Decoration catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tank_core::Decoration;

use crate::loaders::{LoadResult, read_file};

/// Decoration catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecorationCatalogFile {
    pub decorations: Vec<Decoration>,
}

/// Loader for the decoration catalog from RON files.
pub struct DecorationLoader;

impl DecorationLoader {
    /// Load the catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Decoration>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog from RON text. Duplicate ids are refused.
    pub fn parse(content: &str) -> LoadResult<Vec<Decoration>> {
        let catalog: DecorationCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse decoration catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for decoration in &catalog.decorations {
            if !seen.insert(decoration.id.as_str()) {
                anyhow::bail!("Duplicate decoration id `{}`", decoration.id);
            }
        }

        Ok(catalog.decorations)
    }
}
