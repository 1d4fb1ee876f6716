//! Content loaders for reading game data from files.
//!
//! Each loader has a `load(path)` entry point and a `parse(text)` variant for
//! content that is already in memory.

pub mod config;
pub mod decorations;

pub use config::ConfigLoader;
pub use decorations::{DecorationCatalogFile, DecorationLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
