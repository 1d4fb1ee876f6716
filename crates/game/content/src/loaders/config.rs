//! Simulation tuning loader.

use std::path::Path;

use tank_core::TuningConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`TuningConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate tuning from a TOML file.
    pub fn load(path: &Path) -> LoadResult<TuningConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate tuning from TOML text. Missing keys keep defaults.
    pub fn parse(content: &str) -> LoadResult<TuningConfig> {
        let config: TuningConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tuning TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid tuning: {}", e))?;

        Ok(config)
    }
}
