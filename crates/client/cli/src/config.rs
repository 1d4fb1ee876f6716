//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Where the CLI keeps its data and which content it loads.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Session identifier; each session has its own save and log directory.
    pub session_id: Option<String>,
    pub save_data_dir: Option<PathBuf>,
    /// RON decoration catalog replacing the built-in shop.
    pub catalog_path: Option<PathBuf>,
    /// TOML tuning overrides.
    pub tuning_path: Option<PathBuf>,
}

impl CliConfig {
    pub const DEFAULT_SESSION: &'static str = "default";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TANK_SESSION_ID` - Session identifier (default: `default`)
    /// - `TANK_SAVE_DIR` - Directory for save data (default: platform-specific)
    /// - `TANK_CATALOG` - Path to a RON decoration catalog (default: built-in)
    /// - `TANK_TUNING` - Path to a TOML tuning file (default: built-in values)
    pub fn from_env() -> Self {
        Self {
            session_id: read_env("TANK_SESSION_ID"),
            save_data_dir: read_env("TANK_SAVE_DIR"),
            catalog_path: read_env("TANK_CATALOG"),
            tuning_path: read_env("TANK_TUNING"),
        }
    }

    /// Command line values win over the environment.
    pub fn merge(mut self, overrides: CliConfig) -> Self {
        if overrides.session_id.is_some() {
            self.session_id = overrides.session_id;
        }
        if overrides.save_data_dir.is_some() {
            self.save_data_dir = overrides.save_data_dir;
        }
        if overrides.catalog_path.is_some() {
            self.catalog_path = overrides.catalog_path;
        }
        if overrides.tuning_path.is_some() {
            self.tuning_path = overrides.tuning_path;
        }
        self
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(Self::DEFAULT_SESSION)
    }

    /// Directory holding this session's save files.
    pub fn session_dir(&self) -> PathBuf {
        self.save_data_dir
            .clone()
            .unwrap_or_else(crate::dirs::data_dir)
            .join(self.session_id())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let env = CliConfig {
            session_id: Some("env".into()),
            save_data_dir: Some("/env/saves".into()),
            ..CliConfig::default()
        };
        let flags = CliConfig {
            session_id: Some("flag".into()),
            ..CliConfig::default()
        };

        let merged = env.merge(flags);
        assert_eq!(merged.session_id(), "flag");
        assert_eq!(merged.session_dir(), PathBuf::from("/env/saves/flag"));
    }

    #[test]
    fn session_defaults() {
        let config = CliConfig {
            save_data_dir: Some("/saves".into()),
            ..CliConfig::default()
        };
        assert_eq!(config.session_id(), CliConfig::DEFAULT_SESSION);
        assert_eq!(config.session_dir(), PathBuf::from("/saves/default"));
    }
}
