//! Platform-specific directory utilities
//!
//! Follows platform conventions for cache and data directories.

use std::path::PathBuf;

const APP_NAME: &str = "pixel-fish-tank";

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/pixel-fish-tank/logs`
/// - Linux: `~/.cache/pixel-fish-tank/logs` (or `$XDG_CACHE_HOME/...`)
/// - Windows: `%LOCALAPPDATA%\pixel-fish-tank\logs`
/// - Fallback: `/tmp/pixel-fish-tank/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME))
        .join("logs")
}

/// Get the platform-specific data directory
///
/// - macOS: `~/Library/Application Support/pixel-fish-tank`
/// - Linux: `~/.local/share/pixel-fish-tank` (or `$XDG_DATA_HOME/...`)
/// - Windows: `%APPDATA%\pixel-fish-tank`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}
