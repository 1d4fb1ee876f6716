//! File-backed repositories.
//!
//! Each repository owns one JSON document under its base directory and
//! replaces it atomically (temp file + rename) on every write.

mod document;
mod high_score;
mod state;

pub use document::decode_state;
pub use high_score::FileHighScoreRepository;
pub use state::FileStateRepository;

use std::fs;
use std::path::Path;

use super::Result;

/// Writes `bytes` to `path` via a sibling temp file and an atomic rename.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
