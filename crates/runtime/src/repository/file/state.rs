//! File-based StateRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tank_core::GameState;

use super::{decode_state, write_atomic};
use crate::repository::{Result, StateRepository};

/// Stores the save as pretty-printed JSON in `{base_dir}/state.json`.
pub struct FileStateRepository {
    path: PathBuf,
}

impl FileStateRepository {
    pub const FILE_NAME: &'static str = "state.json";

    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateRepository for FileStateRepository {
    fn load(&self, now_millis: i64) -> Result<Option<GameState>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let state = decode_state(&text, now_millis);
        tracing::debug!(
            target: "runtime::persistence",
            path = %self.path.display(),
            "Loaded saved game"
        );
        Ok(Some(state))
    }

    fn save(&self, state: &GameState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(state)?;
        write_atomic(&self.path, &bytes)?;

        tracing::debug!(
            target: "runtime::persistence",
            path = %self.path.display(),
            "Saved game"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = FileStateRepository::new(dir.path()).expect("repo");
        assert!(repo.load(0).expect("load").is_none());
    }

    #[test]
    fn save_then_load_restores_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = FileStateRepository::new(dir.path().join("nested")).expect("repo");

        let mut state = GameState::new(1_000);
        state.economy.coins = 42;
        state.economy.inventory.insert("rock_1".into(), 2);
        state.settings.notifications_enabled = true;
        repo.save(&state).expect("save");

        assert_eq!(repo.load(9_999).expect("load"), Some(state));
        assert!(!repo.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn garbage_file_loads_as_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = FileStateRepository::new(dir.path()).expect("repo");
        fs::write(repo.path(), "not json at all").expect("write");

        assert_eq!(repo.load(77).expect("load"), Some(GameState::new(77)));
    }
}
