//! File-based HighScoreRepository implementation.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tank_core::MiniGameKind;

use super::write_atomic;
use crate::repository::{HighScoreRepository, RepositoryError, Result};

/// Stores `{ "<kind>": score }` in `{base_dir}/high_scores.json`.
pub struct FileHighScoreRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process.
    write_lock: Mutex<()>,
}

impl FileHighScoreRepository {
    pub const FILE_NAME: &'static str = "high_scores.json";

    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
            write_lock: Mutex::new(()),
        })
    }

    fn read_all(&self) -> Result<BTreeMap<String, u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&text) {
            Ok(scores) => Ok(scores),
            Err(e) => {
                tracing::warn!(
                    target: "runtime::persistence",
                    path = %self.path.display(),
                    error = %e,
                    "High score file unreadable, starting from zero"
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl HighScoreRepository for FileHighScoreRepository {
    fn high_score(&self, kind: MiniGameKind) -> Result<u32> {
        Ok(self.read_all()?.get(kind.as_ref()).copied().unwrap_or(0))
    }

    fn record_if_greater(&self, kind: MiniGameKind, score: u32) -> Result<bool> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut scores = self.read_all()?;
        let best = scores.entry(kind.to_string()).or_insert(0);
        if score <= *best {
            return Ok(false);
        }
        *best = score;

        let bytes = serde_json::to_vec_pretty(&scores)?;
        write_atomic(&self.path, &bytes)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let repo = FileHighScoreRepository::new(dir.path()).expect("repo");
            assert!(repo.record_if_greater(MiniGameKind::TimingBar, 120).expect("record"));
            assert!(!repo.record_if_greater(MiniGameKind::TimingBar, 80).expect("record"));
        }

        let repo = FileHighScoreRepository::new(dir.path()).expect("repo");
        assert_eq!(repo.high_score(MiniGameKind::TimingBar).expect("read"), 120);
        assert_eq!(repo.high_score(MiniGameKind::FishFollow).expect("read"), 0);
    }
}
