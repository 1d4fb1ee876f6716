//! Persistence worker that saves committed snapshots.
//!
//! Listens on the state stream and writes the latest snapshot after each
//! change. Saves coalesce: if several actions commit while a save is running,
//! only the newest snapshot is written next. A failed save is logged and the
//! in-memory state stays authoritative; the next change retries.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error};

use tank_core::GameState;

use crate::repository::StateRepository;

pub struct PersistenceWorker {
    state_rx: watch::Receiver<GameState>,
    repository: Arc<dyn StateRepository>,
}

impl PersistenceWorker {
    pub fn new(state_rx: watch::Receiver<GameState>, repository: Arc<dyn StateRepository>) -> Self {
        Self {
            state_rx,
            repository,
        }
    }

    /// Saves the current snapshot, then every later one until the session ends.
    pub async fn run(mut self) {
        let initial = self.state_rx.borrow_and_update().clone();
        self.save(&initial);

        // `changed` still yields a value sent just before the sender dropped,
        // so the final snapshot is written before the loop exits.
        while self.state_rx.changed().await.is_ok() {
            let snapshot = self.state_rx.borrow_and_update().clone();
            self.save(&snapshot);
        }

        debug!(target: "runtime::persistence", "State stream closed, persistence worker exiting");
    }

    fn save(&self, state: &GameState) {
        if let Err(e) = self.repository.save(state) {
            error!(
                target: "runtime::persistence",
                error = %e,
                "Failed to save game state"
            );
        }
    }
}
