//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a tank session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use tank_core::{DecorationCatalog, GameState, TuningConfig};

use crate::api::{Result, RuntimeError, SessionHandle};
use crate::clock::{Clock, SystemClock};
use crate::events::EventBus;
use crate::oracle::DecorationCatalogImpl;
use crate::repository::{
    HighScoreRepository, InMemoryHighScoreRepository, InMemoryStateRepository, StateRepository,
};
use crate::workers::{Command, PersistenceWorker, RefreshWorker, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub tuning: TuningConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Period of the idle refresh; `None` disables the refresh worker.
    pub refresh_interval: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tuning: TuningConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            refresh_interval: None,
        }
    }
}

/// Main runtime that hosts one tank session.
///
/// [`SessionHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: SessionHandle,

    session_worker: JoinHandle<()>,
    persistence_worker: JoinHandle<()>,
    refresh_worker: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Commands queued before this call still execute, and the last committed
    /// snapshot is saved before this returns.
    pub async fn shutdown(self) -> Result<()> {
        if let Some(refresh) = &self.refresh_worker {
            refresh.abort();
        }

        self.handle.shutdown().await?;
        drop(self.handle);

        self.session_worker
            .await
            .map_err(RuntimeError::WorkerJoin)?;
        self.persistence_worker
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        if let Some(refresh) = self.refresh_worker {
            match refresh.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => return Err(RuntimeError::WorkerJoin(e)),
            }
        }

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state_repository: Option<Arc<dyn StateRepository>>,
    high_scores: Option<Arc<dyn HighScoreRepository>>,
    catalog: Option<Arc<dyn DecorationCatalog>>,
    clock: Option<Arc<dyn Clock>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state_repository: None,
            high_scores: None,
            catalog: None,
            clock: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Where the save document lives (default: in memory)
    pub fn state_repository(mut self, repository: Arc<dyn StateRepository>) -> Self {
        self.state_repository = Some(repository);
        self
    }

    /// Where mini-game high scores live (default: in memory)
    pub fn high_scores(mut self, repository: Arc<dyn HighScoreRepository>) -> Self {
        self.high_scores = Some(repository);
        self
    }

    /// Decoration catalog (default: the built-in shop)
    pub fn catalog(mut self, catalog: Arc<dyn DecorationCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Time source (default: the system clock)
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the runtime
    ///
    /// Loads the saved game (or starts a new one), brings it current, and
    /// spawns the workers. A missing or unreadable save never fails the build.
    pub async fn build(self) -> Result<Runtime> {
        self.config.tuning.validate()?;

        let state_repository = self
            .state_repository
            .unwrap_or_else(|| Arc::new(InMemoryStateRepository::new()));
        let high_scores = self
            .high_scores
            .unwrap_or_else(|| Arc::new(InMemoryHighScoreRepository::new()));
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(DecorationCatalogImpl::builtin()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let now_millis = clock.now_millis();
        let initial_state = match state_repository.load(now_millis) {
            Ok(Some(state)) => {
                info!(target: "runtime::session", level = state.progression.level, "Loaded saved game");
                state
            }
            Ok(None) => {
                info!(target: "runtime::session", "No saved game, starting a new tank");
                GameState::new(now_millis)
            }
            Err(e) => {
                warn!(
                    target: "runtime::session",
                    error = %e,
                    "Saved game unreadable, starting a new tank"
                );
                GameState::new(now_millis)
            }
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (state_tx, state_rx) = watch::channel(initial_state.clone());
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let mut session_worker = SessionWorker::new(
            initial_state,
            self.config.tuning,
            Arc::clone(&catalog),
            clock,
            high_scores,
            command_rx,
            event_bus.clone(),
            state_tx,
        );
        session_worker.bootstrap();

        let handle = SessionHandle::new(command_tx, event_bus, state_rx.clone(), catalog);

        let persistence = PersistenceWorker::new(state_rx, state_repository);
        let persistence_worker = tokio::spawn(persistence.run());
        let session_worker = tokio::spawn(session_worker.run());

        let refresh_worker = self.config.refresh_interval.map(|period| {
            let refresh = RefreshWorker::new(handle.clone(), period);
            tokio::spawn(refresh.run())
        });

        Ok(Runtime {
            handle,
            session_worker,
            persistence_worker,
            refresh_worker,
        })
    }
}
