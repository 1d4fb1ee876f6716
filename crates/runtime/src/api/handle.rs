//! Cloneable façade for issuing commands to the session.
//!
//! [`SessionHandle`] hides channel plumbing and offers one async helper per
//! gameplay action. Every helper is serialized through the session worker,
//! so concurrent callers can never lose each other's updates.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use tank_core::{
    Action, DecorationCatalog, Difficulty, GameState, MiniGameKind, MiniGameResult,
    SettingsUpdate, StatusView,
};

use super::errors::{Result, RuntimeError};
use super::outcome::ActionOutcome;
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the session
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    state_rx: watch::Receiver<GameState>,
    catalog: Arc<dyn DecorationCatalog>,
}

impl SessionHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        state_rx: watch::Receiver<GameState>,
        catalog: Arc<dyn DecorationCatalog>,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            state_rx,
            catalog,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Execute any action through the session worker
    pub async fn execute(&self, action: Action) -> Result<ActionOutcome> {
        self.request(|reply| Command::Execute { action, reply }).await
    }

    pub async fn feed(&self) -> Result<ActionOutcome> {
        self.execute(Action::Feed).await
    }

    pub async fn clean(&self) -> Result<ActionOutcome> {
        self.execute(Action::Clean).await
    }

    pub async fn increase_happiness(&self, amount: f32) -> Result<ActionOutcome> {
        self.execute(Action::IncreaseHappiness { amount }).await
    }

    pub async fn add_coins(&self, amount: i64) -> Result<ActionOutcome> {
        self.execute(Action::AddCoins { amount }).await
    }

    pub async fn add_xp(&self, amount: i64) -> Result<ActionOutcome> {
        self.execute(Action::AddXp { amount }).await
    }

    pub async fn complete_task(&self, task_id: impl Into<String>) -> Result<ActionOutcome> {
        self.execute(Action::CompleteTask {
            task_id: task_id.into(),
        })
        .await
    }

    pub async fn purchase(&self, item_id: impl Into<String>) -> Result<ActionOutcome> {
        self.execute(Action::Purchase {
            item_id: item_id.into(),
        })
        .await
    }

    /// Place one owned decoration at normalized `(x, y)`.
    ///
    /// The placed instance gets a fresh UUID, readable from the outcome state.
    pub async fn place_decoration(
        &self,
        item_id: impl Into<String>,
        x: f32,
        y: f32,
    ) -> Result<ActionOutcome> {
        self.execute(Action::PlaceDecoration {
            item_id: item_id.into(),
            placement_id: uuid::Uuid::new_v4().to_string(),
            x,
            y,
        })
        .await
    }

    pub async fn remove_decoration(&self, placement_id: impl Into<String>) -> Result<ActionOutcome> {
        self.execute(Action::RemoveDecoration {
            placement_id: placement_id.into(),
        })
        .await
    }

    pub async fn update_settings(&self, update: SettingsUpdate) -> Result<ActionOutcome> {
        self.execute(Action::UpdateSettings(update)).await
    }

    /// Run decay and daily rollover without any other effect
    pub async fn refresh(&self) -> Result<ActionOutcome> {
        self.execute(Action::Refresh).await
    }

    /// Record a finished mini-game round
    pub async fn record_minigame(
        &self,
        kind: MiniGameKind,
        difficulty: Difficulty,
        score: u32,
    ) -> Result<MiniGameResult> {
        self.request(|reply| Command::RecordMiniGame {
            kind,
            difficulty,
            score,
            reply,
        })
        .await
    }

    /// Best recorded score for a mini-game
    pub async fn high_score(&self, kind: MiniGameKind) -> Result<u32> {
        self.request(|reply| Command::HighScore { kind, reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Needs decayed to now, mood and progress, without mutating the session
    pub async fn status(&self) -> Result<StatusView> {
        self.request(|reply| Command::Status { reply }).await
    }

    /// Stream of committed snapshots; the current value is the latest state.
    pub fn watch_state(&self) -> watch::Receiver<GameState> {
        self.state_rx.clone()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::State` - Accepted and rejected actions
    /// - `Topic::Progression` - Level-ups
    /// - `Topic::Tasks` - Task completions and daily rollovers
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Read-only decoration catalog used by the session
    pub fn catalog(&self) -> Arc<dyn DecorationCatalog> {
        Arc::clone(&self.catalog)
    }

    pub(crate) async fn shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
