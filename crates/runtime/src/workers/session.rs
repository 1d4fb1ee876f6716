//! Session worker that owns the authoritative [`tank_core::GameState`].
//!
//! Receives commands from [`SessionHandle`](crate::SessionHandle), executes
//! actions via [`tank_core::GameEngine`], publishes events to the EventBus and
//! pushes every committed snapshot to the state stream.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info};

use tank_core::{
    Action, ActionContext, ActionReport, DecorationCatalog, Difficulty, GameEngine, GameState,
    MiniGameKind, MiniGameResult, StatusView, TuningConfig,
};

use crate::api::ActionOutcome;
use crate::clock::{Clock, calendar_days};
use crate::events::{Event, EventBus, ProgressionEvent, StateEvent, TaskEvent};
use crate::repository::{HighScoreRepository, Result as RepositoryResult};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Execute a gameplay action.
    Execute {
        action: Action,
        reply: oneshot::Sender<ActionOutcome>,
    },
    /// Record a mini-game round: high score, rewards and task in one step.
    RecordMiniGame {
        kind: MiniGameKind,
        difficulty: Difficulty,
        score: u32,
        reply: oneshot::Sender<MiniGameResult>,
    },
    /// Read the best score for a mini-game.
    HighScore {
        kind: MiniGameKind,
        reply: oneshot::Sender<RepositoryResult<u32>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Derive the status view at the current time (read-only).
    Status { reply: oneshot::Sender<StatusView> },
    /// Stop the worker after the commands already queued.
    Shutdown,
}

/// Background task that processes gameplay commands.
pub struct SessionWorker {
    state: GameState,
    tuning: TuningConfig,
    catalog: Arc<dyn DecorationCatalog>,
    clock: Arc<dyn Clock>,
    high_scores: Arc<dyn HighScoreRepository>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    state_tx: watch::Sender<GameState>,
}

impl SessionWorker {
    /// Creates a new session worker.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: GameState,
        tuning: TuningConfig,
        catalog: Arc<dyn DecorationCatalog>,
        clock: Arc<dyn Clock>,
        high_scores: Arc<dyn HighScoreRepository>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        state_tx: watch::Sender<GameState>,
    ) -> Self {
        Self {
            state,
            tuning,
            catalog,
            clock,
            high_scores,
            command_rx,
            event_bus,
            state_tx,
        }
    }

    /// Brings the loaded state current before any command is served.
    ///
    /// Runs once at startup; the corrected snapshot goes straight to the
    /// state stream so the persistence worker saves it immediately.
    pub fn bootstrap(&mut self) {
        let now_millis = self.clock.now_millis();
        let (today, yesterday) = calendar_days(self.clock.today());
        let ctx = ActionContext {
            now_millis,
            today: &today,
            yesterday: &yesterday,
            tuning: &self.tuning,
            catalog: self.catalog.as_ref(),
        };

        if let Some(reset) = GameEngine::new(&mut self.state).catch_up(&ctx) {
            info!(
                target: "runtime::session",
                date = %reset.date,
                current_streak = reset.current_streak,
                longest_streak = reset.longest_streak,
                "Daily tasks rolled over on load"
            );
        }
        self.state_tx.send_replace(self.state.clone());
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if matches!(cmd, Command::Shutdown) {
                debug!(target: "runtime::session", "Session worker shutting down");
                break;
            }
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { action, reply } => {
                let outcome = self.execute(action);
                if reply.send(outcome).is_err() {
                    debug!("Execute reply channel closed (caller dropped)");
                }
            }
            Command::RecordMiniGame {
                kind,
                difficulty,
                score,
                reply,
            } => {
                let result = self.record_minigame(kind, difficulty, score);
                if reply.send(result).is_err() {
                    debug!("RecordMiniGame reply channel closed (caller dropped)");
                }
            }
            Command::HighScore { kind, reply } => {
                if reply.send(self.high_scores.high_score(kind)).is_err() {
                    debug!("HighScore reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Status { reply } => {
                let view =
                    StatusView::derive(&self.state, self.clock.now_millis(), &self.tuning.decay);
                if reply.send(view).is_err() {
                    debug!("Status reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => {}
        }
    }

    /// Executes one action as a single read-modify-write of the state.
    ///
    /// This is the ONLY method that calls `GameEngine::execute()`, so every
    /// accepted action publishes its events and reaches the state stream.
    fn execute(&mut self, action: Action) -> ActionOutcome {
        let now_millis = self.clock.now_millis();
        let (today, yesterday) = calendar_days(self.clock.today());
        let ctx = ActionContext {
            now_millis,
            today: &today,
            yesterday: &yesterday,
            tuning: &self.tuning,
            catalog: self.catalog.as_ref(),
        };

        match GameEngine::new(&mut self.state).execute(&action, &ctx) {
            Ok(report) => {
                self.publish_report(&action, &report);
                self.state_tx.send_replace(self.state.clone());
                self.event_bus.publish(Event::State(StateEvent::Changed {
                    action,
                    state: Box::new(self.state.clone()),
                }));
                ActionOutcome::accepted(self.state.clone(), report)
            }
            Err(rejection) => {
                debug!(
                    target: "runtime::session",
                    action = action.name(),
                    reason = %rejection,
                    "Action rejected"
                );
                self.event_bus.publish(Event::State(StateEvent::Rejected {
                    action,
                    reason: rejection.clone(),
                }));
                ActionOutcome::rejected(self.state.clone(), rejection)
            }
        }
    }

    fn publish_report(&self, action: &Action, report: &ActionReport) {
        if let Some(reset) = &report.daily_reset {
            info!(
                target: "runtime::session",
                date = %reset.date,
                current_streak = reset.current_streak,
                longest_streak = reset.longest_streak,
                "Daily tasks rolled over"
            );
            self.event_bus
                .publish(Event::Tasks(TaskEvent::from(reset.clone())));
        }

        if let Some(reward) = &report.task_reward {
            debug!(
                target: "runtime::session",
                action = action.name(),
                task = %reward.task_id,
                coins = reward.coins,
                xp = reward.xp,
                "Daily task completed"
            );
            self.event_bus
                .publish(Event::Tasks(TaskEvent::from(reward.clone())));
        }

        if let Some(level_up) = report.level_up {
            info!(
                target: "runtime::session",
                previous_level = level_up.previous_level,
                new_level = level_up.new_level,
                xp = level_up.xp,
                "Level up"
            );
            self.event_bus
                .publish(Event::Progression(ProgressionEvent::from(level_up)));
        }
    }

    fn record_minigame(
        &mut self,
        kind: MiniGameKind,
        difficulty: Difficulty,
        score: u32,
    ) -> MiniGameResult {
        let is_high_score = match self.high_scores.record_if_greater(kind, score) {
            Ok(is_high_score) => is_high_score,
            Err(e) => {
                error!(
                    target: "runtime::persistence",
                    game = %kind,
                    error = %e,
                    "Failed to record high score"
                );
                false
            }
        };

        let outcome = self.execute(Action::RecordMiniGame {
            kind,
            difficulty,
            score,
        });
        let reward = outcome
            .report
            .and_then(|report| report.minigame_reward)
            .unwrap_or_default();

        MiniGameResult {
            kind,
            score,
            coins_earned: reward.coins,
            xp_earned: reward.xp,
            is_high_score,
        }
    }
}
