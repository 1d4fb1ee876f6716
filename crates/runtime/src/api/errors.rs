//! Unified error types surfaced by the runtime API.
//!
//! Only infrastructure failures appear here. Gameplay refusals are reported
//! through [`super::ActionOutcome`] instead.
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("invalid tuning config")]
    InvalidTuning(#[from] tank_core::ConfigError),
}
