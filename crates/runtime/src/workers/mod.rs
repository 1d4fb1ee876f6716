//! Worker tasks that back the runtime orchestration.
//!
//! The session worker executes gameplay commands, the persistence worker
//! saves committed snapshots, and the optional refresh worker keeps decay and
//! daily rollover current while the player is idle.

mod persistence;
mod refresh;
mod session;

pub use persistence::PersistenceWorker;
pub use refresh::RefreshWorker;
pub use session::{Command, SessionWorker};
