//! Session runtime for the fish tank.
//!
//! This crate wires the pure rules in `tank-core` to a clock, repositories,
//! and worker tasks. Consumers embed [`Runtime`] to host one tank session,
//! issue actions through [`SessionHandle`], and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`clock`] abstracts wall-clock time so sessions can be driven in tests
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod clock;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{ActionOutcome, Result, RuntimeError, SessionHandle};
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{Event, EventBus, ProgressionEvent, StateEvent, TaskEvent, Topic};
pub use oracle::DecorationCatalogImpl;
pub use repository::{
    FileHighScoreRepository, FileStateRepository, HighScoreRepository, InMemoryHighScoreRepository,
    InMemoryStateRepository, RepositoryError, StateRepository,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
