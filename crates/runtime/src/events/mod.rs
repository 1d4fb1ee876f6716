//! Topic-based event bus for session events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need. Widgets and notification schedulers listen here
//! instead of being called from inside action handlers.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ProgressionEvent, StateEvent, TaskEvent};
