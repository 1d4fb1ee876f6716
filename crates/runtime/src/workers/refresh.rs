//! Periodic refresh that keeps decay and daily rollover current while idle.

use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use crate::api::SessionHandle;

pub struct RefreshWorker {
    handle: SessionHandle,
    period: Duration,
}

impl RefreshWorker {
    pub fn new(handle: SessionHandle, period: Duration) -> Self {
        Self { handle, period }
    }

    pub async fn run(self) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; startup already caught up.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = self.handle.refresh().await {
                debug!(target: "runtime::session", error = %e, "Refresh worker stopping");
                break;
            }
        }
    }
}
