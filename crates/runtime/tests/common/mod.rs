#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tank_runtime::{
    InMemoryHighScoreRepository, InMemoryStateRepository, ManualClock, Runtime, RuntimeConfig,
};

/// 2024-05-10T00:00:00Z
pub const MIDNIGHT: i64 = 1_715_299_200_000;
/// 2024-05-10T10:00:00Z
pub const MORNING: i64 = MIDNIGHT + 10 * HOUR;
pub const HOUR: i64 = 3_600_000;
pub const DAY: Duration = Duration::from_secs(24 * 3600);

pub struct Session {
    pub runtime: Runtime,
    pub clock: Arc<ManualClock>,
    pub saves: Arc<InMemoryStateRepository>,
    pub high_scores: Arc<InMemoryHighScoreRepository>,
}

pub async fn start_session() -> Session {
    start_session_with(RuntimeConfig::default()).await
}

pub async fn start_session_with(config: RuntimeConfig) -> Session {
    let clock = Arc::new(ManualClock::new(MORNING));
    let saves = Arc::new(InMemoryStateRepository::new());
    let high_scores = Arc::new(InMemoryHighScoreRepository::new());

    let runtime = Runtime::builder()
        .config(config)
        .clock(clock.clone())
        .state_repository(saves.clone())
        .high_scores(high_scores.clone())
        .build()
        .await
        .expect("runtime should start");

    Session {
        runtime,
        clock,
        saves,
        high_scores,
    }
}
