//! Wall-clock access for the session.
//!
//! The core never reads time; the session worker asks a [`Clock`] and passes
//! the result down. Tests drive a [`ManualClock`].

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Local calendar date used for daily task rollover.
    fn today(&self) -> NaiveDate;
}

/// The system clock, with "today" in the machine's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
    offset: FixedOffset,
}

impl ManualClock {
    /// Starts at `millis` with UTC as the local zone.
    pub fn new(millis: i64) -> Self {
        Self::with_offset(millis, Utc.fix())
    }

    pub fn with_offset(millis: i64, offset: FixedOffset) -> Self {
        Self {
            millis: AtomicI64::new(millis),
            offset,
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        let delta = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(delta))
            })
            .ok();
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }

    fn today(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.now_millis())
            .map(|utc| utc.with_timezone(&self.offset).date_naive())
            .unwrap_or_default()
    }
}

/// `YYYY-MM-DD` strings for `today` and the day before.
pub fn calendar_days(today: NaiveDate) -> (String, String) {
    let yesterday = today.pred_opt().unwrap_or(today);
    (
        today.format("%Y-%m-%d").to_string(),
        yesterday.format("%Y-%m-%d").to_string(),
    )
}
