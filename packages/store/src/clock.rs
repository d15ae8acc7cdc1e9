//! Time source for job timestamps.

use chrono::{DateTime, Utc};

/// Provides the current time to the store.
///
/// Swapped out in tests for deterministic timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
