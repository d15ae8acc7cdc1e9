use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use job_store::{Clock, JobStore, LoadOutcome, PersistenceBridge};
use storage::Storage;

/// Clock that moves forward one minute per reading. Clones share the time.
#[derive(Clone)]
pub struct StepClock(Rc<Cell<DateTime<Utc>>>);

impl StepClock {
    pub fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        Self(Rc::new(Cell::new(start)))
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.0.get();
        self.0.set(now + Duration::minutes(1));
        now
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A fresh store wired to `storage`, as the application does at startup.
pub fn open_store(storage: &Storage, clock: &StepClock) -> (JobStore, LoadOutcome) {
    let mut store = JobStore::with_clock(clock.clone());
    let outcome = PersistenceBridge::new(storage.clone()).attach(&mut store);
    (store, outcome)
}
