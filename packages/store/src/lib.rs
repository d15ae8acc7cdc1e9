//! State management for the job manager.
//!
//! # Architecture
//!
//! - `JobStore` - Owns the job list, applies commands, notifies observers
//! - `PersistenceBridge` - Restores the list at startup and saves it on change
//! - `Clock` - Time source for job timestamps
//!
//! # Usage
//!
//! ```ignore
//! use job_store::{JobStore, PersistenceBridge};
//! use storage::Storage;
//!
//! let mut store = JobStore::new();
//! PersistenceBridge::new(Storage::open_default()).attach(&mut store);
//! store.create_job(JobDescription::new("Landing page", "Radish", 50));
//! ```

mod clock;
mod persistence;
mod store;

pub use clock::{Clock, SystemClock};
pub use persistence::{JOBS_KEY, LoadOutcome, NEXT_ID_KEY, PersistenceBridge, PersistenceError};
pub use store::{JobStore, Observer, SubscriptionId};

/// Re-export core types for convenience.
pub use job_core::{Job, JobCommand, JobDescription, JobEvent, JobId, JobState, JobStatus};
