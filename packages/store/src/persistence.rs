//! Mirrors the job store into a durable storage slot.

use job_core::{Job, JobId, JobState};
use storage::{Storage, StorageError};

use crate::JobStore;

/// Slot holding the JSON array of jobs.
pub const JOBS_KEY: &str = "job-man";

/// Slot holding the id counter, kept apart from the list so removed ids are
/// never handed out again.
pub const NEXT_ID_KEY: &str = "job-man-next-id";

/// Persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What [`PersistenceBridge::load_into`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing was stored.
    Empty,
    /// Stored state could not be read and was cleared.
    Discarded,
    /// Stored jobs were restored into the store.
    Restored { count: usize },
}

/// Saves the job list on every change and restores it once at startup.
#[derive(Debug, Clone)]
pub struct PersistenceBridge {
    storage: Storage,
    jobs_key: String,
    next_id_key: String,
}

impl PersistenceBridge {
    /// Create a bridge using the default slot names.
    pub fn new(storage: Storage) -> Self {
        Self::with_keys(storage, JOBS_KEY, NEXT_ID_KEY)
    }

    /// Create a bridge using custom slot names.
    pub fn with_keys(
        storage: Storage,
        jobs_key: impl Into<String>,
        next_id_key: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            jobs_key: jobs_key.into(),
            next_id_key: next_id_key.into(),
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Write the full list and the counter.
    pub fn save(&self, state: &JobState) -> Result<(), PersistenceError> {
        self.storage.put_json(&self.jobs_key, state.jobs())?;
        self.storage.put_json(&self.next_id_key, &state.next_id())?;
        tracing::trace!("Saved {} jobs to {}", state.len(), self.jobs_key);
        Ok(())
    }

    /// Read the persisted list and counter without touching any store.
    ///
    /// `Ok(None)` when nothing is stored. A counter that fails to decode is
    /// reported as absent.
    pub fn read(&self) -> Result<Option<(Vec<Job>, Option<JobId>)>, PersistenceError> {
        let Some(jobs) = self.storage.get_json::<Vec<Job>>(&self.jobs_key)? else {
            return Ok(None);
        };

        let next_id = match self.storage.get_json::<JobId>(&self.next_id_key) {
            Ok(next_id) => next_id,
            Err(e) => {
                tracing::warn!("Ignoring unreadable id counter in {}: {}", self.next_id_key, e);
                self.delete_slot(&self.next_id_key);
                None
            }
        };

        Ok(Some((jobs, next_id)))
    }

    /// Restore persisted state into `store`.
    ///
    /// Unreadable state is cleared and the store is left empty; the failure
    /// is logged, never returned.
    pub fn load_into(&self, store: &mut JobStore) -> LoadOutcome {
        match self.read() {
            Ok(Some((jobs, next_id))) => {
                if !store.replace_all(jobs, next_id) {
                    tracing::warn!("Discarding stored jobs in {}: ids out of range", self.jobs_key);
                    self.clear();
                    return LoadOutcome::Discarded;
                }
                let count = store.jobs().len();
                tracing::info!(
                    "Restored {} jobs from {} (next id {})",
                    count,
                    self.storage.kind(),
                    store.next_id()
                );
                LoadOutcome::Restored { count }
            }
            Ok(None) => {
                self.clear();
                LoadOutcome::Empty
            }
            Err(e) => {
                tracing::warn!("Discarding stored jobs in {}: {}", self.jobs_key, e);
                self.clear();
                LoadOutcome::Discarded
            }
        }
    }

    /// Restore into `store`, then save after every change it publishes.
    pub fn attach(self, store: &mut JobStore) -> LoadOutcome {
        let outcome = self.load_into(store);
        store.subscribe(move |state, _event| {
            if let Err(e) = self.save(state) {
                tracing::warn!("Failed to save jobs: {}", e);
            }
        });
        outcome
    }

    /// Delete both slots.
    pub fn clear(&self) {
        self.delete_slot(&self.jobs_key);
        self.delete_slot(&self.next_id_key);
    }

    fn delete_slot(&self, key: &str) {
        if let Err(e) = self.storage.delete(key) {
            tracing::warn!("Failed to delete slot {}: {}", key, e);
        }
    }
}
