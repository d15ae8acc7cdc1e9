//! The job store: owner of the job list and the only place it changes.

use std::fmt;

use job_core::{Job, JobCommand, JobDescription, JobEvent, JobId, JobState};

use crate::clock::{Clock, SystemClock};

/// Callback invoked with the new state after every applied command.
pub type Observer = Box<dyn FnMut(&JobState, &JobEvent)>;

/// Handle returned by [`JobStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single source of truth for jobs and id allocation.
///
/// Every mutation goes through [`JobStore::dispatch`], which runs the pure
/// reducer and then notifies observers in subscription order. Commands that
/// change nothing notify nobody.
pub struct JobStore {
    state: JobState,
    clock: Box<dyn Clock>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl JobStore {
    /// Create an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty store reading time from `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            state: JobState::new(),
            clock: Box::new(clock),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &JobState {
        &self.state
    }

    /// The jobs in insertion order.
    pub fn jobs(&self) -> &[Job] {
        self.state.jobs()
    }

    /// Owned copy of the job list for the presentation layer.
    pub fn snapshot(&self) -> Vec<Job> {
        self.state.jobs().to_vec()
    }

    pub fn next_id(&self) -> JobId {
        self.state.next_id()
    }

    /// Apply a command. Returns whether anything changed.
    pub fn dispatch(&mut self, command: JobCommand) -> bool {
        let name = command.name();
        let now = self.clock.now();

        let Some(event) = self.state.apply(command, now) else {
            tracing::debug!("Ignored {} command: nothing to change", name);
            return false;
        };

        tracing::debug!("{}", event.description());
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state, &event);
        }
        true
    }

    pub fn create_job(&mut self, description: JobDescription) -> bool {
        self.dispatch(JobCommand::Create { description })
    }

    pub fn start_job(&mut self, id: JobId) -> bool {
        self.dispatch(JobCommand::Start { id })
    }

    pub fn finish_job(&mut self, id: JobId) -> bool {
        self.dispatch(JobCommand::Finish { id })
    }

    pub fn remove_job(&mut self, id: JobId) -> bool {
        self.dispatch(JobCommand::Remove { id })
    }

    /// Replace every job, as when restoring persisted state.
    pub fn replace_all(&mut self, jobs: Vec<Job>, next_id: Option<JobId>) -> bool {
        self.dispatch(JobCommand::ReplaceAll { jobs, next_id })
    }

    /// Register an observer for state changes.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&JobState, &JobEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JobStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
