//! Job domain types for billable work items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a job, assigned from the store's counter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl JobId {
    /// The id that follows this one, or `None` once the id space is used up.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current status of a job in its lifecycle.
///
/// Serialized with the human-readable labels so that persisted lists stay
/// readable and stable across releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    /// Job was created and nobody has started on it.
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
    /// Work on the job is underway.
    #[serde(rename = "In progress")]
    InProgress,
    /// Job is done.
    #[serde(rename = "Finished")]
    Finished,
}

impl JobStatus {
    /// Display label for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::NotStarted => "Not started",
            JobStatus::InProgress => "In progress",
            JobStatus::Finished => "Finished",
        }
    }

    /// The status a job moves to next, if any.
    pub fn successor(&self) -> Option<JobStatus> {
        match self {
            JobStatus::NotStarted => Some(JobStatus::InProgress),
            JobStatus::InProgress => Some(JobStatus::Finished),
            JobStatus::Finished => None,
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-supplied part of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    /// Project name.
    pub title: String,
    /// Who the work is billed to.
    pub client: String,
    /// Hourly rate in whole dollars.
    pub hourly: u32,
}

impl JobDescription {
    pub fn new(title: impl Into<String>, client: impl Into<String>, hourly: u32) -> Self {
        Self {
            title: title.into(),
            client: client.into(),
            hourly,
        }
    }

    /// A description can become a job when both title and client carry text.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.client.trim().is_empty()
    }
}

/// A billable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for this job.
    pub id: JobId,
    /// Project name.
    pub title: String,
    /// Client the job is billed to.
    pub client: String,
    /// Hourly rate in whole dollars.
    pub hourly: u32,
    /// Current status.
    pub status: JobStatus,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job last changed status.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new job that has not been started.
    pub fn new(id: JobId, description: JobDescription, now: DateTime<Utc>) -> Self {
        let JobDescription {
            title,
            client,
            hourly,
        } = description;
        Self {
            id,
            title,
            client,
            hourly,
            status: JobStatus::NotStarted,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the job to `status` if that is its next lifecycle step.
    ///
    /// Returns `false` and leaves the job untouched otherwise.
    pub fn advance_to(&mut self, status: JobStatus, now: DateTime<Utc>) -> bool {
        if self.status.successor() != Some(status) {
            return false;
        }
        self.status = status;
        self.updated_at = now.max(self.updated_at);
        true
    }
}
