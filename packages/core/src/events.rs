//! Change notifications published after a command is applied.

use chrono::{DateTime, Utc};

use crate::{Job, JobId};

/// What a successfully applied command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobEvent {
    /// A new job was appended.
    Created { job: Job },
    /// A job moved to in progress.
    Started { id: JobId, at: DateTime<Utc> },
    /// A job moved to finished.
    Finished { id: JobId, at: DateTime<Utc> },
    /// A job was removed.
    Removed { id: JobId },
    /// The list was replaced from persisted state.
    Restored { count: usize, next_id: JobId },
}

impl JobEvent {
    /// Get the job ID associated with this event, if any.
    pub fn job_id(&self) -> Option<JobId> {
        match self {
            JobEvent::Created { job } => Some(job.id),
            JobEvent::Started { id, .. } => Some(*id),
            JobEvent::Finished { id, .. } => Some(*id),
            JobEvent::Removed { id } => Some(*id),
            JobEvent::Restored { .. } => None,
        }
    }

    /// Get a short description of this event for logging.
    pub fn description(&self) -> String {
        match self {
            JobEvent::Created { job } => {
                format!("Job {} '{}' created for {}", job.id, job.title, job.client)
            }
            JobEvent::Started { id, .. } => format!("Job {} started", id),
            JobEvent::Finished { id, .. } => format!("Job {} finished", id),
            JobEvent::Removed { id } => format!("Job {} removed", id),
            JobEvent::Restored { count, next_id } => {
                format!("Restored {} jobs, next id {}", count, next_id)
            }
        }
    }
}
