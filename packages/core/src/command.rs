//! Commands accepted by the job store.

use crate::{Job, JobDescription, JobId};

/// A state change requested of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobCommand {
    /// Append a new job built from the description.
    Create { description: JobDescription },

    /// Move a job from not started to in progress.
    Start { id: JobId },

    /// Move a job from in progress to finished.
    Finish { id: JobId },

    /// Drop a job from the list, whatever its status.
    Remove { id: JobId },

    /// Replace the whole list with a restored one.
    ///
    /// `next_id` is the persisted counter, if one survived.
    ReplaceAll {
        jobs: Vec<Job>,
        next_id: Option<JobId>,
    },
}

impl JobCommand {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            JobCommand::Create { .. } => "create",
            JobCommand::Start { .. } => "start",
            JobCommand::Finish { .. } => "finish",
            JobCommand::Remove { .. } => "remove",
            JobCommand::ReplaceAll { .. } => "replace_all",
        }
    }
}
