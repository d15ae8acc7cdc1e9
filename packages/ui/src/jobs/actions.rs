//! Per-row actions and their confirmation texts.

use job_core::{JobId, JobStatus};

/// Something a user can do to a listed job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Start,
    Finish,
    Remove,
}

impl RowAction {
    /// Actions offered for a job in `status`, in display order.
    pub fn available(status: JobStatus) -> Vec<RowAction> {
        match status {
            JobStatus::NotStarted => vec![RowAction::Start, RowAction::Remove],
            JobStatus::InProgress => vec![RowAction::Finish, RowAction::Remove],
            JobStatus::Finished => vec![RowAction::Remove],
        }
    }

    /// Message shown in the confirmation modal.
    pub fn confirm_text(&self) -> &'static str {
        match self {
            RowAction::Start => "You're starting this job!",
            RowAction::Finish => "You're finishing this job!",
            RowAction::Remove => "You're removing this job!",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Start => "Start",
            RowAction::Finish => "Finish",
            RowAction::Remove => "Remove",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::Start => "▶",
            RowAction::Finish => "■",
            RowAction::Remove => "✕",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            RowAction::Start => "btn-action btn-start",
            RowAction::Finish => "btn-action btn-finish",
            RowAction::Remove => "btn-action btn-remove",
        }
    }
}

/// An action waiting for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction {
    pub action: RowAction,
    pub id: JobId,
}
