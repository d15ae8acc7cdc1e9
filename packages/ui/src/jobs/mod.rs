//! Job manager components: creation form, sortable listing, row actions.

mod action_button;
mod actions;
mod confirm_modal;
mod draft;
mod format;
mod job_creator;
mod job_list;
mod job_row;
mod provider;
mod sort;
mod status_badge;

pub mod pages;

pub use action_button::ActionButton;
pub use actions::{PendingAction, RowAction};
pub use confirm_modal::ConfirmModal;
pub use draft::{DEFAULT_HOURLY, JobDraft};
pub use format::{hourly_format, status_class, time_format, time_format_in};
pub use job_creator::JobCreator;
pub use job_list::JobList;
pub use job_row::JobRow;
pub use provider::{JobStoreProvider, JobsContext, use_jobs};
pub use sort::{SortColumn, SortOrder, SortState};
pub use status_badge::StatusBadge;
