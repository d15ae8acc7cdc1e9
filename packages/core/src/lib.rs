//! Core domain types for the job manager.
//!
//! This crate contains shared types used across all packages:
//! - Job, JobStatus and JobDescription for billable work
//! - JobCommand and the reducer over JobState
//! - Events describing applied changes

mod command;
mod events;
mod job;
mod state;

pub use command::JobCommand;
pub use events::JobEvent;
pub use job::{Job, JobDescription, JobId, JobStatus};
pub use state::{JobState, reduce};
