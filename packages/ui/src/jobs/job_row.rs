//! Job row component for displaying a single job in a table.

use dioxus::prelude::*;
use job_core::Job;

use super::action_button::ActionButton;
use super::actions::{PendingAction, RowAction};
use super::format::{hourly_format, time_format};
use super::status_badge::StatusBadge;

/// Props for JobRow component.
#[derive(Props, Clone, PartialEq)]
pub struct JobRowProps {
    /// The job to display.
    pub job: Job,
    /// Callback when an action button is clicked.
    pub on_action: EventHandler<PendingAction>,
}

/// Table row component for displaying a single job.
#[component]
pub fn JobRow(props: JobRowProps) -> Element {
    let job = &props.job;
    let id = job.id;
    let hourly = hourly_format(job.hourly);
    let created = time_format(job.created_at);
    let updated = time_format(job.updated_at);
    let actions = RowAction::available(job.status);
    let on_action = props.on_action;

    rsx! {
        tr { class: "job-row",
            td { class: "job-id", "{job.id}" }
            td { class: "job-title", "{job.title}" }
            td { class: "job-client", "{job.client}" }
            td { class: "job-hourly tabular-nums", "{hourly}" }
            td { class: "job-status",
                StatusBadge { status: job.status }
            }
            td { class: "job-created", "{created}" }
            td { class: "job-updated", "{updated}" }
            td { class: "job-actions",
                for (label, action) in actions.into_iter().map(|a| (a.label(), a)) {
                    ActionButton {
                        key: "{label}",
                        action,
                        onclick: move |_| on_action.call(PendingAction { action, id }),
                    }
                }
            }
        }
    }
}
