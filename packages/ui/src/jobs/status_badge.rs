//! Status badge component.

use dioxus::prelude::*;
use job_core::JobStatus;

use super::format::status_class;

/// Badge for displaying job status.
#[component]
pub fn StatusBadge(status: JobStatus) -> Element {
    let text_class = status_class(status);
    let text = status.as_str();

    rsx! {
        span {
            class: "status-badge {text_class}",
            {text}
        }
    }
}
