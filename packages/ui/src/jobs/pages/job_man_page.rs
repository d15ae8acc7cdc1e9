//! Job manager page - the creation form above the job table.

use dioxus::prelude::*;

use crate::jobs::{JobCreator, JobList};

const JOBS_CSS: Asset = asset!("/assets/styling/jobs.css");

/// Job manager page component.
#[component]
pub fn JobManPage() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: JOBS_CSS }
        div { class: "page-container job-man",
            h1 { class: "page-title", "Job Manager" }
            JobCreator {}
            JobList {}
        }
    }
}
