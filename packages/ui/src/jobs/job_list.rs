//! Sortable job table with confirmed row actions.

use dioxus::prelude::*;

use super::JobRow;
use super::actions::PendingAction;
use super::confirm_modal::ConfirmModal;
use super::provider::use_jobs;
use super::sort::{SortColumn, SortState};

/// Data columns plus the actions column.
const COLUMN_COUNT: usize = SortColumn::ALL.len() + 1;

/// Table listing every job in the store.
#[component]
pub fn JobList() -> Element {
    let jobs = use_jobs();
    let mut sort = use_signal(SortState::default);
    let mut pending = use_signal(|| None::<PendingAction>);

    let state = sort();
    let rows = state.sorted(&jobs.jobs());

    let on_confirm = move |_: ()| {
        let confirmed = pending();
        pending.set(None);
        if let Some(action) = confirmed {
            jobs.perform(action);
        }
    };

    rsx! {
        div { class: "job-list",
            div { class: "table-container",
                table { class: "data-table job-table",
                    thead {
                        tr {
                            for column in SortColumn::ALL {
                                {
                                    let label = column.label();
                                    let active = state.column == column;
                                    let class = if active { "sortable active" } else { "sortable" };
                                    let arrow = if active { state.order.arrow() } else { "" };
                                    let direction = if active { state.order.as_str() } else { "none" };

                                    rsx! {
                                        th {
                                            key: "{label}",
                                            class: "{class}",
                                            "data-sort": "{direction}",
                                            onclick: move |_| sort.set(sort().toggle(column)),
                                            {label}
                                            span { class: "sort-arrow", "{arrow}" }
                                        }
                                    }
                                }
                            }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { class: "text-center empty-row", colspan: "{COLUMN_COUNT}",
                                    "No items to display"
                                }
                            }
                        } else {
                            for job in rows {
                                JobRow {
                                    key: "{job.id}",
                                    job: job.clone(),
                                    on_action: move |action| pending.set(Some(action)),
                                }
                            }
                        }
                    }
                }
            }

            if let Some(action) = pending() {
                ConfirmModal {
                    message: action.action.confirm_text().to_string(),
                    on_confirm: on_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}
