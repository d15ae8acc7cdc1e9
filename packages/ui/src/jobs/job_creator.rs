//! Job creation form component.

use std::rc::Rc;

use dioxus::prelude::*;

use super::draft::JobDraft;
use super::provider::use_jobs;

/// Form component for creating a new job.
///
/// The title field takes focus on mount and again after every submit.
#[component]
pub fn JobCreator() -> Element {
    let jobs = use_jobs();
    let mut draft = use_signal(JobDraft::default);
    let mut title_input = use_signal(|| None::<Rc<MountedData>>);

    let focus_title = move || {
        if let Some(input) = title_input() {
            spawn(async move {
                if let Err(e) = input.set_focus(true).await {
                    tracing::debug!("Could not focus title input: {:?}", e);
                }
            });
        }
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let Some(description) = draft.read().to_description() else {
            return;
        };
        jobs.create_job(description);
        draft.set(JobDraft::default());
        focus_title();
    };

    let current = draft();
    let can_submit = current.is_valid();

    rsx! {
        form { class: "job-creator", onsubmit: submit,
            div { class: "form-row",
                label { class: "form-label", r#for: "job-title", "Project Name:" }
                input {
                    id: "job-title",
                    class: "form-control",
                    name: "title",
                    r#type: "text",
                    placeholder: "Job Manager",
                    autocomplete: "off",
                    value: "{current.title}",
                    oninput: move |e| draft.write().title = e.value(),
                    onmounted: move |e| {
                        title_input.set(Some(e.data()));
                        focus_title();
                    },
                }
            }

            div { class: "form-row",
                label { class: "form-label", r#for: "job-client", "Client:" }
                input {
                    id: "job-client",
                    class: "form-control",
                    name: "client",
                    r#type: "text",
                    placeholder: "Radish",
                    autocomplete: "off",
                    value: "{current.client}",
                    oninput: move |e| draft.write().client = e.value(),
                }
            }

            div { class: "form-row",
                label { class: "form-label", r#for: "job-hourly", "Hourly Rate ($):" }
                input {
                    id: "job-hourly",
                    class: "form-control form-number",
                    name: "hourly",
                    r#type: "number",
                    min: "1",
                    step: "1",
                    autocomplete: "off",
                    value: "{current.hourly}",
                    oninput: move |e| draft.write().hourly = e.value(),
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "Create"
                }
            }
        }
    }
}
