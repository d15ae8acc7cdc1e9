//! Yes/No confirmation dialog.

use dioxus::prelude::*;

/// Props for ConfirmModal component.
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmModalProps {
    /// Text asking the user to confirm.
    pub message: String,
    /// Callback when Yes is clicked.
    pub on_confirm: EventHandler<()>,
    /// Callback when No is clicked or the backdrop is dismissed.
    pub on_cancel: EventHandler<()>,
}

/// Modal dialog shown before a row action runs.
#[component]
pub fn ConfirmModal(props: ConfirmModalProps) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| props.on_cancel.call(()),
        }
        div { class: "modal", role: "dialog",
            div { class: "modal-header",
                h3 { class: "modal-title", "Job Manager" }
            }
            div { class: "modal-body", "{props.message}" }
            div { class: "modal-footer",
                button {
                    class: "btn btn-danger",
                    onclick: move |_| props.on_confirm.call(()),
                    "Yes"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| props.on_cancel.call(()),
                    "No"
                }
            }
        }
    }
}
