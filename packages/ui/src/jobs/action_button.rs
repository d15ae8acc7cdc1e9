use dioxus::prelude::*;

use super::actions::RowAction;

/// Icon button for a row action.
#[component]
pub fn ActionButton(action: RowAction, onclick: EventHandler<()>) -> Element {
    let class = action.class();
    let label = action.label();
    let icon = action.icon();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |e| {
                e.stop_propagation();
                onclick.call(());
            },
            {icon}
        }
    }
}
