// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::{JobManPage, JobStoreProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},

    // Anything else goes back to the job manager
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        JobStoreProvider {
            Router::<Route> {}
        }
    }
}

/// Job manager page.
#[component]
fn Home() -> Element {
    rsx! {
        JobManPage {}
    }
}

/// Redirect unknown paths to /.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        tracing::debug!("Redirecting /{} to /", segments.join("/"));
        nav.replace(Route::Home {});
    });
    rsx! {}
}
