use dioxus::prelude::*;

/// Full-window spinner that blocks input while a request is running.
#[component]
pub fn LoadingOverlay() -> Element {
    rsx! {
        div {
            class: "loading-overlay",
            role: "status",
            "aria-live": "polite",
            div { class: "spinner" }
        }
    }
}
