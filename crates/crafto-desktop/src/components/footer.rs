use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "app-footer",
            "Crafto - share the words that move you"
        }
    }
}
