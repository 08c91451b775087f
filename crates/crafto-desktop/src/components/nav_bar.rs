//! Navigation bar with brand and sign-out

use crafto_core::flows::login::sign_out;
use dioxus::prelude::*;

use crate::app::Route;
use crate::services::SignalSessionStore;
use crate::state::AppState;
use crate::ui::{ButtonVariant, UiButton};

#[component]
pub fn NavBar() -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();
    let username = state.username();

    let on_sign_out = move |_| {
        let redirect = sign_out(&SignalSessionStore::new(state.session));
        tracing::info!("Signed out");
        navigator.replace(Route::from(redirect.to));
    };

    rsx! {
        header {
            class: "nav-bar",
            span { class: "nav-brand", "Crafto" }

            if let Some(username) = username {
                div {
                    class: "nav-user",
                    span { "@{username}" }
                    UiButton {
                        variant: ButtonVariant::Ghost,
                        onclick: on_sign_out,
                        "Sign out"
                    }
                }
            }
        }
    }
}
