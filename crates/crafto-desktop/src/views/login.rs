//! Login view

use crafto_core::flows::login::{redirect_if_signed_in, submit_login, LoginModel};
use dioxus::prelude::*;

use crate::app::{follow_redirect, Route};
use crate::services::{use_flow_context, SignalCell, SignalSessionStore};
use crate::state::AppState;
use crate::ui::{UiButton, UiInput};

#[component]
pub fn Login() -> Element {
    let state = use_context::<AppState>();
    let flow = use_flow_context();
    let navigator = use_navigator();
    let mut model = use_signal(LoginModel::default);

    // Checked once on mount: a login that completes here waits out its
    // redirect delay instead of jumping straight to the feed.
    use_hook(move || {
        if let Some(redirect) = redirect_if_signed_in(&SignalSessionStore::new(state.session)) {
            navigator.replace(Route::from(redirect.to));
        }
    });

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let Some(flow) = flow.clone() else {
            tracing::error!("Login unavailable: API client was not initialized");
            return;
        };
        spawn(async move {
            match submit_login(&flow, &SignalCell::new(model)).await {
                Ok(redirect) => follow_redirect(navigator, redirect).await,
                Err(error) => tracing::debug!("Login not completed: {}", error),
            }
        });
    };

    let current = model.read().clone();
    let submit_label = if current.is_submitting() {
        "Signing in..."
    } else {
        "Sign in"
    };

    rsx! {
        section {
            class: "panel",
            h1 { "Sign in to Crafto" }

            form {
                style: "display: flex; flex-direction: column; gap: 14px;",
                onsubmit: on_submit,

                label {
                    style: "display: flex; flex-direction: column; gap: 6px; font-size: 13px;",
                    "Username"
                    UiInput {
                        r#type: "text",
                        name: "username",
                        autocomplete: "username",
                        value: "{current.username}",
                        oninput: move |event: FormEvent| model.write().username = event.value(),
                    }
                }

                label {
                    style: "display: flex; flex-direction: column; gap: 6px; font-size: 13px;",
                    "One-time password"
                    UiInput {
                        r#type: "password",
                        name: "otp",
                        autocomplete: "one-time-code",
                        value: "{current.secret}",
                        oninput: move |event: FormEvent| model.write().secret = event.value(),
                    }
                }

                UiButton {
                    r#type: "submit",
                    block: true,
                    disabled: !current.can_submit(),
                    "{submit_label}"
                }
            }
        }
    }
}
