//! Main application component and routes

use crafto_core::flows::{Redirect, Screen};
use crafto_core::{CraftoClient, Session};
use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use crate::bootstrap_config::load_client_config;
use crate::components::{Footer, NavBar};
use crate::state::AppState;
use crate::ui::APP_STYLES;
use crate::views::{CreateQuote, Login, Quotes};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Chrome)]
        #[route("/")]
        Login {},
        #[route("/quotes")]
        Quotes {},
        #[route("/create-quote")]
        CreateQuote {},
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Login => Self::Login {},
            Screen::Feed => Self::Quotes {},
            Screen::CreateQuote => Self::CreateQuote {},
        }
    }
}

/// Wait out the redirect delay, then replace the current route.
pub async fn follow_redirect(navigator: Navigator, redirect: Redirect) {
    if !redirect.after.is_zero() {
        tokio::time::sleep(redirect.after).await;
    }
    tracing::debug!("Navigating to {:?}", redirect.to);
    navigator.replace(Route::from(redirect.to));
}

/// Root application component
#[component]
pub fn App() -> Element {
    let session = use_signal(Session::default);
    let client = use_signal(|| {
        let config = load_client_config();
        tracing::info!(api = %config.api_base_url, "Using Crafto API");
        CraftoClient::new(config)
            .inspect_err(|error| tracing::error!("Failed to create API client: {}", error))
            .ok()
    });

    use_context_provider(|| AppState { session, client });

    rsx! {
        style { "{APP_STYLES}" }
        ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Brand bar and footer around every screen.
#[component]
fn Chrome() -> Element {
    rsx! {
        div {
            class: "app-shell",
            NavBar {}
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
