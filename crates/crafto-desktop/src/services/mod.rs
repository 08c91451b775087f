//! Adapters between the core flows and Dioxus.

mod cell;
mod notifier;
mod session_store;

pub use cell::SignalCell;
pub use notifier::ToastNotifier;
pub use session_store::SignalSessionStore;

use crafto_core::flows::{require_signed_in, FlowContext};
use crafto_core::CraftoClient;
use dioxus::prelude::*;

use crate::app::follow_redirect;
use crate::state::AppState;
use notifier::use_toast_notifier;

pub type DesktopFlow = FlowContext<CraftoClient, SignalSessionStore, ToastNotifier>;

/// Flow dependencies for the current component, if the API client is available.
pub fn use_flow_context() -> Option<DesktopFlow> {
    let state = use_context::<AppState>();
    let notifier = use_toast_notifier();
    let client = (state.client)()?;
    Some(FlowContext::new(
        client,
        SignalSessionStore::new(state.session),
        notifier,
    ))
}

/// Send anonymous users to the login screen on mount.
///
/// Reads the session signal directly, so it works even without an API client.
pub fn use_session_guard() {
    let state = use_context::<AppState>();
    let navigator = use_navigator();
    use_hook(move || {
        if let Err(redirect) = require_signed_in(&SignalSessionStore::new(state.session)) {
            spawn(follow_redirect(navigator, redirect));
        }
    });
}
