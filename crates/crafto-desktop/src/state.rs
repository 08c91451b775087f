//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use crafto_core::{CraftoClient, Session};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The single in-memory session; restarting the app logs out.
    pub session: Signal<Session>,
    /// Quote API client, `None` if it could not be constructed.
    pub client: Signal<Option<CraftoClient>>,
}

impl AppState {
    pub fn username(&self) -> Option<String> {
        self.session.read().username().map(ToString::to_string)
    }
}
