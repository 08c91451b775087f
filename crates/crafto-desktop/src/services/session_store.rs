//! Session store backed by the app-wide session signal.

use crafto_core::{Credentials, Session, SessionStore};
use dioxus::prelude::*;

/// Every component sees the same [`Session`]; writes re-render whatever
/// reads the signal (the nav bar, the route guards).
#[derive(Clone, Copy)]
pub struct SignalSessionStore {
    session: Signal<Session>,
}

impl SignalSessionStore {
    pub const fn new(session: Signal<Session>) -> Self {
        Self { session }
    }
}

impl SessionStore for SignalSessionStore {
    fn current(&self) -> Session {
        self.session.peek().clone()
    }

    fn set_credentials(&self, credentials: Credentials) {
        let mut session = self.session;
        session.set(Session::Authenticated(credentials));
    }

    fn clear_credentials(&self) {
        let mut session = self.session;
        session.set(Session::Anonymous);
    }
}
