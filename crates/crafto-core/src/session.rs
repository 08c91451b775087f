//! Session store.
//!
//! The store is injected into every flow instead of living in a global. It
//! exposes exactly two mutations, each replacing the whole [`Session`] record.

use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{Credentials, Session};

pub trait SessionStore {
    /// Snapshot of the current session.
    fn current(&self) -> Session;
    /// Overwrite token and username together.
    fn set_credentials(&self, credentials: Credentials);
    /// Reset to anonymous.
    fn clear_credentials(&self);

    fn token(&self) -> Option<String> {
        self.current().token().map(ToString::to_string)
    }
}

/// Process-wide in-memory store. Clones share the same session.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<RwLock<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn current(&self) -> Session {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_credentials(&self, credentials: Credentials) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) =
            Session::Authenticated(credentials);
    }

    fn clear_credentials(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Session::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_then_clear_round_trips_through_anonymous() {
        let store = MemorySessionStore::new();
        assert_eq!(store.current(), Session::Anonymous);

        store.set_credentials(Credentials::new("t-1", "alice"));
        assert_eq!(store.token().as_deref(), Some("t-1"));
        assert_eq!(store.current().username(), Some("alice"));

        store.clear_credentials();
        assert_eq!(store.current(), Session::Anonymous);
    }

    #[test]
    fn fresh_login_supersedes_previous_session() {
        let store = MemorySessionStore::new();
        store.set_credentials(Credentials::new("t-1", "alice"));
        store.set_credentials(Credentials::new("t-2", "bob"));
        assert_eq!(
            store.current(),
            Session::Authenticated(Credentials::new("t-2", "bob"))
        );
    }

    #[test]
    fn clones_share_state() {
        let store = MemorySessionStore::new();
        let view = store.clone();
        store.set_credentials(Credentials::new("t", "carol"));
        assert!(view.current().is_authenticated());
    }
}
