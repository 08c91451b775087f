//! Headless screen flows.
//!
//! Each screen is a small state machine: a model type holding what the
//! screen renders, a pure `transition_*` function for its phases, and async
//! operations that perform one remote round trip and move the model along.
//! Models live in a [`ViewCell`] owned by the caller (a `RefCell` in tests
//! and the CLI, a Dioxus signal in the desktop app).

pub mod create_quote;
pub mod feed;
pub mod login;

#[cfg(test)]
pub(crate) mod fakes;

use std::cell::RefCell;
use std::time::Duration;

use crate::models::Credentials;
use crate::session::SessionStore;

/// Delay between a successful login and the switch to the feed.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(2);
/// Delay between a created quote and the switch back to the feed.
pub const CREATE_REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// The three screens of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Feed,
    CreateQuote,
}

/// Navigation requested by a flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: Screen,
    pub after: Duration,
}

impl Redirect {
    pub const fn now(to: Screen) -> Self {
        Self {
            to,
            after: Duration::ZERO,
        }
    }

    pub const fn after(to: Screen, delay: Duration) -> Self {
        Self { to, after: delay }
    }
}

/// Dependencies injected into every flow operation.
#[derive(Debug, Clone)]
pub struct FlowContext<A, S, N> {
    pub api: A,
    pub session: S,
    pub notifier: N,
}

impl<A, S: SessionStore, N> FlowContext<A, S, N> {
    pub const fn new(api: A, session: S, notifier: N) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Guard for screens that need a signed-in user.
    pub fn require_session(&self) -> Result<Credentials, Redirect> {
        require_signed_in(&self.session)
    }
}

/// Anonymous sessions get an immediate redirect to the login screen.
///
/// Only needs the session, so views can guard before an API client exists.
pub fn require_signed_in(session: &impl SessionStore) -> Result<Credentials, Redirect> {
    session
        .current()
        .credentials()
        .cloned()
        .ok_or(Redirect::now(Screen::Login))
}

/// Shared storage for a screen model.
///
/// Borrows never outlive the closure, so no borrow is held across an await.
pub trait ViewCell<T> {
    fn read_with<R>(&self, read: impl FnOnce(&T) -> R) -> R;
    fn update<R>(&self, write: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> ViewCell<T> for RefCell<T> {
    fn read_with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.borrow())
    }

    fn update<R>(&self, write: impl FnOnce(&mut T) -> R) -> R {
        write(&mut self.borrow_mut())
    }
}
