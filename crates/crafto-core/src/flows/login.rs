//! Login screen flow.

use tracing::{debug, warn};

use super::{FlowContext, Redirect, Screen, ViewCell, LOGIN_REDIRECT_DELAY};
use crate::api::QuoteApi;
use crate::error::{Error, ValidationError};
use crate::models::Credentials;
use crate::notify::Notifier;
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Authenticated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    SubmitRequested,
    SubmitSucceeded,
    SubmitFailed,
}

pub const fn transition_login_state(state: LoginState, event: LoginEvent) -> LoginState {
    match (state, event) {
        (LoginState::Idle, LoginEvent::SubmitRequested) => LoginState::Submitting,
        (LoginState::Submitting, LoginEvent::SubmitSucceeded) => LoginState::Authenticated,
        (LoginState::Submitting, LoginEvent::SubmitFailed) => LoginState::Idle,
        _ => state,
    }
}

/// What the login screen renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginModel {
    pub username: String,
    pub secret: String,
    pub state: LoginState,
}

impl LoginModel {
    /// The OTP is opaque: only an empty one counts as missing.
    pub fn has_both_fields(&self) -> bool {
        !self.username.trim().is_empty() && !self.secret.is_empty()
    }

    /// Drives the sign-in button.
    pub fn can_submit(&self) -> bool {
        self.state == LoginState::Idle && self.has_both_fields()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == LoginState::Submitting
    }
}

/// Exchange the entered username and OTP for a session.
///
/// On success the session store holds the new credentials and the caller
/// gets a delayed redirect to the feed. Remote failures are reported through
/// the notifier, clear both inputs and return the model to `Idle`.
pub async fn submit_login<A, S, N>(
    ctx: &FlowContext<A, S, N>,
    model: &impl ViewCell<LoginModel>,
) -> Result<Redirect, Error>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    let (username, secret) = model.update(|model| {
        if model.state != LoginState::Idle {
            return Err(ValidationError::Busy);
        }
        if !model.has_both_fields() {
            return Err(ValidationError::EmptyCredentials);
        }
        model.state = transition_login_state(model.state, LoginEvent::SubmitRequested);
        Ok((model.username.trim().to_string(), model.secret.clone()))
    })
    .inspect_err(|error| {
        if *error == ValidationError::EmptyCredentials {
            ctx.notifier.warning(error.to_string());
        }
    })?;

    ctx.notifier.info("Logging in...");
    debug!(%username, "Submitting login");

    match ctx.api.authenticate(&username, &secret).await {
        Ok(token) => {
            ctx.session
                .set_credentials(Credentials::new(token, username.clone()));
            model.update(|model| {
                model.state = transition_login_state(model.state, LoginEvent::SubmitSucceeded);
            });
            ctx.notifier.success("Login successful!");
            debug!(%username, "Login succeeded");
            Ok(Redirect::after(Screen::Feed, LOGIN_REDIRECT_DELAY))
        }
        Err(error) => {
            warn!("Login failed: {error}");
            model.update(|model| {
                model.username.clear();
                model.secret.clear();
                model.state = transition_login_state(model.state, LoginEvent::SubmitFailed);
            });
            ctx.notifier
                .error("Login failed. Please check your credentials.");
            Err(error.into())
        }
    }
}

/// Signed-in users skip the login screen.
pub fn redirect_if_signed_in(session: &impl SessionStore) -> Option<Redirect> {
    session
        .current()
        .is_authenticated()
        .then_some(Redirect::now(Screen::Feed))
}

/// Forget the current session and go back to the login screen.
pub fn sign_out(session: &impl SessionStore) -> Redirect {
    session.clear_credentials();
    Redirect::now(Screen::Login)
}
