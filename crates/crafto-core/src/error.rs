//! Error types for crafto-core

use thiserror::Error;

/// Result type alias using crafto-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in crafto-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Remote API call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input rejected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Screen needs a signed-in user; carries the redirect to the login screen
    #[error("Sign in to continue")]
    SignInRequired(crate::flows::Redirect),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure of one remote operation, tagged by the operation that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Login failed: {0}")]
    Auth(RequestFailure),
    #[error("Image upload failed: {0}")]
    Upload(RequestFailure),
    #[error("Quote submission failed: {0}")]
    Submit(RequestFailure),
    #[error("Fetching quotes failed: {0}")]
    Fetch(RequestFailure),
}

impl ApiError {
    /// The underlying request failure, regardless of operation.
    pub const fn failure(&self) -> &RequestFailure {
        match self {
            Self::Auth(failure)
            | Self::Upload(failure)
            | Self::Submit(failure)
            | Self::Fetch(failure) => failure,
        }
    }
}

/// Why a single request/response round trip did not produce a usable value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("response did not contain {0}")]
    EmptyResponse(&'static str),
}

impl RequestFailure {
    pub(crate) fn transport(error: &reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

/// Client-side input errors, raised synchronously before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both username and OTP.")]
    EmptyCredentials,
    #[error("Quote text cannot be empty")]
    EmptyQuoteText,
    #[error("Attach an image before creating the quote")]
    MissingMedia,
    #[error("Selected file is empty")]
    EmptyFile,
    #[error("Only .jpg files are allowed.")]
    UnsupportedImageType { content_type: String },
    #[error("Another request is already in progress")]
    Busy,
}
