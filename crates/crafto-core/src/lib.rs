//! crafto-core - Core library for Crafto
//!
//! This crate contains the shared models, the remote API client, the session
//! store and the headless state machines behind the login, create-quote and
//! quote-feed screens. The desktop app and the CLI both drive these flows.

pub mod api;
pub mod config;
pub mod error;
pub mod flows;
pub mod models;
pub mod notify;
pub mod session;
pub mod upload;
pub mod util;

pub use api::{CraftoClient, PageRequest, QuoteApi};
pub use config::ClientConfig;
pub use error::{ApiError, Error, RequestFailure, Result, ValidationError};
pub use models::{Credentials, Quote, QuoteId, Session};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use session::{MemorySessionStore, SessionStore};
pub use upload::{ImageUpload, PendingUpload};
