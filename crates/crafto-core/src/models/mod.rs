//! Data models for Crafto

mod quote;
mod session;

pub use quote::{Quote, QuoteId};
pub use session::{Credentials, Session};
