//! Quote model

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote API.
///
/// The API is free to use numeric or string ids, so both are accepted and
/// normalized to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawQuoteId", into = "String")]
pub struct QuoteId(String);

impl QuoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<QuoteId> for String {
    fn from(value: QuoteId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuoteId {
    Number(i64),
    Text(String),
}

impl From<RawQuoteId> for QuoteId {
    fn from(value: RawQuoteId) -> Self {
        match value {
            RawQuoteId::Number(number) => Self(number.to_string()),
            RawQuoteId::Text(text) => Self(text),
        }
    }
}

/// A quote as returned by the feed endpoint. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    /// Image attached to the quote
    #[serde(default)]
    pub media_url: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Author and creation time, e.g. `alice - 2024-10-01 14:03`.
    #[must_use]
    pub fn byline(&self) -> String {
        let local = self.created_at.with_timezone(&Local);
        format!("{} - {}", self.username, local.format("%Y-%m-%d %H:%M"))
    }
}
