//! Remote quote API.
//!
//! [`QuoteApi`] is the seam every flow talks through; [`CraftoClient`] is the
//! HTTP implementation. Each call is one request/response round trip with no
//! retry, cache or timeout.

mod client;

pub use client::CraftoClient;

use crate::error::ApiError;
use crate::models::Quote;
use crate::upload::ImageUpload;

/// Page size used by the quote feed.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// One `limit`/`offset` window of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

#[allow(async_fn_in_trait)]
pub trait QuoteApi {
    /// Exchange username and one-time password for an auth token.
    async fn authenticate(&self, username: &str, secret: &str) -> Result<String, ApiError>;

    /// Upload an image and return its public URL.
    async fn upload_media(&self, image: &ImageUpload) -> Result<String, ApiError>;

    /// Create a quote. Returns the API's acknowledgement body.
    async fn submit_quote(
        &self,
        token: &str,
        text: &str,
        media_url: &str,
    ) -> Result<serde_json::Value, ApiError>;

    /// Fetch one page of quotes. An empty page means there is nothing more.
    async fn list_quotes(&self, token: &str, page: PageRequest) -> Result<Vec<Quote>, ApiError>;
}
