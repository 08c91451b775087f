//! Client configuration.
//!
//! Resolves the two remote endpoints the client talks to: the quote API base
//! URL and the media upload URL. Every binary layers its own sources (build
//! time values, environment, CLI flags) on top of the defaults here.

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

pub const DEFAULT_API_BASE_URL: &str = "https://assignment.stage.crafto.app";
pub const DEFAULT_MEDIA_UPLOAD_URL: &str =
    "https://crafto.app/crafto/v1.0/media/assignment/upload";

pub const API_BASE_URL_ENV: &str = "CRAFTO_API_BASE_URL";
pub const MEDIA_UPLOAD_URL_ENV: &str = "CRAFTO_MEDIA_UPLOAD_URL";

/// Remote endpoints used by [`crate::CraftoClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for `/login`, `/postQuote` and `/getQuotes`, without trailing slash.
    pub api_base_url: String,
    /// Full URL of the multipart media upload endpoint.
    pub media_upload_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            media_upload_url: DEFAULT_MEDIA_UPLOAD_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Overlay optional endpoint values on the defaults.
    ///
    /// Blank values fall back to the default; non-blank values must be
    /// `http(s)://` URLs.
    pub fn resolve(api_base_url: Option<String>, media_upload_url: Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let api_base_url = match normalize_text_option(api_base_url) {
            Some(url) => normalize_http_url(&url, "api base URL")?,
            None => defaults.api_base_url,
        };
        let media_upload_url = match normalize_text_option(media_upload_url) {
            Some(url) => normalize_http_url(&url, "media upload URL")?,
            None => defaults.media_upload_url,
        };

        Ok(Self {
            api_base_url,
            media_upload_url,
        })
    }

    /// Resolve from `CRAFTO_API_BASE_URL` / `CRAFTO_MEDIA_UPLOAD_URL`.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var(API_BASE_URL_ENV).ok(),
            std::env::var(MEDIA_UPLOAD_URL_ENV).ok(),
        )
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn normalize_http_url(raw: &str, field: &str) -> Result<String> {
    let value = raw.trim().trim_end_matches('/');
    if value.is_empty() {
        return Err(Error::Config(format!("{field} must not be empty")));
    }
    if !is_http_url(value) {
        return Err(Error::Config(format!(
            "{field} must include http:// or https://"
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_defaults() {
        let config = ClientConfig::resolve(None, Some("   ".to_string())).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn resolve_trims_trailing_slash() {
        let config =
            ClientConfig::resolve(Some("http://localhost:8080/".to_string()), None).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.endpoint("/login"), "http://localhost:8080/login");
    }

    #[test]
    fn resolve_rejects_missing_scheme() {
        let error = ClientConfig::resolve(None, Some("crafto.app/upload".to_string())).unwrap_err();
        assert!(error.to_string().contains("media upload URL"));
    }
}
