//! Desktop endpoint configuration loaded from build-time generated JSON.

use crafto_core::config::{API_BASE_URL_ENV, MEDIA_UPLOAD_URL_ENV};
use crafto_core::util::normalize_text_option;
use crafto_core::ClientConfig;
use serde::{Deserialize, Serialize};

/// Endpoints provisioned at build time and embedded into the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesktopBootstrapConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub media_upload_url: Option<String>,
}

/// Loads the generated desktop bootstrap JSON from `OUT_DIR`.
///
/// A malformed file is logged and treated as empty, so the built-in defaults
/// apply.
pub fn load_bootstrap_config() -> DesktopBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/desktop-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse desktop bootstrap config: {}", error);
        DesktopBootstrapConfig::default()
    })
}

/// Runtime environment values win over embedded ones, which win over the
/// defaults. Invalid URLs fall back to the defaults with a warning.
pub fn resolve_client_config(
    bootstrap: &DesktopBootstrapConfig,
    env_api_base_url: Option<String>,
    env_media_upload_url: Option<String>,
) -> ClientConfig {
    let api_base_url =
        normalize_text_option(env_api_base_url).or_else(|| bootstrap.api_base_url.clone());
    let media_upload_url = normalize_text_option(env_media_upload_url)
        .or_else(|| bootstrap.media_upload_url.clone());

    ClientConfig::resolve(api_base_url, media_upload_url).unwrap_or_else(|error| {
        tracing::warn!("Ignoring configured endpoints: {}", error);
        ClientConfig::default()
    })
}

pub fn load_client_config() -> ClientConfig {
    resolve_client_config(
        &load_bootstrap_config(),
        std::env::var(API_BASE_URL_ENV).ok(),
        std::env::var(MEDIA_UPLOAD_URL_ENV).ok(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> DesktopBootstrapConfig {
        DesktopBootstrapConfig {
            api_base_url: Some("https://build.example.com".to_string()),
            media_upload_url: None,
        }
    }

    #[test]
    fn environment_overrides_embedded_values() {
        let config = resolve_client_config(
            &embedded(),
            Some("https://runtime.example.com/".to_string()),
            None,
        );
        assert_eq!(config.api_base_url, "https://runtime.example.com");
        assert_eq!(
            config.media_upload_url,
            ClientConfig::default().media_upload_url
        );
    }

    #[test]
    fn embedded_values_apply_when_environment_is_blank() {
        let config = resolve_client_config(&embedded(), Some("  ".to_string()), None);
        assert_eq!(config.api_base_url, "https://build.example.com");
    }

    #[test]
    fn invalid_urls_fall_back_to_defaults() {
        let config = resolve_client_config(
            &DesktopBootstrapConfig::default(),
            Some("ftp://nope".to_string()),
            None,
        );
        assert_eq!(config, ClientConfig::default());
    }
}
