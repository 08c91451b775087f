//! HTTP client for the Crafto quote API.

use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::Deserialize;

use super::{PageRequest, QuoteApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, Error, RequestFailure};
use crate::models::Quote;
use crate::upload::ImageUpload;
use crate::util::compact_text;

#[derive(Debug, Clone)]
pub struct CraftoClient {
    config: ClientConfig,
    client: Client,
}

impl CraftoClient {
    pub fn new(config: ClientConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { config, client })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorized(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header(reqwest::header::AUTHORIZATION, token)
    }
}

impl QuoteApi for CraftoClient {
    async fn authenticate(&self, username: &str, secret: &str) -> Result<String, ApiError> {
        let payload = serde_json::json!({
            "username": username,
            "otp": secret,
        });
        tracing::debug!(username, "Requesting login token");
        let request = self.client.post(self.config.endpoint("login")).json(&payload);

        let response = send(request).await.map_err(ApiError::Auth)?;
        let body = response
            .json::<LoginResponse>()
            .await
            .map_err(|error| ApiError::Auth(RequestFailure::transport(&error)))?;
        if body.token.trim().is_empty() {
            return Err(ApiError::Auth(RequestFailure::EmptyResponse("a token")));
        }
        Ok(body.token)
    }

    async fn upload_media(&self, image: &ImageUpload) -> Result<String, ApiError> {
        let part = multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.content_type())
            .map_err(|error| ApiError::Upload(RequestFailure::transport(&error)))?;
        let form = multipart::Form::new().part("file", part);
        tracing::debug!(
            file_name = image.file_name(),
            size = image.bytes().len(),
            "Uploading quote image"
        );
        let request = self
            .client
            .post(&self.config.media_upload_url)
            .multipart(form);

        let response = send(request).await.map_err(ApiError::Upload)?;
        let uploaded = response
            .json::<Vec<UploadedMedia>>()
            .await
            .map_err(|error| ApiError::Upload(RequestFailure::transport(&error)))?;
        uploaded
            .into_iter()
            .next()
            .map(|media| media.url)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ApiError::Upload(RequestFailure::EmptyResponse("a media URL")))
    }

    async fn submit_quote(
        &self,
        token: &str,
        text: &str,
        media_url: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let payload = serde_json::json!({
            "text": text,
            "mediaUrl": media_url,
        });
        let request = Self::authorized(
            self.client.post(self.config.endpoint("postQuote")).json(&payload),
            token,
        );

        let response = send(request).await.map_err(ApiError::Submit)?;
        let body = response
            .text()
            .await
            .map_err(|error| ApiError::Submit(RequestFailure::transport(&error)))?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }

    async fn list_quotes(
        &self,
        token: &str,
        page: PageRequest,
    ) -> Result<Vec<Quote>, ApiError> {
        tracing::debug!(limit = page.limit, offset = page.offset, "Fetching quotes");
        let request = Self::authorized(
            self.client
                .get(self.config.endpoint("getQuotes"))
                .query(&[("limit", page.limit), ("offset", page.offset)]),
            token,
        );

        let response = send(request).await.map_err(ApiError::Fetch)?;
        let body = response
            .json::<QuotePage>()
            .await
            .map_err(|error| ApiError::Fetch(RequestFailure::transport(&error)))?;
        Ok(body.into_quotes())
    }
}

async fn send(request: RequestBuilder) -> Result<Response, RequestFailure> {
    let response = request
        .send()
        .await
        .map_err(|error| RequestFailure::transport(&error))?;
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(status, "Crafto API request failed");
    Err(RequestFailure::Status {
        status,
        body: parse_api_error(&body),
    })
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct UploadedMedia {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuotePage {
    Wrapped { data: Vec<Quote> },
    Bare(Vec<Quote>),
}

impl QuotePage {
    fn into_quotes(self) -> Vec<Quote> {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

fn parse_api_error(body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return compact_text(&message);
        }
    }
    compact_text(body)
}
