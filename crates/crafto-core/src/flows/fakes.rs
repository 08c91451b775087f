use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use tokio::sync::Notify;

use crate::api::{PageRequest, QuoteApi};
use crate::error::{ApiError, RequestFailure};
use crate::models::{Quote, QuoteId};
use crate::notify::{Notice, NoticeLevel, Notifier};
use crate::upload::ImageUpload;

pub const FAKE_TOKEN: &str = "token-123";
pub const FAKE_MEDIA_URL: &str = "https://cdn.example.com/quote.jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Authenticate { username: String, secret: String },
    UploadMedia { file_name: String },
    SubmitQuote { token: String, text: String, media_url: String },
    ListQuotes { token: String, page: PageRequest },
}

/// Scripted [`QuoteApi`] that records every call.
///
/// `list_quotes` serves scripted pages first; once those run out it serves
/// the quotes accepted by `submit_quote`, windowed by limit/offset.
pub struct FakeQuoteApi {
    login: Result<String, ApiError>,
    upload: Result<String, ApiError>,
    submit: Result<(), ApiError>,
    pages: RefCell<VecDeque<Result<Vec<Quote>, ApiError>>>,
    posted: RefCell<Vec<Quote>>,
    gate: Option<Rc<Notify>>,
    calls: RefCell<Vec<ApiCall>>,
}

impl FakeQuoteApi {
    pub fn new() -> Self {
        Self {
            login: Ok(FAKE_TOKEN.to_string()),
            upload: Ok(FAKE_MEDIA_URL.to_string()),
            submit: Ok(()),
            pages: RefCell::default(),
            posted: RefCell::default(),
            gate: None,
            calls: RefCell::default(),
        }
    }

    pub fn with_login(mut self, result: Result<String, ApiError>) -> Self {
        self.login = result;
        self
    }

    pub fn with_upload(mut self, result: Result<String, ApiError>) -> Self {
        self.upload = result;
        self
    }

    pub fn with_submit(mut self, result: Result<(), ApiError>) -> Self {
        self.submit = result;
        self
    }

    pub fn with_pages(self, pages: impl IntoIterator<Item = Result<Vec<Quote>, ApiError>>) -> Self {
        self.pages.borrow_mut().extend(pages);
        self
    }

    /// Hold every `list_quotes` call until the gate is notified.
    pub fn with_gate(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn list_offsets(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ApiCall::ListQuotes { page, .. } => Some(page.offset),
                _ => None,
            })
            .collect()
    }
}

impl QuoteApi for FakeQuoteApi {
    async fn authenticate(&self, username: &str, secret: &str) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Authenticate {
            username: username.to_string(),
            secret: secret.to_string(),
        });
        self.login.clone()
    }

    async fn upload_media(&self, image: &ImageUpload) -> Result<String, ApiError> {
        self.calls.borrow_mut().push(ApiCall::UploadMedia {
            file_name: image.file_name().to_string(),
        });
        self.upload.clone()
    }

    async fn submit_quote(
        &self,
        token: &str,
        text: &str,
        media_url: &str,
    ) -> Result<serde_json::Value, ApiError> {
        self.calls.borrow_mut().push(ApiCall::SubmitQuote {
            token: token.to_string(),
            text: text.to_string(),
            media_url: media_url.to_string(),
        });
        self.submit.clone()?;

        let mut posted = self.posted.borrow_mut();
        let id = u32::try_from(posted.len()).unwrap_or(u32::MAX) + 1000;
        let mut created = quote(id);
        created.text = text.to_string();
        created.media_url = Some(media_url.to_string());
        posted.insert(0, created);
        Ok(serde_json::json!({ "ok": true }))
    }

    async fn list_quotes(&self, token: &str, page: PageRequest) -> Result<Vec<Quote>, ApiError> {
        self.calls.borrow_mut().push(ApiCall::ListQuotes {
            token: token.to_string(),
            page,
        });
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if let Some(scripted) = self.pages.borrow_mut().pop_front() {
            return scripted;
        }
        let posted = self.posted.borrow();
        Ok(posted
            .iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices.borrow().iter().map(|notice| notice.level).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

pub fn quote(id: u32) -> Quote {
    Quote {
        id: QuoteId::new(id.to_string()),
        text: format!("quote #{id}"),
        media_url: Some(format!("https://cdn.example.com/{id}.jpg")),
        username: "alice".to_string(),
        created_at: Utc.timestamp_opt(1_700_000_000 + i64::from(id), 0).unwrap(),
    }
}

pub fn page(first_id: u32, len: u32) -> Vec<Quote> {
    (first_id..first_id + len).map(quote).collect()
}

pub fn offline() -> RequestFailure {
    RequestFailure::Transport("connection refused".to_string())
}
