//! Quote feed flow: offset pagination with a single in-flight fetch.

use tracing::{debug, warn};

use super::{FlowContext, Redirect, ViewCell};
use crate::api::{PageRequest, QuoteApi, DEFAULT_PAGE_LIMIT};
use crate::error::ApiError;
use crate::models::Quote;
use crate::notify::Notifier;
use crate::session::SessionStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    /// The server returned an empty page; no further fetches are made.
    Exhausted,
}

/// Result of one load-more attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A fetch was already running or the feed is exhausted.
    Skipped,
    Appended(usize),
    Exhausted,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedModel {
    pub quotes: Vec<Quote>,
    pub offset: u32,
    pub limit: u32,
    pub status: FeedStatus,
    /// Set by a failed fetch, cleared when the next one starts.
    pub error: bool,
    auto_load_fired: bool,
}

impl Default for FeedModel {
    fn default() -> Self {
        Self {
            quotes: Vec::new(),
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
            status: FeedStatus::Idle,
            error: false,
            auto_load_fired: false,
        }
    }
}

impl FeedModel {
    pub fn has_more(&self) -> bool {
        self.status != FeedStatus::Exhausted
    }

    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    /// Nothing to show but the error page.
    pub fn shows_error_page(&self) -> bool {
        self.error && self.quotes.is_empty()
    }

    /// Error after some quotes are already on screen.
    pub fn shows_inline_error(&self) -> bool {
        self.error && !self.quotes.is_empty()
    }

    /// Claim the next page. Returns `None` while a fetch is in flight or the
    /// feed is exhausted.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.status != FeedStatus::Idle {
            return None;
        }
        self.status = FeedStatus::Loading;
        self.error = false;
        Some(PageRequest {
            limit: self.limit,
            offset: self.offset,
        })
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Quote>, ApiError>) -> LoadOutcome {
        match result {
            Ok(page) if page.is_empty() => {
                self.status = FeedStatus::Exhausted;
                LoadOutcome::Exhausted
            }
            Ok(page) => {
                let appended = page.len();
                self.offset += self.limit;
                self.quotes.extend(page);
                self.status = FeedStatus::Idle;
                LoadOutcome::Appended(appended)
            }
            Err(_) => {
                self.error = true;
                self.status = FeedStatus::Idle;
                LoadOutcome::Failed
            }
        }
    }

    /// The one automatic fetch after mount, only while the feed is empty.
    pub fn take_auto_load(&mut self) -> bool {
        if self.auto_load_fired || !self.quotes.is_empty() || !self.has_more() {
            return false;
        }
        self.auto_load_fired = true;
        true
    }
}

/// Fetch the next page into the feed.
///
/// Anonymous sessions get a redirect to login before any request is made.
/// Failures set the sticky error flag; when quotes are already on screen the
/// user is also notified.
pub async fn load_more<A, S, N>(
    ctx: &FlowContext<A, S, N>,
    feed: &impl ViewCell<FeedModel>,
) -> Result<LoadOutcome, Redirect>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    let credentials = ctx.require_session()?;

    let Some(page) = feed.update(FeedModel::begin_fetch) else {
        debug!("Skipping feed fetch: already loading or exhausted");
        return Ok(LoadOutcome::Skipped);
    };

    debug!(limit = page.limit, offset = page.offset, "Fetching quotes");
    let result = ctx.api.list_quotes(&credentials.token, page).await;
    if let Err(error) = &result {
        warn!("Fetching quotes failed: {error}");
    }

    let (outcome, had_quotes) = feed.update(|feed| {
        let outcome = feed.finish_fetch(result);
        (outcome, !feed.quotes.is_empty())
    });
    if outcome == LoadOutcome::Failed && had_quotes {
        ctx.notifier
            .error("Could not load more quotes. Please try again.");
    }
    Ok(outcome)
}

/// Mount-time load: runs [`load_more`] once while the feed is empty.
pub async fn auto_load<A, S, N>(
    ctx: &FlowContext<A, S, N>,
    feed: &impl ViewCell<FeedModel>,
) -> Result<LoadOutcome, Redirect>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    ctx.require_session()?;
    if !feed.update(FeedModel::take_auto_load) {
        return Ok(LoadOutcome::Skipped);
    }
    load_more(ctx, feed).await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use tokio::sync::Notify;

    use super::*;
    use crate::flows::create_quote::{attach_image, submit_quote, CreateQuoteModel};
    use crate::flows::fakes::{offline, page, ApiCall, FakeQuoteApi, RecordingNotifier, FAKE_MEDIA_URL, FAKE_TOKEN};
    use crate::flows::Screen;
    use crate::models::Credentials;
    use crate::session::MemorySessionStore;
    use crate::upload::{sample_jpeg, PendingUpload};

    type TestContext = FlowContext<FakeQuoteApi, MemorySessionStore, RecordingNotifier>;

    fn signed_in(api: FakeQuoteApi) -> TestContext {
        let ctx = FlowContext::new(api, MemorySessionStore::new(), RecordingNotifier::default());
        ctx.session
            .set_credentials(Credentials::new(FAKE_TOKEN, "alice"));
        ctx
    }

    #[tokio::test(flavor = "current_thread")]
    async fn pages_until_an_empty_response() {
        let ctx = signed_in(FakeQuoteApi::new().with_pages([
            Ok(page(1, 20)),
            Ok(page(21, 20)),
            Ok(Vec::new()),
        ]));
        let feed = RefCell::new(FeedModel::default());

        assert_eq!(load_more(&ctx, &feed).await, Ok(LoadOutcome::Appended(20)));
        assert_eq!(load_more(&ctx, &feed).await, Ok(LoadOutcome::Appended(20)));
        assert_eq!(load_more(&ctx, &feed).await, Ok(LoadOutcome::Exhausted));
        assert_eq!(load_more(&ctx, &feed).await, Ok(LoadOutcome::Skipped));

        let feed = feed.into_inner();
        assert_eq!(feed.quotes.len(), 40);
        assert_eq!(feed.offset, 40);
        assert!(!feed.has_more());
        assert_eq!(ctx.api.list_offsets(), vec![0, 20, 40]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn concurrent_triggers_share_one_request() {
        let gate = Rc::new(Notify::new());
        let ctx = signed_in(
            FakeQuoteApi::new()
                .with_pages([Ok(page(1, 20))])
                .with_gate(Rc::clone(&gate)),
        );
        let feed = RefCell::new(FeedModel::default());

        let release = async {
            tokio::task::yield_now().await;
            assert!(feed.borrow().is_loading());
            gate.notify_one();
        };
        let (first, second, third, ()) = tokio::join!(
            load_more(&ctx, &feed),
            load_more(&ctx, &feed),
            auto_load(&ctx, &feed),
            release
        );

        assert_eq!(first, Ok(LoadOutcome::Appended(20)));
        assert_eq!(second, Ok(LoadOutcome::Skipped));
        assert_eq!(third, Ok(LoadOutcome::Skipped));
        assert_eq!(ctx.api.list_offsets(), vec![0]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn anonymous_feed_redirects_before_fetching() {
        let ctx = FlowContext::new(
            FakeQuoteApi::new(),
            MemorySessionStore::new(),
            RecordingNotifier::default(),
        );
        let feed = RefCell::new(FeedModel::default());

        assert_eq!(
            auto_load(&ctx, &feed).await,
            Err(Redirect::now(Screen::Login))
        );
        assert_eq!(
            load_more(&ctx, &feed).await,
            Err(Redirect::now(Screen::Login))
        );
        assert!(ctx.api.calls().is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn first_page_failure_shows_error_page_and_retry_clears_it() {
        let ctx = signed_in(
            FakeQuoteApi::new().with_pages([Err(ApiError::Fetch(offline())), Ok(page(1, 3))]),
        );
        let feed = RefCell::new(FeedModel::default());

        assert_eq!(auto_load(&ctx, &feed).await, Ok(LoadOutcome::Failed));
        assert!(feed.borrow().shows_error_page());
        assert_eq!(feed.borrow().offset, 0);
        assert!(ctx.notifier.notices().is_empty());

        assert_eq!(auto_load(&ctx, &feed).await, Ok(LoadOutcome::Skipped));
        assert_eq!(load_more(&ctx, &feed).await, Ok(LoadOutcome::Appended(3)));
        assert!(!feed.borrow().error);
        assert_eq!(ctx.api.list_offsets(), vec![0, 0]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn later_failure_keeps_quotes_and_notifies() {
        let ctx = signed_in(
            FakeQuoteApi::new().with_pages([Ok(page(1, 20)), Err(ApiError::Fetch(offline()))]),
        );
        let feed = RefCell::new(FeedModel::default());

        load_more(&ctx, &feed).await.unwrap();
        assert_eq!(load_more(&ctx, &feed).await, Ok(LoadOutcome::Failed));

        let feed = feed.into_inner();
        assert_eq!(feed.quotes.len(), 20);
        assert_eq!(feed.offset, 20);
        assert!(feed.shows_inline_error());
        assert!(!feed.shows_error_page());
        assert!(feed.has_more());
        assert_eq!(ctx.notifier.notices().len(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn created_quote_appears_on_next_first_page() {
        let ctx = signed_in(FakeQuoteApi::new());
        let draft = RefCell::new(CreateQuoteModel::default());
        attach_image(&ctx, &draft, PendingUpload::new("me.jpg", sample_jpeg()))
            .await
            .unwrap();
        draft.borrow_mut().text = "hello".to_string();
        submit_quote(&ctx, &draft).await.unwrap();

        let feed = RefCell::new(FeedModel::default());
        auto_load(&ctx, &feed).await.unwrap();

        let feed = feed.into_inner();
        let first = &feed.quotes[0];
        assert_eq!(first.text, "hello");
        assert_eq!(first.media_url.as_deref(), Some(FAKE_MEDIA_URL));
        assert_eq!(
            ctx.api.calls().last(),
            Some(&ApiCall::ListQuotes {
                token: FAKE_TOKEN.to_string(),
                page: PageRequest {
                    limit: DEFAULT_PAGE_LIMIT,
                    offset: 0,
                },
            })
        );
    }
}
