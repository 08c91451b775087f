use std::cell::RefCell;

use crafto_core::flows::feed::{load_more, FeedModel, LoadOutcome};
use crafto_core::flows::FlowContext;
use crafto_core::{ClientConfig, Notifier, Quote, QuoteApi, SessionStore};

use crate::cli::LoginArgs;
use crate::commands::common::{flow_context, format_quote_lines, sign_in, QuoteListItem};
use crate::error::CliError;

pub async fn run_quotes(
    config: ClientConfig,
    login: &LoginArgs,
    pages: Option<u32>,
    as_json: bool,
) -> Result<(), CliError> {
    let ctx = flow_context(config)?;
    sign_in(&ctx, login).await?;
    let quotes = collect_quotes(&ctx, pages).await?;

    if as_json {
        let items = quotes.iter().map(QuoteListItem::from).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if quotes.is_empty() {
        println!("No quotes yet.");
    } else {
        for line in format_quote_lines(&quotes) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Drive the feed until it is exhausted or `max_pages` non-empty pages arrived.
pub async fn collect_quotes<A, S, N>(
    ctx: &FlowContext<A, S, N>,
    max_pages: Option<u32>,
) -> Result<Vec<Quote>, CliError>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    let feed = RefCell::new(FeedModel::default());
    let mut pages = 0;

    while max_pages.is_none_or(|max| pages < max) {
        match load_more(ctx, &feed).await {
            Ok(LoadOutcome::Appended(count)) => {
                pages += 1;
                tracing::debug!(page = pages, count, "Fetched quotes");
            }
            Ok(LoadOutcome::Exhausted | LoadOutcome::Skipped) => break,
            Ok(LoadOutcome::Failed) => {
                return Err(CliError::FeedFetch {
                    loaded: feed.borrow().quotes.len(),
                });
            }
            Err(_) => return Err(CliError::NotAuthenticated),
        }
    }

    Ok(feed.into_inner().quotes)
}
