use std::cell::RefCell;

use chrono::{DateTime, Utc};
use crafto_core::flows::login::{submit_login, LoginModel};
use crafto_core::flows::FlowContext;
use crafto_core::{
    ClientConfig, CraftoClient, MemorySessionStore, Notifier, Quote, QuoteApi, SessionStore,
};
use serde::Serialize;

use crate::cli::LoginArgs;
use crate::error::CliError;
use crate::notifier::ConsoleNotifier;

pub type CliFlow = FlowContext<CraftoClient, MemorySessionStore, ConsoleNotifier>;

pub fn flow_context(config: ClientConfig) -> Result<CliFlow, CliError> {
    tracing::debug!(api = %config.api_base_url, "Using Crafto API");
    Ok(FlowContext::new(
        CraftoClient::new(config)?,
        MemorySessionStore::new(),
        ConsoleNotifier,
    ))
}

/// Run the login flow with the given credentials. Redirect delays are skipped.
pub async fn sign_in<A, S, N>(ctx: &FlowContext<A, S, N>, login: &LoginArgs) -> Result<(), CliError>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    let model = RefCell::new(LoginModel {
        username: login.username.clone(),
        secret: login.otp.clone(),
        ..LoginModel::default()
    });
    submit_login(ctx, &model).await?;
    Ok(())
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct QuoteListItem {
    pub id: String,
    pub text: String,
    pub media_url: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Quote> for QuoteListItem {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id.to_string(),
            text: quote.text.clone(),
            media_url: quote.media_url.clone(),
            username: quote.username.clone(),
            created_at: quote.created_at,
        }
    }
}

pub fn format_quote_lines(quotes: &[Quote]) -> Vec<String> {
    quotes
        .iter()
        .map(|quote| {
            let text = quote.text.replace('\n', " ");
            match quote.media_url.as_deref() {
                Some(media_url) => format!("\"{text}\"\n    {}\n    {media_url}", quote.byline()),
                None => format!("\"{text}\"\n    {}", quote.byline()),
            }
        })
        .collect()
}
