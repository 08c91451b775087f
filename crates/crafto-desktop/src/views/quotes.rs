//! Quote feed view

use crafto_core::flows::feed::{auto_load, load_more, FeedModel, LoadOutcome};
use dioxus::prelude::*;

use crate::app::{follow_redirect, Route};
use crate::components::QuoteCard;
use crate::services::{use_flow_context, use_session_guard, DesktopFlow, SignalCell};
use crate::ui::{ButtonVariant, UiButton};

#[component]
pub fn Quotes() -> Element {
    use_session_guard();
    let flow = use_flow_context();
    let navigator = use_navigator();
    let feed = use_signal(FeedModel::default);
    let client_ready = flow.is_some();

    let mount_flow = flow.clone();
    use_future(move || {
        let flow = mount_flow.clone();
        async move {
            let Some(flow) = flow else {
                return;
            };
            fetch_page(&flow, feed, navigator, true).await;
        }
    });

    let on_load_more = move |_| {
        let Some(flow) = flow.clone() else {
            return;
        };
        spawn(async move {
            fetch_page(&flow, feed, navigator, false).await;
        });
    };

    let current = feed.read().clone();

    if current.shows_error_page() || !client_ready {
        return rsx! {
            div {
                class: "error-page",
                h1 { style: "color: #dc2626;", "Something Went Wrong!" }
                p { "We encountered an unexpected error. Please try again later." }
                Link { to: Route::Login {}, "Go back to Home" }
            }
        };
    }

    rsx! {
        h1 { style: "text-align: center; margin-top: 0;", "Quotes" }

        div {
            class: "quote-list",
            for quote in current.quotes.iter().cloned() {
                QuoteCard { key: "{quote.id}", quote }
            }
        }

        div {
            class: "feed-footer",

            if current.shows_inline_error() {
                span { class: "field-error", "Could not load more quotes." }
            }

            if current.has_more() {
                UiButton {
                    variant: ButtonVariant::Outline,
                    disabled: current.is_loading(),
                    onclick: on_load_more,
                    if current.is_loading() { "Loading..." } else { "Load More Quotes" }
                }
            } else if !current.quotes.is_empty() {
                span { style: "font-size: 12px; color: #6b7280;", "You're all caught up." }
            }
        }

        Link {
            class: "floating-action",
            to: Route::CreateQuote {},
            "Create Quote"
        }
    }
}

async fn fetch_page(flow: &DesktopFlow, feed: Signal<FeedModel>, navigator: Navigator, on_mount: bool) {
    let cell = SignalCell::new(feed);
    let outcome = if on_mount {
        auto_load(flow, &cell).await
    } else {
        load_more(flow, &cell).await
    };

    match outcome {
        Ok(LoadOutcome::Appended(count)) => tracing::debug!("Loaded {} quotes", count),
        Ok(outcome) => tracing::debug!("Feed fetch finished: {:?}", outcome),
        Err(redirect) => follow_redirect(navigator, redirect).await,
    }
}
