//! Quote card component

use crafto_core::Quote;
use dioxus::prelude::*;

/// One feed entry: the image with the quote text over it and a byline.
#[component]
pub fn QuoteCard(quote: Quote) -> Element {
    let byline = quote.byline();

    rsx! {
        article {
            class: "quote-card",

            if let Some(media_url) = quote.media_url.as_deref() {
                div {
                    class: "quote-media",
                    img { src: "{media_url}", alt: "Quote image" }
                    div { class: "quote-text", "{quote.text}" }
                }
            } else {
                div { class: "quote-text quote-text--plain", "{quote.text}" }
            }

            div { class: "quote-byline", "{byline}" }
        }
    }
}
