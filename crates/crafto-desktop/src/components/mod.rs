//! UI Components
//!
//! Reusable UI components for the desktop application.

mod footer;
mod loading_overlay;
mod nav_bar;
mod quote_card;

pub use footer::Footer;
pub use loading_overlay::LoadingOverlay;
pub use nav_bar::NavBar;
pub use quote_card::QuoteCard;
