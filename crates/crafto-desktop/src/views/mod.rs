//! Application views

mod create_quote;
mod login;
mod quotes;

pub use create_quote::CreateQuote;
pub use login::Login;
pub use quotes::Quotes;
