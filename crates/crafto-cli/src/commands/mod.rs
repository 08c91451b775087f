pub mod common;
pub mod post;
pub mod quotes;
