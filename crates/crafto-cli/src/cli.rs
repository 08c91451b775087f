use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use crafto_core::config::{API_BASE_URL_ENV, MEDIA_UPLOAD_URL_ENV};
use crafto_core::ClientConfig;

#[derive(Parser)]
#[command(name = "crafto")]
#[command(about = "Share quotes and browse the Crafto feed from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quote API base URL
    #[arg(long, global = true, value_name = "URL", env = API_BASE_URL_ENV)]
    pub api_url: Option<String>,

    /// Media upload endpoint
    #[arg(long, global = true, value_name = "URL", env = MEDIA_UPLOAD_URL_ENV)]
    pub media_url: Option<String>,
}

impl Cli {
    pub fn client_config(&self) -> crafto_core::Result<ClientConfig> {
        ClientConfig::resolve(self.api_url.clone(), self.media_url.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and print the quote feed
    #[command(alias = "feed")]
    Quotes {
        #[command(flatten)]
        login: LoginArgs,
        /// Stop after this many pages (default: until the feed is exhausted)
        #[arg(long, value_name = "N")]
        pages: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log in, upload a .jpg image and create a quote with it
    Post {
        #[command(flatten)]
        login: LoginArgs,
        /// Quote text
        #[arg(long)]
        text: String,
        /// Path to a .jpg image
        #[arg(long, value_name = "PATH")]
        image: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// Account username
    #[arg(long, short)]
    pub username: String,
    /// One-time password
    #[arg(long)]
    pub otp: String,
}
