//! Crafto CLI - log in, post a quote and read the feed from the terminal.

mod cli;
mod commands;
mod error;
mod notifier;


use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::post::run_post;
use crate::commands::quotes::run_quotes;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crafto=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.client_config()?;

    match cli.command {
        Commands::Quotes {
            login,
            pages,
            json,
        } => run_quotes(config, &login, pages, json).await?,
        Commands::Post { login, text, image } => run_post(config, &login, &text, &image).await?,
    }

    Ok(())
}
