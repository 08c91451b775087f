//! Crafto Desktop Application
//!
//! Log in with a one-time password, share a quote with an image and browse
//! the quote feed.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod ui;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crafto=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Crafto...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Crafto")
            .with_inner_size(LogicalSize::new(960.0, 760.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
