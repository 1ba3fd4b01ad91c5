mod backend_bridge;
mod controller;
mod ui;

#[cfg(test)]
#[path = "tests/fake_api.rs"]
mod fake_api;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{ClientConfig, Storefront, DEFAULT_API_BASE_URL};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::StorefrontApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the storefront API.
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = ClientConfig::from_base_url(&args.api_url)?;
    tracing::info!(api = %config.api_base_url(), "starting storefront");
    let storefront = Storefront::connect(&config);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let _backend = backend_bridge::runtime::launch(storefront.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fullstack Prints")
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Fullstack Prints",
        options,
        Box::new(|_cc| Ok(Box::new(StorefrontApp::new(cmd_tx, ui_rx, storefront)))),
    )
    .map_err(|err| anyhow!("storefront window failed: {err}"))
}
