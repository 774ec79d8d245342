//! jwatch - watch a single file and show it pretty-printed.

mod actor;
mod cli;
mod config;
mod core;
mod display;
mod loader;
mod logger;
mod render;
mod utils;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::ViewerConfig;

/// Straggling blocking loads get this long to finish on exit.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ViewerConfig::load(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let result = rt.block_on(actor::coordinator::run_watch(&config));
    rt.shutdown_timeout(SHUTDOWN_TIMEOUT);
    result
}
