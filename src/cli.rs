//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Watch one file and show it pretty-printed, reloading on every save.
///
/// Type a path and press enter to watch it; type another path to switch.
/// `:q`, `quit`, `exit` or Ctrl+D stop.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: jwatch.toml)
    #[arg(short = 'C', long, default_value = "jwatch.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
