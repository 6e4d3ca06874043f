//! # feedgraph
//!
//! Interactive activity reporter. Reads menu choices and commands from
//! stdin, prints feeds to stdout, and logs to stderr.

#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use feedgraph_cli::Session;
use feedgraph_core::logging::init_subscriber;
use feedgraph_settings::{load_settings_from_path, settings_path};
use tracing::debug;

/// Photo feed activity reporter.
#[derive(Parser, Debug)]
#[command(name = "feedgraph", about = "Photo feed activity reporter")]
struct Cli {
    /// Settings file (default: `~/.feedgraph/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `feedgraph_engine=trace`. Overrides settings.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.settings.unwrap_or_else(settings_path);
    let mut settings = load_settings_from_path(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }

    init_subscriber(&settings.logging.level);
    debug!(path = %path.display(), limit = settings.trending.limit, "settings loaded");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Session::new(stdin, stdout, &settings)
        .run()
        .context("Menu session failed")?;
    Ok(())
}
