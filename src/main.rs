//! Strictly Crosses - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_crosses::{GameConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            first,
            no_alternate,
            detect_draw,
            no_highlight,
        } => {
            init_tracing(&cli.log_file)?;

            let mut config = GameConfig::load_or_default(cli.config.as_deref())?;
            let rules = config.rules_mut();
            if let Some(first) = first {
                rules.first_sign = first;
            }
            if no_alternate {
                rules.alternate_first_mover = false;
            }
            if detect_draw {
                rules.detect_draw = true;
            }
            if no_highlight {
                config.display_mut().highlight_winning_line = false;
            }

            info!(rules = ?config.rules(), display = ?config.display(), "Configuration resolved");
            run_tui(&config)
        }
        Command::DefaultConfig => {
            let config = GameConfig::load_or_default(cli.config.as_deref())?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Sends tracing output to a file so it cannot interfere with the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
