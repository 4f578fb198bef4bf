//! Command-line interface for strictly_crosses.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_crosses::PlayerSign;

/// Strictly Crosses - crosses and zeros in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_crosses")]
#[command(about = "Two-player crosses and zeros for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// File that receives tracing output (the terminal is busy drawing)
    #[arg(long, global = true, default_value = "strictly_crosses.log")]
    pub log_file: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Sign that opens the first round (cross or zero)
        #[arg(long)]
        first: Option<PlayerSign>,

        /// Keep the same opener every round
        #[arg(long)]
        no_alternate: bool,

        /// End a round as a draw when the board fills without a line
        #[arg(long)]
        detect_draw: bool,

        /// Do not highlight the winning line
        #[arg(long)]
        no_highlight: bool,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}
