use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Restyle: compile admin-theme settings into a scoped stylesheet.
#[derive(Parser, Debug)]
#[command(name = "restyle", version, about)]
pub struct Args {
    /// Engine config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, restyle_css=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile persisted settings (committed mode) and print the CSS.
    Compile {
        /// Flat TOML or JSON settings file.
        #[arg(long)]
        settings: PathBuf,

        /// Print the compile report as JSON on stderr.
        #[arg(long)]
        report: bool,
    },

    /// Compile persisted settings with an unsaved overlay (preview mode).
    Preview {
        #[arg(long)]
        settings: PathBuf,

        /// Flat TOML or JSON overlay file.
        #[arg(long)]
        overlay: PathBuf,

        #[arg(long)]
        report: bool,
    },

    /// Print cache metrics as JSON, optionally after one committed compile.
    Metrics {
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Invalidate a cache scope: a group name, a `prefix*` pattern, or `all`.
    Clear {
        #[arg(long, default_value = "css")]
        scope: String,
    },

    /// Drop expired entries from every cache tier.
    Sweep,
}

pub fn parse() -> Args {
    Args::parse()
}
