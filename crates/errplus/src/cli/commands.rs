//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and produce structured error payloads.
#[derive(Parser, Debug)]
#[command(name = "errplus")]
#[command(about = "Decode and encode structured error payloads")]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a serialized error, e.g. copied from a log line or dead-letter payload
    Decode {
        /// Serialized error text (reads stdin when omitted)
        text: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Build an error and print its serialized form
    Encode {
        /// Primary message
        info: String,

        /// Status code
        #[arg(short, long)]
        code: Option<i64>,

        /// Underlying error message
        #[arg(long)]
        cause: Option<String>,

        /// Advise consumers to requeue the message
        #[arg(long, overrides_with = "no_requeue")]
        requeue: bool,

        /// Advise consumers not to requeue, overriding the config default
        #[arg(long, overrides_with = "requeue")]
        no_requeue: bool,

        /// TOML file with a [defaults] table applied before the flags
        #[arg(long, env = "ERRPLUS_CONFIG")]
        config: Option<PathBuf>,
    },
}

/// Output format for decoded errors.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One field per line
    #[default]
    Human,
    /// Canonical JSON
    Json,
}

/// Resolve the `--requeue`/`--no-requeue` pair; `None` leaves the config default.
pub fn requeue_flag(requeue: bool, no_requeue: bool) -> Option<bool> {
    match (requeue, no_requeue) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
