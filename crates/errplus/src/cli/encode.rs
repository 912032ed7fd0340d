//! Encode command handler.

use errplus_core::{ErrorDefaults, ErrorOption, with_cause, with_code, with_queue};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Handles the encode command.
///
/// Defaults from `config` are applied first, then the explicit flags.
/// `requeue` of `None` keeps the configured hint.
///
/// # Errors
///
/// Returns error if the config file cannot be loaded.
#[instrument(skip_all, fields(code = ?code, requeue = ?requeue))]
pub fn handle_encode_command(
    message: &str,
    code: Option<i64>,
    cause: Option<String>,
    requeue: Option<bool>,
    config: Option<PathBuf>,
) -> anyhow::Result<String> {
    let defaults = match config {
        Some(path) => {
            info!(path = %path.display(), "Loading error defaults");
            ErrorDefaults::from_file(path)?
        }
        None => ErrorDefaults::default(),
    };

    let mut options: Vec<ErrorOption> = Vec::new();
    if let Some(code) = code {
        options.push(with_code(code));
    }
    if let Some(cause) = cause {
        options.push(with_cause(cause));
    }
    if let Some(requeue) = requeue {
        options.push(with_queue(requeue));
    }

    Ok(defaults.error(message, options).as_text())
}
