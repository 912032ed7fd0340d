//! Decode command handler.

use errplus_core::{DecodeFailure, StructuredError, decode};
use std::io::Read;
use tracing::{debug, instrument};

use super::OutputFormat;

/// Use `text` when given, otherwise read all of `reader`.
///
/// Trailing newlines are trimmed so piped payloads decode cleanly.
pub fn read_input(text: Option<String>, mut reader: impl Read) -> std::io::Result<String> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            reader.read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}

/// Handles the decode command.
///
/// Returns the rendered error, or the decode failure when the text does not
/// hold a structured error.
#[instrument(skip_all, fields(format = ?format, len = text.len()))]
pub fn handle_decode_command(text: &str, format: OutputFormat) -> Result<String, DecodeFailure> {
    let err = decode(text)?;
    debug!(code = *err.code(), "Decoded structured error");

    Ok(match format {
        OutputFormat::Json => err.as_text(),
        OutputFormat::Human => render_human(&err),
    })
}

fn render_human(err: &StructuredError) -> String {
    let trace = if err.trace().is_empty() {
        "-".to_string()
    } else {
        err.trace().to_string()
    };
    let cause = if err.err().is_empty() { "-" } else { err.err() };

    format!(
        "info:    {}\nerr:     {}\ncode:    {}\ntrace:   {}\nrequeue: {}",
        err.info(),
        cause,
        err.code(),
        trace,
        err.should_requeue()
    )
}
