//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the errplus binary.

mod commands;
mod decode;
mod encode;

pub use commands::{Cli, Commands, OutputFormat, requeue_flag};
pub use decode::{handle_decode_command, read_input};
pub use encode::handle_encode_command;
