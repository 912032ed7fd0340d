//! Structured, serializable errors with caller traces and requeue hints.
//!
//! This crate re-exports [`errplus_core`] and hosts the command handlers behind
//! the `errplus` binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;

pub use errplus_core::*;
