//! Structured, serializable errors for crossing service boundaries.
//!
//! A [`StructuredError`] wraps a failure message together with an optional
//! cause, an opaque status code, the call site that built it and a hint for
//! message-queue consumers on whether the triggering message should be
//! requeued. It renders to a canonical JSON text and decodes back, so the
//! metadata survives log lines, RPC error strings and dead-letter payloads.
//!
//! ```
//! use errplus_core::{StructuredError, capture_trace, decode, with_code, with_queue};
//!
//! let err = StructuredError::with_options(
//!     "upstream timed out",
//!     [with_code(504), with_queue(true), capture_trace!().into()],
//! );
//!
//! let restored = decode(&err.to_string()).unwrap();
//! assert_eq!(restored, err);
//! assert!(restored.should_requeue());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod codec;
mod config;
mod error;
mod options;
mod queue;
mod trace;

pub use codec::{DecodeFailure, decode, decode_error};
pub use config::{ConfigError, ErrorDefaults};
pub use error::StructuredError;
pub use options::{ErrorOption, with_cause, with_code, with_queue, with_trace};
pub use queue::QueueHint;
pub use trace::CallerTrace;

#[doc(hidden)]
pub mod __private {
    pub use crate::trace::strip_marker;
}
