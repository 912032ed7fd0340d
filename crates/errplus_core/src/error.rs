//! The structured error value.

use serde::{Deserialize, Serialize};

use crate::codec::null_as_default;
use crate::{CallerTrace, ErrorOption, QueueHint};

/// An error enriched with a cause, status code, caller trace and queue hint.
///
/// `Display` renders the canonical JSON text (see [`as_text`](Self::as_text)),
/// so the value can travel anywhere a plain error message does and be
/// recovered with [`decode`](crate::decode).
///
/// # Examples
///
/// ```
/// use errplus_core::StructuredError;
///
/// let err = StructuredError::new("boom").with_code(2);
/// assert_eq!(err.info(), "boom");
/// assert_eq!(*err.code(), 2);
/// assert!(!err.should_requeue());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct StructuredError {
    /// Primary message
    #[serde(default, deserialize_with = "null_as_default")]
    #[setters(skip)]
    info: String,
    /// Rendered underlying error
    #[serde(default, deserialize_with = "null_as_default")]
    #[setters(into)]
    err: String,
    /// Opaque status code, zero when unset
    #[serde(default, deserialize_with = "null_as_default")]
    code: i64,
    /// Construction site
    #[serde(default, deserialize_with = "null_as_default")]
    trace: CallerTrace,
    /// Consumer requeue hint
    #[serde(default, deserialize_with = "null_as_default")]
    #[setters(into)]
    queue: QueueHint,
}

impl StructuredError {
    /// Create an error whose message is the rendering of `input`.
    ///
    /// Strings and any `std::error::Error` are accepted; an error passed here
    /// becomes the primary message, not the cause.
    pub fn new(input: impl std::fmt::Display) -> Self {
        Self {
            info: input.to_string(),
            ..Self::default()
        }
    }

    /// Create an error and apply `options` in order.
    ///
    /// ```
    /// use errplus_core::{StructuredError, with_code};
    ///
    /// let err = StructuredError::with_options("x", [with_code(1), with_code(2)]);
    /// assert_eq!(*err.code(), 2);
    /// ```
    pub fn with_options<I>(input: impl std::fmt::Display, options: I) -> Self
    where
        I: IntoIterator<Item = ErrorOption>,
    {
        options
            .into_iter()
            .fold(Self::new(input), |err, option| err.apply(option))
    }

    /// Apply a single option, replacing any earlier value of the same kind.
    pub fn apply(self, option: ErrorOption) -> Self {
        match option {
            ErrorOption::Code(code) => self.with_code(code),
            ErrorOption::Trace(trace) => self.with_trace(trace),
            ErrorOption::Queue(queue) => self.with_queue(queue),
            ErrorOption::Cause(cause) => self.with_err(cause),
        }
    }

    /// Whether a queue consumer should requeue the triggering message.
    pub fn should_requeue(&self) -> bool {
        *self.queue.requeue()
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl std::error::Error for StructuredError {}
