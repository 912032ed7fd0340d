//! Construction options for [`StructuredError`](crate::StructuredError).

use crate::{CallerTrace, QueueHint};

/// A single construction option.
///
/// Options are applied in the order given; when the same kind appears more
/// than once the last one wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorOption {
    /// Status code
    Code(i64),
    /// Caller trace
    Trace(CallerTrace),
    /// Queue hint
    Queue(QueueHint),
    /// Rendered underlying error
    Cause(String),
}

impl From<CallerTrace> for ErrorOption {
    fn from(trace: CallerTrace) -> Self {
        ErrorOption::Trace(trace)
    }
}

impl From<QueueHint> for ErrorOption {
    fn from(queue: QueueHint) -> Self {
        ErrorOption::Queue(queue)
    }
}

/// Set the status code.
pub fn with_code(code: i64) -> ErrorOption {
    ErrorOption::Code(code)
}

/// Set the requeue hint.
pub fn with_queue(requeue: bool) -> ErrorOption {
    ErrorOption::Queue(QueueHint::new(requeue))
}

/// Attach an underlying error, stored by its rendered description.
///
/// ```
/// use errplus_core::{StructuredError, with_cause};
///
/// let io = std::io::Error::other("disk full");
/// let err = StructuredError::with_options("saving report failed", [with_cause(&io)]);
/// assert_eq!(err.err(), "disk full");
/// assert_eq!(err.info(), "saving report failed");
/// ```
pub fn with_cause(cause: impl std::fmt::Display) -> ErrorOption {
    ErrorOption::Cause(cause.to_string())
}

/// Attach a previously captured trace.
pub fn with_trace(trace: CallerTrace) -> ErrorOption {
    ErrorOption::Trace(trace)
}
