//! Caller trace capture.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::codec::null_as_default;

/// Final path component, `name.ext`, after a `/` or `\` separator.
static FILE_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[/\\]([\w+*()\[\]%=\-]+\.\w+)$").ok());

/// Qualified-path segments such as `<a::Worker as a::Job>` or `<impl a::Worker>`;
/// group 1 is the bare type name.
static QUALIFIED_SEGMENT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"<(?:impl\s+)?(?:\w+::)*(\w+)(?:<[^<>]*>)?(?:\s+as\s+[^<>]+(?:<[^<>]*>)?)?>").ok()
});

/// Last two `::` segments of a function path.
static FUNCTION_TAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([^:]+::[^:]+)$").ok());

const MARKER_SUFFIX: &str = "::marker";

/// Where a [`StructuredError`](crate::StructuredError) was constructed.
///
/// The zero value (line `0`, empty file and function) means no trace was
/// captured.
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
    derive_more::Display,
)]
#[display("{}:{} in {}", file, line, function)]
pub struct CallerTrace {
    /// Line of the capture site
    #[serde(default, deserialize_with = "null_as_default")]
    line: u32,
    /// Basename of the source file
    #[serde(default, deserialize_with = "null_as_default")]
    file: String,
    /// Trailing segments of the enclosing function path
    #[serde(default, deserialize_with = "null_as_default")]
    function: String,
}

impl CallerTrace {
    /// Build a trace from raw parts, trimming the file to its basename and the
    /// function to its trailing `module::name` segments.
    ///
    /// Parts that do not look like a path are kept as given.
    ///
    /// ```
    /// use errplus_core::CallerTrace;
    ///
    /// let trace =
    ///     CallerTrace::from_parts(42, "/build/app/src/worker.rs", "app::jobs::worker::run");
    /// assert_eq!(trace.file(), "worker.rs");
    /// assert_eq!(trace.function(), "worker::run");
    /// ```
    pub fn from_parts(line: u32, file: &str, function: &str) -> Self {
        Self {
            line,
            file: trim_file(file),
            function: trim_function(function),
        }
    }

    /// Record the caller's file and line under the given function name.
    #[track_caller]
    pub fn located(function: &str) -> Self {
        let location = std::panic::Location::caller();
        Self::from_parts(location.line(), location.file(), function)
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.line == 0 && self.file.is_empty() && self.function.is_empty()
    }
}

fn trim_file(file: &str) -> String {
    FILE_NAME
        .as_ref()
        .and_then(|re| re.captures(file))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .or_else(|| last_component(file))
        .unwrap_or(file)
        .to_string()
}

/// Text after the last separator, for names the pattern rejects.
fn last_component(file: &str) -> Option<&str> {
    file.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && name.len() < file.len())
}

fn trim_function(function: &str) -> String {
    let normalized = QUALIFIED_SEGMENT
        .as_ref()
        .map_or(std::borrow::Cow::Borrowed(function), |re| {
            re.replace_all(function, "$1")
        });
    FUNCTION_TAIL
        .as_ref()
        .and_then(|re| re.captures(&normalized))
        .and_then(|caps| caps.get(1))
        .map_or(&*normalized, |m| m.as_str())
        .to_string()
}

/// Strip the marker item name appended by [`function_path!`](crate::function_path).
#[doc(hidden)]
pub fn strip_marker(name: &'static str) -> &'static str {
    name.strip_suffix(MARKER_SUFFIX).unwrap_or(name)
}

/// Fully qualified path of the enclosing function, e.g. `my_crate::jobs::run`.
///
/// Closures show up as a trailing `{{closure}}` segment.
#[macro_export]
macro_rules! function_path {
    () => {{
        fn marker() {}
        $crate::__private::strip_marker(::std::any::type_name_of_val(&marker))
    }};
}

/// Capture the call site as a [`CallerTrace`].
///
/// Expands where it is written, so the trace records the invoking line, the
/// basename of its file and the trailing segments of the enclosing function.
///
/// ```
/// use errplus_core::capture_trace;
///
/// fn load_profile() -> errplus_core::CallerTrace {
///     capture_trace!()
/// }
///
/// let trace = load_profile();
/// assert!(trace.function().ends_with("load_profile"));
/// assert!(!trace.file().contains('/'));
/// ```
#[macro_export]
macro_rules! capture_trace {
    () => {
        $crate::CallerTrace::from_parts(::std::line!(), ::std::file!(), $crate::function_path!())
    };
}
