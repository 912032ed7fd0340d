//! Canonical JSON rendering and decoding.

use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{CallerTrace, StructuredError, with_trace};

impl StructuredError {
    /// Render the canonical JSON text.
    ///
    /// All five top-level fields are always present, zero values included.
    /// Rendering does not fail; should serialization ever error the result is
    /// an empty string.
    pub fn as_text(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A failed [`decode`], itself a [`StructuredError`].
///
/// Dereferences to the failure so its message and trace are available
/// directly; [`partial`](Self::partial) holds the zero-valued result of the
/// attempted decode.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Deref,
    derive_getters::Getters,
)]
#[display("{}", error)]
pub struct DecodeFailure {
    /// What decoding produced before failing
    partial: StructuredError,
    /// The failure, traced to the `decode` call site
    #[deref]
    error: StructuredError,
}

impl DecodeFailure {
    /// Take the failure as a plain structured error.
    pub fn into_error(self) -> StructuredError {
        self.error
    }
}

impl std::error::Error for DecodeFailure {}

impl From<DecodeFailure> for StructuredError {
    fn from(failure: DecodeFailure) -> Self {
        failure.into_error()
    }
}

/// Decode the canonical JSON text into a [`StructuredError`].
///
/// The text must be a JSON object. Missing fields and `null` values become
/// zero values and unknown fields are ignored; anything else that does not
/// fit the shape, including mismatched field types, is a failure. The
/// failure's trace records the file and line that called `decode`.
///
/// ```
/// use errplus_core::decode;
///
/// let err = decode(r#"{"info":"disk full","code":507}"#).unwrap();
/// assert_eq!(err.info(), "disk full");
/// assert_eq!(*err.code(), 507);
///
/// let failure = decode("not json").unwrap_err();
/// assert!(!failure.info().is_empty());
/// ```
#[track_caller]
pub fn decode(text: &str) -> Result<StructuredError, DecodeFailure> {
    let location = std::panic::Location::caller();
    let function = crate::function_path!();
    parse(text).map_err(|e| {
        debug!(
            error = %e,
            line = location.line(),
            file = location.file(),
            "Failed to decode structured error"
        );
        let trace = CallerTrace::from_parts(location.line(), location.file(), function);
        DecodeFailure {
            partial: StructuredError::default(),
            error: StructuredError::with_options(e, [with_trace(trace)]),
        }
    })
}

/// Decode an error received as a generic error value.
///
/// Recovers the structure of a [`StructuredError`] that was passed around as
/// `Box<dyn Error>` or re-wrapped by a transport that kept only its message.
#[track_caller]
pub fn decode_error(err: &(dyn std::error::Error + '_)) -> Result<StructuredError, DecodeFailure> {
    decode(&err.to_string())
}

/// Decoding through `str::parse`.
///
/// `parse` does not forward the caller's location, so failure traces point at
/// this impl in `codec.rs`; call [`decode`] directly to trace the call site.
impl std::str::FromStr for StructuredError {
    type Err = DecodeFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

fn parse(text: &str) -> Result<StructuredError, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom(format!(
            "expected a JSON object, found {}",
            kind_of(&value)
        )));
    }
    serde_json::from_value(value)
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
