//! Requeue hint for message-broker consumers.

use serde::{Deserialize, Serialize};

use crate::codec::null_as_default;

/// Advice to a queue consumer on whether the failed message should be requeued.
///
/// Absence is equivalent to `requeue = false`. Acting on the hint is up to the
/// consumer.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct QueueHint {
    /// Requeue the triggering message
    #[serde(default, deserialize_with = "null_as_default")]
    requeue: bool,
}

impl From<bool> for QueueHint {
    fn from(requeue: bool) -> Self {
        Self::new(requeue)
    }
}
