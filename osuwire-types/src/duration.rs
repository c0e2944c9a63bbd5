//! Durations wire-encoded as whole seconds.
//!
//! Beatmap lengths and play times cross the wire as plain integers
//! (`"hit_length": 90`). Negative values are accepted and preserved;
//! clamping is a domain decision, not a conversion one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed duration in whole seconds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Seconds(i64);

impl Seconds {
    /// Wraps a wire value.
    #[must_use]
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Converts a `chrono::Duration`, truncating toward zero to whole
    /// seconds (sub-second precision does not survive the wire).
    #[must_use]
    pub fn from_duration(d: chrono::Duration) -> Self {
        Self(d.num_seconds())
    }

    /// The wire representation.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Returns the value as a `chrono::Duration`.
    #[must_use]
    pub fn to_duration(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.0)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<i64> for Seconds {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl From<Seconds> for i64 {
    fn from(secs: Seconds) -> Self {
        secs.0
    }
}
