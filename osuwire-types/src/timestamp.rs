//! RFC 3339 timestamps as the API sends them.
//!
//! The wire form is ISO 8601 with an optional explicit offset, but the
//! API is not consistent about spelling: `+00:00` and `Z` both occur,
//! and some endpoints include sub-second digits. The parsed instant
//! alone cannot reproduce those differences, so the original text is
//! kept alongside it — encoding is then exactly inverse to parsing.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{Error, Result};

/// A point in time plus the exact wire string it arrived as.
///
/// Equality, ordering and hashing follow the instant, matching
/// `chrono::DateTime` semantics: two timestamps naming the same moment
/// with different offset spellings compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    wire: String,
    instant: DateTime<FixedOffset>,
}

impl Timestamp {
    /// Wraps an existing datetime, using the canonical wire spelling
    /// (explicit offset, sub-second digits only when non-zero).
    #[must_use]
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self {
            wire: instant.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            instant,
        }
    }

    /// Parses the wire representation, remembering it verbatim.
    pub fn parse(s: &str) -> Result<Self> {
        let instant = DateTime::parse_from_rfc3339(s)
            .map_err(|_| Error::InvalidTimestamp(s.to_string()))?;
        Ok(Self {
            wire: s.to_string(),
            instant,
        })
    }

    /// The wire representation. For parsed values this is the input
    /// string unchanged, offset spelling and sub-second digits included.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.wire.clone()
    }

    /// Returns the underlying datetime.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire)
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Self::new(instant)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.wire
    }
}
