//! Wire scalar types for the osu! v2 API.
//!
//! This crate defines the leaf types shared by the model layer:
//! - Wire enums ([`Ruleset`], [`RankStatus`], [`ChangelogEntryType`]) with
//!   explicit bidirectional tag tables via the [`WireEnum`] trait
//! - [`Timestamp`] — RFC 3339 timestamps with optional UTC offset
//! - [`Seconds`] — durations wire-encoded as whole seconds
//!
//! All conversions here are pure and stateless: no I/O, no logging, no
//! retries. Anything endpoint- or entity-specific belongs in the model
//! crate, not here.

mod duration;
mod enums;
mod timestamp;

pub use duration::Seconds;
pub use enums::{ChangelogEntryType, EnumTable, RankStatus, Ruleset, WireEnum};
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by scalar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A wire string did not match any declared tag of an enum.
    #[error("unknown wire tag {tag:?} for enum {enum_name:?}")]
    UnknownTag {
        enum_name: &'static str,
        tag: String,
    },

    /// A wire string could not be parsed as an RFC 3339 timestamp.
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
}
