//! Wire enums and their tag tables.
//!
//! The API encodes enums as fixed lowercase strings ("osu", "ranked",
//! "add", ...). Each enum here carries an explicit bidirectional table:
//! decoding is an exact, case-sensitive match against the declared tags
//! and fails on anything unmapped — no fallback variant, no guessing.

use crate::{Error, Result};

/// A typed enum with a canonical wire tag per variant.
pub trait WireEnum: Sized + Copy {
    /// The name the model layer registers this enum's table under.
    const NAME: &'static str;

    /// The canonical wire tag of this variant.
    fn tag(&self) -> &'static str;

    /// Looks up a variant by its wire tag. Exact match, case-sensitive.
    fn from_tag(tag: &str) -> Result<Self>;
}

/// The tag table of one wire enum, usable without the concrete type.
///
/// The model layer's registry holds these to validate wire strings for
/// shapes that reference an enum by name rather than by Rust type.
#[derive(Debug, Clone, Copy)]
pub struct EnumTable {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

impl EnumTable {
    /// Returns true if `tag` is one of the declared wire tags.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }

    /// Returns the first tag that appears more than once, if any.
    /// Registration rejects tables with duplicate tags.
    #[must_use]
    pub fn duplicate_tag(&self) -> Option<&'static str> {
        for (i, tag) in self.tags.iter().enumerate() {
            if self.tags[..i].contains(tag) {
                return Some(tag);
            }
        }
        None
    }
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $wire_name:literal {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// The bidirectional tag table for this enum.
            pub const TABLE: EnumTable = EnumTable {
                name: $wire_name,
                tags: &[$($tag),+],
            };
        }

        impl WireEnum for $name {
            const NAME: &'static str = $wire_name;

            fn tag(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }

            fn from_tag(tag: &str) -> Result<Self> {
                match tag {
                    $($tag => Ok(Self::$variant),)+
                    other => Err(Error::UnknownTag {
                        enum_name: $wire_name,
                        tag: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// The ruleset (game mode) a score, beatmap, or statistic belongs to.
    Ruleset as "ruleset" {
        Osu => "osu",
        Taiko => "taiko",
        /// osu!catch; the wire tag predates the mode's rename.
        Fruits => "fruits",
        Mania => "mania",
    }
}

wire_enum! {
    /// The ranked status of a beatmap or beatmapset.
    RankStatus as "rank_status" {
        Graveyard => "graveyard",
        Wip => "wip",
        Pending => "pending",
        Ranked => "ranked",
        Approved => "approved",
        Qualified => "qualified",
        Loved => "loved",
    }
}

wire_enum! {
    /// The type of a changelog entry (an addition or a bug fix).
    ChangelogEntryType as "changelog_entry_type" {
        Add => "add",
        Fix => "fix",
    }
}
