//! Identifier types used throughout the WallRide core.
//!
//! Database-backed records (fields, posts, categories, users) use numeric
//! ids assigned by the persistence layer. Media uses random UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

/// Newtype over a raw id: accessor, trimmed parsing, `From`, `Display`
/// and `FromStr`. Constructors are added per type.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident($inner:ty), $err:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Returns the raw id.
            #[must_use]
            pub const fn get(&self) -> $inner {
                self.0
            }

            /// Parses an id from its string form, ignoring surrounding whitespace.
            pub fn parse(s: &str) -> Result<Self, $err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = $err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        id_type!($(#[$meta])* $name(i64), ParseIntError);

        impl $name {
            /// Wraps a raw database id.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a custom field definition.
    FieldId
);

numeric_id!(
    /// Identifier of a post (article or page).
    PostId
);

numeric_id!(
    /// Identifier of a category.
    CategoryId
);

numeric_id!(
    /// Identifier of a user (post author).
    UserId
);

id_type!(
    /// Identifier of an uploaded media item, such as an article cover image.
    MediaId(Uuid),
    uuid::Error
);

impl MediaId {
    /// A fresh id for a new upload.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}
