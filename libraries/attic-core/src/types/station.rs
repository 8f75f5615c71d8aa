//! Radio station types

use crate::types::User;
use serde::{Deserialize, Serialize};

/// Station category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationType {
    /// Songs by a single artist
    Artist,
    /// Songs from one or more genres
    Genre,
    /// Songs from an artist and artists similar to them
    Similar,
    /// Songs from a time period
    Period,
    /// Episodes of a podcast series
    Series,
    /// An internet radio stream
    Stream,
    /// Anything else
    Other,
}

impl StationType {
    /// Convert to the string stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            StationType::Artist => "artist",
            StationType::Genre => "genre",
            StationType::Similar => "similar",
            StationType::Period => "period",
            StationType::Series => "series",
            StationType::Stream => "stream",
            StationType::Other => "other",
        }
    }

    /// Parse from the stored string; unknown values map to `Other`
    pub fn from_str(s: &str) -> Self {
        match s {
            "artist" => StationType::Artist,
            "genre" => StationType::Genre,
            "similar" => StationType::Similar,
            "period" => StationType::Period,
            "series" => StationType::Series,
            "stream" => StationType::Stream,
            _ => StationType::Other,
        }
    }
}

/// A named, ownable radio definition wrapping a single reference.
///
/// The cached `playlist` blob is regenerated on every read and never
/// trusted as authoritative between reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station identifier
    pub id: i64,

    /// Owner user name
    pub user: String,

    /// Station display name
    pub name: String,

    /// The underlying symbolic reference; for `Stream` stations this is the
    /// stream URL itself
    #[serde(rename = "ref")]
    pub reference: String,

    /// Visible to users other than the owner
    pub shared: bool,

    /// Station category
    #[serde(rename = "type")]
    pub kind: StationType,

    /// Creator credited on stream entries
    #[serde(default)]
    pub creator: String,

    /// Station artwork URL
    #[serde(default)]
    pub image: String,

    /// Cached serialized playlist document; refreshed on every read
    #[serde(skip)]
    pub playlist: Vec<u8>,
}

impl Station {
    /// Visibility rule: the owner always sees their stations, everyone sees
    /// shared ones. A non-visible station behaves exactly like a missing one.
    pub fn visible(&self, user: &User) -> bool {
        self.user == user.name || self.shared
    }
}
