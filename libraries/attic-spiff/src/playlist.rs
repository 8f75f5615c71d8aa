//! Playlist document model

use attic_core::Result;
use serde::{Deserialize, Serialize};

/// Media kind for music playlists
pub const TYPE_MUSIC: &str = "music";
/// Media kind for video playlists
pub const TYPE_VIDEO: &str = "video";
/// Media kind for podcast playlists
pub const TYPE_PODCAST: &str = "podcast";
/// Media kind for stream playlists
pub const TYPE_STREAM: &str = "stream";

/// The root playlist document.
///
/// `index` and `position` are client cursor state; the resolver neither
/// reads nor writes them and change detection ignores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Descriptive metadata and the track list
    #[serde(rename = "playlist")]
    pub spiff: Spiff,

    /// Client cursor: current track index, -1 when unset
    #[serde(default = "default_index")]
    pub index: i64,

    /// Client cursor: playback position within the current track
    #[serde(default)]
    pub position: f64,

    /// Media kind ("music", "video", "podcast", "stream")
    #[serde(rename = "type", default)]
    pub kind: String,
}

fn default_index() -> i64 {
    -1
}

/// Playlist metadata plus the ordered entry list.
///
/// Optional fields are omitted from serialized documents when empty to keep
/// documents compact and patch diffs minimal. The `track` array is always
/// emitted, `[]` when empty, never null.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spiff {
    /// Playlist title
    pub title: String,

    /// Playlist creator
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub creator: String,

    /// Artwork URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Canonical self URI
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    /// ISO-8601 date
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,

    /// Ordered entries; resolution replaces reference entries in place
    #[serde(rename = "track", default)]
    pub entries: Vec<Entry>,
}

/// One playlist row: either a symbolic reference (only `$ref` set) or a
/// concrete media entry (everything but `$ref`).
///
/// `location`, `identifier`, and `size` are historical one-element lists
/// kept for wire compatibility, not true multi-valued fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Symbolic reference to expand, e.g. `/music/artists/42/popular`
    #[serde(rename = "$ref", default, skip_serializing_if = "String::is_empty")]
    pub reference: String,

    /// Artist, author, or a fixed literal for non-music media
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub creator: String,

    /// Release or series title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub album: String,

    /// Item title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Artwork URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// One-element list holding the playable locator
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<String>,

    /// One-element list holding the stable external identifier (ETag or
    /// feed GUID hash), never a local database key
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<String>,

    /// One-element list holding the byte length, when known
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub size: Vec<i64>,
}

impl Entry {
    /// Create a reference entry
    pub fn new_reference(path: impl Into<String>) -> Self {
        Self {
            reference: path.into(),
            ..Self::default()
        }
    }

    /// True when this entry is an unresolved reference
    pub fn is_reference(&self) -> bool {
        !self.reference.is_empty()
    }
}

impl Playlist {
    /// Create an empty playlist of the given media kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            spiff: Spiff::default(),
            index: -1,
            position: 0.0,
            kind: kind.into(),
        }
    }

    /// Serialize to the persisted/wire JSON form
    pub fn marshal(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Deserialize a playlist document
pub fn unmarshal(data: &[u8]) -> Result<Playlist> {
    Ok(serde_json::from_slice(data)?)
}
