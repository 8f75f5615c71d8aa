//! Music catalog types
//!
//! These are immutable snapshots of already-synced catalog rows. The
//! resolver reads them through the `Catalog` trait and never mutates them;
//! rank updates and re-syncs belong to the ingestion subsystem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Music artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique artist identifier
    pub id: i64,

    /// Artist name
    pub name: String,

    /// Name used for sorting ("Beatles, The")
    pub sort_name: String,

    /// MusicBrainz artist id
    pub mbid: String,
}

/// Music release (album, single, EP)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Unique release identifier
    pub id: i64,

    /// Artist name
    pub artist: String,

    /// Release title
    pub name: String,

    /// Release group type ("Album", "Single", "EP")
    pub kind: String,

    /// Earliest known release date
    pub date: Option<NaiveDate>,

    /// MusicBrainz release id
    pub mbid: String,
}

impl Release {
    /// True when this release is a single
    pub fn is_single(&self) -> bool {
        self.kind == "Single"
    }
}

/// Music track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: i64,

    /// Artist name
    pub artist: String,

    /// Release (album) title
    pub release: String,

    /// Track title
    pub title: String,

    /// Track number within the disc
    pub track_num: u32,

    /// Disc number within the release
    pub disc_num: u32,

    /// Stable content-addressable identifier (bucket ETag). Survives a full
    /// catalog re-sync, unlike the local row id.
    pub etag: String,

    /// Byte length of the underlying object
    pub size: i64,

    /// Earliest release date for the containing release
    pub release_date: Option<NaiveDate>,
}

impl Track {
    /// Case-sensitive (artist, title) key used for deduplication in the
    /// shuffle and similar-artist selections. Deliberately conflates
    /// same-titled remixes and live versions.
    pub fn dedup_key(&self) -> (&str, &str) {
        (&self.artist, &self.title)
    }
}
