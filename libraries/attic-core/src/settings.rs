//! Typed settings for search and radio behavior

use serde::{Deserialize, Serialize};

/// Search and radio limits plus station seeding inputs.
///
/// Loaded by the serving layer (TOML + environment overrides) and passed to
/// the resolver by reference; the core never reads configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicSettings {
    /// Result cap for plain free-text search references
    pub search_limit: usize,

    /// Result cap for the search phase of `radio=1` references, before the
    /// shuffle-and-truncate step
    pub radio_search_limit: usize,

    /// Final size cap for radio playlists
    pub radio_limit: usize,

    /// Result cap for the popular selection
    pub popular_limit: usize,

    /// Result cap for the singles selection
    pub singles_limit: usize,

    /// Popular tracks taken from the seed artist in the similar-artists blend
    pub radio_depth: usize,

    /// Number of similar artists blended into artist radio
    pub radio_breadth: usize,

    /// Genres seeded as shared stations
    pub radio_genres: Vec<String>,

    /// Decade buckets seeded as shared stations (start years)
    pub radio_decades: Vec<u32>,

    /// Internet radio streams seeded as shared stations
    pub radio_streams: Vec<StreamSettings>,

    /// Named custom queries seeded as shared stations
    pub radio_other: Vec<RadioQuery>,
}

impl Default for MusicSettings {
    fn default() -> Self {
        Self {
            search_limit: 100,
            radio_search_limit: 1000,
            radio_limit: 25,
            popular_limit: 50,
            singles_limit: 50,
            radio_depth: 10,
            radio_breadth: 10,
            radio_genres: Vec::new(),
            radio_decades: vec![1960, 1970, 1980, 1990, 2000, 2010, 2020],
            radio_streams: Vec::new(),
            radio_other: Vec::new(),
        }
    }
}

/// A seeded internet radio stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSettings {
    /// Station display name
    pub name: String,

    /// Stream URL
    pub url: String,

    /// Creator credited on entries
    #[serde(default)]
    pub creator: String,

    /// Artwork URL
    #[serde(default)]
    pub image: String,
}

/// A seeded named query station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioQuery {
    /// Station display name
    pub name: String,

    /// The reference the station wraps
    #[serde(rename = "ref")]
    pub reference: String,
}
