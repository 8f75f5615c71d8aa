//! Typed reference parsing
//!
//! References are path-like strings embedded in playlist entries. Parsing
//! tries each known pattern in a fixed priority order, first match wins; a
//! string matching no pattern parses as [`RefKind::Unmatched`] and resolves
//! to zero entries. A string that matches a pattern's shape but carries a
//! non-integer id segment is a hard [`Error::InvalidRef`].

use attic_core::{Error, Result};
use url::form_urlencoded;

/// Artist track selection modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Tracks that title-match a release of type "Single"
    Singles,
    /// Tracks ranked by the external popularity source
    Popular,
    /// Every known track, album by album in album order
    Tracks,
    /// Deep cuts: neither popular nor singles
    Deep,
    /// A randomized popular/catalog blend
    Shuffle,
    /// The similar-artists radio blend
    Similar,
}

impl SelectionMode {
    /// Parse a mode word; `None` for unknown words, which resolve to zero
    /// entries rather than an error
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "singles" => Some(SelectionMode::Singles),
            "popular" => Some(SelectionMode::Popular),
            "tracks" => Some(SelectionMode::Tracks),
            "deep" => Some(SelectionMode::Deep),
            "shuffle" | "playlist" => Some(SelectionMode::Shuffle),
            "similar" | "radio" => Some(SelectionMode::Similar),
            _ => None,
        }
    }
}

/// The closed set of reference patterns, in dispatch priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefKind {
    /// `/music/artists/{id}/{mode}`
    Artist {
        /// Artist id
        id: i64,
        /// Selection mode
        mode: SelectionMode,
    },
    /// `/music/releases/{id}/tracks`
    ReleaseTracks {
        /// Release id
        id: i64,
    },
    /// `/music/tracks/{id}`
    Track {
        /// Track id
        id: i64,
    },
    /// `/music/search?q={q}[&radio=1]`
    Search {
        /// Query string; empty yields no entries
        query: String,
        /// Shuffle-and-truncate to the radio limit
        radio: bool,
    },
    /// `/music/radio/{id}`
    Radio {
        /// Station id
        id: i64,
    },
    /// `/movies/{id}`
    Movie {
        /// Movie id
        id: i64,
    },
    /// `/series/{id}`
    Series {
        /// Series id
        id: i64,
    },
    /// Anything else; resolves to zero entries
    Unmatched,
}

/// Parse a reference string into its typed variant.
pub fn parse(path: &str) -> Result<RefKind> {
    if let Some(rest) = path.strip_prefix("/music/artists/") {
        let mut parts = rest.splitn(2, '/');
        let id = parts.next().unwrap_or_default();
        if let Some(mode) = parts.next() {
            if !mode.contains('/') {
                return match SelectionMode::parse(mode) {
                    Some(mode) => Ok(RefKind::Artist {
                        id: parse_id(id, path)?,
                        mode,
                    }),
                    None => Ok(RefKind::Unmatched),
                };
            }
        }
        return Ok(RefKind::Unmatched);
    }

    if let Some(rest) = path.strip_prefix("/music/releases/") {
        if let Some(id) = rest.strip_suffix("/tracks") {
            if !id.is_empty() && !id.contains('/') {
                return Ok(RefKind::ReleaseTracks {
                    id: parse_id(id, path)?,
                });
            }
        }
        return Ok(RefKind::Unmatched);
    }

    if let Some(id) = path.strip_prefix("/music/tracks/") {
        if !id.is_empty() && !id.contains('/') {
            return Ok(RefKind::Track {
                id: parse_id(id, path)?,
            });
        }
        return Ok(RefKind::Unmatched);
    }

    if path.starts_with("/music/search") {
        let query_string = path.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let mut query = String::new();
        let mut radio = false;
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            match key.as_ref() {
                "q" => query = value.into_owned(),
                // any non-empty value counts
                "radio" => radio = !value.is_empty(),
                _ => {}
            }
        }
        return Ok(RefKind::Search { query, radio });
    }

    if let Some(id) = path.strip_prefix("/music/radio/") {
        if !id.is_empty() && !id.contains('/') {
            return Ok(RefKind::Radio {
                id: parse_id(id, path)?,
            });
        }
        return Ok(RefKind::Unmatched);
    }

    if let Some(id) = path.strip_prefix("/movies/") {
        if !id.is_empty() && !id.contains('/') {
            return Ok(RefKind::Movie {
                id: parse_id(id, path)?,
            });
        }
        return Ok(RefKind::Unmatched);
    }

    if let Some(id) = path.strip_prefix("/series/") {
        if !id.is_empty() && !id.contains('/') {
            return Ok(RefKind::Series {
                id: parse_id(id, path)?,
            });
        }
        return Ok(RefKind::Unmatched);
    }

    Ok(RefKind::Unmatched)
}

fn parse_id(segment: &str, path: &str) -> Result<i64> {
    segment
        .parse()
        .map_err(|_| Error::InvalidRef(path.to_string()))
}
