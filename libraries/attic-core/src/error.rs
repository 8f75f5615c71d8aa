//! Core error types for Attic
use thiserror::Error;

/// Result type alias using `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Attic core
#[derive(Error, Debug)]
pub enum Error {
    /// Artist not found
    #[error("artist not found: {0}")]
    ArtistNotFound(i64),

    /// Release not found
    #[error("release not found: {0}")]
    ReleaseNotFound(i64),

    /// Track not found
    #[error("track not found: {0}")]
    TrackNotFound(i64),

    /// Movie not found
    #[error("movie not found: {0}")]
    MovieNotFound(i64),

    /// Series not found
    #[error("series not found: {0}")]
    SeriesNotFound(i64),

    /// Station not found
    #[error("station not found: {0}")]
    StationNotFound(i64),

    /// Saved playlist not found
    #[error("playlist not found for user: {0}")]
    PlaylistNotFound(String),

    /// A reference matched a known pattern but carried a malformed id segment
    #[error("invalid reference: {0}")]
    InvalidRef(String),

    /// A station was reached again while resolving its own playlist
    #[error("station cycle detected at station {0}")]
    StationCycle(i64),

    /// JSON-Patch decode or apply failure
    #[error("patch error: {0}")]
    Patch(String),

    /// Playlist document marshal/unmarshal failure
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Storage-related errors
    #[error("storage error: {0}")]
    Storage(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a patch error
    pub fn patch(msg: impl Into<String>) -> Self {
        Self::Patch(msg.into())
    }

    /// True for the not-found family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ArtistNotFound(_)
                | Error::ReleaseNotFound(_)
                | Error::TrackNotFound(_)
                | Error::MovieNotFound(_)
                | Error::SeriesNotFound(_)
                | Error::StationNotFound(_)
                | Error::PlaylistNotFound(_)
        )
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_family() {
        assert!(Error::TrackNotFound(7).is_not_found());
        assert!(Error::StationNotFound(1).is_not_found());
        assert!(!Error::InvalidRef("x".to_string()).is_not_found());
        assert!(!Error::StationCycle(3).is_not_found());
    }
}
