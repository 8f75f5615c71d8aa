//! Boundary traits consumed by the resolver
//!
//! `Catalog` abstracts lookup and query over already-synced media metadata
//! so the resolver never touches SQL directly; `Locator` is supplied by the
//! serving layer and turns catalog rows into client-facing URLs.

use crate::error::Result;
use crate::types::{Artist, Episode, Movie, Release, Series, Station, Track, User};
use async_trait::async_trait;

/// Lookup and query operations over the synced media catalog.
///
/// Every lookup fails with the matching not-found error kind when the id is
/// absent. Query operations return empty lists rather than errors when
/// nothing matches.
#[async_trait]
pub trait Catalog: Send + Sync {
    // ========================================================================
    // Lookups
    // ========================================================================

    /// Get artist by ID
    async fn artist(&self, id: i64) -> Result<Artist>;

    /// Get release by ID
    async fn release(&self, id: i64) -> Result<Release>;

    /// Get track by ID
    async fn track(&self, id: i64) -> Result<Track>;

    /// Get movie by ID
    async fn movie(&self, id: i64) -> Result<Movie>;

    /// Get series by ID
    async fn series(&self, id: i64) -> Result<Series>;

    /// Get station by ID
    async fn station(&self, id: i64) -> Result<Station>;

    // ========================================================================
    // Selection queries
    // ========================================================================

    /// Every known track for the artist, ordered by release name, release
    /// date, disc number, then track number
    async fn artist_tracks(&self, artist: &str) -> Result<Vec<Track>>;

    /// Tracks whose title matches a release of type "Single" by the same
    /// artist, ordered by each single's earliest release date
    async fn artist_singles(&self, artist: &str, limit: usize) -> Result<Vec<Track>>;

    /// Tracks ranked by the external popularity source, most popular first
    async fn artist_popular(&self, artist: &str, limit: usize) -> Result<Vec<Track>>;

    /// Artists most similar to the given one, most similar first
    async fn similar_artists(&self, artist: &str, limit: usize) -> Result<Vec<Artist>>;

    /// All tracks of a release in disc/track order
    async fn release_tracks(&self, release: &Release) -> Result<Vec<Track>>;

    /// All episodes of a series, newest first
    async fn series_episodes(&self, series: &Series) -> Result<Vec<Episode>>;

    /// Free-text search over the track index, returning up to `limit` ranked
    /// results
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Track>>;

    // ========================================================================
    // Stations
    // ========================================================================

    /// All stations visible to the user
    async fn stations(&self, user: &User) -> Result<Vec<Station>>;

    /// Create a station, assigning its id
    async fn create_station(&self, station: &Station) -> Result<Station>;

    /// Persist a station's fields and cached playlist blob. Last write wins;
    /// refresh is idempotent for a given catalog snapshot.
    async fn update_station(&self, station: &Station) -> Result<()>;

    /// Delete a station
    async fn delete_station(&self, station: &Station) -> Result<()>;
}

/// Serving-layer URL construction for playable media and artwork.
///
/// Locations may be internal indirection paths (`/api/tracks/{id}/location`)
/// rather than direct URLs; the serving layer turns them into byte streams
/// or redirects.
pub trait Locator: Send + Sync {
    /// Client-facing locator for a track
    fn locate_track(&self, track: &Track) -> String;

    /// Client-facing locator for a movie
    fn locate_movie(&self, movie: &Movie) -> String;

    /// Client-facing locator for an episode
    fn locate_episode(&self, episode: &Episode) -> String;

    /// Artwork URL for a track
    fn track_image(&self, track: &Track) -> String;

    /// Artwork URL for a movie
    fn movie_image(&self, movie: &Movie) -> String;

    /// Artwork URL for an episode
    fn episode_image(&self, episode: &Episode) -> String;
}
