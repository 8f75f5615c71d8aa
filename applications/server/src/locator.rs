/// API locator: turns catalog rows into client-facing indirection paths.
///
/// Locations point at server endpoints, not storage URLs, so that the
/// delivery layer can redirect or stream without re-resolving playlists.
use attic_core::{Episode, Locator, Movie, Track};

#[derive(Debug, Clone, Copy, Default)]
pub struct ApiLocator;

impl Locator for ApiLocator {
    fn locate_track(&self, track: &Track) -> String {
        format!("/api/tracks/{}/location", track.id)
    }

    fn locate_movie(&self, movie: &Movie) -> String {
        format!("/api/movies/{}/location", movie.id)
    }

    fn locate_episode(&self, episode: &Episode) -> String {
        format!("/api/episodes/{}/location", episode.id)
    }

    fn track_image(&self, track: &Track) -> String {
        format!("/api/tracks/{}/image", track.id)
    }

    fn movie_image(&self, movie: &Movie) -> String {
        format!("/api/movies/{}/image", movie.id)
    }

    fn episode_image(&self, episode: &Episode) -> String {
        format!("/api/episodes/{}/image", episode.id)
    }
}
