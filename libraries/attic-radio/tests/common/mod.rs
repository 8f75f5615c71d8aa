//! In-memory catalog fixture shared by the resolver tests.

use async_trait::async_trait;
use attic_core::{
    Artist, Catalog, Episode, Error, Locator, Movie, Release, Result, Series, Station, Track, User,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct TestCatalog {
    pub artists: Vec<Artist>,
    pub releases: Vec<Release>,
    pub tracks: Vec<Track>,
    pub movies: Vec<Movie>,
    pub series: Vec<Series>,
    pub episodes: Vec<Episode>,
    /// artist name -> track titles in popularity rank order
    pub popular: HashMap<String, Vec<String>>,
    /// artist name -> similar artist names, most similar first
    pub similar: HashMap<String, Vec<String>>,
    pub stations: Mutex<HashMap<i64, Station>>,
    next_station_id: AtomicI64,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self {
            next_station_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    pub fn add_artist(&mut self, id: i64, name: &str) {
        self.artists.push(Artist {
            id,
            name: name.to_string(),
            sort_name: name.to_string(),
            mbid: String::new(),
        });
    }

    pub fn add_release(&mut self, id: i64, artist: &str, name: &str, kind: &str, date: &str) {
        self.releases.push(Release {
            id,
            artist: artist.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
            mbid: String::new(),
        });
    }

    pub fn add_track(&mut self, id: i64, artist: &str, release: &str, title: &str, num: u32) {
        self.tracks.push(Track {
            id,
            artist: artist.to_string(),
            release: release.to_string(),
            title: title.to_string(),
            track_num: num,
            disc_num: 1,
            etag: format!("etag-{id}"),
            size: 1000 + id,
            release_date: None,
        });
    }

    pub fn add_station(&self, station: Station) -> Station {
        let mut s = station;
        s.id = self.next_station_id.fetch_add(1, Ordering::SeqCst);
        self.stations.lock().unwrap().insert(s.id, s.clone());
        s
    }

    pub fn stored_station(&self, id: i64) -> Option<Station> {
        self.stations.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl Catalog for TestCatalog {
    async fn artist(&self, id: i64) -> Result<Artist> {
        self.artists
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(Error::ArtistNotFound(id))
    }

    async fn release(&self, id: i64) -> Result<Release> {
        self.releases
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(Error::ReleaseNotFound(id))
    }

    async fn track(&self, id: i64) -> Result<Track> {
        self.tracks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(Error::TrackNotFound(id))
    }

    async fn movie(&self, id: i64) -> Result<Movie> {
        self.movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(Error::MovieNotFound(id))
    }

    async fn series(&self, id: i64) -> Result<Series> {
        self.series
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(Error::SeriesNotFound(id))
    }

    async fn station(&self, id: i64) -> Result<Station> {
        self.stored_station(id).ok_or(Error::StationNotFound(id))
    }

    async fn artist_tracks(&self, artist: &str) -> Result<Vec<Track>> {
        let mut tracks: Vec<Track> = self
            .tracks
            .iter()
            .filter(|t| t.artist == artist)
            .cloned()
            .collect();
        tracks.sort_by(|a, b| {
            (&a.release, a.release_date, a.disc_num, a.track_num).cmp(&(
                &b.release,
                b.release_date,
                b.disc_num,
                b.track_num,
            ))
        });
        Ok(tracks)
    }

    async fn artist_singles(&self, artist: &str, limit: usize) -> Result<Vec<Track>> {
        let mut singles: Vec<&Release> = self
            .releases
            .iter()
            .filter(|r| r.artist == artist && r.is_single())
            .collect();
        singles.sort_by_key(|r| r.date);

        let mut tracks = Vec::new();
        for single in singles {
            for t in self
                .tracks
                .iter()
                .filter(|t| t.artist == artist && t.title == single.name)
            {
                if tracks.iter().all(|s: &Track| s.id != t.id) {
                    tracks.push(t.clone());
                }
            }
        }
        tracks.truncate(limit);
        Ok(tracks)
    }

    async fn artist_popular(&self, artist: &str, limit: usize) -> Result<Vec<Track>> {
        let titles = match self.popular.get(artist) {
            Some(titles) => titles,
            None => return Ok(Vec::new()),
        };
        let mut tracks = Vec::new();
        for title in titles {
            if let Some(t) = self
                .tracks
                .iter()
                .find(|t| t.artist == artist && &t.title == title)
            {
                tracks.push(t.clone());
            }
        }
        tracks.truncate(limit);
        Ok(tracks)
    }

    async fn similar_artists(&self, artist: &str, limit: usize) -> Result<Vec<Artist>> {
        let names = match self.similar.get(artist) {
            Some(names) => names,
            None => return Ok(Vec::new()),
        };
        let mut artists = Vec::new();
        for name in names.iter().take(limit) {
            if let Some(a) = self.artists.iter().find(|a| &a.name == name) {
                artists.push(a.clone());
            }
        }
        Ok(artists)
    }

    async fn release_tracks(&self, release: &Release) -> Result<Vec<Track>> {
        let mut tracks: Vec<Track> = self
            .tracks
            .iter()
            .filter(|t| t.artist == release.artist && t.release == release.name)
            .cloned()
            .collect();
        tracks.sort_by_key(|t| (t.disc_num, t.track_num));
        Ok(tracks)
    }

    async fn series_episodes(&self, series: &Series) -> Result<Vec<Episode>> {
        let mut episodes: Vec<Episode> = self
            .episodes
            .iter()
            .filter(|e| e.series_id == series.id)
            .cloned()
            .collect();
        episodes.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(episodes)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Track>> {
        Ok(self
            .tracks
            .iter()
            .filter(|t| {
                t.artist.contains(query) || t.release.contains(query) || t.title.contains(query)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    async fn stations(&self, user: &User) -> Result<Vec<Station>> {
        let mut visible: Vec<Station> = self
            .stations
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.visible(user))
            .cloned()
            .collect();
        visible.sort_by_key(|s| s.id);
        Ok(visible)
    }

    async fn create_station(&self, station: &Station) -> Result<Station> {
        Ok(self.add_station(station.clone()))
    }

    async fn update_station(&self, station: &Station) -> Result<()> {
        self.stations
            .lock()
            .unwrap()
            .insert(station.id, station.clone());
        Ok(())
    }

    async fn delete_station(&self, station: &Station) -> Result<()> {
        self.stations.lock().unwrap().remove(&station.id);
        Ok(())
    }
}

pub struct TestLocator;

impl Locator for TestLocator {
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
        format!("/img/tracks/{}", track.id)
    }

    fn movie_image(&self, movie: &Movie) -> String {
        format!("/img/movies/{}", movie.id)
    }

    fn episode_image(&self, episode: &Episode) -> String {
        format!("/img/episodes/{}", episode.id)
    }
}
