//! Reference resolution
//!
//! [`Resolver::resolve`] walks a playlist's entries left to right and
//! replaces each reference entry with the concrete entries it expands to,
//! leaving already-concrete entries untouched. Output is built by appending
//! into a fresh accumulator, so all entries produced by one reference stay
//! contiguous at the reference's position.
//!
//! A resolver is request-scoped: it carries the caller's RNG and the set of
//! stations currently being refreshed, which breaks station reference
//! cycles. Build one per request and drop it when done.

use attic_core::{Catalog, Episode, Locator, Movie, MusicSettings, Result, Series, Track, User};
use attic_spiff::{Entry, Playlist};
use futures::future::BoxFuture;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

use crate::reference::{self, RefKind, SelectionMode};
use crate::selection;

/// Request-scoped reference resolver.
///
/// Resolution is fail-fast: the first hard error aborts the whole call and
/// the playlist's entry list must be discarded by the caller. Soft cases
/// (unmatched patterns, invisible stations, empty search queries) contribute
/// zero entries and no error.
pub struct Resolver<'a, R: Rng + Send> {
    catalog: &'a dyn Catalog,
    locator: &'a dyn Locator,
    settings: &'a MusicSettings,
    rng: R,
    // stations currently being refreshed on this call stack
    pub(crate) visiting: HashSet<i64>,
}

impl<'a, R: Rng + Send> Resolver<'a, R> {
    /// Create a resolver over the given catalog snapshot.
    ///
    /// Production callers seed `rng` from entropy; tests pass a seeded RNG
    /// for reproducible shuffles.
    pub fn new(
        catalog: &'a dyn Catalog,
        locator: &'a dyn Locator,
        settings: &'a MusicSettings,
        rng: R,
    ) -> Self {
        Self {
            catalog,
            locator,
            settings,
            rng,
            visiting: HashSet::new(),
        }
    }

    pub(crate) fn catalog(&self) -> &'a dyn Catalog {
        self.catalog
    }

    pub(crate) fn locator(&self) -> &'a dyn Locator {
        self.locator
    }

    /// Expand every reference entry of the playlist in place.
    ///
    /// Boxed so station refresh can recurse through nested `radio`
    /// references; the visited-station set bounds the recursion.
    pub fn resolve<'s>(
        &'s mut self,
        user: &'s User,
        playlist: &'s mut Playlist,
    ) -> BoxFuture<'s, Result<()>> {
        Box::pin(async move {
            let input = std::mem::take(&mut playlist.spiff.entries);
            let mut output = Vec::with_capacity(input.len());
            for entry in input {
                if !entry.is_reference() {
                    output.push(entry);
                    continue;
                }
                self.expand(user, &entry.reference, &mut output).await?;
            }
            playlist.spiff.entries = output;
            Ok(())
        })
    }

    async fn expand(&mut self, user: &User, path: &str, out: &mut Vec<Entry>) -> Result<()> {
        match reference::parse(path)? {
            RefKind::Artist { id, mode } => self.expand_artist(id, mode, out).await,
            RefKind::ReleaseTracks { id } => {
                let release = self.catalog.release(id).await?;
                let tracks = self.catalog.release_tracks(&release).await?;
                self.push_tracks(&tracks, out);
                Ok(())
            }
            RefKind::Track { id } => {
                let track = self.catalog.track(id).await?;
                out.push(track_entry(self.locator, &track));
                Ok(())
            }
            RefKind::Search { query, radio } => self.expand_search(&query, radio, out).await,
            RefKind::Radio { id } => self.expand_radio(user, id, out).await,
            RefKind::Movie { id } => {
                let movie = self.catalog.movie(id).await?;
                out.push(movie_entry(self.locator, &movie));
                Ok(())
            }
            RefKind::Series { id } => {
                let series = self.catalog.series(id).await?;
                let episodes = self.catalog.series_episodes(&series).await?;
                for episode in &episodes {
                    out.push(episode_entry(self.locator, &series, episode));
                }
                Ok(())
            }
            RefKind::Unmatched => {
                debug!(reference = path, "skipping unmatched reference");
                Ok(())
            }
        }
    }

    async fn expand_artist(
        &mut self,
        id: i64,
        mode: SelectionMode,
        out: &mut Vec<Entry>,
    ) -> Result<()> {
        let artist = self.catalog.artist(id).await?;
        let tracks = match mode {
            SelectionMode::Singles => {
                selection::singles(self.catalog, self.settings, &artist).await?
            }
            SelectionMode::Popular => {
                selection::popular(self.catalog, self.settings, &artist).await?
            }
            SelectionMode::Tracks => selection::tracks(self.catalog, &artist).await?,
            SelectionMode::Deep => selection::deep(self.catalog, self.settings, &artist).await?,
            SelectionMode::Shuffle => {
                selection::shuffle(self.catalog, self.settings, &mut self.rng, &artist).await?
            }
            SelectionMode::Similar => {
                selection::similar(self.catalog, self.settings, &mut self.rng, &artist).await?
            }
        };
        self.push_tracks(&tracks, out);
        Ok(())
    }

    async fn expand_search(&mut self, query: &str, radio: bool, out: &mut Vec<Entry>) -> Result<()> {
        if query.is_empty() {
            return Ok(());
        }
        let limit = if radio {
            self.settings.radio_search_limit
        } else {
            self.settings.search_limit
        };
        let mut tracks = self.catalog.search(query, limit).await?;
        if radio {
            tracks.shuffle(&mut self.rng);
            tracks.truncate(self.settings.radio_limit);
        }
        self.push_tracks(&tracks, out);
        Ok(())
    }

    async fn expand_radio(&mut self, user: &User, id: i64, out: &mut Vec<Entry>) -> Result<()> {
        let mut station = self.catalog.station(id).await?;
        if !station.visible(user) {
            debug!(station = id, "skipping station not visible to requester");
            return Ok(());
        }
        let playlist = self.refresh_station(user, &mut station).await?;
        out.extend(playlist.spiff.entries);
        Ok(())
    }

    pub(crate) fn push_tracks(&self, tracks: &[Track], out: &mut Vec<Entry>) {
        for track in tracks {
            out.push(track_entry(self.locator, track));
        }
    }
}

/// Map a catalog track onto a concrete playlist entry.
pub(crate) fn track_entry(locator: &dyn Locator, track: &Track) -> Entry {
    Entry {
        creator: track.artist.clone(),
        album: track.release.clone(),
        title: track.title.clone(),
        image: locator.track_image(track),
        location: vec![locator.locate_track(track)],
        identifier: vec![track.etag.clone()],
        size: vec![track.size],
        ..Entry::default()
    }
}

pub(crate) fn movie_entry(locator: &dyn Locator, movie: &Movie) -> Entry {
    Entry {
        creator: "Movie".to_string(),
        album: movie.title.clone(),
        title: movie.title.clone(),
        image: locator.movie_image(movie),
        location: vec![locator.locate_movie(movie)],
        identifier: vec![movie.etag.clone()],
        size: vec![movie.size],
        ..Entry::default()
    }
}

pub(crate) fn episode_entry(locator: &dyn Locator, series: &Series, episode: &Episode) -> Entry {
    Entry {
        creator: episode.credited_author(series).to_string(),
        album: series.title.clone(),
        title: episode.title.clone(),
        image: locator.episode_image(episode),
        location: vec![locator.locate_episode(episode)],
        identifier: vec![episode.eid.clone()],
        size: vec![episode.size],
        ..Entry::default()
    }
}
