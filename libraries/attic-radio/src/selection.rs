//! Track selection algorithms
//!
//! Each function takes the catalog snapshot as read-only input and returns
//! an ordered track list. Shuffling is a uniform Fisher-Yates permutation
//! driven by the caller's injected RNG, so tests can seed it and assert
//! permutation properties.
//!
//! Deduplication here is by exact, case-sensitive (artist, title). This
//! conflates same-titled remixes and live versions; kept for compatibility.

use attic_core::{Artist, Catalog, MusicSettings, Result, Track};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

fn owned_key(track: &Track) -> (String, String) {
    let (artist, title) = track.dedup_key();
    (artist.to_string(), title.to_string())
}

/// Tracks whose title matches a release of type "Single" by the artist,
/// ordered by each single's earliest release date.
pub async fn singles(
    catalog: &dyn Catalog,
    settings: &MusicSettings,
    artist: &Artist,
) -> Result<Vec<Track>> {
    catalog
        .artist_singles(&artist.name, settings.singles_limit)
        .await
}

/// Tracks ranked by the external popularity source, rank 1 first.
pub async fn popular(
    catalog: &dyn Catalog,
    settings: &MusicSettings,
    artist: &Artist,
) -> Result<Vec<Track>> {
    catalog
        .artist_popular(&artist.name, settings.popular_limit)
        .await
}

/// Every known track for the artist, album by album in album order.
pub async fn tracks(catalog: &dyn Catalog, artist: &Artist) -> Result<Vec<Track>> {
    catalog.artist_tracks(&artist.name).await
}

/// Deep cuts: tracks in neither the popular nor the singles selection,
/// one per (artist, title), capped at the radio limit.
pub async fn deep(
    catalog: &dyn Catalog,
    settings: &MusicSettings,
    artist: &Artist,
) -> Result<Vec<Track>> {
    let mut exclude: HashSet<(String, String)> = HashSet::new();
    for t in catalog
        .artist_popular(&artist.name, settings.popular_limit)
        .await?
    {
        exclude.insert(owned_key(&t));
    }
    for t in catalog
        .artist_singles(&artist.name, settings.singles_limit)
        .await?
    {
        exclude.insert(owned_key(&t));
    }

    let mut cuts = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for t in catalog.artist_tracks(&artist.name).await? {
        if cuts.len() >= settings.radio_limit {
            break;
        }
        let key = owned_key(&t);
        if exclude.contains(&key) {
            continue;
        }
        if seen.insert(key) {
            cuts.push(t);
        }
    }
    Ok(cuts)
}

/// A randomized sample of the radio-limit size: roughly half from the
/// artist's popular tracks, the rest filled with random catalog picks not
/// already selected, then shuffled together. An artist whose whole catalog
/// fits within the limit is returned complete, shuffled.
pub async fn shuffle<R: Rng>(
    catalog: &dyn Catalog,
    settings: &MusicSettings,
    rng: &mut R,
    artist: &Artist,
) -> Result<Vec<Track>> {
    let depth = settings.radio_limit;
    let mut pool = catalog.artist_tracks(&artist.name).await?;
    if pool.len() <= depth {
        pool.shuffle(rng);
        return Ok(pool);
    }

    let mut picks = catalog
        .artist_popular(&artist.name, settings.popular_limit)
        .await?;
    picks.shuffle(rng);
    picks.truncate(depth / 2);

    let mut seen: HashSet<(String, String)> = picks
        .iter()
        .map(owned_key)
        .collect();

    pool.shuffle(rng);
    for t in pool {
        if picks.len() >= depth {
            break;
        }
        if seen.insert(owned_key(&t)) {
            picks.push(t);
        }
    }

    picks.shuffle(rng);
    Ok(picks)
}

/// Similar-artists radio: the artist's popular tracks up to the radio
/// depth, blended with the popular tracks of the most-similar artists up
/// to the radio breadth, deduplicated, shuffled, and truncated to the
/// radio limit (so the truncation is itself a random sub-sample).
pub async fn similar<R: Rng>(
    catalog: &dyn Catalog,
    settings: &MusicSettings,
    rng: &mut R,
    artist: &Artist,
) -> Result<Vec<Track>> {
    let mut pool = catalog
        .artist_popular(&artist.name, settings.radio_depth)
        .await?;
    for other in catalog
        .similar_artists(&artist.name, settings.radio_breadth)
        .await?
    {
        pool.extend(
            catalog
                .artist_popular(&other.name, settings.popular_limit)
                .await?,
        );
    }

    let mut seen: HashSet<(String, String)> = HashSet::new();
    pool.retain(|t| seen.insert(owned_key(t)));

    pool.shuffle(rng);
    pool.truncate(settings.radio_limit);
    Ok(pool)
}
