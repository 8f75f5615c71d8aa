//! Station refresh and built-in station seeding

use attic_core::{Catalog, Error, MusicSettings, Result, Station, StationType, User, SYSTEM_USER};
use attic_spiff::{Entry, Playlist, TYPE_MUSIC, TYPE_STREAM};
use rand::Rng;
use tracing::{debug, info};
use url::form_urlencoded;

use crate::resolve::Resolver;

/// Creator credited on every refreshed station playlist
const STATION_CREATOR: &str = "Radio";

impl<R: Rng + Send> Resolver<'_, R> {
    /// Rebuild a station's cached playlist and persist it.
    ///
    /// Every read is a full recompute; the cached blob is never trusted
    /// between reads. The refreshed document carries no date field so that
    /// two refreshes against the same catalog snapshot persist identical
    /// bytes. The entry list is always present, `[]` when resolution
    /// yielded nothing.
    ///
    /// A station reached again while its own refresh is still on the call
    /// stack is a cycle and fails with [`Error::StationCycle`].
    pub async fn refresh_station(
        &mut self,
        user: &User,
        station: &mut Station,
    ) -> Result<Playlist> {
        if !self.visiting.insert(station.id) {
            return Err(Error::StationCycle(station.id));
        }
        let result = self.rebuild(user, station).await;
        self.visiting.remove(&station.id);
        result
    }

    async fn rebuild(&mut self, user: &User, station: &mut Station) -> Result<Playlist> {
        let mut playlist = Playlist::new(TYPE_MUSIC);
        playlist.spiff.location = format!("/api/radio/stations/{}", station.id);
        playlist.spiff.title = station.name.clone();
        playlist.spiff.creator = STATION_CREATOR.to_string();
        playlist.spiff.image = station.image.clone();

        if station.kind == StationType::Stream {
            // the reference is the stream URL itself, not a catalog path
            playlist.kind = TYPE_STREAM.to_string();
            playlist.spiff.entries = vec![Entry {
                creator: station.creator.clone(),
                album: station.name.clone(),
                title: station.name.clone(),
                image: station.image.clone(),
                location: vec![station.reference.clone()],
                ..Entry::default()
            }];
        } else {
            playlist.spiff.entries = vec![Entry::new_reference(&station.reference)];
            self.resolve(user, &mut playlist).await?;
        }

        debug!(
            station = station.id,
            entries = playlist.spiff.entries.len(),
            "refreshed station"
        );

        station.playlist = playlist.marshal()?;
        self.catalog().update_station(station).await?;
        Ok(playlist)
    }
}

/// Seed the built-in shared stations: one per configured genre, one per
/// decade bucket, one per configured stream, and one per configured named
/// query. All are owned by the reserved system user and shared.
pub async fn create_stations(catalog: &dyn Catalog, settings: &MusicSettings) -> Result<()> {
    for genre in &settings.radio_genres {
        let query = format!(r#"+genre:"{genre}" +type:"single" -artist:"Various Artists""#);
        let station = seed(
            title_case(genre),
            search_ref(&query),
            StationType::Genre,
        );
        catalog.create_station(&station).await?;
    }

    for start in &settings.radio_decades {
        let end = start + 9;
        let query = format!(r#"+date:"{start}-01-01..{end}-12-31" +type:"single""#);
        let station = seed(format!("{start}s"), search_ref(&query), StationType::Period);
        catalog.create_station(&station).await?;
    }

    for stream in &settings.radio_streams {
        let mut station = seed(stream.name.clone(), stream.url.clone(), StationType::Stream);
        station.creator = stream.creator.clone();
        station.image = stream.image.clone();
        catalog.create_station(&station).await?;
    }

    for other in &settings.radio_other {
        let station = seed(other.name.clone(), other.reference.clone(), StationType::Other);
        catalog.create_station(&station).await?;
    }

    info!(
        genres = settings.radio_genres.len(),
        decades = settings.radio_decades.len(),
        streams = settings.radio_streams.len(),
        "seeded built-in stations"
    );
    Ok(())
}

fn seed(name: String, reference: String, kind: StationType) -> Station {
    Station {
        id: 0,
        user: SYSTEM_USER.to_string(),
        name,
        reference,
        shared: true,
        kind,
        creator: String::new(),
        image: String::new(),
        playlist: Vec::new(),
    }
}

fn search_ref(query: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .append_pair("radio", "1")
        .finish();
    format!("/music/search?{encoded}")
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
