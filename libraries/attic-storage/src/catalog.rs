//! `Catalog` implementation over SQLite

use crate::database::{parse_date, Database};
use async_trait::async_trait;
use attic_core::{
    Artist, Catalog, Episode, Error, Movie, Release, Result, Series, Station, StationType, Track,
    User,
};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

const TRACK_COLUMNS: &str =
    "tracks.id, tracks.artist, tracks.release, tracks.title, tracks.track_num, \
     tracks.disc_num, tracks.etag, tracks.size, tracks.release_date";

fn artist_from(row: &SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        sort_name: row.get("sort_name"),
        mbid: row.get("mbid"),
    }
}

fn release_from(row: &SqliteRow) -> Release {
    Release {
        id: row.get("id"),
        artist: row.get("artist"),
        name: row.get("name"),
        kind: row.get("type"),
        date: parse_date(row.get("date")),
        mbid: row.get("mbid"),
    }
}

fn track_from(row: &SqliteRow) -> Track {
    Track {
        id: row.get("id"),
        artist: row.get("artist"),
        release: row.get("release"),
        title: row.get("title"),
        track_num: row.get::<i64, _>("track_num") as u32,
        disc_num: row.get::<i64, _>("disc_num") as u32,
        etag: row.get("etag"),
        size: row.get("size"),
        release_date: parse_date(row.get("release_date")),
    }
}

fn movie_from(row: &SqliteRow) -> Movie {
    Movie {
        id: row.get("id"),
        title: row.get("title"),
        etag: row.get("etag"),
        size: row.get("size"),
        date: parse_date(row.get("date")),
    }
}

fn series_from(row: &SqliteRow) -> Series {
    Series {
        id: row.get("id"),
        title: row.get("title"),
        author: row.get("author"),
        image: row.get("image"),
        date: parse_date(row.get("date")),
    }
}

fn episode_from(row: &SqliteRow) -> Episode {
    Episode {
        id: row.get("id"),
        series_id: row.get("series_id"),
        title: row.get("title"),
        author: row.get("author"),
        eid: row.get("eid"),
        size: row.get("size"),
        date: parse_date(row.get("date")),
    }
}

fn station_from(row: &SqliteRow) -> Station {
    Station {
        id: row.get("id"),
        user: row.get("user"),
        name: row.get("name"),
        reference: row.get("ref"),
        shared: row.get::<i64, _>("shared") != 0,
        kind: StationType::from_str(&row.get::<String, _>("type")),
        creator: row.get("creator"),
        image: row.get("image"),
        playlist: row.get("playlist"),
    }
}

#[async_trait]
impl Catalog for Database {
    async fn artist(&self, id: i64) -> Result<Artist> {
        let row = sqlx::query("SELECT id, name, sort_name, mbid FROM artists WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(Error::ArtistNotFound(id))?;
        Ok(artist_from(&row))
    }

    async fn release(&self, id: i64) -> Result<Release> {
        let row = sqlx::query("SELECT id, artist, name, type, date, mbid FROM releases WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(Error::ReleaseNotFound(id))?;
        Ok(release_from(&row))
    }

    async fn track(&self, id: i64) -> Result<Track> {
        let row = sqlx::query(&format!("SELECT {TRACK_COLUMNS} FROM tracks WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(Error::TrackNotFound(id))?;
        Ok(track_from(&row))
    }

    async fn movie(&self, id: i64) -> Result<Movie> {
        let row = sqlx::query("SELECT id, title, etag, size, date FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(Error::MovieNotFound(id))?;
        Ok(movie_from(&row))
    }

    async fn series(&self, id: i64) -> Result<Series> {
        let row = sqlx::query("SELECT id, title, author, image, date FROM series WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(Error::SeriesNotFound(id))?;
        Ok(series_from(&row))
    }

    async fn station(&self, id: i64) -> Result<Station> {
        let row = sqlx::query(
            "SELECT id, user, name, ref, shared, type, creator, image, playlist
             FROM stations WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(Error::StationNotFound(id))?;
        Ok(station_from(&row))
    }

    async fn artist_tracks(&self, artist: &str) -> Result<Vec<Track>> {
        let rows = sqlx::query(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks WHERE artist = ?
             ORDER BY release, release_date, disc_num, track_num"
        ))
        .bind(artist)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(track_from).collect())
    }

    async fn artist_singles(&self, artist: &str, limit: usize) -> Result<Vec<Track>> {
        // a single is a track whose title names a release of type 'Single'
        let rows = sqlx::query(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks
             INNER JOIN releases ON tracks.artist = releases.artist
                 AND tracks.title = releases.name AND releases.type = 'Single'
             WHERE tracks.artist = ?
             GROUP BY tracks.artist, tracks.title
             ORDER BY MIN(releases.date)
             LIMIT ?"
        ))
        .bind(artist)
        .bind(limit as i64)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(track_from).collect())
    }

    async fn artist_popular(&self, artist: &str, limit: usize) -> Result<Vec<Track>> {
        let rows = sqlx::query(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks
             INNER JOIN popular ON tracks.artist = popular.artist
                 AND tracks.title = popular.title
             WHERE tracks.artist = ?
             GROUP BY tracks.artist, tracks.title
             ORDER BY MIN(popular.rank)
             LIMIT ?"
        ))
        .bind(artist)
        .bind(limit as i64)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(track_from).collect())
    }

    async fn similar_artists(&self, artist: &str, limit: usize) -> Result<Vec<Artist>> {
        let rows = sqlx::query(
            "SELECT artists.id, artists.name, artists.sort_name, artists.mbid FROM artists
             INNER JOIN similar ON similar.similar_artist = artists.name
             WHERE similar.artist = ?
             ORDER BY similar.rank ASC
             LIMIT ?",
        )
        .bind(artist)
        .bind(limit as i64)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(artist_from).collect())
    }

    async fn release_tracks(&self, release: &Release) -> Result<Vec<Track>> {
        let rows = sqlx::query(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks WHERE artist = ? AND release = ?
             ORDER BY disc_num, track_num"
        ))
        .bind(&release.artist)
        .bind(&release.name)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(track_from).collect())
    }

    async fn series_episodes(&self, series: &Series) -> Result<Vec<Episode>> {
        let rows = sqlx::query(
            "SELECT id, series_id, title, author, eid, size, date FROM episodes
             WHERE series_id = ? ORDER BY date DESC",
        )
        .bind(series.id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(episode_from).collect())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Track>> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks
             WHERE title LIKE ? OR artist LIKE ? OR release LIKE ?
             ORDER BY artist, release, disc_num, track_num
             LIMIT ?"
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit as i64)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(track_from).collect())
    }

    async fn stations(&self, user: &User) -> Result<Vec<Station>> {
        let rows = sqlx::query(
            "SELECT id, user, name, ref, shared, type, creator, image, playlist
             FROM stations WHERE user = ? OR shared = 1 ORDER BY id",
        )
        .bind(&user.name)
        .fetch_all(self.pool())
        .await?;
        Ok(rows.iter().map(station_from).collect())
    }

    async fn create_station(&self, station: &Station) -> Result<Station> {
        let result = sqlx::query(
            "INSERT INTO stations (user, name, ref, shared, type, creator, image, playlist)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&station.user)
        .bind(&station.name)
        .bind(&station.reference)
        .bind(station.shared as i64)
        .bind(station.kind.as_str())
        .bind(&station.creator)
        .bind(&station.image)
        .bind(&station.playlist)
        .execute(self.pool())
        .await?;

        let mut created = station.clone();
        created.id = result.last_insert_rowid();
        Ok(created)
    }

    async fn update_station(&self, station: &Station) -> Result<()> {
        let result = sqlx::query(
            "UPDATE stations SET user = ?, name = ?, ref = ?, shared = ?, type = ?,
             creator = ?, image = ?, playlist = ? WHERE id = ?",
        )
        .bind(&station.user)
        .bind(&station.name)
        .bind(&station.reference)
        .bind(station.shared as i64)
        .bind(station.kind.as_str())
        .bind(&station.creator)
        .bind(&station.image)
        .bind(&station.playlist)
        .bind(station.id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::StationNotFound(station.id));
        }
        Ok(())
    }

    async fn delete_station(&self, station: &Station) -> Result<()> {
        let result = sqlx::query("DELETE FROM stations WHERE id = ?")
            .bind(station.id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::StationNotFound(station.id));
        }
        Ok(())
    }
}
