//! Database connection and catalog ingestion

use attic_core::{Artist, Episode, Error, Movie, Release, Result, Series, Track};
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// SQLite-backed media catalog
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) a database and apply the embedded schema.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;
        info!(url = database_url, "database ready");

        Ok(Self { pool })
    }

    /// Wrap an existing pool; the schema must already be applied.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        const MIGRATIONS: &[&str] = &[
            include_str!("../migrations/001_catalog.sql"),
            include_str!("../migrations/002_stations.sql"),
            include_str!("../migrations/003_playlists.sql"),
        ];

        for migration in MIGRATIONS {
            sqlx::raw_sql(migration)
                .execute(pool)
                .await
                .map_err(|e| Error::storage(format!("migration failed: {e}")))?;
        }

        Ok(())
    }

    // ========================================================================
    // Catalog ingestion, used by the sync tooling and tests
    // ========================================================================

    /// Insert an artist, returning the assigned id
    pub async fn add_artist(&self, artist: &Artist) -> Result<i64> {
        let result = sqlx::query("INSERT INTO artists (name, sort_name, mbid) VALUES (?, ?, ?)")
            .bind(&artist.name)
            .bind(&artist.sort_name)
            .bind(&artist.mbid)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a release, returning the assigned id
    pub async fn add_release(&self, release: &Release) -> Result<i64> {
        let result =
            sqlx::query("INSERT INTO releases (artist, name, type, date, mbid) VALUES (?, ?, ?, ?, ?)")
                .bind(&release.artist)
                .bind(&release.name)
                .bind(&release.kind)
                .bind(release.date.map(format_date))
                .bind(&release.mbid)
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a track, returning the assigned id
    pub async fn add_track(&self, track: &Track) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO tracks (artist, release, title, track_num, disc_num, etag, size, release_date)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&track.artist)
        .bind(&track.release)
        .bind(&track.title)
        .bind(track.track_num as i64)
        .bind(track.disc_num as i64)
        .bind(&track.etag)
        .bind(track.size)
        .bind(track.release_date.map(format_date))
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Record a popularity rank for an (artist, title) pair
    pub async fn add_popular(&self, artist: &str, title: &str, rank: i64) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO popular (artist, title, rank) VALUES (?, ?, ?)")
            .bind(artist)
            .bind(title)
            .bind(rank)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Record a similarity rank between two artists
    pub async fn add_similar(&self, artist: &str, similar_artist: &str, rank: i64) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO similar (artist, similar_artist, rank) VALUES (?, ?, ?)",
        )
        .bind(artist)
        .bind(similar_artist)
        .bind(rank)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a movie, returning the assigned id
    pub async fn add_movie(&self, movie: &Movie) -> Result<i64> {
        let result = sqlx::query("INSERT INTO movies (title, etag, size, date) VALUES (?, ?, ?, ?)")
            .bind(&movie.title)
            .bind(&movie.etag)
            .bind(movie.size)
            .bind(movie.date.map(format_date))
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a podcast series, returning the assigned id
    pub async fn add_series(&self, series: &Series) -> Result<i64> {
        let result =
            sqlx::query("INSERT INTO series (title, author, image, date) VALUES (?, ?, ?, ?)")
                .bind(&series.title)
                .bind(&series.author)
                .bind(&series.image)
                .bind(series.date.map(format_date))
                .execute(&self.pool)
                .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert an episode, returning the assigned id
    pub async fn add_episode(&self, episode: &Episode) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO episodes (series_id, title, author, eid, size, date)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(episode.series_id)
        .bind(&episode.title)
        .bind(&episode.author)
        .bind(&episode.eid)
        .bind(episode.size)
        .bind(episode.date.map(format_date))
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn parse_date(value: Option<String>) -> Option<NaiveDate> {
    value.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}
