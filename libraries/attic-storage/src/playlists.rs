//! Saved playlist persistence
//!
//! Each user owns one playlist document, created empty on first read. The
//! document is stored as serialized bytes so that patch paths line up with
//! exactly what the client last saw.

use crate::database::Database;
use attic_core::{Result, User};
use attic_spiff::{Playlist, TYPE_MUSIC};
use sqlx::Row;

/// Location written into newly created playlist documents
const PLAYLIST_LOCATION: &str = "/api/playlist";

impl Database {
    /// Fetch the user's saved playlist document, creating an empty one on
    /// first read.
    pub async fn user_playlist(&self, user: &User) -> Result<Vec<u8>> {
        let row = sqlx::query("SELECT playlist FROM playlists WHERE user = ?")
            .bind(&user.name)
            .fetch_optional(self.pool())
            .await?;

        if let Some(row) = row {
            return Ok(row.get("playlist"));
        }

        let mut plist = Playlist::new(TYPE_MUSIC);
        plist.spiff.location = PLAYLIST_LOCATION.to_string();
        plist.spiff.creator = user.name.clone();
        let data = plist.marshal()?;
        self.update_user_playlist(user, &data).await?;
        Ok(data)
    }

    /// Overwrite the user's saved playlist document
    pub async fn update_user_playlist(&self, user: &User, data: &[u8]) -> Result<()> {
        sqlx::query(
            "INSERT INTO playlists (user, playlist) VALUES (?, ?)
             ON CONFLICT (user) DO UPDATE SET playlist = excluded.playlist",
        )
        .bind(&user.name)
        .bind(data)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
