//! Song database operations (`songs` table)

use songbook_common::db::{NewSong, Song, SongFilter, SongPatch};
use songbook_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::query::{self, fold_case, SONG_COLUMNS};

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    let id: String = row.try_get("id")?;
    let id = Uuid::parse_str(&id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Song {
        id,
        group: row.try_get("group")?,
        song: row.try_get("song")?,
        release_date: row.try_get("release_date")?,
        text: row.try_get("text")?,
        link: row.try_get("link")?,
    })
}

/// List songs matching every supplied filter
pub async fn list_songs(pool: &SqlitePool, filter: &SongFilter) -> Result<Vec<Song>> {
    debug!(?filter, "Getting songs with filter parameters");

    let rows = query::select_songs(filter).build().fetch_all(pool).await?;
    let songs = rows.iter().map(song_from_row).collect::<Result<Vec<_>>>()?;

    debug!("Retrieved {} songs", songs.len());
    Ok(songs)
}

/// Fetch the raw lyrics of an exact (group, song) pair
///
/// If several rows share the pair, the oldest wins.
pub async fn get_song_text(pool: &SqlitePool, group: &str, song: &str) -> Result<String> {
    debug!(group, song, "Fetching song text");

    let text: String = sqlx::query_scalar(
        r#"SELECT text FROM songs WHERE "group" = ? AND song = ? ORDER BY rowid LIMIT 1"#,
    )
    .bind(group)
    .bind(song)
    .fetch_one(pool)
    .await?;

    Ok(text)
}

/// Insert a song and return the stored row
pub async fn create_song(pool: &SqlitePool, new_song: &NewSong) -> Result<Song> {
    let id = Uuid::new_v4();
    debug!(%id, group = %new_song.group, song = %new_song.song, "Creating song");

    let row = sqlx::query(&format!(
        r#"
        INSERT INTO songs (id, "group", song, release_date, text, link,
                           group_folded, song_folded, text_folded, link_folded)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {SONG_COLUMNS}
        "#
    ))
    .bind(id.to_string())
    .bind(&new_song.group)
    .bind(&new_song.song)
    .bind(&new_song.release_date)
    .bind(&new_song.text)
    .bind(&new_song.link)
    .bind(fold_case(&new_song.group))
    .bind(fold_case(&new_song.song))
    .bind(fold_case(&new_song.text))
    .bind(fold_case(&new_song.link))
    .fetch_one(pool)
    .await?;

    song_from_row(&row)
}

/// Apply a partial update and return the updated row
///
/// An empty patch fails with `Error::NoFieldsToUpdate` before touching the
/// database; an unknown id fails with `sqlx::Error::RowNotFound`.
pub async fn update_song(pool: &SqlitePool, id: Uuid, patch: &SongPatch) -> Result<Song> {
    debug!(%id, "Updating song");

    let mut builder = query::update_song(id, patch)?;
    let row = builder.build().fetch_one(pool).await?;

    song_from_row(&row)
}

/// Delete a song by id, returning the number of rows removed
///
/// Deleting an unknown id is not an error.
pub async fn delete_song(pool: &SqlitePool, id: Uuid) -> Result<u64> {
    debug!(%id, "Deleting song");

    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
