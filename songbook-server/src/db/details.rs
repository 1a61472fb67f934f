//! Song detail lookups (`songs_detail` table)

use songbook_common::db::SongDetail;
use songbook_common::Result;
use sqlx::{Row, SqlitePool};
use tracing::debug;

/// Fetch the detail record for an exact (group, song) pair
///
/// A missing pair fails with `sqlx::Error::RowNotFound`.
pub async fn get_song_detail(pool: &SqlitePool, group: &str, song: &str) -> Result<SongDetail> {
    debug!(group, song, "Fetching song detail");

    let row = sqlx::query(
        r#"
        SELECT COALESCE(release_date, '') AS release_date,
               COALESCE(text, '') AS text,
               COALESCE(link, '') AS link
        FROM songs_detail
        WHERE "group" = ? AND song = ?
        "#,
    )
    .bind(group)
    .bind(song)
    .fetch_one(pool)
    .await?;

    Ok(SongDetail {
        release_date: row.try_get("release_date")?,
        text: row.try_get("text")?,
        link: row.try_get("link")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use songbook_common::db::init_database;

    #[tokio::test]
    async fn test_get_song_detail() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        sqlx::query(
            r#"INSERT INTO songs_detail ("group", song, release_date, text, link) VALUES (?, ?, ?, NULL, ?)"#,
        )
        .bind("Muse")
        .bind("Supermassive Black Hole")
        .bind("16.07.2006")
        .bind("https://www.youtube.com/watch?v=Xsp3_a-PMTw")
        .execute(&pool)
        .await
        .unwrap();

        let detail = get_song_detail(&pool, "Muse", "Supermassive Black Hole")
            .await
            .unwrap();

        assert_eq!(detail.release_date, "16.07.2006");
        assert_eq!(detail.text, "");
        assert_eq!(detail.link, "https://www.youtube.com/watch?v=Xsp3_a-PMTw");
    }

    #[tokio::test]
    async fn test_missing_detail_is_row_not_found() {
        let pool = init_database("sqlite::memory:").await.unwrap();

        let err = get_song_detail(&pool, "Muse", "Unknown").await.unwrap_err();
        assert!(err.is_row_not_found());
    }
}
