//! Database initialization
//!
//! Opens (creating if needed) the SQLite database behind the catalogue and
//! makes sure both tables exist. Safe to run on every startup.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Initialize database connection and create tables if needed
///
/// `database_url` is an sqlx SQLite URL, e.g. `sqlite://songbook.db?mode=rwc`
/// or `sqlite::memory:`.
pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_millis(5000));

    // WAL allows concurrent readers alongside one writer
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    // Every connection to :memory: opens a fresh database, so keep exactly one alive
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(10)
    };

    let pool = pool_options.connect_with(options).await?;

    info!("Opened database: {}", database_url);

    // Idempotent - safe to call multiple times
    create_songs_table(&pool).await?;
    create_songs_detail_table(&pool).await?;

    Ok(pool)
}

/// `*_folded` columns hold lowercased copies used for substring search;
/// SQLite's `LIKE` only folds ASCII.
async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id TEXT PRIMARY KEY,
            "group" TEXT NOT NULL,
            song TEXT NOT NULL,
            release_date TEXT NOT NULL DEFAULT '',
            text TEXT NOT NULL DEFAULT '',
            link TEXT NOT NULL DEFAULT '',
            group_folded TEXT NOT NULL DEFAULT '',
            song_folded TEXT NOT NULL DEFAULT '',
            text_folded TEXT NOT NULL DEFAULT '',
            link_folded TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_songs_group_song ON songs("group", song)"#)
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_songs_detail_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs_detail (
            "group" TEXT NOT NULL,
            song TEXT NOT NULL,
            release_date TEXT,
            text TEXT,
            link TEXT,
            PRIMARY KEY ("group", song)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
