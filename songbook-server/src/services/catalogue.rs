//! Catalogue use cases
//!
//! Ties the song repository, the song-info lookup and verse pagination
//! together. Errors from lower layers are passed up with context attached.

use songbook_common::db::{NewSong, Song, SongDetail, SongFilter, SongPatch};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::db;
use crate::services::detail_client::{DetailClient, DetailError};
use crate::verses::{self, Verse};

/// Catalogue operation errors
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Song-info lookup failed
    #[error("fetching song detail: {0}")]
    Detail(#[from] DetailError),

    /// Repository call failed
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: songbook_common::Error,
    },
}

impl CatalogueError {
    fn storage(context: &'static str) -> impl FnOnce(songbook_common::Error) -> Self {
        move |source| {
            error!("{}: {}", context, source);
            CatalogueError::Storage { context, source }
        }
    }

    /// True when a partial update carried no fields
    pub fn is_no_fields_to_update(&self) -> bool {
        matches!(
            self,
            CatalogueError::Storage {
                source: songbook_common::Error::NoFieldsToUpdate,
                ..
            }
        )
    }
}

/// Song catalogue backed by the database and the song-info lookup
#[derive(Debug, Clone)]
pub struct Catalogue {
    db: SqlitePool,
    details: DetailClient,
}

impl Catalogue {
    pub fn new(db: SqlitePool, details: DetailClient) -> Self {
        Self { db, details }
    }

    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Detail record stored locally for (group, song)
    pub async fn song_detail(&self, group: &str, song: &str) -> Result<SongDetail, CatalogueError> {
        let detail = db::get_song_detail(&self.db, group, song)
            .await
            .map_err(CatalogueError::storage("getting song detail"))?;

        info!(group, song, "Retrieved song detail");
        Ok(detail)
    }

    /// Detail record from the external song-info lookup
    pub async fn fetch_song_detail(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetail, CatalogueError> {
        let detail = self.details.fetch(group, song).await.map_err(|e| {
            error!("failed to fetch song detail: {}", e);
            e
        })?;

        info!(group, song, "Fetched song detail");
        Ok(detail)
    }

    pub async fn list_songs(&self, filter: &SongFilter) -> Result<Vec<Song>, CatalogueError> {
        let songs = db::list_songs(&self.db, filter)
            .await
            .map_err(CatalogueError::storage("getting songs"))?;

        info!("Retrieved {} songs", songs.len());
        Ok(songs)
    }

    /// One page of verses from the lyrics of (group, song)
    pub async fn song_text_page(
        &self,
        group: &str,
        song: &str,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Result<Vec<Verse>, CatalogueError> {
        let text = db::get_song_text(&self.db, group, song)
            .await
            .map_err(CatalogueError::storage("getting song text"))?;

        let page = verses::paginate_verses(&text, offset, limit);

        info!(
            "Returning {} verses starting from {}",
            page.len(),
            offset.unwrap_or(0)
        );
        Ok(page)
    }

    /// Look up the song's details, then store it
    ///
    /// Nothing is inserted when the lookup fails.
    pub async fn create_song(&self, group: &str, song: &str) -> Result<Song, CatalogueError> {
        debug!(group, song, "Creating song");

        let detail = self.fetch_song_detail(group, song).await?;
        let new_song = NewSong::from_detail(group.to_string(), song.to_string(), detail);

        let created = db::create_song(&self.db, &new_song)
            .await
            .map_err(CatalogueError::storage("creating song"))?;

        info!(id = %created.id, group, song, "Created song");
        Ok(created)
    }

    pub async fn update_song(&self, id: Uuid, patch: &SongPatch) -> Result<Song, CatalogueError> {
        let updated = db::update_song(&self.db, id, patch)
            .await
            .map_err(CatalogueError::storage("updating song"))?;

        info!(%id, "Updated song");
        Ok(updated)
    }

    pub async fn delete_song(&self, id: Uuid) -> Result<(), CatalogueError> {
        let removed = db::delete_song(&self.db, id)
            .await
            .map_err(CatalogueError::storage("deleting song"))?;

        info!(%id, removed, "Deleted song");
        Ok(())
    }
}
