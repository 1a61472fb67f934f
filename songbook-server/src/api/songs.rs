//! Song catalogue endpoints
//!
//! Listing and lyrics requests carry their parameters as a JSON body even
//! on GET.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use songbook_common::db::{Song, SongFilter, SongPatch};
use uuid::Uuid;

use crate::api::body::{optional_json, require_field, required_json};
use crate::error::{ApiError, ApiResult};
use crate::verses::Verse;
use crate::AppState;

/// Body of `POST /songs`
#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    pub group: String,
    pub song: String,
}

/// Body of `GET /songs/text`
#[derive(Debug, Deserialize)]
pub struct SongTextRequest {
    pub group: String,
    pub song: String,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Response of `GET /songs/text`
#[derive(Debug, Serialize)]
pub struct SongTextResponse {
    pub verses: Vec<Verse>,
}

fn parse_song_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid song id: {}", raw)))
}

/// GET /songs
///
/// Optional body: `{id, group, song, releaseDate, text, link, limit, offset}`.
pub async fn list_songs(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Vec<Song>>> {
    let filter: SongFilter = optional_json(&body)?;
    let songs = state.catalogue.list_songs(&filter).await?;
    Ok(Json(songs))
}

/// GET /songs/text
///
/// Returns one page of verses, each verse a list of lines.
pub async fn get_song_text(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SongTextResponse>> {
    let request: SongTextRequest = required_json(&body)?;
    require_field(&request.group, "group")?;
    require_field(&request.song, "song")?;

    let verses = state
        .catalogue
        .song_text_page(&request.group, &request.song, request.offset, request.limit)
        .await?;

    Ok(Json(SongTextResponse { verses }))
}

/// POST /songs
///
/// Fetches the song's details from the lookup service, then stores it.
pub async fn create_song(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Song>> {
    let request: CreateSongRequest = required_json(&body)?;
    require_field(&request.group, "group")?;
    require_field(&request.song, "song")?;

    let song = state
        .catalogue
        .create_song(&request.group, &request.song)
        .await?;

    Ok(Json(song))
}

/// PATCH /songs/:song_id
pub async fn update_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Song>> {
    let id = parse_song_id(&song_id)?;
    let patch: SongPatch = required_json(&body)?;

    let song = state.catalogue.update_song(id, &patch).await?;
    Ok(Json(song))
}

/// DELETE /songs/:song_id
pub async fn delete_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_song_id(&song_id)?;

    state.catalogue.delete_song(id).await?;
    Ok(Json(json!({ "message": "Song deleted successfully" })))
}
