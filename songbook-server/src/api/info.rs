//! Song detail endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use songbook_common::db::SongDetail;

use crate::api::body::require_field;
use crate::error::ApiResult;
use crate::AppState;

/// Query parameters for `/info`
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub song: String,
}

/// GET /info?group=&song=
///
/// Returns the stored detail record for the pair.
pub async fn get_song_detail(
    State(state): State<AppState>,
    Query(query): Query<InfoQuery>,
) -> ApiResult<Json<SongDetail>> {
    require_field(&query.group, "group")?;
    require_field(&query.song, "song")?;

    let detail = state
        .catalogue
        .song_detail(&query.group, &query.song)
        .await?;

    Ok(Json(detail))
}
