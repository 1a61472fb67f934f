//! HTTP API handlers for songbook-server

pub mod body;
pub mod health;
pub mod info;
pub mod songs;

pub use health::health_routes;
pub use info::get_song_detail;
pub use songs::{create_song, delete_song, get_song_text, list_songs, update_song};

use axum::{
    routing::{get, patch},
    Router,
};

use crate::AppState;

/// Build catalogue routes
pub fn song_routes() -> Router<AppState> {
    Router::new()
        .route("/info", get(get_song_detail))
        .route("/songs", get(list_songs).post(create_song))
        .route("/songs/text", get(get_song_text))
        .route("/songs/:song_id", patch(update_song).delete(delete_song))
}
