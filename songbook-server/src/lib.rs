//! songbook-server library
//!
//! REST service for a song catalogue: songs, their lyrics paged as verses,
//! and song detail lookups.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod db;
pub mod error;
pub mod services;
pub mod verses;

pub use crate::error::{ApiError, ApiResult};

use crate::services::{Catalogue, DetailClient};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalogue use cases (database pool + lookup client)
    pub catalogue: Catalogue,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, details: DetailClient) -> Self {
        Self {
            catalogue: Catalogue::new(db, details),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::song_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
