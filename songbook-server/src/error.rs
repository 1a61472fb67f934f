//! HTTP error type for songbook-server
//!
//! Validation problems answer 400 with their message. Every downstream
//! failure answers 500 with a generic message; the cause is only logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::CatalogueError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Catalogue operation failed (500)
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Catalogue(err) => {
                tracing::error!("Request failed: {}", err);
                let message = match err {
                    CatalogueError::Detail(_) => "Failed to fetch song detail",
                    CatalogueError::Storage { .. } => "InternalServerError",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
