//! JSON request body decoding
//!
//! Bodies are read as raw bytes so that GET requests may carry JSON and so
//! that malformed input answers with the API's own 400 error shape.

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

const INVALID_BODY: &str = "Invalid request body";

/// Decode a JSON body that must be present
pub fn required_json<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ApiError::BadRequest(INVALID_BODY.to_string())
    })
}

/// Decode a JSON body that may be omitted; an empty body yields `T::default()`
pub fn optional_json<T: DeserializeOwned + Default>(body: &Bytes) -> ApiResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    required_json(body)
}

/// Reject a missing or blank required field
pub fn require_field(value: &str, name: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{} is required", name)));
    }
    Ok(())
}
