//! Song-info lookup client
//!
//! Fetches release date, lyrics and link for a (group, song) pair from an
//! external lookup service exposing `GET /info?group=..&song=..`.

use songbook_common::db::SongDetail;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("songbook/", env!("CARGO_PKG_VERSION"));

/// Lookup client errors
#[derive(Debug, Error)]
pub enum DetailError {
    /// Request could not be sent or timed out
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Lookup service answered with a non-success status
    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    /// Response body was not a song detail document
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// HTTP client for the song-info lookup service
#[derive(Debug, Clone)]
pub struct DetailClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl DetailClient {
    /// Create a client for the service rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DetailError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| DetailError::NetworkError(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up one song
    pub async fn fetch(&self, group: &str, song: &str) -> Result<SongDetail, DetailError> {
        let url = format!("{}/info", self.base_url);

        tracing::debug!(group, song, url = %url, "Querying song-info lookup");

        let response = self
            .http_client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| DetailError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(DetailError::ApiError(status.as_u16(), error_text));
        }

        let detail: SongDetail = response
            .json()
            .await
            .map_err(|e| DetailError::ParseError(e.to_string()))?;

        tracing::debug!(group, song, "Song-info lookup succeeded");
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: &str) -> DetailClient {
        DetailClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_decodes_detail_and_encodes_query() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let app = Router::new().route(
            "/info",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let recorder = recorder.clone();
                async move {
                    recorder.lock().unwrap().push(params);
                    Json(serde_json::json!({
                        "releaseDate": "1987",
                        "text": "Welcome to the jungle",
                        "link": "https://example.com/wttj"
                    }))
                }
            }),
        );
        let base_url = serve(app).await;

        let detail = client(&format!("{}/", base_url))
            .fetch("Guns N' Roses & Co", "Welcome to the Jungle?")
            .await
            .unwrap();

        assert_eq!(detail.release_date, "1987");
        assert_eq!(detail.text, "Welcome to the jungle");
        assert_eq!(detail.link, "https://example.com/wttj");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["group"], "Guns N' Roses & Co");
        assert_eq!(seen[0]["song"], "Welcome to the Jungle?");
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let app = Router::new().route(
            "/info",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
        );
        let base_url = serve(app).await;

        let err = client(&base_url).fetch("a", "b").await.unwrap_err();
        assert!(matches!(err, DetailError::ApiError(500, ref body) if body == "boom"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_body() {
        let app = Router::new().route("/info", get(|| async { "not json" }));
        let base_url = serve(app).await;

        let err = client(&base_url).fetch("a", "b").await.unwrap_err();
        assert!(matches!(err, DetailError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_service() {
        // Bind then release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .fetch("a", "b")
            .await
            .unwrap_err();
        assert!(matches!(err, DetailError::NetworkError(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client("http://localhost:8080/").base_url(), "http://localhost:8080");
    }
}
