//! Shared test helpers: in-memory database, stub lookup services, requests

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use songbook_common::db::{init_database, SongDetail};
use songbook_server::services::DetailClient;
use songbook_server::AppState;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::time::Duration;

/// Lyrics with two verses, using the stored marker format
pub const TWO_VERSE_TEXT: &str = "Verse one line a\n\\nVerse one line b\\n\\nVerse two line a\\n";

pub async fn setup_db() -> SqlitePool {
    init_database("sqlite::memory:")
        .await
        .expect("Should create in-memory database")
}

pub async fn seed_detail(pool: &SqlitePool, group: &str, song: &str, detail: &SongDetail) {
    sqlx::query(
        r#"INSERT INTO songs_detail ("group", song, release_date, text, link) VALUES (?, ?, ?, ?, ?)"#,
    )
    .bind(group)
    .bind(song)
    .bind(&detail.release_date)
    .bind(&detail.text)
    .bind(&detail.link)
    .execute(pool)
    .await
    .expect("Should insert song detail");
}

pub async fn song_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await
        .expect("Should count songs")
}

pub fn sample_detail() -> SongDetail {
    SongDetail {
        release_date: "16.07.2006".to_string(),
        text: TWO_VERSE_TEXT.to_string(),
        link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
    }
}

/// Serve `app` on an ephemeral local port, returning its base URL
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind test listener");
    let addr = listener.local_addr().expect("Should have local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    format!("http://{}", addr)
}

/// Lookup service answering every `/info` request with `detail`
pub async fn spawn_lookup(detail: SongDetail) -> String {
    let app = Router::new().route(
        "/info",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let detail = detail.clone();
            async move {
                if params.contains_key("group") && params.contains_key("song") {
                    Json(detail).into_response()
                } else {
                    StatusCode::BAD_REQUEST.into_response()
                }
            }
        }),
    );
    serve(app).await
}

/// Lookup service that always fails
pub async fn spawn_failing_lookup() -> String {
    let app = Router::new().route(
        "/info",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "lookup down") }),
    );
    serve(app).await
}

pub fn detail_client(base_url: &str) -> DetailClient {
    DetailClient::new(base_url, Duration::from_secs(5)).expect("Should build lookup client")
}

pub fn app_state(pool: SqlitePool, lookup_url: &str) -> AppState {
    AppState::new(pool, detail_client(lookup_url))
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}
