//! songbook-server - Song catalogue REST service
//!
//! Serves song CRUD, paged lyrics and song detail lookups over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use songbook_common::db::init_database;
use songbook_server::cli::Args;
use songbook_server::services::DetailClient;
use songbook_server::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file is optional
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "songbook_server=debug,songbook_common=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting songbook-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let args = Args::parse();
    let config = args
        .resolve_config()
        .context("Failed to resolve configuration")?;
    info!("Config loaded");

    let pool = match init_database(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e).context("Failed to open database");
        }
    };

    let details = DetailClient::new(&config.detail_url, config.detail_timeout)
        .context("Failed to build song-info lookup client")?;
    info!(
        "Song-info lookup: {} (timeout {:?})",
        details.base_url(),
        config.detail_timeout
    );

    let app = build_router(AppState::new(pool, details));

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen_address))?;
    info!("songbook-server listening on http://{}", config.listen_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
