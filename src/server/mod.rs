//! HTTP front end
//!
//! Serves `/search` and `/health` from a shared, immutable [`Searcher`] and
//! everything else from the static asset directory.
//!
//! Architecture:
//! - `router`: shared state and route table
//! - `handlers`: request handlers
//! - `protocol`: query parameters and response bodies

pub mod handlers;
pub mod protocol;
pub mod router;

pub use router::{create_router, AppState};

use crate::config::Config;
use crate::search::Searcher;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Serve `searcher` until Ctrl+C
pub async fn serve(searcher: Searcher, config: &Config) -> Result<()> {
    let state = AppState::new(Arc::new(searcher));
    let app = create_router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        %addr,
        static_dir = %config.static_dir.display(),
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
