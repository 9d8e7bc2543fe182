use axum::{routing::get, Router};
use std::path::Path;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::search::Searcher;

use super::handlers::*;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<Searcher>,
    pub started_at: Instant,
    pub queries_served: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(searcher: Arc<Searcher>) -> Self {
        Self {
            searcher,
            started_at: Instant::now(),
            queries_served: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/health", get(health_check))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
