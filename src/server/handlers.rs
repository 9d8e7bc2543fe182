use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::atomic::Ordering;

use super::protocol::*;
use super::router::AppState;

/// `GET /search?q=<query>[&limit=<n>]`
///
/// Responds with a JSON array of excerpts in corpus order. The query string
/// is read as raw pairs so that a repeated `q` or a malformed `limit` never
/// turns into an extractor rejection.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SearchParams::from_pairs(pairs);
    let Some(query) = params.query().map(str::to_owned) else {
        return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response();
    };
    let limit = params.limit.unwrap_or(usize::MAX);

    // Lookup and extraction are CPU-bound; keep them off the async workers.
    let searcher = state.searcher.clone();
    let encoded = tokio::task::spawn_blocking(move || {
        let excerpts: Vec<&str> = searcher.search(&query).into_iter().take(limit).collect();
        serde_json::to_vec(&excerpts)
    })
    .await;

    state.queries_served.fetch_add(1, Ordering::Relaxed);

    match encoded {
        Ok(Ok(body)) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Ok(Err(e)) => {
            tracing::error!("failed to encode search results: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
        Err(e) => {
            tracing::error!("search task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
    }
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        queries_served: state.queries_served.load(Ordering::Relaxed),
        corpus_bytes: state.searcher.index().len(),
    })
}
