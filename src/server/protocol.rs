//! Request parameters and response bodies for the HTTP API

use serde::{Deserialize, Serialize};

/// Body returned when `q` is missing or empty
pub const MISSING_QUERY: &str = "missing search query in URL params";

/// Body returned when the result list cannot be produced
pub const ENCODING_FAILURE: &str = "encoding failure";

/// Query string of `GET /search`
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// The search query; required and non-empty
    pub q: Option<String>,
    /// Maximum number of excerpts to return
    pub limit: Option<usize>,
}

impl SearchParams {
    /// Collect parameters from decoded query pairs
    ///
    /// The first `q` wins. A `limit` that does not parse is ignored, as are
    /// unknown keys.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" if params.q.is_none() => params.q = Some(value),
                "limit" if params.limit.is_none() => params.limit = value.parse().ok(),
                _ => {}
            }
        }
        params
    }

    /// The query, if present and non-empty
    pub fn query(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub queries_served: u64,
    pub corpus_bytes: usize,
}
