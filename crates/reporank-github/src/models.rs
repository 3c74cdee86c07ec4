//! Wire types for the GitHub search API.

use reporank_common::models::Repository;
use serde::Deserialize;

/// Body of `GET /search/repositories`. A payload without an `items` array
/// decodes as an empty result list.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<Repository>,
}

/// Error body GitHub returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
