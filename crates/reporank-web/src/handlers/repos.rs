//! Repository ranking endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use reporank_common::models::RankedRepository;
use reporank_github::client::SearchQuery;
use reporank_github::PaginationLinks;
use reporank_ranker::rank;

use crate::error::ApiError;
use crate::state::SharedState;

const DEFAULT_CREATED: &str = "2023-01-01";
const DEFAULT_PER_PAGE: u32 = 10;
const DEFAULT_PAGE: u32 = 1;

#[derive(Debug, Deserialize)]
pub struct RankParams {
    #[serde(default)]
    pub language: String,
    pub created: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RankedReposResponse {
    pub status: u16,
    pub success: bool,
    pub message: &'static str,
    pub page: u32,
    pub data: RankedReposData,
    #[serde(rename = "paginationLinks")]
    pub pagination_links: PaginationLinks,
}

#[derive(Debug, Serialize)]
pub struct RankedReposData {
    pub repositories: Vec<RankedRepository>,
}

/// GET /repos/rank — fetch repositories matching the language and
/// creation-date filter, rank them by popularity, and return the ordered
/// page together with the upstream pagination links.
///
/// Example: /repos/rank?language=rust&created=2023-01-01&perPage=15&page=3
pub async fn ranked_repos(
    State(state): State<SharedState>,
    Query(params): Query<RankParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = SearchQuery {
        language: params.language,
        created: params.created.unwrap_or_else(|| DEFAULT_CREATED.to_string()),
        per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        page: params.page.unwrap_or(DEFAULT_PAGE),
    };

    let results = state.source.search(&query).await?;
    let ranked = rank(results.repositories, Utc::now());

    info!(language = %query.language, page = query.page, count = ranked.len(), "repositories ranked");

    Ok(Json(RankedReposResponse {
        status: 200,
        success: true,
        message: "Repositories ranked successfully.",
        page: query.page,
        data: RankedReposData { repositories: ranked },
        pagination_links: results.pagination,
    }))
}
