//! GitHub repository search client.
//!
//! Uses the repository search endpoint:
//!   https://docs.github.com/en/rest/search/search?apiVersion=2022-11-28#search-repositories
//!
//! A failed upstream call is surfaced verbatim to the caller; there is no
//! retry or backoff here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use reporank_common::models::Repository;

use crate::error::GithubError;
use crate::link_header::{parse_link_header, PaginationLinks};
use crate::models::{ApiErrorBody, SearchResponse};

pub const GITHUB_API_URL: &str = "https://api.github.com/search/repositories";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Search parameters. Defaults for `created`, `per_page` and `page` are
/// owned by the web layer, not applied here.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub language: String,
    /// Creation-date floor, `YYYY-MM-DD`.
    pub created: String,
    pub per_page: u32,
    pub page: u32,
}

/// One page of search results plus the pagination links the API offered.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub repositories: Vec<Repository>,
    pub pagination: PaginationLinks,
}

/// Common interface for repository search backends.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, GithubError>;
}

pub struct GithubClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl GithubClient {
    pub fn new(token: Option<SecretString>) -> Result<Self, GithubError> {
        Self::with_base_url(GITHUB_API_URL, token)
    }

    /// Point the client at a different search endpoint (configuration
    /// override, also used by tests).
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: Option<SecretString>,
    ) -> Result<Self, GithubError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url: base_url.into(), token })
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, GithubError> {
        let q = format!("language:{} created:>={}", query.language, query.created);

        let mut request = self
            .client
            .get(&self.base_url)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(USER_AGENT, "reporank")
            .query(&[
                ("q", q),
                ("per_page", query.per_page.to_string()),
                ("page", query.page.to_string()),
            ]);

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
        }

        let response = request.send().await.inspect_err(|e| {
            if e.is_connect() || e.is_timeout() {
                warn!(error = %e, "no response received from GitHub API");
            } else {
                warn!(error = %e, "error sending request to GitHub API");
            }
        })?;

        let status = response.status();
        let link_header = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            warn!(status = status.as_u16(), %message, "GitHub API error");
            return Err(GithubError::Api { status: status.as_u16(), message });
        }

        let payload: SearchResponse = response.json().await?;
        let pagination = parse_link_header(link_header.as_deref())?;

        debug!(
            total = payload.total_count,
            fetched = payload.items.len(),
            incomplete = payload.incomplete_results,
            "GitHub search response"
        );

        Ok(SearchResults { repositories: payload.items, pagination })
    }
}

// ── Mock implementation for testing ────────────────────────────────────────

/// In-memory source with a builder-style setup, for exercising callers
/// without the network.
pub struct MockRepositorySource {
    repositories: Vec<Repository>,
    pagination: PaginationLinks,
    fail_with: Option<(u16, String)>,
}

impl MockRepositorySource {
    pub fn new() -> Self {
        Self {
            repositories: Vec::new(),
            pagination: PaginationLinks::new(),
            fail_with: None,
        }
    }

    pub fn with_repository(mut self, repo: Repository) -> Self {
        self.repositories.push(repo);
        self
    }

    pub fn with_link(mut self, rel: &str, url: &str) -> Self {
        self.pagination.insert(rel, url);
        self
    }

    /// Every `search` call fails with the given API status and message.
    pub fn with_api_error(mut self, status: u16, message: &str) -> Self {
        self.fail_with = Some((status, message.to_string()));
        self
    }
}

impl Default for MockRepositorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositorySource for MockRepositorySource {
    async fn search(&self, _query: &SearchQuery) -> Result<SearchResults, GithubError> {
        if let Some((status, message)) = &self.fail_with {
            return Err(GithubError::Api { status: *status, message: message.clone() });
        }
        Ok(SearchResults {
            repositories: self.repositories.clone(),
            pagination: self.pagination.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn repo(full_name: &str) -> Repository {
        Repository {
            full_name: full_name.to_string(),
            stargazers_count: 1,
            forks_count: 0,
            watchers_count: 1,
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            extra: Map::new(),
        }
    }

    fn query() -> SearchQuery {
        SearchQuery {
            language: "rust".to_string(),
            created: "2023-01-01".to_string(),
            per_page: 10,
            page: 1,
        }
    }

    #[tokio::test]
    async fn test_mock_source_returns_configured_results() {
        let source = MockRepositorySource::new()
            .with_repository(repo("a/b"))
            .with_link("next", "https://x/2");

        let results = source.search(&query()).await.unwrap();
        assert_eq!(results.repositories.len(), 1);
        assert_eq!(results.repositories[0].full_name, "a/b");
        assert_eq!(results.pagination.get("next"), Some("https://x/2"));
    }

    #[tokio::test]
    async fn test_mock_source_error_injection() {
        let source = MockRepositorySource::new().with_api_error(403, "rate limited");

        let err = source.search(&query()).await.unwrap_err();
        match err {
            GithubError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "rate limited");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
