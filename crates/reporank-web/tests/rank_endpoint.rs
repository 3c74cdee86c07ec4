//! Endpoint tests driving the router against an in-memory source.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use reporank_common::models::Repository;
use reporank_github::client::MockRepositorySource;
use reporank_web::router::build_router;
use reporank_web::state::AppState;

fn repo(full_name: &str, stars: i64, forks: i64, watchers: i64, updated_at: &str) -> Repository {
    Repository {
        full_name: full_name.to_string(),
        stargazers_count: stars,
        forks_count: forks,
        watchers_count: watchers,
        updated_at: updated_at.to_string(),
        extra: serde_json::Map::new(),
    }
}

fn app_with(source: MockRepositorySource) -> axum::Router {
    build_router(AppState::new(Arc::new(source)))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn rank_endpoint_returns_ranked_repositories() {
    let now = chrono::Utc::now().to_rfc3339();
    let source = MockRepositorySource::new()
        .with_repository(repo("a/low", 1, 0, 0, &now))
        .with_repository(repo("b/high", 500, 10, 10, &now))
        .with_link("next", "https://api.github.com/search/repositories?page=2");

    let (status, body) = get_json(app_with(source), "/repos/rank?language=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Repositories ranked successfully.");
    assert_eq!(body["page"], 1);

    let repos = body["data"]["repositories"].as_array().unwrap();
    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0]["full_name"], "b/high");
    assert_eq!(repos[1]["full_name"], "a/low");
    assert!(
        repos[0]["popularity_score"].as_i64().unwrap()
            > repos[1]["popularity_score"].as_i64().unwrap()
    );

    assert_eq!(
        body["paginationLinks"]["next"],
        "https://api.github.com/search/repositories?page=2"
    );
}

#[tokio::test]
async fn rank_endpoint_echoes_requested_page() {
    let source = MockRepositorySource::new();

    let (status, body) =
        get_json(app_with(source), "/repos/rank?language=rust&perPage=5&page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 3);
    assert!(body["data"]["repositories"].as_array().unwrap().is_empty());
    assert_eq!(body["paginationLinks"], serde_json::json!({}));
}

#[tokio::test]
async fn rank_endpoint_defaults_to_page_one() {
    let source = MockRepositorySource::new();

    let (_, body) = get_json(app_with(source), "/repos/rank?language=rust").await;

    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn rate_limited_upstream_maps_to_403_envelope() {
    let source = MockRepositorySource::new().with_api_error(403, "API rate limit exceeded");

    let (status, body) = get_json(app_with(source), "/repos/rank?language=rust").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "GitHub API rate limit exceeded. Please try again later.");
    assert_eq!(body["error"]["code"], 403);
    assert!(body["error"]["description"]
        .as_str()
        .unwrap()
        .contains("API rate limit exceeded"));
}

#[tokio::test]
async fn bad_credentials_map_to_401_envelope() {
    let source = MockRepositorySource::new().with_api_error(401, "Bad credentials");

    let (status, body) = get_json(app_with(source), "/repos/rank?language=rust").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid GitHub credentials.");
}

#[tokio::test]
async fn unexpected_upstream_error_maps_to_generic_message() {
    let source = MockRepositorySource::new().with_api_error(500, "boom");

    let (status, body) = get_json(app_with(source), "/repos/rank?language=rust").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "An unexpected error occurred.");
}
