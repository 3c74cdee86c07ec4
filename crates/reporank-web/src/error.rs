//! Client-facing error envelope for upstream failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use reporank_github::GithubError;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: u16,
    success: bool,
    message: &'static str,
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    description: String,
}

/// Maps upstream failures onto the service's error envelope. The upstream
/// status is forwarded as-is; only the user-facing message is translated.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    description: String,
}

fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNAUTHORIZED => "Invalid GitHub credentials.",
        StatusCode::FORBIDDEN => "GitHub API rate limit exceeded. Please try again later.",
        StatusCode::NOT_FOUND => "The requested resource was not found.",
        StatusCode::UNPROCESSABLE_ENTITY => {
            "Unprocessable entity. Please check your request parameters."
        }
        _ => "An unexpected error occurred.",
    }
}

impl From<GithubError> for ApiError {
    fn from(err: GithubError) -> Self {
        let status = match &err {
            GithubError::Api { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!(%err, status = status.as_u16(), "request failed");
        Self { status, description: err.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.status.as_u16();
        let body = ErrorResponse {
            status: code,
            success: false,
            message: status_message(self.status),
            error: ErrorBody { code, description: self.description },
        };
        (self.status, Json(body)).into_response()
    }
}
