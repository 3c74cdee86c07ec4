use thiserror::Error;

use crate::link_header::LinkHeaderError;

#[derive(Debug, Error)]
pub enum GithubError {
    /// The API answered with a non-success status (401, 403, 404, 422, ...).
    /// `message` carries the upstream error body's message when present.
    #[error("GitHub API error: {status} {message}")]
    Api { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    LinkHeader(#[from] LinkHeaderError),
}
