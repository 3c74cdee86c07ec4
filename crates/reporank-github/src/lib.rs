//! reporank-github — GitHub search API client and Link-header pagination parsing.

pub mod client;
pub mod error;
pub mod link_header;
pub mod models;

pub use client::{GithubClient, MockRepositorySource, RepositorySource, SearchQuery, SearchResults};
pub use error::GithubError;
pub use link_header::{parse_link_header, LinkHeaderError, PaginationLinks};
