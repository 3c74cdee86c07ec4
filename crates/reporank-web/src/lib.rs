//! reporank-web — HTTP service for ranked repository search.
//! Exposes a single endpoint:
//!   - GET /repos/rank — fetch, score, and order repositories for a language

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
