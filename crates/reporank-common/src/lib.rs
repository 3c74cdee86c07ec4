//! reporank-common — Shared repository data model used across all Reporank crates.

pub mod models;

// Re-export commonly used types
pub use models::{RankedRepository, Repository};
