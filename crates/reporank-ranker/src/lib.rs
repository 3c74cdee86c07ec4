//! reporank-ranker — Popularity scoring and ordering for repository records.

pub mod scorer;

pub use scorer::{popularity_score, rank};
