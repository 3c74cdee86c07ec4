//! Repository records as exchanged with the GitHub search API and the ranker.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A repository record decoded from a search-results payload.
///
/// Only the fields the ranker reads are typed. Every other field GitHub
/// sends is carried through `extra` untouched, so the ranked output echoes
/// the full upstream record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repository {
    pub full_name: String,
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub forks_count: i64,
    #[serde(default)]
    pub watchers_count: i64,
    /// ISO-8601 timestamp of the last update. Kept as text so a malformed
    /// value is a scoring-time fallback rather than a decode failure.
    #[serde(default)]
    pub updated_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A repository with its popularity score attached. Transient output value
/// of one ranking call; the input record itself is never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedRepository {
    #[serde(flatten)]
    pub repository: Repository,
    pub popularity_score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_unknown_fields() {
        let payload = json!({
            "full_name": "rust-lang/rust",
            "stargazers_count": 90000,
            "forks_count": 12000,
            "watchers_count": 90000,
            "updated_at": "2024-05-01T10:00:00Z",
            "html_url": "https://github.com/rust-lang/rust",
            "language": "Rust"
        });

        let repo: Repository = serde_json::from_value(payload).unwrap();
        assert_eq!(repo.full_name, "rust-lang/rust");
        assert_eq!(repo.stargazers_count, 90000);
        assert_eq!(
            repo.extra.get("html_url").and_then(|v| v.as_str()),
            Some("https://github.com/rust-lang/rust")
        );
    }

    #[test]
    fn test_ranked_repository_serializes_flat() {
        let repo: Repository = serde_json::from_value(json!({
            "full_name": "a/b",
            "stargazers_count": 1,
            "forks_count": 2,
            "watchers_count": 3,
            "updated_at": "2024-05-01T10:00:00Z",
            "language": "Rust"
        }))
        .unwrap();

        let ranked = RankedRepository { repository: repo, popularity_score: 106 };
        let value = serde_json::to_value(&ranked).unwrap();

        // The record and its score sit at the same level, like the upstream shape.
        assert_eq!(value["full_name"], "a/b");
        assert_eq!(value["language"], "Rust");
        assert_eq!(value["popularity_score"], 106);
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let repo: Repository =
            serde_json::from_value(json!({ "full_name": "a/b" })).unwrap();
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.forks_count, 0);
        assert_eq!(repo.watchers_count, 0);
        assert_eq!(repo.updated_at, "");
    }
}
