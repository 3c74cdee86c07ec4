//! Popularity score computation.
//!
//! The score is time-dependent: it decays with the days since a repository
//! was last updated. The current time is an explicit argument so callers can
//! pin it in tests; the web layer passes `Utc::now()`.

use chrono::{DateTime, Utc};
use tracing::warn;

use reporank_common::models::{RankedRepository, Repository};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `updated_at` to `now`, floored toward negative infinity.
/// A future timestamp yields a negative day count.
fn days_since_update(updated_at: &str, now: DateTime<Utc>) -> Option<i64> {
    let updated = DateTime::parse_from_rfc3339(updated_at).ok()?;
    let elapsed = now.signed_duration_since(updated.with_timezone(&Utc));
    Some(elapsed.num_seconds().div_euclid(SECONDS_PER_DAY))
}

/// Recency contribution: 100 for a repository updated today, decaying by one
/// per day to zero after 100 days. A future `updated_at` scores above 100,
/// uncapped. An unparseable `updated_at` is treated as infinitely stale and
/// contributes 0 rather than failing the call.
fn recency_score(repo: &Repository, now: DateTime<Utc>) -> i64 {
    match days_since_update(&repo.updated_at, now) {
        Some(days) => (100 - days).max(0),
        None => {
            warn!(
                full_name = %repo.full_name,
                updated_at = %repo.updated_at,
                "unparseable updated_at, scoring recency as 0"
            );
            0
        }
    }
}

/// Composite popularity score: stars + forks + watchers + recency, all with
/// equal weight. No normalization, no damping.
pub fn popularity_score(repo: &Repository, now: DateTime<Utc>) -> i64 {
    repo.stargazers_count + repo.forks_count + repo.watchers_count + recency_score(repo, now)
}

/// Score every record against `now` and order the result by descending
/// popularity score, ties broken by ascending byte ordering of `full_name`.
///
/// The output is a permutation of the input with scores attached; no record
/// is dropped or invented, and identical input with an identical `now`
/// always produces the identical order.
pub fn rank(repositories: Vec<Repository>, now: DateTime<Utc>) -> Vec<RankedRepository> {
    let mut ranked: Vec<RankedRepository> = repositories
        .into_iter()
        .map(|repo| {
            let popularity_score = popularity_score(&repo, now);
            RankedRepository { repository: repo, popularity_score }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.popularity_score
            .cmp(&a.popularity_score)
            .then_with(|| a.repository.full_name.cmp(&b.repository.full_name))
    });

    ranked
}
