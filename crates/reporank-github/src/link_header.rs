//! Parsing of the GitHub `Link` response header.
//!
//! The header is a comma-separated list of `<URL>; rel="name"` entries
//! pointing at the next/prev/first/last result pages.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LinkHeaderError {
    /// An entry did not split on `;` into exactly a URL part and a rel part.
    #[error("link header entry could not be split on ';': {entry:?}")]
    MalformedEntry { entry: String },
}

/// Relation name → URL mapping with explicit insertion order and
/// last-write-wins overwrite semantics, so JSON serialization of the links
/// stays deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationLinks {
    entries: Vec<(String, String)>,
}

impl PaginationLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a link. A relation seen before keeps its position but takes
    /// the new URL.
    pub fn insert(&mut self, rel: impl Into<String>, url: impl Into<String>) {
        let rel = rel.into();
        let url = url.into();
        match self.entries.iter_mut().find(|(r, _)| *r == rel) {
            Some((_, existing)) => *existing = url,
            None => self.entries.push((rel, url)),
        }
    }

    pub fn get(&self, rel: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| r == rel)
            .map(|(_, url)| url.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(r, u)| (r.as_str(), u.as_str()))
    }
}

impl Serialize for PaginationLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, url) in &self.entries {
            map.serialize_entry(rel, url)?;
        }
        map.end()
    }
}

/// Parse a raw `Link` header into [`PaginationLinks`].
///
/// An absent or empty header yields an empty mapping. Each comma-separated
/// entry must split on `;` into exactly two parts: the angle-bracketed URL
/// and the `rel="name"` parameter. Anything else fails with
/// [`LinkHeaderError::MalformedEntry`] — extra per-entry parameters are not
/// tolerated. A relation name appearing twice keeps the later URL.
pub fn parse_link_header(header: Option<&str>) -> Result<PaginationLinks, LinkHeaderError> {
    let mut links = PaginationLinks::new();
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Ok(links),
    };

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let (url_part, rel_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(url), Some(rel), None) => (url, rel),
            _ => {
                return Err(LinkHeaderError::MalformedEntry { entry: entry.trim().to_string() })
            }
        };

        links.insert(strip_rel(rel_part), strip_angle_brackets(url_part));
    }

    Ok(links)
}

fn strip_angle_brackets(part: &str) -> &str {
    let part = part.trim();
    part.strip_prefix('<')
        .and_then(|p| p.strip_suffix('>'))
        .unwrap_or(part)
}

fn strip_rel(part: &str) -> &str {
    let part = part.trim();
    part.strip_prefix("rel=\"")
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(part)
}
