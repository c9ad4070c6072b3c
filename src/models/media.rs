use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when a media list is persisted as a single column.
pub const MEDIA_DELIMITER: char = ',';

/// Ordered list of relative media paths belonging to one project.
///
/// The first entry is the thumbnail. Persisted as a comma-joined string; the
/// empty string is the empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaList(Vec<String>);

impl MediaList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a persisted media string. Blank segments are dropped.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(MEDIA_DELIMITER)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn push(&mut self, path: String) {
        self.0.push(path);
    }

    /// `self` followed by `newer`, order preserved on both sides.
    pub fn concat(mut self, newer: MediaList) -> Self {
        self.0.extend(newer.0);
        self
    }

    /// JSON array string consumed by the lightbox script.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for MediaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for path in &self.0 {
            if !first {
                write!(f, "{MEDIA_DELIMITER}")?;
            }
            f.write_str(path)?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<String>> for MediaList {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}
