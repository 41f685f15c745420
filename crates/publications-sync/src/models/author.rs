//! Author data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

/// Author search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSearchResult {
    /// Total matching authors.
    #[serde(default)]
    pub total: i64,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results.
    #[serde(default)]
    pub next: Option<i32>,

    /// Candidate authors, best match first.
    #[serde(default)]
    pub data: Vec<Author>,
}

/// A candidate author returned by the name search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique Semantic Scholar author ID.
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Author {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Author entry embedded in a paper's author list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID, absent for authors S2 could not disambiguate.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}
