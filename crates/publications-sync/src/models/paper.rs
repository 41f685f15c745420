//! Paper data model matching Semantic Scholar API schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AuthorRef;

/// One page of an author's works (`/author/{id}/papers`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperPage {
    /// Offset of this page.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if the API reports more results.
    #[serde(default)]
    pub next: Option<i32>,

    /// Works on this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

/// A publication record as returned by the works endpoint.
///
/// Records are never modified after they are fetched. Requested fields that
/// are absent serialize back as `null`, so the JSON backup reads like the API
/// payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Authors in byline order.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// External identifiers (DOI, ArXiv, PubMed, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// Canonical Semantic Scholar page.
    #[serde(default)]
    pub url: Option<String>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the venue, or an empty string.
    #[must_use]
    pub fn venue_or_default(&self) -> &str {
        self.venue.as_deref().unwrap_or_default()
    }

    /// Get the canonical URL if available.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        non_empty(self.external_ids.as_ref()?.doi.as_deref())
    }

    /// Get the ArXiv ID if available.
    #[must_use]
    pub fn arxiv_id(&self) -> Option<&str> {
        non_empty(self.external_ids.as_ref()?.arxiv.as_deref())
    }

    /// Get the PubMed ID if available.
    #[must_use]
    pub fn pubmed_id(&self) -> Option<&str> {
        non_empty(self.external_ids.as_ref()?.pubmed.as_deref())
    }

    /// Comma-joined names of the first `max` authors, with ", ..." appended
    /// when the byline is longer.
    #[must_use]
    pub fn display_authors(&self, max: usize) -> String {
        let mut names = self
            .authors
            .iter()
            .take(max)
            .map(|a| a.name.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", ");

        if self.authors.len() > max {
            names.push_str(", ...");
        }

        names
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// External identifiers for a paper.
///
/// Only DOI, ArXiv and PubMed are linked; every other scheme is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv", default, skip_serializing_if = "Option::is_none")]
    pub arxiv: Option<String>,

    /// PubMed ID.
    #[serde(rename = "PubMed", default, skip_serializing_if = "Option::is_none")]
    pub pubmed: Option<String>,

    /// Remaining schemes (MAG, DBLP, CorpusId, ...).
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(n: usize) -> Vec<AuthorRef> {
        (1..=n)
            .map(|i| AuthorRef { author_id: Some(i.to_string()), name: Some(format!("A{i}")) })
            .collect()
    }

    #[test]
    fn test_title_fallback() {
        let paper = Paper::default();
        assert_eq!(paper.title_or_default(), "Untitled");
        assert_eq!(paper.venue_or_default(), "");
    }

    #[test]
    fn test_display_authors_truncates() {
        let paper = Paper { authors: authors(8), ..Default::default() };
        assert_eq!(paper.display_authors(6), "A1, A2, A3, A4, A5, A6, ...");
    }

    #[test]
    fn test_display_authors_exactly_max() {
        let paper = Paper { authors: authors(6), ..Default::default() };
        assert_eq!(paper.display_authors(6), "A1, A2, A3, A4, A5, A6");
    }

    #[test]
    fn test_display_authors_missing_name() {
        let paper = Paper {
            authors: vec![
                AuthorRef { author_id: None, name: None },
                AuthorRef { author_id: None, name: Some("B".into()) },
            ],
            ..Default::default()
        };
        assert_eq!(paper.display_authors(6), ", B");
    }

    #[test]
    fn test_empty_identifiers_are_absent() {
        let paper = Paper {
            external_ids: Some(ExternalIds { doi: Some(String::new()), ..Default::default() }),
            url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(paper.doi(), None);
        assert_eq!(paper.url(), None);
    }

    #[test]
    fn test_external_ids_keep_unknown_schemes() {
        let json = r#"{"DOI": "10.1/xyz", "CorpusId": 12345, "DBLP": "journals/x/Y20"}"#;
        let ids: ExternalIds = serde_json::from_str(json).unwrap();
        assert_eq!(ids.doi.as_deref(), Some("10.1/xyz"));
        assert_eq!(ids.other["CorpusId"], 12345);

        let back = serde_json::to_value(&ids).unwrap();
        assert_eq!(back["DBLP"], "journals/x/Y20");
        assert!(back.get("ArXiv").is_none());
    }

    #[test]
    fn test_paper_parses_api_payload() {
        let json = r#"{
            "paperId": "abc",
            "title": "Causal inference",
            "year": 2021,
            "authors": [{"authorId": "1", "name": "T. Le"}],
            "venue": "",
            "publicationDate": null,
            "externalIds": {"ArXiv": "2101.00001"},
            "url": "https://www.semanticscholar.org/paper/abc",
            "citationCount": 3,
            "abstract": null
        }"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.year, Some(2021));
        assert_eq!(paper.arxiv_id(), Some("2101.00001"));
        assert_eq!(paper.venue_or_default(), "");
        assert_eq!(paper.pubmed_id(), None);
    }
}
