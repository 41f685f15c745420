//! Paginated retrieval of an author's works, with a name-search fallback.
//!
//! Network and HTTP failures never escape this module. A failed page ends
//! pagination and keeps whatever was collected before it; a failed search
//! reports no candidate.

use crate::client::SemanticScholarClient;
use crate::config::{Config, fields};
use crate::models::Paper;

/// Result of [`Fetcher::fetch_with_fallback`].
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    /// Works in API pagination order.
    pub papers: Vec<Paper>,

    /// Identifier the works were fetched for, if any lookup succeeded.
    pub author_id: Option<String>,

    /// True when the configured identifier yielded nothing and the name search was used.
    pub used_fallback: bool,
}

impl FetchOutcome {
    /// True when neither lookup produced a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

/// Sequential fetcher over a [`SemanticScholarClient`].
#[derive(Debug)]
pub struct Fetcher<'a> {
    client: &'a SemanticScholarClient,
    config: &'a Config,
}

impl<'a> Fetcher<'a> {
    /// Create a fetcher borrowing the client and configuration.
    #[must_use]
    pub const fn new(client: &'a SemanticScholarClient, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// Fetch every work of `author_id`, one page at a time.
    ///
    /// Stops at the first empty page or the first failed request. The
    /// configured page delay is awaited after each non-empty page.
    pub async fn fetch_author_works(&self, author_id: &str) -> Vec<Paper> {
        let mut papers = Vec::new();
        let mut offset = 0;
        let limit = self.config.page_size;

        tracing::info!(author_id, "Fetching publications");

        loop {
            let page = match self
                .client
                .get_author_papers(author_id, offset, limit, fields::WORKS)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::error!(
                        author_id,
                        offset,
                        error = %e,
                        "Error fetching from Semantic Scholar"
                    );
                    break;
                }
            };

            if page.data.is_empty() {
                break;
            }

            papers.extend(page.data);
            tracing::info!(fetched = papers.len(), "Fetched papers so far");

            offset += limit;
            tokio::time::sleep(self.config.page_delay).await;
        }

        papers
    }

    /// Search authors by name and return the first candidate's identifier.
    ///
    /// Every candidate is logged so a wrong match can be spotted and the
    /// configured identifier corrected.
    pub async fn search_author(&self, name: &str) -> Option<String> {
        let result = match self.client.search_authors(name, self.config.author_search_limit).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(name, error = %e, "Error searching author");
                return None;
            }
        };

        for author in &result.data {
            tracing::info!(
                name = author.name_or_default(),
                id = %author.author_id,
                "Found author candidate"
            );
        }

        result.data.into_iter().next().map(|author| author.author_id)
    }

    /// Fetch by the configured identifier, falling back to a name search once.
    pub async fn fetch_with_fallback(&self) -> FetchOutcome {
        let author_id = &self.config.author_id;
        let papers = self.fetch_author_works(author_id).await;

        if !papers.is_empty() {
            return FetchOutcome {
                papers,
                author_id: Some(author_id.clone()),
                used_fallback: false,
            };
        }

        tracing::warn!(
            author_id,
            name = %self.config.author_name,
            "No publications found with author ID, searching by name"
        );

        let Some(found) = self.search_author(&self.config.author_name).await else {
            return FetchOutcome { used_fallback: true, ..FetchOutcome::default() };
        };

        tracing::info!(author_id = %found, "Found author ID");
        let papers = self.fetch_author_works(&found).await;

        FetchOutcome { papers, author_id: Some(found), used_fallback: true }
    }
}
