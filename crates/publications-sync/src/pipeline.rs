//! One run of the job: fetch, group, render, persist.

use crate::client::SemanticScholarClient;
use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::formatters;
use crate::grouping::group_by_year;
use crate::persist::{self, SavedFiles};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records were found and both files written.
    Published(RunSummary),
    /// Neither the identifier nor the name search yielded records; nothing was written.
    NoPublications,
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Identifier the records were fetched for.
    pub author_id: String,
    /// Whether the name-search fallback was needed.
    pub used_fallback: bool,
    /// Number of records written.
    pub total: usize,
    /// Number of year buckets rendered.
    pub buckets: usize,
    /// Written artifacts.
    pub files: SavedFiles,
}

/// Run the pipeline once.
///
/// # Errors
///
/// Fails only when the HTTP client cannot be built or an output file cannot
/// be written. Fetch failures are logged and end in [`RunOutcome::NoPublications`].
pub async fn run(config: &Config) -> anyhow::Result<RunOutcome> {
    let client = SemanticScholarClient::new(config)?;
    let outcome = Fetcher::new(&client, config).fetch_with_fallback().await;

    if outcome.is_empty() {
        tracing::error!(
            author_id = %config.author_id,
            "Could not fetch publications! Please verify the configured author ID"
        );
        return Ok(RunOutcome::NoPublications);
    }

    let papers = outcome.papers;
    tracing::info!(total = papers.len(), "Total publications fetched");

    let grouped = group_by_year(&papers);
    let html = formatters::render_html(&grouped);
    let files = persist::save_results(&papers, &html, config)?;

    Ok(RunOutcome::Published(RunSummary {
        author_id: outcome.author_id.unwrap_or_else(|| config.author_id.clone()),
        used_fallback: outcome.used_fallback,
        total: grouped.total(),
        buckets: grouped.len(),
        files,
    }))
}
