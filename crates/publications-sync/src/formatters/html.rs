//! HTML fragment rendering for the publication list.
//!
//! Title, author and venue text are inserted verbatim; the API data is
//! trusted and nothing is escaped.

use chrono::Local;

use crate::grouping::GroupedPublications;
use crate::models::Paper;

/// Authors shown per work before the list is cut with ", ...".
pub const MAX_DISPLAY_AUTHORS: usize = 6;

const STYLE: &str = "<style>
.pub-list { list-style-type: decimal; }
.pub-item { margin-bottom: 1em; }
.pub-title { font-weight: normal; }
.pub-authors { color: #666; }
.pub-venue { font-style: italic; }
.pub-links { margin-top: 0.3em; }
.pub-links a { margin-right: 1em; text-decoration: none; color: #0066cc; }
.pub-links a:hover { text-decoration: underline; }
</style>
";

/// An outbound link rendered under a work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperLink {
    /// Link label, e.g. `[DOI]`.
    pub label: &'static str,
    /// Target URL.
    pub href: String,
}

/// Links for a work, in display order. Absent identifiers produce no link.
#[must_use]
pub fn paper_links(paper: &Paper) -> Vec<PaperLink> {
    let mut links = Vec::new();

    if let Some(url) = paper.url() {
        links.push(PaperLink { label: "[Semantic Scholar]", href: url.to_string() });
    }
    if let Some(doi) = paper.doi() {
        links.push(PaperLink { label: "[DOI]", href: format!("https://doi.org/{doi}") });
    }
    if let Some(arxiv) = paper.arxiv_id() {
        links.push(PaperLink { label: "[arXiv]", href: format!("https://arxiv.org/abs/{arxiv}") });
    }
    if let Some(pmid) = paper.pubmed_id() {
        links.push(PaperLink {
            label: "[PubMed]",
            href: format!("https://pubmed.ncbi.nlm.nih.gov/{pmid}"),
        });
    }

    links
}

/// Render the fragment stamped with the current local time.
#[must_use]
pub fn render_html(grouped: &GroupedPublications<'_>) -> String {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    render_html_at(grouped, &now)
}

/// Render the fragment with an explicit "last updated" stamp.
#[must_use]
pub fn render_html_at(grouped: &GroupedPublications<'_>, updated: &str) -> String {
    let mut output = String::new();

    output.push_str("\n<!-- Auto-generated publications list -->\n");
    output.push_str(&format!("<!-- Last updated: {updated} -->\n"));
    output.push_str("<!-- Source: Semantic Scholar API -->\n\n");
    output.push_str(STYLE);
    output.push_str(&format!(
        "<p><strong>Total publications: {}</strong></p>\n",
        grouped.total()
    ));

    for bucket in grouped.buckets() {
        output.push_str(&format!("\n<h3>{}</h3>\n", bucket.key));
        output.push_str("<ol class='pub-list'>\n");

        for paper in &bucket.papers {
            output.push_str(&format_paper_item(paper));
        }

        output.push_str("</ol>\n");
    }

    output
}

/// Render one `<li>` entry.
#[must_use]
pub fn format_paper_item(paper: &Paper) -> String {
    let mut output = String::new();

    output.push_str("<li class='pub-item'>\n");
    output.push_str(&format!(
        "    <span class='pub-title'>{}</span><br>\n",
        paper.title_or_default()
    ));
    output.push_str(&format!(
        "    <span class='pub-authors'>{}</span><br>\n",
        paper.display_authors(MAX_DISPLAY_AUTHORS)
    ));
    output.push_str(&format!("    <span class='pub-venue'>{}</span>\n", paper.venue_or_default()));
    output.push_str("    <div class='pub-links'>\n");

    for link in paper_links(paper) {
        output.push_str(&format!(
            "        <a href=\"{}\" target=\"_blank\">{}</a>\n",
            link.href, link.label
        ));
    }

    output.push_str("    </div>\n</li>\n");
    output
}
