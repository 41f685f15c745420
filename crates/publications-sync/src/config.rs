//! Configuration for the publication list job.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout for a single page or search call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay after each successful page (usage policy of the public API).
    pub const PAGE_DELAY: Duration = Duration::from_secs(1);

    /// Works requested per page.
    pub const PAGE_SIZE: u32 = 100;

    /// Maximum candidates returned by the author name search.
    pub const AUTHOR_SEARCH_LIMIT: u32 = 5;
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields requested for every work of the author.
    pub const WORKS: &[&str] = &[
        "title",
        "year",
        "authors",
        "venue",
        "publicationDate",
        "externalIds",
        "url",
        "citationCount",
        "abstract",
    ];
}

/// Built-in target author and output locations.
pub mod defaults {
    /// Semantic Scholar author ID of the site owner.
    pub const AUTHOR_ID: &str = "2482441";

    /// Display name used for the fallback author search.
    pub const AUTHOR_NAME: &str = "Thuc Duy Le";

    /// Directory both artifacts are written to.
    pub const OUTPUT_DIR: &str = ".";

    /// Raw record backup.
    pub const JSON_FILE: &str = "publications.json";

    /// Rendered fragment.
    pub const HTML_FILE: &str = "publications.html";
}

/// Job configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay inserted after every non-empty page.
    pub page_delay: Duration,

    /// Works per page.
    pub page_size: u32,

    /// Candidate limit for the name search.
    pub author_search_limit: u32,

    /// Author identifier tried first.
    pub author_id: String,

    /// Author name used when the identifier yields nothing.
    pub author_name: String,

    /// Output directory for `publications.json` and `publications.html`.
    pub output_dir: PathBuf,
}

impl Config {
    /// Create the configuration used by a normal run.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            page_delay: api::PAGE_DELAY,
            page_size: api::PAGE_SIZE,
            author_search_limit: api::AUTHOR_SEARCH_LIMIT,
            author_id: defaults::AUTHOR_ID.to_string(),
            author_name: defaults::AUTHOR_NAME.to_string(),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            page_delay: Duration::from_millis(0), // No delay in tests
            ..Self::new()
        }
    }

    /// Replace the target author.
    #[must_use]
    pub fn with_author(
        mut self,
        author_id: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        self.author_id = author_id.into();
        self.author_name = author_name.into();
        self
    }

    /// Replace the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Path of the JSON backup.
    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(defaults::JSON_FILE)
    }

    /// Path of the HTML fragment.
    #[must_use]
    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(defaults::HTML_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
