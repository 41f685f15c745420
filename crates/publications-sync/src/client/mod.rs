//! Semantic Scholar API client.
//!
//! Thin async wrapper over reqwest. Every call is a single attempt: no retry
//! middleware and no response cache, since the job runs once and exits.

use reqwest::Client;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{AuthorSearchResult, PaperPage};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client.
    client: Client,

    /// Graph API base URL.
    graph_api_url: String,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()?;

        Ok(Self { client, graph_api_url: config.graph_api_url.clone() })
    }

    /// Get one page of an author's works.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author_papers(
        &self,
        author_id: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<PaperPage> {
        let url = format!("{}/author/{}/papers", self.graph_api_url, author_id);

        let params = vec![
            ("fields".to_string(), fields.join(",")),
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
        ];

        self.get(&url, &params).await
    }

    /// Search for authors by free-text name.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_authors(
        &self,
        query: &str,
        limit: u32,
    ) -> ClientResult<AuthorSearchResult> {
        let url = format!("{}/author/search", self.graph_api_url);

        let params = vec![
            ("query".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        self.get(&url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, ?params, "GET");

        let response = self.client.get(url).query(params).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("graph_api_url", &self.graph_api_url)
            .finish()
    }
}
