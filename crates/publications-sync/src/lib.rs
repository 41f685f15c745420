//! Publication list sync
//!
//! Fetches every work attributed to one author from the Semantic Scholar
//! Graph API, groups the works by year and renders a static HTML fragment
//! for a website, alongside a JSON backup of the raw records.
//!
//! # Pipeline
//!
//! - **Fetch**: paginated `/author/{id}/papers`, falling back to an author
//!   name search when the configured ID yields nothing
//! - **Group**: year buckets, "Unknown" first, then newest to oldest
//! - **Render**: HTML fragment with inline styles and per-work links
//! - **Persist**: `publications.json` and `publications.html`
//!
//! # Example
//!
//! ```no_run
//! use publications_sync::{config::Config, pipeline::{self, RunOutcome}};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new().with_output_dir("site/_includes");
//!
//!     if let RunOutcome::Published(summary) = pipeline::run(&config).await? {
//!         println!("{} publications", summary.total);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod grouping;
pub mod models;
pub mod persist;
pub mod pipeline;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, PersistError};
