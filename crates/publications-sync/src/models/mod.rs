//! Data models for Semantic Scholar API entities.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod author;
mod paper;

pub use author::{Author, AuthorRef, AuthorSearchResult};
pub use paper::{ExternalIds, Paper, PaperPage};
