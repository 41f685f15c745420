//! Writing the JSON backup and the HTML fragment to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PersistError, PersistResult};
use crate::models::Paper;

/// Paths of the artifacts written by [`save_results`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFiles {
    /// Raw record dump.
    pub json_path: PathBuf,
    /// Rendered fragment.
    pub html_path: PathBuf,
}

/// Pretty JSON (two-space indent) of the fetched records, non-ASCII kept literal.
pub fn to_json(papers: &[Paper]) -> PersistResult<String> {
    Ok(serde_json::to_string_pretty(papers)?)
}

/// Write `publications.json` then `publications.html` into the configured
/// output directory.
///
/// The directory is created if missing. Writes are not atomic: a failure on
/// the HTML file leaves the JSON backup in place.
pub fn save_results(
    papers: &[Paper],
    html: &str,
    config: &Config,
) -> PersistResult<SavedFiles> {
    let output_dir = &config.output_dir;
    fs::create_dir_all(output_dir)
        .map_err(|source| PersistError::CreateDir { path: output_dir.clone(), source })?;

    let json_path = config.json_path();
    write_file(&json_path, &to_json(papers)?)?;
    tracing::info!(count = papers.len(), path = %json_path.display(), "Saved publications");

    let html_path = config.html_path();
    write_file(&html_path, html)?;
    tracing::info!(path = %html_path.display(), "Saved HTML");

    Ok(SavedFiles { json_path, html_path })
}

fn write_file(path: &Path, contents: &str) -> PersistResult<()> {
    fs::write(path, contents)
        .map_err(|source| PersistError::Write { path: path.to_path_buf(), source })
}
