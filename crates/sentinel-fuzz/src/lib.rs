//! Fuzzing library for publications-sync.
//!
//! This crate provides fuzzing targets for the API payload deserializers
//! and the HTML renderer fed by them.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_paper_page -- -max_total_time=60
//! ```

pub use publications_sync::models;
