//! Output formatters.

mod html;

pub use html::*;
