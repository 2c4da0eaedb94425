//! Page text extraction.
//!
//! The checker only needs one capability from a PDF reader: the text of
//! every page, in order. [`PageTextSource`] names that capability so the
//! verifier can be driven by a real reader or by synthetic text in tests.

pub mod lopdf_source;

pub use lopdf_source::LopdfSource;

use crate::error::{ExpectError, ExpectResult};
use std::path::Path;

/// Source of per-page text for a PDF.
///
/// Implementations return one entry per page, first page first, each
/// trimmed of surrounding whitespace.
pub trait PageTextSource: Send + Sync {
    /// Extracts the text of every page in `path`.
    fn extract_pages(&self, path: &Path) -> ExpectResult<Vec<String>>;

    /// Returns a human-readable name for this source.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> PageTextSource for F
where
    F: Fn(&Path) -> ExpectResult<Vec<String>> + Send + Sync,
{
    fn extract_pages(&self, path: &Path) -> ExpectResult<Vec<String>> {
        self(path)
    }
}

/// Extracts the whole document as one string using `pdf-extract`.
///
/// Page boundaries are not preserved; use [`PageTextSource`] for checks.
pub fn extract_text(path: &Path) -> ExpectResult<String> {
    let bytes = std::fs::read(path).map_err(|e| ExpectError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExpectError::TextExtraction {
        path: path.to_path_buf(),
        reason: e.to_string(),
        source: None,
    })
}
