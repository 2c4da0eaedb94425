//! Page text extraction backed by lopdf.

use super::PageTextSource;
use crate::error::{ExpectError, ExpectResult};
use lopdf::Document;
use std::path::Path;

/// Extracts page text with lopdf's content-stream text decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfSource;

impl LopdfSource {
    /// Creates a new lopdf-backed source.
    pub fn new() -> Self {
        Self
    }

    /// Extracts trimmed page text from an already loaded document.
    pub fn pages_of(doc: &Document) -> Result<Vec<String>, lopdf::Error> {
        doc.get_pages()
            .into_keys()
            .map(|page_num| {
                doc.extract_text(&[page_num])
                    .map(|text| text.trim().to_string())
            })
            .collect()
    }
}

impl PageTextSource for LopdfSource {
    fn extract_pages(&self, path: &Path) -> ExpectResult<Vec<String>> {
        if !path.exists() {
            return Err(ExpectError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "PDF does not exist"),
            });
        }

        let doc = Document::load(path).map_err(|e| ExpectError::extraction(path, e))?;
        let pages = Self::pages_of(&doc).map_err(|e| ExpectError::extraction(path, e))?;

        tracing::debug!(pdf = %path.display(), pages = pages.len(), "extracted page text");
        Ok(pages)
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}
