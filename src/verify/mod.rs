//! Checking expectations against extracted page text.
//!
//! Each expectation is checked field by field and every failure is
//! collected, so one run reports all mismatches rather than the first.

pub mod mismatch;

pub use mismatch::Mismatch;

use crate::error::{ExpectError, ExpectResult};
use crate::expectation::Expectation;
use crate::extraction::{LopdfSource, PageTextSource};
use std::path::Path;

/// Characters of page text shown when a `contains` check fails.
pub const DEFAULT_PREVIEW_CHARS: usize = 201;

/// Verification service coordinating extraction and checks.
pub struct Verifier {
    source: Box<dyn PageTextSource>,
    preview_chars: usize,
}

impl Verifier {
    /// Creates a verifier reading pages from `source`.
    pub fn new(source: Box<dyn PageTextSource>) -> Self {
        Self {
            source,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    /// Creates a verifier backed by lopdf.
    pub fn with_lopdf() -> Self {
        Self::new(Box::new(LopdfSource::new()))
    }

    /// Sets how many characters of page text a failed `contains` shows.
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    /// Returns the name of the underlying page text source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Extracts page text from `pdf`.
    pub fn extract_pages(&self, pdf: &Path) -> ExpectResult<Vec<String>> {
        self.source.extract_pages(pdf)
    }

    /// Checks `expectations` against `pdf`, returning mismatch messages.
    ///
    /// An empty list means every check passed. Extraction failures are
    /// returned as errors, not as mismatches.
    pub fn verify(&self, pdf: &Path, expectations: &[Expectation]) -> ExpectResult<Vec<String>> {
        let pages = self.extract_pages(pdf)?;
        Ok(self
            .mismatches(&pages, expectations)
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// Like [`verify`](Self::verify), but fails with
    /// [`ExpectError::AssertionFailed`] when any check fails.
    pub fn verify_strict(&self, pdf: &Path, expectations: &[Expectation]) -> ExpectResult<()> {
        let errors = self.verify(pdf, expectations)?;
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ExpectError::AssertionFailed { errors })
        }
    }

    /// Checks expectations against already extracted page text.
    pub fn mismatches(&self, pages: &[String], expectations: &[Expectation]) -> Vec<Mismatch> {
        let mut found = Vec::new();
        for exp in expectations {
            self.check(pages, exp, &mut found);
        }
        found
    }

    fn check(&self, pages: &[String], exp: &Expectation, found: &mut Vec<Mismatch>) {
        if let Some(expected) = exp.page_count() {
            if usize::try_from(expected).ok() != Some(pages.len()) {
                found.push(Mismatch::PageCount {
                    expected,
                    actual: pages.len(),
                });
            }
        }

        let Some(page) = exp.page_number() else {
            return;
        };
        let text = page_text(pages, page);

        if let Some(expected) = exp.contains.as_deref() {
            match text {
                None => found.push(Mismatch::PageMissing {
                    page,
                    available: pages.len(),
                }),
                Some(text) if !strip_whitespace(text).contains(&strip_whitespace(expected)) => {
                    found.push(Mismatch::MissingText {
                        page,
                        expected: expected.to_string(),
                        preview: self.preview(text),
                    });
                }
                Some(_) => {}
            }
        }

        // Out-of-range pages are not reported here; only `contains` does that.
        if let (Some(forbidden), Some(text)) = (exp.not_contains.as_deref(), text) {
            if text.contains(forbidden) {
                found.push(Mismatch::ForbiddenText {
                    page,
                    text: forbidden.to_string(),
                });
            }
        }
    }

    fn preview(&self, text: &str) -> String {
        text.replace('\n', "\\n")
            .chars()
            .take(self.preview_chars)
            .collect()
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::with_lopdf()
    }
}

/// Looks up a 1-based page, returning `None` when out of range.
fn page_text(pages: &[String], page: i64) -> Option<&str> {
    let index = usize::try_from(page).ok()?.checked_sub(1)?;
    pages.get(index).map(String::as_str)
}

/// Removes every whitespace character.
///
/// Extracted text often gains spaces inside words, so `contains` compares
/// with all whitespace removed from both sides.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
