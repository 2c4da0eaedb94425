//! Mismatches found while checking expectations.

use std::fmt;

/// A single failed check.
///
/// The `Display` form is the message reported to test authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The document has the wrong number of pages
    PageCount { expected: i64, actual: usize },

    /// A `contains` check referenced a page outside the document
    PageMissing { page: i64, available: usize },

    /// Expected text was not found on the page
    MissingText {
        page: i64,
        expected: String,
        preview: String,
    },

    /// Forbidden text was found on the page
    ForbiddenText { page: i64, text: String },
}

impl Mismatch {
    /// Returns the 1-based page this mismatch refers to, if any.
    pub fn page(&self) -> Option<i64> {
        match self {
            Self::PageCount { .. } => None,
            Self::PageMissing { page, .. }
            | Self::MissingText { page, .. }
            | Self::ForbiddenText { page, .. } => Some(*page),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageCount { expected, actual } => {
                write!(f, "Expected {} pages, got {}", expected, actual)
            }
            Self::PageMissing { page, available } => {
                write!(f, "Page {} does not exist (only {} pages)", page, available)
            }
            Self::MissingText {
                page,
                expected,
                preview,
            } => {
                write!(
                    f,
                    "Page {}: expected to contain \"{}\"\n  Got: \"{}...\"",
                    page, expected, preview
                )
            }
            Self::ForbiddenText { page, text } => {
                write!(f, "Page {}: should NOT contain \"{}\"", page, text)
            }
        }
    }
}
