//! Error types for PDF expectation checking.
//!
//! Directive parsing never fails, so the only errors are I/O on the input
//! files, text extraction failures from the PDF reader, and the assertion
//! failure raised by [`verify_strict`](crate::verify_strict).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for expectation operations.
pub type ExpectResult<T> = Result<T, ExpectError>;

/// Error type for all expectation operations.
#[derive(Debug, Error)]
pub enum ExpectError {
    /// A fixture or PDF file could not be read
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The PDF reader could not open or parse the document
    #[error("Text extraction failed for '{}': {reason}", path.display())]
    TextExtraction {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// One or more expectations did not hold.
    ///
    /// Displays as the newline-joined list of mismatches, nothing more.
    #[error("{}", errors.join("\n"))]
    AssertionFailed { errors: Vec<String> },
}

impl ExpectError {
    /// Returns the mismatch list for assertion failures.
    pub fn mismatches(&self) -> Option<&[String]> {
        match self {
            Self::AssertionFailed { errors } => Some(errors),
            _ => None,
        }
    }

    pub(crate) fn extraction(path: impl Into<PathBuf>, err: lopdf::Error) -> Self {
        Self::TextExtraction {
            path: path.into(),
            reason: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
