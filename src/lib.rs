//! Inline PDF expectations for slide-deck tests.
//!
//! Test fixtures declare what the rendered PDF should look like with
//! `#EXPECT:` directive lines:
//!
//! ```text
//! #EXPECT: pages=3
//! #EXPECT: page=1 contains="Quarterly Review"
//! #EXPECT: page=2 not_contains="{{placeholder}}"
//! ```
//!
//! This crate parses those directives, extracts the text of each page of
//! the generated PDF, and reports every expectation that does not hold.
//!
//! # Architecture
//!
//! - [`expectation`]: the directive mini-language and its parser
//! - [`extraction`]: per-page text extraction behind [`PageTextSource`]
//! - [`verify`]: the checks and the [`Verifier`] service
//! - [`error`]: error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expectations = pdf_expect::parse_expectations(Path::new("tests/fixtures/deck.md"))?;
//! pdf_expect::verify_strict(Path::new("target/deck.pdf"), &expectations)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Synthetic Page Text
//!
//! ```
//! use pdf_expect::{ExpectResult, Expectation, Verifier};
//! use std::path::Path;
//!
//! let source = |_: &Path| -> ExpectResult<Vec<String>> {
//!     Ok(vec!["Hel lo World".to_string()])
//! };
//! let verifier = Verifier::new(Box::new(source));
//! let exp = Expectation::new().with_page(1).with_contains("Hello World");
//! assert!(verifier.verify(Path::new("unused.pdf"), &[exp]).unwrap().is_empty());
//! ```

pub mod error;
pub mod expectation;
pub mod extraction;
pub mod verify;

pub use error::{ExpectError, ExpectResult};
pub use expectation::{Expectation, ExpectationParser};
pub use extraction::{extract_text, LopdfSource, PageTextSource};
pub use verify::{Mismatch, Verifier};

use std::path::Path;

/// Extracts the trimmed text of every page of `pdf` with lopdf.
pub fn extract_pages(pdf: &Path) -> ExpectResult<Vec<String>> {
    LopdfSource::new().extract_pages(pdf)
}

/// Parses the `#EXPECT:` directives in a fixture file.
///
/// Fails only if the file cannot be read.
pub fn parse_expectations(fixture: &Path) -> ExpectResult<Vec<Expectation>> {
    ExpectationParser::new().parse_file(fixture)
}

/// Parses the `#EXPECT:` directives in fixture text.
pub fn parse_expectations_str(text: &str) -> Vec<Expectation> {
    ExpectationParser::new().parse_str(text)
}

/// Checks `expectations` against `pdf`; an empty list means success.
pub fn verify(pdf: &Path, expectations: &[Expectation]) -> ExpectResult<Vec<String>> {
    Verifier::with_lopdf().verify(pdf, expectations)
}

/// Checks `expectations` against `pdf`, failing with
/// [`ExpectError::AssertionFailed`] if any check fails.
pub fn verify_strict(pdf: &Path, expectations: &[Expectation]) -> ExpectResult<()> {
    Verifier::with_lopdf().verify_strict(pdf, expectations)
}

/// Asserts that a PDF satisfies the directives in a fixture file.
///
/// Panics with every mismatch, one per line.
///
/// ```no_run
/// pdf_expect::assert_pdf_expectations!("target/deck.pdf", "tests/fixtures/deck.md");
/// ```
#[macro_export]
macro_rules! assert_pdf_expectations {
    ($pdf:expr, $fixture:expr) => {
        match (&$pdf, &$fixture) {
            (pdf, fixture) => {
                let pdf = ::std::path::Path::new(pdf);
                let fixture = ::std::path::Path::new(fixture);
                let expectations = $crate::parse_expectations(fixture).unwrap_or_else(|e| {
                    panic!("failed to read fixture '{}': {}", fixture.display(), e)
                });
                if let Err(e) = $crate::verify_strict(pdf, &expectations) {
                    panic!("PDF '{}' failed expectations:\n{}", pdf.display(), e);
                }
            }
        }
    };
}
