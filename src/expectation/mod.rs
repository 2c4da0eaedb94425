//! Expectations declared inline in test fixtures.
//!
//! A fixture carries `#EXPECT:` directive lines; each directive becomes one
//! [`Expectation`] holding the fields it named.

pub mod parser;

pub use parser::{ExpectationParser, DEFAULT_MARKER};

use std::collections::BTreeMap;

/// One parsed `#EXPECT:` directive.
///
/// Values are kept exactly as written; numeric fields are interpreted by
/// the accessors ([`Expectation::page_count`], [`Expectation::page_number`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectation {
    /// Expected total page count
    pub pages: Option<String>,

    /// 1-based page the text checks apply to
    pub page: Option<String>,

    /// Text that must appear on `page` (whitespace-insensitive)
    pub contains: Option<String>,

    /// Text that must not appear on `page` (verbatim)
    pub not_contains: Option<String>,

    /// Keys the checker does not act on
    pub extra: BTreeMap<String, String>,
}

impl Expectation {
    /// Creates an empty expectation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the document to have exactly `count` pages.
    pub fn with_pages(mut self, count: impl ToString) -> Self {
        self.pages = Some(count.to_string());
        self
    }

    /// Selects the 1-based page for text checks.
    pub fn with_page(mut self, page: impl ToString) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// Expects `text` on the selected page.
    pub fn with_contains(mut self, text: &str) -> Self {
        self.contains = Some(text.to_string());
        self
    }

    /// Forbids `text` on the selected page.
    pub fn with_not_contains(mut self, text: &str) -> Self {
        self.not_contains = Some(text.to_string());
        self
    }

    /// Assigns a field by key. Later assignments overwrite earlier ones.
    pub fn set(&mut self, key: &str, value: &str) {
        let value = value.to_string();
        match key {
            "pages" => self.pages = Some(value),
            "page" => self.page = Some(value),
            "contains" => self.contains = Some(value),
            "not_contains" => self.not_contains = Some(value),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
    }

    /// Returns true if any field the checker acts on is set.
    pub fn has_checks(&self) -> bool {
        self.pages.is_some()
            || self.page.is_some()
            || self.contains.is_some()
            || self.not_contains.is_some()
    }

    /// Expected page count, read leniently.
    pub fn page_count(&self) -> Option<i64> {
        self.pages.as_deref().map(lenient_int)
    }

    /// Target page number, read leniently.
    pub fn page_number(&self) -> Option<i64> {
        self.page.as_deref().map(lenient_int)
    }
}

/// Reads the leading integer of `value`, or 0 if there is none.
///
/// Accepts leading whitespace, an optional sign, then digits; anything after
/// the digits is ignored. `"3"` is 3, `"2nd"` is 2, `"abc"` is 0.
pub fn lenient_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
