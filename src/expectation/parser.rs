//! Directive parsing.
//!
//! Parsing is lenient: a directive line contributes whatever `key=value`
//! pairs can be found on it, and a line with none is dropped silently.

use super::Expectation;
use crate::error::{ExpectError, ExpectResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Marker that starts a directive line.
pub const DEFAULT_MARKER: &str = "#EXPECT:";

/// Parser for `#EXPECT:` directives.
#[derive(Debug, Clone)]
pub struct ExpectationParser {
    marker: String,
}

impl ExpectationParser {
    /// Creates a parser recognizing the default `#EXPECT:` marker.
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Sets the line prefix that introduces a directive.
    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = marker.to_string();
        self
    }

    /// Returns the `key=value` pattern.
    ///
    /// Group 1 is the key, group 2 a quoted value (without quotes),
    /// group 3 a bare value.
    fn pair_regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r#"(\w+)=(?:"([^"]+)"|(\S+))"#).expect("Valid directive pair regex")
        });
        &PATTERN
    }

    /// Reads a fixture file and parses its directives.
    ///
    /// Only failing to read the file is an error. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn parse_file(&self, path: &Path) -> ExpectResult<Vec<Expectation>> {
        let bytes = std::fs::read(path).map_err(|e| ExpectError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let expectations = self.parse_str(&String::from_utf8_lossy(&bytes));
        tracing::debug!(
            fixture = %path.display(),
            count = expectations.len(),
            "parsed expectations"
        );
        Ok(expectations)
    }

    /// Parses directives from fixture text.
    pub fn parse_str(&self, text: &str) -> Vec<Expectation> {
        text.lines()
            .filter(|line| line.starts_with(&self.marker))
            .filter_map(|line| {
                let body = line.replacen(&self.marker, "", 1);
                let parsed = self.parse_directive(body.trim());
                if parsed.is_none() {
                    tracing::debug!(line, "skipping directive without checks");
                }
                parsed
            })
            .collect()
    }

    /// Parses the body of one directive (the text after the marker).
    ///
    /// Returns `None` when no recognized field was found.
    pub fn parse_directive(&self, body: &str) -> Option<Expectation> {
        let mut expectation = Expectation::new();

        for caps in Self::pair_regex().captures_iter(body) {
            let key = &caps[1];
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            expectation.set(key, value);
        }

        expectation.has_checks().then_some(expectation)
    }
}

impl Default for ExpectationParser {
    fn default() -> Self {
        Self::new()
    }
}
