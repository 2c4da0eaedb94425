//! Test fixtures and PDF builders.
//!
//! Provides builders for creating slide deck PDFs with known page text,
//! following the Builder pattern for clean test setup.

use anyhow::Result;
use pdf_expect::{ExpectResult, Verifier};
use printpdf::*;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Builder for creating slide deck PDFs, one slide per page.
///
/// # Example
///
/// ```no_run
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let pdf = TestDeckBuilder::new()
///     .with_slide(&["Quarterly Review"])
///     .with_slide(&["Agenda", "Numbers", "Questions"])
///     .build(std::path::Path::new("/tmp/deck.pdf"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestDeckBuilder {
    title: String,
    slides: Vec<Vec<String>>,
    page_width: Mm,
    page_height: Mm,
}

impl TestDeckBuilder {
    /// Creates a new deck builder with 16:9 slide dimensions.
    pub fn new() -> Self {
        Self {
            title: "Test Deck".to_string(),
            slides: Vec::new(),
            page_width: Mm(254.0),
            page_height: Mm(142.875),
        }
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Adds a slide; each entry is drawn as its own line.
    pub fn with_slide(mut self, lines: &[&str]) -> Self {
        self.slides.push(lines.iter().map(|l| l.to_string()).collect());
        self
    }

    /// Builds the PDF and writes it to the specified path.
    ///
    /// A deck with no slides still gets one blank page.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(&self.title, self.page_width, self.page_height, "Slide 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

        for (index, lines) in self.slides.iter().enumerate() {
            let (page, layer) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(
                    self.page_width,
                    self.page_height,
                    format!("Slide {}", index + 1),
                )
            };
            let current_layer = doc.get_page(page).get_layer(layer);

            for (row, line) in lines.iter().enumerate() {
                let y = self.page_height.0 - 25.0 - (row as f32) * 12.0;
                current_layer.use_text(line.as_str(), 20.0, Mm(15.0), Mm(y), &font);
            }
        }

        doc.save(&mut BufWriter::new(fs::File::create(output_path)?))?;

        Ok(output_path.to_path_buf())
    }
}

impl Default for TestDeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a fixture file into `dir` and returns its path.
pub fn write_fixture(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

/// Creates a verifier that serves `pages` for any path.
pub fn verifier_with_pages(pages: &[&str]) -> Verifier {
    let pages: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
    Verifier::new(Box::new(move |_: &Path| -> ExpectResult<Vec<String>> {
        Ok(pages.clone())
    }))
}

/// Quick helper to create a three-slide deck.
pub fn create_sample_deck(path: &Path) -> Result<PathBuf> {
    TestDeckBuilder::new()
        .with_title("Sample Deck")
        .with_slide(&["Quarterly Review"])
        .with_slide(&["Agenda", "Revenue Growth"])
        .with_slide(&["Questions"])
        .build(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_pattern() {
        let builder = TestDeckBuilder::new()
            .with_title("Deck")
            .with_slide(&["One"])
            .with_slide(&["Two", "Three"]);

        assert_eq!(builder.title, "Deck");
        assert_eq!(builder.slides.len(), 2);
        assert_eq!(builder.slides[1].len(), 2);
    }

    #[test]
    fn test_create_sample_deck() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let pdf_path = temp_dir.path().join("deck.pdf");

        create_sample_deck(&pdf_path)?;

        assert!(pdf_path.exists());
        Ok(())
    }
}
