//! PDF expectation CLI.
//!
//! Runs the `#EXPECT:` checks of a fixture against a PDF from the command
//! line, and dumps extracted text for writing new directives.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdf_expect::{ExpectationParser, LopdfSource, PageTextSource, Verifier};

/// PDF expectation checker
///
/// Verify generated PDFs against #EXPECT: directives in fixture files.
#[derive(Parser)]
#[command(name = "pdf-expect")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a PDF against the directives in a fixture file
    Check {
        /// PDF file to check
        #[arg(short, long, value_name = "FILE")]
        pdf: PathBuf,

        /// Fixture file containing #EXPECT: directives
        #[arg(short, long, value_name = "FILE")]
        fixture: PathBuf,
    },

    /// Extract text from a PDF (for writing directives)
    Extract {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print text page by page, as the checks see it
        #[arg(long)]
        pages: bool,
    },
}

/// Command handler.
struct CheckHandler {
    parser: ExpectationParser,
    verifier: Verifier,
    verbose: bool,
}

impl CheckHandler {
    fn new(verbose: bool) -> Self {
        Self {
            parser: ExpectationParser::new(),
            verifier: Verifier::with_lopdf(),
            verbose,
        }
    }

    /// Runs every directive in `fixture` against `pdf`.
    fn check(&self, pdf: &Path, fixture: &Path) -> Result<()> {
        if !pdf.exists() {
            anyhow::bail!("PDF does not exist: {}", pdf.display());
        }

        let expectations = self
            .parser
            .parse_file(fixture)
            .with_context(|| format!("Failed to read fixture {}", fixture.display()))?;

        if self.verbose {
            println!("PDF:          {}", pdf.display());
            println!("Fixture:      {}", fixture.display());
            println!("Expectations: {}", expectations.len());
            println!("Source:       {}", self.verifier.source_name());
        }

        let errors = self
            .verifier
            .verify(pdf, &expectations)
            .with_context(|| "Verification failed")?;

        if errors.is_empty() {
            println!("✓ {} expectation(s) satisfied", expectations.len());
            return Ok(());
        }

        for error in &errors {
            eprintln!("✗ {}", error);
        }
        anyhow::bail!("{} expectation check(s) failed", errors.len())
    }

    /// Extracts text from a PDF.
    fn extract(&self, input: &Path, output: Option<&Path>, by_page: bool) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let text = if by_page {
            let pages = LopdfSource::new()
                .extract_pages(input)
                .with_context(|| "Text extraction failed")?;
            render_pages(&pages)
        } else {
            pdf_expect::extract_text(input).with_context(|| "Text extraction failed")?
        };

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}

/// Joins page texts with numbered separators.
fn render_pages(pages: &[String]) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(i, text)| format!("--- page {} ---\n{}\n", i + 1, text))
        .collect()
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "pdf_expect=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let handler = CheckHandler::new(cli.verbose);

    match &cli.command {
        Commands::Check { pdf, fixture } => handler.check(pdf, fixture)?,
        Commands::Extract {
            input,
            output,
            pages,
        } => handler.extract(input, output.as_deref(), *pages)?,
    }

    Ok(())
}
