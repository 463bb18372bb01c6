//! # frtsummary
//!
//! A Rust library for summarizing Firearms Reference Table (FRT) records that
//! were exported as PDF documents.
//!
//! ## What this crate does
//!
//! 1. **Discover PDFs** — walks a directory tree and keeps every file whose
//!    name ends in `.pdf` (any case).
//! 2. **Extract text** — opens each document, decrypts it with the configured
//!    password when it reports encryption, and extracts the text of one page.
//! 3. **Parse fields** — reads `Label: value` lines and maps the known labels
//!    onto a [`Summary`].
//! 4. **Report** — serializes the summaries (or a [`Catalog`] of their distinct
//!    values) as JSON.
//!
//! ## Quick example
//!
//! ```no_run
//! use frtsummary::PdfScanner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = PdfScanner::new("./frt")?;
//!
//! for summary in scanner.scan()? {
//!     println!("{} {} ({})", summary.make, summary.model, summary.legal_classification);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod extraction_engine;
mod field_parser;
mod file_discovery;
mod pdf_utils;
pub mod report;
mod scanner;
mod summary;

pub use field_parser::{parse_summary, split_field};
pub use file_discovery::{is_pdf_path, PdfDiscovery};
pub use pdf_utils::{LopdfExtractor, TextExtractor};
pub use scanner::PdfScanner;
pub use summary::{Catalog, Summary};
// ExtractionEngine is intentionally *not* re-exported; PdfScanner drives it.

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`PdfScanner`].
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// One-based number of the page whose text is parsed.
    pub page: u32,

    /// Password tried when a document is encrypted and the empty user
    /// password does not open it.
    pub password: String,

    /// Follow symbolic links while walking the directory tree.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            page: 1,
            password: String::new(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    /// Rejects settings that can never produce a result.
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(ScanError::InvalidConfig("page numbers start at 1".into()));
        }
        Ok(())
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A filesystem I/O error occurred (e.g. when reading a document).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The directory walk could not read the root or one of its entries.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The document is encrypted and the configured password did not open it.
    #[error("failed to decrypt '{}': {}", .0.display(), .1)]
    Decryption(PathBuf, String),

    /// The requested page does not exist in the document.
    #[error("'{}' has no page {}", .0.display(), .1)]
    PageNotFound(PathBuf, u32),

    /// The page exists but its text could not be extracted.
    #[error("failed to extract text from '{}': {}", .0.display(), .1)]
    Extraction(PathBuf, String),

    /// The report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A [`ScanConfig`] value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Processing a single document failed; `source` holds the cause.
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<ScanError>,
    },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ScanError>;
