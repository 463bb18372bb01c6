use crate::extraction_engine::ExtractionEngine;
use crate::file_discovery::PdfDiscovery;
use crate::pdf_utils::{LopdfExtractor, TextExtractor};
use crate::{Catalog, Result, ScanConfig, Summary};
use log::info;
use std::path::{Path, PathBuf};

// ── PdfScanner ────────────────────────────────────────────────────────────────

/// Entry point for summarizing a tree of FRT documents.
///
/// # Creating a scanner
///
/// ```no_run
/// use frtsummary::{PdfScanner, ScanConfig};
///
/// // Defaults: page 1, empty password
/// let s = PdfScanner::new("./frt").unwrap();
///
/// // With custom configuration
/// let cfg = ScanConfig {
///     page: 2,
///     follow_links: true,
///     ..Default::default()
/// };
/// let s = PdfScanner::with_config("./frt", cfg).unwrap();
/// ```
pub struct PdfScanner {
    root: PathBuf,
    config: ScanConfig,
    extractor: Box<dyn TextExtractor>,
}

impl PdfScanner {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Scan `root` with the default [`ScanConfig`].
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::with_config(root, ScanConfig::default())
    }

    /// Scan `root` with a custom [`ScanConfig`], extracting text with lopdf.
    pub fn with_config<P: AsRef<Path>>(root: P, config: ScanConfig) -> Result<Self> {
        let extractor = LopdfExtractor::new(config.password.clone());
        Self::with_extractor(root, config, Box::new(extractor))
    }

    /// Scan `root` using a caller-supplied [`TextExtractor`].
    ///
    /// `config.password` is not consulted; the extractor owns decryption.
    pub fn with_extractor<P: AsRef<Path>>(
        root: P,
        config: ScanConfig,
        extractor: Box<dyn TextExtractor>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
            config,
            extractor,
        })
    }

    // ── Scanning ──────────────────────────────────────────────────────────────

    /// Summarize every PDF below the root, in traversal order.
    ///
    /// The first document that cannot be opened, decrypted or read aborts the
    /// scan with [`ScanError::File`](crate::ScanError::File).
    pub fn scan(&self) -> Result<Vec<Summary>> {
        let paths = PdfDiscovery::new(&self.root, &self.config).discover()?;
        info!("found {} PDF(s) under {}", paths.len(), self.root.display());

        let engine = ExtractionEngine::new(self.extractor.as_ref(), &self.config);
        let summaries = engine.summarize_all(&paths)?;
        info!("summarized {} document(s)", summaries.len());

        Ok(summaries)
    }

    /// Scan and fold the results into a [`Catalog`] of distinct values.
    pub fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::from_summaries(&self.scan()?))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns the directory (or single file) this scanner walks.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns a reference to the active [`ScanConfig`].
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
