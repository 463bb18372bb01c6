use crate::field_parser::parse_summary;
use crate::pdf_utils::TextExtractor;
use crate::{Result, ScanConfig, ScanError, Summary};
use log::debug;
use std::path::{Path, PathBuf};

/// Turns discovered PDF paths into summaries, one document at a time.
pub struct ExtractionEngine<'a> {
    extractor: &'a dyn TextExtractor,
    config: &'a ScanConfig,
}

impl<'a> ExtractionEngine<'a> {
    pub fn new(extractor: &'a dyn TextExtractor, config: &'a ScanConfig) -> Self {
        Self { extractor, config }
    }

    /// Extract the configured page of `path` and parse it.
    pub fn summarize_file(&self, path: &Path) -> Result<Summary> {
        let text = self.extractor.page_text(path, self.config.page)?;
        let summary = parse_summary(&text);

        if summary.is_blank() {
            debug!("{}: no known labels on page {}", path.display(), self.config.page);
        } else {
            debug!("{}: {} {}", path.display(), summary.make, summary.model);
        }

        Ok(summary)
    }

    /// Summarize every path in order.
    ///
    /// Stops at the first failing document; the returned error names it.
    pub fn summarize_all(&self, paths: &[PathBuf]) -> Result<Vec<Summary>> {
        let mut summaries = Vec::with_capacity(paths.len());

        for path in paths {
            let summary = self.summarize_file(path).map_err(|e| ScanError::File {
                path: path.clone(),
                source: Box::new(e),
            })?;
            summaries.push(summary);
        }

        Ok(summaries)
    }
}
