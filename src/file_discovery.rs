use crate::{Result, ScanConfig, ScanError};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PDF_SUFFIX: &[u8] = b".pdf";

/// Returns `true` when the path ends in `.pdf`, compared case-insensitively.
///
/// Only the path text is examined; the file does not have to exist.
///
/// ```
/// # use frtsummary::is_pdf_path;
/// assert!(is_pdf_path("records/12345.PDF"));
/// assert!(!is_pdf_path("records/12345.pdf.txt"));
/// ```
pub fn is_pdf_path<P: AsRef<Path>>(path: P) -> bool {
    let bytes = path.as_ref().as_os_str().as_encoded_bytes();
    bytes.len() >= PDF_SUFFIX.len()
        && bytes[bytes.len() - PDF_SUFFIX.len()..].eq_ignore_ascii_case(PDF_SUFFIX)
}

/// Finds the PDF documents below a root path.
///
/// The walk is depth-first and visits the entries of each directory in
/// file-name order, so the result is stable across runs. The root itself is
/// returned when it is a PDF file.
pub struct PdfDiscovery<'a> {
    root: &'a Path,
    config: &'a ScanConfig,
}

impl<'a> PdfDiscovery<'a> {
    pub fn new(root: &'a Path, config: &'a ScanConfig) -> Self {
        Self { root, config }
    }

    /// Collect every PDF path below the root, in traversal order.
    ///
    /// A root that cannot be read is an error. Entries below the root that
    /// cannot be read are logged and skipped.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(self.root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name();

        let mut found = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(ScanError::Walk(e)),
                Err(e) => {
                    warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            if entry.file_type().is_dir() || !is_pdf_path(entry.path()) {
                continue;
            }

            debug!("found {}", entry.path().display());
            found.push(entry.into_path());
        }

        Ok(found)
    }
}
