//! Page text extraction backed by lopdf.

use crate::{Result, ScanError};
use lopdf::Document;
use log::debug;
use std::path::Path;

/// Source of raw page text for a PDF on disk.
///
/// The scanner only ever asks for one page per document; how the document is
/// opened, decrypted and laid out into text is up to the implementation.
pub trait TextExtractor {
    /// Return the text of the one-based `page` of the document at `path`.
    fn page_text(&self, path: &Path, page: u32) -> Result<String>;
}

/// [`TextExtractor`] built on [`lopdf::Document`].
#[derive(Debug, Clone, Default)]
pub struct LopdfExtractor {
    password: String,
}

impl LopdfExtractor {
    /// An extractor that opens encrypted documents with `password`.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Load `path`, decrypting it when the document is encrypted.
    ///
    /// lopdf tries the empty user password first and then the configured
    /// one; a document that neither opens is reported as [`ScanError::Decryption`].
    fn open(&self, path: &Path) -> Result<Document> {
        debug!("loading {}", path.display());
        Document::load_with_password(path, &self.password).map_err(|e| match e {
            e @ (lopdf::Error::InvalidPassword | lopdf::Error::Decryption(_)) => {
                ScanError::Decryption(path.to_path_buf(), e.to_string())
            }
            other => ScanError::Pdf(other),
        })
    }
}

impl TextExtractor for LopdfExtractor {
    fn page_text(&self, path: &Path, page: u32) -> Result<String> {
        let document = self.open(path)?;

        if !document.get_pages().contains_key(&page) {
            return Err(ScanError::PageNotFound(path.to_path_buf(), page));
        }

        document
            .extract_text(&[page])
            .map_err(|e| ScanError::Extraction(path.to_path_buf(), e.to_string()))
    }
}
