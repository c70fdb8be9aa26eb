//! PDF text extraction using lopdf and pdf-extract.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfContent {
    /// Text of all non-empty pages, space separated.
    pub text: String,
    /// Pages that yielded text.
    pub pages: Vec<PdfPage>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page, trimmed.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Read and load a PDF file.
    pub fn open(path: &Path) -> crate::Result<Self> {
        let data = std::fs::read(path)?;
        let mut extractor = Self::new();
        extractor.load(&data)?;
        Ok(extractor)
    }

    /// Extract the text of every page that yields any.
    ///
    /// A page whose text cannot be decoded is logged and skipped. When no page
    /// yields text through lopdf, the whole document is handed to pdf-extract,
    /// which copes with more font encodings but does not split by page.
    pub fn extract_all(&self) -> Result<PdfContent> {
        let page_count = self.page_count();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_count as usize);
        for page_num in 1..=page_count {
            match self.extract_page_text(page_num) {
                Ok(text) => {
                    let text = text.trim();
                    if text.is_empty() {
                        trace!("Page {} has no extractable text", page_num);
                        continue;
                    }
                    pages.push(PdfPage {
                        number: page_num,
                        text: text.to_string(),
                    });
                }
                Err(e) => {
                    warn!("Skipping page {}: {}", page_num, e);
                }
            }
        }

        if pages.is_empty() {
            debug!("lopdf found no text in {} pages, trying pdf-extract", page_count);
            let text = self.fallback_text();
            return Ok(PdfContent { text, pages });
        }

        let text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        debug!(
            "Extracted {} chars from {}/{} pages",
            text.len(),
            pages.len(),
            page_count
        );

        Ok(PdfContent { text, pages })
    }

    /// Whole-document extraction through pdf-extract. Returns empty text on
    /// failure.
    fn fallback_text(&self) -> String {
        let data = self.raw_data.as_slice();
        // pdf-extract panics on some malformed font tables.
        let outcome = std::panic::catch_unwind(move || pdf_extract::extract_text_from_mem(data));
        match outcome {
            Ok(Ok(text)) => text.split_whitespace().collect::<Vec<_>>().join(" "),
            Ok(Err(e)) => {
                warn!("pdf-extract failed: {}", e);
                String::new()
            }
            Err(_) => {
                warn!("pdf-extract panicked while decoding document");
                String::new()
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        self.extract_all().map(|content| content.text)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        if !doc.get_pages().contains_key(&page) {
            return Err(PdfError::InvalidPage(page));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

/// Extract resume text from a PDF on disk.
///
/// Never fails: an unreadable, corrupt or encrypted document is logged and
/// yields an empty string, which callers must read as "extraction failed".
pub fn extract_text_from_path(path: &Path) -> String {
    let extractor = match PdfExtractor::open(path) {
        Ok(extractor) => extractor,
        Err(e) => {
            warn!("Error reading PDF {}: {}", path.display(), e);
            return String::new();
        }
    };

    match extractor.extract_text() {
        Ok(text) => text,
        Err(e) => {
            warn!("Error extracting text from {}: {}", path.display(), e);
            String::new()
        }
    }
}
