//! Error types for the resumetrics-core library.

use thiserror::Error;

/// Main error type for the resumetrics library.
#[derive(Error, Debug)]
pub enum ResumetricsError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Candidate store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Chart rendering error.
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    /// Upload rejected before extraction.
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors raised by the candidate store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A candidate with this email is already stored. Nothing was written.
    #[error("duplicate candidate for email {}", .email.as_deref().unwrap_or("<none>"))]
    Duplicate { email: Option<String> },

    #[error("date/time parse error: {0}")]
    DateParse(String),
}

impl StoreError {
    /// Whether this error is the informational "already present" condition.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }
}

/// Errors related to chart rendering.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The requested canvas cannot hold the plot area.
    #[error("chart dimensions too small: {width}x{height}")]
    Dimensions { width: u32, height: u32 },

    /// PNG encoding failed.
    #[error("failed to encode chart: {0}")]
    Encode(#[from] image::ImageError),
}

/// Reasons an uploaded file is refused before any extraction happens.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Only files whose name ends in `.pdf` are accepted.
    #[error("not a PDF file: {0}")]
    NotPdf(String),

    /// File exceeds the configured upload limit.
    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
}

/// Result type for the resumetrics library.
pub type Result<T> = std::result::Result<T, ResumetricsError>;
