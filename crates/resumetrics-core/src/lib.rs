//! Core library for resume ingestion and candidate analytics.
//!
//! This crate provides:
//! - PDF text extraction (lopdf per page, pdf-extract fallback)
//! - Heuristic resume field extraction (name, email, phone, skills, education, experience)
//! - A SQLite candidate store with duplicate detection by email
//! - Skill rankings, experience histograms and PNG charts over stored candidates

pub mod analytics;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pdf;
pub mod resume;
pub mod store;

pub use analytics::{DashboardReport, HistogramBin, ResumeAnalytics, SkillCount};
pub use error::{ResumetricsError, Result};
pub use ingest::{IngestOutcome, Ingestor, UploadPolicy};
pub use models::{Candidate, ParsedResume, ResumetricsConfig};
pub use pdf::{extract_text_from_path, PdfContent, PdfExtractor, PdfProcessor};
pub use resume::{EntityRecognizer, HeuristicRecognizer, ResumeParser};
pub use store::CandidateStore;
