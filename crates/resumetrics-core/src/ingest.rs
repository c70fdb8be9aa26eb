//! Upload acceptance and the extract → parse → store pipeline for one file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{IngestError, StoreError};
use crate::models::config::UploadConfig;
use crate::pdf::extract_text_from_path;
use crate::resume::{EntityRecognizer, HeuristicRecognizer, ResumeParser};
use crate::store::CandidateStore;
use crate::Result;

/// Which files are accepted for ingestion.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    max_file_size: u64,
    upload_dir: PathBuf,
}

impl UploadPolicy {
    pub fn new(max_file_size: u64, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            max_file_size,
            upload_dir: upload_dir.into(),
        }
    }

    pub fn from_config(config: &UploadConfig) -> Self {
        Self::new(config.max_file_size, &config.upload_dir)
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Refuse files not named `*.pdf` (case-sensitive) or over the size limit.
    pub fn check(&self, path: &Path) -> Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !name.ends_with(".pdf") {
            return Err(IngestError::NotPdf(name).into());
        }

        let size = fs::metadata(path)?.len();
        if size > self.max_file_size {
            return Err(IngestError::TooLarge {
                size,
                limit: self.max_file_size,
            }
            .into());
        }

        Ok(())
    }

    /// Copy an accepted file into the upload directory, creating it if needed.
    ///
    /// A file already inside the upload directory is used in place.
    pub fn stage(&self, path: &Path) -> Result<PathBuf> {
        self.check(path)?;
        let name = path
            .file_name()
            .ok_or_else(|| IngestError::NotPdf(path.display().to_string()))?;
        fs::create_dir_all(&self.upload_dir)?;
        let target = self.upload_dir.join(name);

        // Copying a file onto itself truncates it
        if target.exists() && fs::canonicalize(path)? == fs::canonicalize(&target)? {
            debug!("{} is already in the upload directory", path.display());
            return Ok(target);
        }

        fs::copy(path, &target)?;
        debug!("Staged {} at {}", path.display(), target.display());
        Ok(target)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}

/// What happened to one ingested file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum IngestOutcome {
    /// Stored as a new candidate.
    Saved { id: i64 },
    /// A candidate with this email already exists; nothing was written.
    Duplicate { email: Option<String> },
    /// No text could be extracted from the PDF.
    NoText,
    /// Text was extracted but yielded no fields.
    Unparsed,
}

impl IngestOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, IngestOutcome::Saved { .. })
    }
}

/// Runs accepted files through extraction, parsing and storage.
pub struct Ingestor<'a, R = HeuristicRecognizer> {
    parser: ResumeParser<R>,
    store: &'a CandidateStore,
    policy: UploadPolicy,
}

impl<'a> Ingestor<'a> {
    pub fn new(store: &'a CandidateStore) -> Self {
        Self::with_parser(store, ResumeParser::new())
    }
}

impl<'a, R: EntityRecognizer> Ingestor<'a, R> {
    pub fn with_parser(store: &'a CandidateStore, parser: ResumeParser<R>) -> Self {
        Self {
            parser,
            store,
            policy: UploadPolicy::default(),
        }
    }

    /// Replace the default upload policy.
    pub fn with_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Check, extract, parse and store one file.
    ///
    /// Rejected uploads and store failures are errors. A duplicate email is
    /// reported as [`IngestOutcome::Duplicate`].
    pub fn ingest_file(&self, path: &Path) -> Result<IngestOutcome> {
        self.policy.check(path)?;
        self.process(path)
    }

    /// Like [`Ingestor::ingest_file`], but first copies the file into the
    /// upload directory (unless it is already there) and processes the copy.
    pub fn ingest_upload(&self, path: &Path) -> Result<IngestOutcome> {
        let staged = self.policy.stage(path)?;
        self.process(&staged)
    }

    fn process(&self, path: &Path) -> Result<IngestOutcome> {
        let text = extract_text_from_path(path);
        if text.trim().is_empty() {
            warn!("No text extracted from {}", path.display());
            return Ok(IngestOutcome::NoText);
        }

        let Some(resume) = self.parser.parse(&text) else {
            return Ok(IngestOutcome::Unparsed);
        };

        match self.store.save(&resume) {
            Ok(id) => {
                info!("Ingested {} as candidate {}", path.display(), id);
                Ok(IngestOutcome::Saved { id })
            }
            Err(StoreError::Duplicate { email }) => Ok(IngestOutcome::Duplicate { email }),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumetricsError;
    use crate::pdf::extractor::tests::build_pdf;
    use pretty_assertions::assert_eq;

    fn write(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, data).unwrap();
        path
    }

    fn resume_pdf() -> Vec<u8> {
        build_pdf(&[
            "Jane Doe jane@example.com 555-123-4567",
            "Python and SQL with 6 years of experience",
        ])
    }

    #[test]
    fn test_rejects_non_pdf_name() {
        let dir = tempfile::tempdir().unwrap();
        let policy = UploadPolicy::default();

        let txt = write(dir.path(), "resume.txt", b"hello");
        let upper = write(dir.path(), "resume.PDF", &resume_pdf());
        for path in [txt, upper] {
            let err = policy.check(&path).unwrap_err();
            assert!(matches!(err, ResumetricsError::Ingest(IngestError::NotPdf(_))));
        }
    }

    #[test]
    fn test_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "big.pdf", &[0u8; 64]);

        let err = UploadPolicy::new(32, dir.path()).check(&path).unwrap_err();
        assert!(matches!(
            err,
            ResumetricsError::Ingest(IngestError::TooLarge { size: 64, limit: 32 })
        ));
        assert!(UploadPolicy::new(64, dir.path()).check(&path).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = UploadPolicy::default()
            .check(Path::new("/nonexistent/resume.pdf"))
            .unwrap_err();
        assert!(matches!(err, ResumetricsError::Io(_)));
    }

    #[test]
    fn test_corrupt_pdf_yields_no_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "broken.pdf", b"%PDF-1.4 nothing here");
        let store = CandidateStore::open_in_memory().unwrap();

        let outcome = Ingestor::new(&store).ingest_file(&path).unwrap();
        assert_eq!(outcome, IngestOutcome::NoText);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_saves_then_reports_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let first = write(dir.path(), "jane.pdf", &resume_pdf());
        let second = write(dir.path(), "jane-again.pdf", &resume_pdf());
        let store = CandidateStore::open_in_memory().unwrap();
        let ingestor = Ingestor::new(&store);

        let outcome = ingestor.ingest_file(&first).unwrap();
        assert!(outcome.is_saved());

        let candidate = store.list().unwrap().remove(0);
        assert_eq!(candidate.resume.email.as_deref(), Some("jane@example.com"));
        assert_eq!(candidate.resume.skills, "python, sql");
        assert_eq!(candidate.resume.experience, 6);

        let outcome = ingestor.ingest_file(&second).unwrap();
        assert_eq!(
            outcome,
            IngestOutcome::Duplicate {
                email: Some("jane@example.com".to_string())
            }
        );
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_upload_is_staged_before_processing() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "jane.pdf", &resume_pdf());
        let uploads = dir.path().join("uploads");
        let store = CandidateStore::open_in_memory().unwrap();

        let ingestor = Ingestor::new(&store)
            .with_policy(UploadPolicy::new(1024 * 1024, &uploads));
        let outcome = ingestor.ingest_upload(&source).unwrap();

        assert!(outcome.is_saved());
        assert!(uploads.join("jane.pdf").is_file());
    }

    #[test]
    fn test_staging_a_file_already_in_uploads_keeps_it() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        fs::create_dir_all(&uploads).unwrap();
        let path = write(&uploads, "jane.pdf", &resume_pdf());
        let size = fs::metadata(&path).unwrap().len();
        let store = CandidateStore::open_in_memory().unwrap();

        let ingestor = Ingestor::new(&store)
            .with_policy(UploadPolicy::new(1024 * 1024, &uploads));
        let outcome = ingestor.ingest_upload(&path).unwrap();

        assert!(outcome.is_saved());
        assert_eq!(fs::metadata(&path).unwrap().len(), size);

        // same file reached through a different spelling of the path
        let indirect = uploads.join(".").join("jane.pdf");
        assert_eq!(ingestor.policy().stage(&indirect).unwrap(), path);
        assert_eq!(fs::metadata(&path).unwrap().len(), size);
    }
}
