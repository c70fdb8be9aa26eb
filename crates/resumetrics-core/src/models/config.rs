//! Configuration structures for the resume pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest accepted upload, 16 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Main configuration for the resumetrics pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumetricsConfig {
    /// Candidate store configuration.
    pub store: StoreConfig,

    /// Upload acceptance configuration.
    pub upload: UploadConfig,

    /// Analytics and chart configuration.
    pub analytics: AnalyticsConfig,
}

/// Candidate store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the SQLite database file.
    pub database_path: PathBuf,

    /// Enforce the job_matches → candidates foreign key.
    pub enforce_foreign_keys: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("resumes.db"),
            enforce_foreign_keys: true,
        }
    }
}

/// Upload acceptance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum file size in bytes.
    pub max_file_size: u64,

    /// Directory uploaded files are kept in.
    pub upload_dir: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            upload_dir: PathBuf::from("uploads"),
        }
    }
}

/// Analytics and chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Number of skills in the frequency ranking.
    pub top_skills: usize,

    /// Number of bins in the experience histogram.
    pub histogram_bins: usize,

    /// Chart width in pixels.
    pub chart_width: u32,

    /// Chart height in pixels.
    pub chart_height: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_skills: 10,
            histogram_bins: 10,
            chart_width: 1000,
            chart_height: 600,
        }
    }
}

impl ResumetricsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
