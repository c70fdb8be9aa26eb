//! Subcommand implementations.

pub mod config;
pub mod ingest;
pub mod parse;
pub mod report;

use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use resumetrics_core::models::config::ResumetricsConfig;

/// Options shared by every subcommand.
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub database: Option<PathBuf>,
}

impl GlobalOptions {
    /// The config file in effect: `--config` or the per-user default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    /// Load configuration and apply command-line overrides.
    ///
    /// An explicit `--config` must exist; the default location falls back to
    /// built-in defaults when absent.
    pub fn load_config(&self) -> anyhow::Result<ResumetricsConfig> {
        let mut config = match &self.config {
            Some(path) => ResumetricsConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                let path = default_config_path();
                if path.exists() {
                    ResumetricsConfig::from_file(&path)?
                } else {
                    ResumetricsConfig::default()
                }
            }
        };

        if let Some(database) = &self.database {
            config.store.database_path = database.clone();
        }
        debug!("Using database {}", config.store.database_path.display());

        Ok(config)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resumetrics")
        .join("config.json")
}
