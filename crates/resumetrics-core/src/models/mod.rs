//! Data models for candidates and pipeline configuration.

pub mod candidate;
pub mod config;

pub use candidate::{Candidate, ParsedResume};
pub use config::ResumetricsConfig;
