//! Candidate records produced by the resume parser and kept by the store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Name used when no person entity is found in a resume.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Separator between skills in [`ParsedResume::skills`].
pub const SKILL_SEPARATOR: &str = ", ";

/// Separator between education fragments in [`ParsedResume::education`].
pub const EDUCATION_SEPARATOR: &str = " | ";

/// Fields extracted from one resume, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Best-effort person name, [`UNKNOWN_NAME`] when none was found.
    pub name: String,

    /// First email-like string in the text.
    pub email: Option<String>,

    /// First phone-like string in the text.
    pub phone: Option<String>,

    /// Lowercase skill keywords, deduplicated, joined with ", ".
    pub skills: String,

    /// Up to three education sentences joined with " | ".
    pub education: String,

    /// Years of experience, 0 when not mentioned.
    pub experience: u32,
}

impl ParsedResume {
    /// Individual skill keywords.
    pub fn skill_list(&self) -> impl Iterator<Item = &str> {
        split_skills(&self.skills)
    }

    /// Individual education fragments.
    pub fn education_list(&self) -> impl Iterator<Item = &str> {
        self.education
            .split(EDUCATION_SEPARATOR)
            .filter(|s| !s.is_empty())
    }
}

/// Split a stored skills column into its keywords, ignoring empty pieces.
pub fn split_skills(skills: &str) -> impl Iterator<Item = &str> {
    skills
        .split(SKILL_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// A stored candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Row identifier assigned by the store.
    pub id: i64,

    #[serde(flatten)]
    pub resume: ParsedResume,

    /// Creation time, UTC.
    pub timestamp: NaiveDateTime,
}
