//! Skill keyword matching against a closed vocabulary.

use std::collections::BTreeSet;

use super::patterns::SKILL_KEYWORDS;
use super::FieldExtractor;
use crate::models::candidate::SKILL_SEPARATOR;
use crate::resume::tokens::tokenize;

/// Skill keyword extractor.
///
/// Each token is case-folded and compared with [`SKILL_KEYWORDS`] on its own,
/// so a keyword containing a space never matches.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    keywords: Vec<String>,
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self::with_keywords(SKILL_KEYWORDS)
    }

    /// Use a different vocabulary.
    pub fn with_keywords(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SkillExtractor {
    type Output = String;

    /// Every keyword occurrence, duplicates included.
    fn extract_all(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .map(str::to_lowercase)
            .filter(|token| self.keywords.contains(token))
            .collect()
    }
}

/// Distinct skills found in `text`, joined with ", ".
pub fn extract_skills(text: &str) -> String {
    let skills: BTreeSet<String> = SkillExtractor::new().extract_all(text).into_iter().collect();
    skills.into_iter().collect::<Vec<_>>().join(SKILL_SEPARATOR)
}
