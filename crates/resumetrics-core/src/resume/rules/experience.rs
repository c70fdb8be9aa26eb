//! Years-of-experience extraction.

use super::patterns::EXPERIENCE;
use super::FieldExtractor;

/// Experience field extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExperienceExtractor;

impl FieldExtractor for ExperienceExtractor {
    type Output = u32;

    /// Years from the first match only. A first match whose number does not
    /// fit in `u32` yields `None` rather than falling through to later matches.
    fn extract(&self, text: &str) -> Option<u32> {
        EXPERIENCE
            .captures(text)
            .and_then(|caps| caps[1].parse().ok())
    }

    fn extract_all(&self, text: &str) -> Vec<u32> {
        EXPERIENCE
            .captures_iter(text)
            .filter_map(|caps| caps[1].parse().ok())
            .collect()
    }
}

/// Years of experience mentioned in `text`, 0 when none.
pub fn extract_experience(text: &str) -> u32 {
    ExperienceExtractor.extract(text).unwrap_or(0)
}
