//! Education sentence selection.

use super::patterns::{EDUCATION_KEYWORDS, MAX_EDUCATION_ENTRIES};
use crate::models::candidate::EDUCATION_SEPARATOR;
use crate::resume::tokens::sentences;

/// Whether a sentence mentions an educational institution.
pub fn is_education_sentence(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    EDUCATION_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// First three education sentences, in document order, joined with " | ".
pub fn extract_education(text: &str) -> String {
    sentences(text)
        .into_iter()
        .filter(|s| is_education_sentence(s))
        .take(MAX_EDUCATION_ENTRIES)
        .collect::<Vec<_>>()
        .join(EDUCATION_SEPARATOR)
}
