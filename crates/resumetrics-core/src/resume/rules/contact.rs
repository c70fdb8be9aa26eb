//! Email and phone extraction.

use super::patterns::{EMAIL, PHONE};
use super::FieldExtractor;

/// Email field extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        EMAIL.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        EMAIL.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Phone field extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        PHONE.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        PHONE.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}
