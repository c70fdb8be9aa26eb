//! Rule-based field extractors for resumes.
//!
//! Every rule is independent and "first match wins"; nothing here ranks
//! alternatives or cross-checks fields.

pub mod contact;
pub mod education;
pub mod experience;
pub mod patterns;
pub mod skills;

pub use contact::{EmailExtractor, PhoneExtractor};
pub use education::extract_education;
pub use experience::{extract_experience, ExperienceExtractor};
pub use skills::{extract_skills, SkillExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field, in order of appearance.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
