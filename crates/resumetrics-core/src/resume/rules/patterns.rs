//! Common regex patterns and vocabularies for resume extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Closed vocabulary of recognised technology skills.
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "sql",
    "machine learning",
    "flask",
    "django",
    "aws",
    "java",
    "c++",
    "javascript",
    "html",
    "css",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "git",
];

/// Words marking a sentence as an education entry.
pub const EDUCATION_KEYWORDS: &[&str] = &["university", "college", "institute", "school"];

/// Maximum number of education sentences kept.
pub const MAX_EDUCATION_ENTRIES: usize = 3;

lazy_static! {
    // Email: local-part@domain, word/dot/hyphen characters on each side
    pub static ref EMAIL: Regex = Regex::new(
        r"[\w\.-]+@[\w\.-]+"
    ).unwrap();

    // Phone: optional country code, optional parenthesised area code
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    // "5 years", "3+ yrs", "10 years' ... experience"; ASCII digits only
    pub static ref EXPERIENCE: Regex = Regex::new(
        r"(?i)([0-9]+)\+?\s*(?:years?|yrs?|year's?|years'?)(?:\s.*?experience)?"
    ).unwrap();

    // Word tokens; trailing + and # are kept so c++ and c# survive
    pub static ref TOKEN: Regex = Regex::new(
        r"\w+[+#]*"
    ).unwrap();
}
