//! Resume parser combining the rule-based extractors and a named-entity
//! recognizer.

use tracing::{debug, info};

use crate::models::candidate::{ParsedResume, UNKNOWN_NAME};

use super::entities::{EntityRecognizer, HeuristicRecognizer};
use super::rules::{
    extract_education, extract_experience, extract_skills, EmailExtractor, FieldExtractor,
    PhoneExtractor,
};

/// Best-effort resume parser.
///
/// Each field is derived independently and the first match wins. Missing
/// fields are expected; there is no retry, fallback strategy or confidence.
pub struct ResumeParser<R = HeuristicRecognizer> {
    recognizer: R,
}

impl ResumeParser {
    /// Create a parser using the title-case heuristic for names.
    pub fn new() -> Self {
        Self {
            recognizer: HeuristicRecognizer::new(),
        }
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntityRecognizer> ResumeParser<R> {
    /// Create a parser with a specific named-entity recognizer.
    pub fn with_recognizer(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// The recognizer used for names.
    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Parse resume text into candidate fields.
    ///
    /// Returns `None` when the text is empty or whitespace only.
    pub fn parse(&self, text: &str) -> Option<ParsedResume> {
        if text.trim().is_empty() {
            debug!("Nothing to parse: empty resume text");
            return None;
        }

        info!("Parsing resume from {} characters of text", text.len());

        let name = self
            .recognizer
            .first_person(text)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let email = EmailExtractor.extract(text);
        let phone = PhoneExtractor.extract(text);
        let skills = extract_skills(text);
        let education = extract_education(text);
        let experience = extract_experience(text);

        debug!(
            "Extracted name={:?} email={:?} phone={:?} skills={:?} experience={}",
            name, email, phone, skills, experience
        );

        Some(ParsedResume {
            name,
            email,
            phone,
            skills,
            education,
            experience,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::entities::{Entity, EntityLabel};
    use pretty_assertions::assert_eq;

    /// Recognizer returning a fixed list of entities.
    struct FixedRecognizer(Vec<Entity>);

    impl EntityRecognizer for FixedRecognizer {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            self.0.clone()
        }
    }

    const SAMPLE: &str = "Jane Doe
Senior Software Engineer
jane.doe@example.com | +1 (555) 123-4567

Summary
5+ years of experience in backend development with Python, SQL and AWS.
Comfortable with Django, Flask and git. Python every day.

Education
B.Sc. Computer Science, Stanford University, 2014.
Exchange semester at Imperial College London.
";

    #[test]
    fn test_parse_full_resume() {
        let parsed = ResumeParser::new().parse(SAMPLE).unwrap();

        assert_eq!(
            parsed,
            ParsedResume {
                name: "Jane Doe".to_string(),
                email: Some("jane.doe@example.com".to_string()),
                phone: Some("+1 (555) 123-4567".to_string()),
                skills: "aws, django, flask, git, python, sql".to_string(),
                education: "Computer Science, Stanford University, 2014. | \
                            Exchange semester at Imperial College London."
                    .to_string(),
                experience: 5,
            }
        );
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let parser = ResumeParser::new();
        assert_eq!(parser.parse(""), None);
        assert_eq!(parser.parse("  \n\t "), None);
    }

    #[test]
    fn test_defaults_when_nothing_matches() {
        let parsed = ResumeParser::new().parse("nothing useful here").unwrap();

        assert_eq!(parsed.name, UNKNOWN_NAME);
        assert_eq!(parsed.email, None);
        assert_eq!(parsed.phone, None);
        assert_eq!(parsed.skills, "");
        assert_eq!(parsed.education, "");
        assert_eq!(parsed.experience, 0);
    }

    #[test]
    fn test_uses_first_person_from_recognizer() {
        let parser = ResumeParser::with_recognizer(FixedRecognizer(vec![
            Entity::new("Acme Corp", EntityLabel::Organization),
            Entity::new("Ada Lovelace", EntityLabel::Person),
            Entity::new("Charles Babbage", EntityLabel::Person),
        ]));

        let parsed = parser.parse("any text").unwrap();
        assert_eq!(parsed.name, "Ada Lovelace");
    }

    #[test]
    fn test_unknown_without_person_entity() {
        let parser = ResumeParser::with_recognizer(FixedRecognizer(vec![Entity::new(
            "Acme Corp",
            EntityLabel::Organization,
        )]));

        let parsed = parser.parse("Jane Doe, jane@example.com").unwrap();
        assert_eq!(parsed.name, "Unknown");
        assert_eq!(parsed.email.as_deref(), Some("jane@example.com"));
    }
}
