//! Named-entity recognition capability used for candidate names.
//!
//! The parser only needs "the first person name in the text". The capability
//! is a trait so a statistical recognizer can be plugged in; the default
//! [`HeuristicRecognizer`] looks for short runs of title-case words.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kind of a recognised entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
}

/// An entity found in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Trait for named-entity recognizers.
pub trait EntityRecognizer {
    /// All entities in `text`, in order of appearance.
    fn recognize(&self, text: &str) -> Vec<Entity>;

    /// Text of the first entity labelled [`EntityLabel::Person`].
    fn first_person(&self, text: &str) -> Option<String> {
        self.recognize(text)
            .into_iter()
            .find(|e| e.label == EntityLabel::Person)
            .map(|e| e.text)
    }
}

lazy_static! {
    // Two or more title-case words separated by blanks on a single line
    static ref TITLE_CASE_RUN: Regex = Regex::new(
        r"\p{Lu}\p{Ll}+(?:[-'’]\p{Lu}\p{Ll}+)?(?:[ \t]+\p{Lu}\p{Ll}+(?:[-'’]\p{Lu}\p{Ll}+)?)+"
    ).unwrap();
}

/// Words that make a run an organisation.
const ORGANIZATION_WORDS: &[&str] = &[
    "university", "college", "institute", "school", "academy", "inc", "llc", "ltd", "corp",
    "corporation", "company", "technologies", "solutions", "labs", "group", "bank",
];

/// Words that never belong to a person name: headings, titles, common
/// sentence openers, months and skill names.
const NON_NAME_WORDS: &[&str] = &[
    // headings
    "resume", "curriculum", "vitae", "profile", "summary", "objective", "contact",
    "experience", "education", "skills", "projects", "certifications", "languages",
    "interests", "references", "work", "history", "employment", "professional", "technical",
    "personal", "details", "information", "achievements", "awards", "publications", "phone",
    "email", "address", "linkedin", "github",
    // titles and degrees
    "software", "engineer", "engineering", "developer", "manager", "analyst", "scientist",
    "senior", "junior", "lead", "principal", "intern", "consultant", "designer", "architect",
    "director", "specialist", "administrator", "associate", "data", "web", "backend",
    "frontend", "full", "stack", "science", "computer", "bachelor", "master", "masters",
    "degree", "department",
    // sentence openers
    "the", "and", "of", "at", "in", "on", "for", "with", "to", "from", "by", "then", "she",
    "he", "they", "we", "my", "our", "her", "his", "their", "this", "that", "worked",
    "studied", "built",
    // months
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
    // skills
    "python", "java", "javascript", "django", "flask", "pandas", "numpy", "pytorch",
    "tensorflow", "machine", "learning", "git", "html", "css", "sql", "aws",
];

/// Title-case heuristic recognizer.
///
/// A run of title-case words containing an organisation word is an
/// organisation. Otherwise the run is cut at non-name words and each piece of
/// two or three words is a person.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for run in TITLE_CASE_RUN.find_iter(text) {
            let words: Vec<&str> = run.as_str().split_whitespace().collect();

            if words.iter().any(|w| is_one_of(w, ORGANIZATION_WORDS)) {
                entities.push(Entity::new(words.join(" "), EntityLabel::Organization));
                continue;
            }

            for piece in words.split(|w| is_one_of(w, NON_NAME_WORDS)) {
                if (2..=3).contains(&piece.len()) {
                    entities.push(Entity::new(piece.join(" "), EntityLabel::Person));
                }
            }
        }

        entities
    }
}

fn is_one_of(word: &str, list: &[&str]) -> bool {
    let lower = word.to_lowercase();
    list.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_on_first_line() {
        let text = "Jane Doe\nSoftware Engineer\njane@example.com";
        assert_eq!(HeuristicRecognizer.first_person(text), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_heading_is_cut_away() {
        let text = "Curriculum Vitae Maria Garcia Lopez";
        assert_eq!(
            HeuristicRecognizer.first_person(text),
            Some("Maria Garcia Lopez".to_string())
        );
    }

    #[test]
    fn test_organizations() {
        let entities = HeuristicRecognizer.recognize("Graduated from Stanford University in 2010");
        assert_eq!(
            entities,
            vec![Entity::new("Stanford University", EntityLabel::Organization)]
        );
    }

    #[test]
    fn test_hyphenated_and_accented_names() {
        let text = "Contact: Zoë Smith-Jones, Berlin";
        assert_eq!(
            HeuristicRecognizer.first_person(text),
            Some("Zoë Smith-Jones".to_string())
        );
    }

    #[test]
    fn test_no_person() {
        let text = "experienced developer with python and sql\nSenior Engineer";
        assert_eq!(HeuristicRecognizer.first_person(text), None);
    }

    #[test]
    fn test_runs_do_not_cross_lines() {
        let entities = HeuristicRecognizer.recognize("Jane\nDoe");
        assert!(entities.is_empty());
    }
}
