//! Resume field extraction module.

pub mod entities;
mod parser;
pub mod rules;
pub mod tokens;

pub use entities::{Entity, EntityLabel, EntityRecognizer, HeuristicRecognizer};
pub use parser::ResumeParser;
