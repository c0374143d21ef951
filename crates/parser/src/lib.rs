//! Recovers document structure from free-form generated text.
//!
//! Both parsers are total: any input produces a document, with every field
//! that could not be recognized left empty.

pub mod cover_letter;
pub mod normalize;
pub mod resume;
pub mod rules;

pub use normalize::normalize;
use vitae_idf::{CoverLetterDocument, ResumeDocument};

pub fn parse_resume(text: &str) -> ResumeDocument {
    resume::parse_lines(&normalize(text))
}

pub fn parse_cover_letter(text: &str) -> CoverLetterDocument {
    cover_letter::parse_lines(&normalize(text))
}
