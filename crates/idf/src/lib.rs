//! Intermediate Document Format (IDF)
//! The in-memory representation of a resume or cover letter after parsing
//! and before layout. Every field is plain owned text; a field the parser
//! could not recover is left empty rather than absent.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Skill categories in the order they first appeared in the source text.
pub type SkillMap = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.phone.is_empty() && self.email.is_empty() && self.address.is_empty()
    }
}

/// One position held, with the achievements listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub dates: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    /// Upper-cased applicant name.
    pub name: String,
    pub contact: Contact,
    /// A single paragraph.
    pub profile: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<String>,
    pub skills: SkillMap,
    pub certifications: Vec<String>,
    pub additional_skills: Vec<String>,
}

impl ResumeDocument {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.contact.is_empty()
            && self.profile.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.certifications.is_empty()
            && self.additional_skills.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLetterDocument {
    pub date: String,
    pub recipient_info: Vec<String>,
    pub salutation: String,
    pub body_paragraphs: Vec<String>,
    pub closing: String,
    pub signature: String,
}
