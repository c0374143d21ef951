//! Ordered keyword classifiers.
//!
//! Every classifier here takes an already normalized line. Keyword sets are
//! matched as case-insensitive substrings, and where several sets could
//! match, the first one in declaration order wins.

use regex::Regex;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("BUG: invalid PHONE_RE regex literal")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("BUG: invalid EMAIL_RE regex literal")
});

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)address:\s*([^|]+)").expect("BUG: invalid ADDRESS_RE regex literal")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("BUG: invalid YEAR_RE regex literal"));

static NUMERIC_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}").expect("BUG: invalid NUMERIC_DATE_RE regex literal")
});

static WORD_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+\s+\d{1,2},?\s+\d{4}").expect("BUG: invalid WORD_DATE_RE regex literal")
});

static STREET_ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+.*[A-Za-z].*\d{5}").expect("BUG: invalid STREET_ADDRESS_RE regex literal")
});

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower.contains(keyword))
}

fn starts_with_any(lower: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| lower.starts_with(prefix))
}

// --- Resume sections ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Skills,
    Experience,
    Education,
    Certifications,
    AdditionalSkills,
}

/// Section triggers in priority order.
pub const SECTION_RULES: &[(&[&str], Section)] = &[
    (
        &["professional summary", "summary", "profile", "objective"],
        Section::Profile,
    ),
    (&["technical skills", "skills"], Section::Skills),
    (
        &["professional experience", "work experience", "experience"],
        Section::Experience,
    ),
    (&["education"], Section::Education),
    (&["certifications", "training"], Section::Certifications),
    (&["additional skills", "attributes"], Section::AdditionalSkills),
];

impl Section {
    /// Keywords that end this section's consumption loop.
    pub fn stop_keywords(self) -> &'static [&'static str] {
        match self {
            Section::Profile => &[
                "technical skills",
                "professional experience",
                "experience",
                "education",
                "certifications",
            ],
            Section::Skills => &[
                "professional experience",
                "experience",
                "education",
                "certifications",
            ],
            Section::Experience => &["education", "certifications", "additional skills"],
            Section::Education => &["certifications", "additional skills", "notes"],
            Section::Certifications => &["additional skills", "notes"],
            Section::AdditionalSkills => &["notes"],
        }
    }

    pub fn stops_at(self, line: &str) -> bool {
        contains_any(&line.to_lowercase(), self.stop_keywords())
    }
}

/// The section a line opens, if any.
pub fn section_trigger(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    SECTION_RULES
        .iter()
        .find(|(keywords, _)| contains_any(&lower, keywords))
        .map(|(_, section)| *section)
}

/// `---` and `===` rules drawn by the generator between blocks.
pub fn is_separator(line: &str) -> bool {
    line.starts_with("---") || line.starts_with("===")
}

pub fn is_bullet(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('•')
}

/// Removes leading `-`, `•` and spaces.
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(['-', '•', ' ']).trim()
}

// --- Name ---

const NAME_EXCLUDES: &[&str] = &["mobile:", "email:", "@", "phone:", "summary", "professional"];

pub fn is_name_candidate(line: &str) -> bool {
    let lower = line.to_lowercase();
    !line.is_empty()
        && !lower.starts_with("here is")
        && !contains_any(&lower, NAME_EXCLUDES)
        && line.split_whitespace().count() >= 2
        && !line.starts_with('-')
        && !line.starts_with('*')
}

// --- Contact ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Phone,
    Email,
    Address,
}

pub const CONTACT_RULES: &[(&[&str], ContactField)] = &[
    (&["mobile:", "phone:"], ContactField::Phone),
    (&["email:", "@"], ContactField::Email),
    (&["address:"], ContactField::Address),
];

/// Every contact field whose label or marker appears on the line.
pub fn contact_fields(line: &str) -> impl Iterator<Item = ContactField> + '_ {
    let lower = line.to_lowercase();
    CONTACT_RULES
        .iter()
        .filter(move |(keywords, _)| contains_any(&lower, keywords))
        .map(|(_, field)| *field)
}

/// Pulls the value of `field` out of a line that carries its label.
pub fn extract_contact(field: ContactField, line: &str) -> Option<String> {
    match field {
        ContactField::Phone => PHONE_RE.find(line).map(|m| m.as_str().to_string()),
        ContactField::Email => EMAIL_RE.find(line).map(|m| m.as_str().to_string()),
        ContactField::Address => {
            let value = ADDRESS_RE.captures(line)?.get(1)?.as_str().trim();
            (!value.is_empty()).then(|| value.to_string())
        }
    }
}

// --- Experience ---

const COMPANY_MARKERS: &[&str] = &["inc", "corp", "llc", "ltd", "company"];
const TITLE_MARKERS: &[&str] = &["developer", "engineer"];

pub fn is_company_line(line: &str) -> bool {
    !is_bullet(line) && (line.contains(',') || contains_any(&line.to_lowercase(), COMPANY_MARKERS))
}

pub fn is_title_line(line: &str) -> bool {
    line.starts_with('*') || contains_any(&line.to_lowercase(), TITLE_MARKERS)
}

pub fn has_year(line: &str) -> bool {
    YEAR_RE.is_match(line)
}

/// Trims surrounding `*` and whitespace.
pub fn strip_stars(line: &str) -> &str {
    line.trim_matches('*').trim()
}

// --- Cover letter ---

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const SALUTATIONS: &[&str] = &["dear ", "hello ", "hi ", "to whom it may concern"];

const CLOSINGS: &[&str] = &[
    "sincerely",
    "best regards",
    "yours truly",
    "respectfully",
    "thank you",
    "kind regards",
    "warm regards",
];

const RECIPIENT_MARKERS: &[&str] = &[
    "company",
    "corporation",
    "inc",
    "ltd",
    "manager",
    "director",
    "hr",
    "human resources",
    "hiring",
];

pub fn is_date_line(line: &str) -> bool {
    contains_any(&line.to_lowercase(), MONTHS)
        || NUMERIC_DATE_RE.is_match(line)
        || WORD_DATE_RE.is_match(line)
}

pub fn is_salutation(line: &str) -> bool {
    starts_with_any(&line.to_lowercase(), SALUTATIONS)
}

pub fn is_closing(line: &str) -> bool {
    starts_with_any(&line.to_lowercase(), CLOSINGS)
}

pub fn is_recipient_line(line: &str) -> bool {
    contains_any(&line.to_lowercase(), RECIPIENT_MARKERS) || STREET_ADDRESS_RE.is_match(line)
}
