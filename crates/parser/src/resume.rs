//! Line-oriented resume parser.
//!
//! The parser keeps an explicit cursor into the normalized lines. Each
//! section handler reports how many lines it consumed, which lets the
//! experience handler look up to two lines ahead and leave them in place
//! when they turn out not to be a title or a date.

use crate::rules::{self, ContactField, Section};
use log::{debug, trace};
use vitae_idf::{ExperienceEntry, ResumeDocument};

const NAME_SCAN_LIMIT: usize = 10;

pub struct ResumeParser<'a> {
    lines: &'a [String],
    pos: usize,
    doc: ResumeDocument,
    current: Option<ExperienceEntry>,
}

impl<'a> ResumeParser<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            pos: 0,
            doc: ResumeDocument::default(),
            current: None,
        }
    }

    pub fn parse(mut self) -> ResumeDocument {
        self.detect_name();

        let lines = self.lines;
        while let Some(line) = lines.get(self.pos) {
            if rules::is_separator(line) {
                self.pos += 1;
                continue;
            }

            if self.observe_contact(line) {
                trace!("line {} consumed as contact info", self.pos);
                self.pos += 1;
                continue;
            }

            match rules::section_trigger(line) {
                Some(section) => {
                    debug!("line {}: entering {:?} section ({:?})", self.pos, section, line);
                    self.pos += 1;
                    self.run_section(section);
                }
                None => {
                    trace!("line {} outside any section: {:?}", self.pos, line);
                    self.pos += 1;
                }
            }
        }

        self.doc
    }

    fn detect_name(&mut self) {
        if let Some(name) = self
            .lines
            .iter()
            .take(NAME_SCAN_LIMIT)
            .find(|line| rules::is_name_candidate(line))
        {
            self.doc.name = name.to_uppercase();
            debug!("detected name {:?}", self.doc.name);
        }
    }

    /// Records any contact value on the line that is not yet known.
    /// Returns whether the line carried a contact label at all.
    fn observe_contact(&mut self, line: &str) -> bool {
        let mut labelled = false;
        for field in rules::contact_fields(line) {
            labelled = true;
            let slot = match field {
                ContactField::Phone => &mut self.doc.contact.phone,
                ContactField::Email => &mut self.doc.contact.email,
                ContactField::Address => &mut self.doc.contact.address,
            };
            if slot.is_empty()
                && let Some(value) = rules::extract_contact(field, line)
            {
                debug!("extracted {:?}: {:?}", field, value);
                *slot = value;
            }
        }
        labelled
    }

    fn run_section(&mut self, section: Section) {
        let lines = self.lines;
        let mut profile = Vec::new();

        while let Some(line) = lines.get(self.pos) {
            if rules::is_separator(line) {
                self.pos += 1;
                if section == Section::Profile {
                    break;
                }
                continue;
            }
            if section.stops_at(line) {
                break;
            }

            self.observe_contact(line);

            let consumed = match section {
                Section::Profile => {
                    profile.push(line.as_str());
                    1
                }
                Section::Skills => self.skill_line(line),
                Section::Experience => self.experience_line(line),
                Section::Education => {
                    self.doc.education.push(line.clone());
                    1
                }
                Section::Certifications => {
                    self.doc.certifications.push(bullet_text(line));
                    1
                }
                Section::AdditionalSkills => {
                    self.doc.additional_skills.push(bullet_text(line));
                    1
                }
            };
            self.pos += consumed;
        }

        match section {
            Section::Profile => self.doc.profile = profile.join(" "),
            Section::Experience => self.flush_entry(),
            _ => {}
        }
    }

    /// `- Category: a, b, c`
    fn skill_line(&mut self, line: &str) -> usize {
        if !line.starts_with('-') {
            return 1;
        }
        let Some((category, skills)) = line.split_once(':') else {
            return 1;
        };

        let category = category.trim_start_matches(['-', '*']).trim_matches('*').trim();
        let skills: Vec<String> = skills
            .split(',')
            .map(|skill| skill.trim().trim_matches('*').trim())
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        if category.is_empty() || skills.is_empty() {
            trace!("skipping skill line without category or values: {:?}", line);
        } else {
            debug!("skills category {:?} with {} entries", category, skills.len());
            self.doc.skills.insert(category.to_string(), skills);
        }
        1
    }

    /// Handles the line at the cursor and returns how many lines it used.
    fn experience_line(&mut self, line: &str) -> usize {
        if rules::is_company_line(line) {
            self.flush_entry();
            let mut entry = ExperienceEntry {
                company: line.to_string(),
                ..Default::default()
            };
            let mut consumed = 1;

            if let Some(title) = self.lines.get(self.pos + 1)
                && rules::is_title_line(title)
            {
                entry.title = rules::strip_stars(title).to_string();
                consumed += 1;

                if let Some(dates) = self.lines.get(self.pos + 2)
                    && rules::has_year(dates)
                {
                    entry.dates = rules::strip_stars(dates).to_string();
                    consumed += 1;
                }
            }

            trace!(
                "new experience entry at line {}: {:?} / {:?} / {:?}",
                self.pos, entry.company, entry.title, entry.dates
            );
            self.current = Some(entry);
            return consumed;
        }

        if rules::is_bullet(line) {
            match self.current.as_mut() {
                Some(entry) => entry.responsibilities.push(rules::strip_bullet(line).to_string()),
                None => trace!("responsibility before any company line: {:?}", line),
            }
        }
        1
    }

    fn flush_entry(&mut self) {
        if let Some(entry) = self.current.take() {
            debug!(
                "flushing experience entry {:?} with {} responsibilities",
                entry.company,
                entry.responsibilities.len()
            );
            self.doc.experience.push(entry);
        }
    }
}

fn bullet_text(line: &str) -> String {
    if rules::is_bullet(line) {
        rules::strip_bullet(line).to_string()
    } else {
        line.to_string()
    }
}

/// Parses already normalized lines.
pub fn parse_lines(lines: &[String]) -> ResumeDocument {
    ResumeParser::new(lines).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn parse(text: &str) -> ResumeDocument {
        let _ = env_logger::builder().is_test(true).try_init();
        parse_lines(&normalize(text))
    }

    const FULL: &str = "\
Here is the resume you asked for:
**JANE Q. DOE**
Phone: 555-987-6543 | Email: jane@doe.dev
Address: 42 Elm Street, Portland OR
---
**PROFESSIONAL SUMMARY**
Backend developer with a decade of
distributed systems work.
---
**TECHNICAL SKILLS**
- **Languages:** Rust, Go, Python
- **Cloud:** AWS, GCP
- Tooling
---
**PROFESSIONAL EXPERIENCE**
Globex Corp, Springfield
*Senior Software Engineer*
*2019 - Present*
- Led the storage rewrite
- Cut p99 latency by 40%
Initech LLC
Analyst
- Filed TPS reports
---
**EDUCATION**
B.S. Computer Science, State University, 2012
---
**CERTIFICATIONS**
- AWS Solutions Architect
Notes: tailored for the role
";

    #[test]
    fn parses_a_complete_resume() {
        let doc = parse(FULL);
        assert_eq!(doc.name, "JANE Q. DOE");
        assert_eq!(doc.contact.phone, "555-987-6543");
        assert_eq!(doc.contact.email, "jane@doe.dev");
        assert_eq!(doc.contact.address, "42 Elm Street, Portland OR");
        assert_eq!(
            doc.profile,
            "Backend developer with a decade of distributed systems work."
        );

        let categories: Vec<_> = doc.skills.keys().map(String::as_str).collect();
        assert_eq!(categories, ["Languages", "Cloud"]);
        assert_eq!(doc.skills["Languages"], ["Rust", "Go", "Python"]);

        assert_eq!(doc.experience.len(), 2);
        let globex = &doc.experience[0];
        assert_eq!(globex.company, "Globex Corp, Springfield");
        assert_eq!(globex.title, "Senior Software Engineer");
        assert_eq!(globex.dates, "2019 - Present");
        assert_eq!(
            globex.responsibilities,
            ["Led the storage rewrite", "Cut p99 latency by 40%"]
        );
        let initech = &doc.experience[1];
        assert_eq!(initech.title, "");
        assert_eq!(initech.responsibilities, ["Filed TPS reports"]);

        assert_eq!(doc.education, ["B.S. Computer Science, State University, 2012"]);
        assert_eq!(doc.certifications, ["AWS Solutions Architect"]);
        assert!(doc.additional_skills.is_empty());
    }

    #[test]
    fn attributes_section_after_a_separator() {
        let doc = parse("Summary\nSteady hands.\n---\nAttributes\n- Mentoring\n• Public speaking\nNotes\n");
        assert_eq!(doc.profile, "Steady hands.");
        assert_eq!(doc.additional_skills, ["Mentoring", "Public speaking"]);
    }

    #[test]
    fn additional_skills_heading_dispatches_to_skills() {
        let doc = parse("Certifications\n- CKA\nAdditional Skills\n- Leadership: mentoring, hiring\n");
        assert_eq!(doc.certifications, ["CKA"]);
        assert!(doc.additional_skills.is_empty());
        assert_eq!(doc.skills["Leadership"], ["mentoring", "hiring"]);
    }

    #[test]
    fn minimal_summary_example() {
        let doc = parse("JOHN SMITH\nPhone: 555-123-4567\nEmail: john@x.com\nSummary\nBuilt systems.\n");
        assert_eq!(doc.name, "JOHN SMITH");
        assert_eq!(doc.contact.phone, "555-123-4567");
        assert_eq!(doc.contact.email, "john@x.com");
        assert_eq!(doc.profile, "Built systems.");
    }

    #[test]
    fn bold_skill_category() {
        let doc = parse("Skills\n- **Languages:** Python, Go, Rust\n");
        assert_eq!(doc.skills["Languages"], ["Python", "Go", "Rust"]);
    }

    #[test]
    fn empty_skill_lists_are_not_recorded() {
        let doc = parse("Skills\n- Languages: , ,\n- Cloud: AWS\n");
        assert!(!doc.skills.contains_key("Languages"));
        assert_eq!(doc.skills["Cloud"], ["AWS"]);
    }

    #[test]
    fn first_contact_match_wins() {
        let doc = parse(
            "A Person\nPhone: 111-222-3333\nMobile: 444-555-6666\nEmail: a@b.io\nEmail: c@d.io\nSummary\nText\n",
        );
        assert_eq!(doc.contact.phone, "111-222-3333");
        assert_eq!(doc.contact.email, "a@b.io");
    }

    #[test]
    fn contact_below_a_heading_is_still_captured() {
        let doc = parse("Summary\nReach me at someone@example.com anytime\n");
        assert_eq!(doc.contact.email, "someone@example.com");
        assert_eq!(doc.profile, "Reach me at someone@example.com anytime");
    }

    #[test]
    fn responsibilities_without_company_are_dropped() {
        let doc = parse("Experience\n- orphan bullet\nAcme Inc\n- real bullet\n");
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.experience[0].responsibilities, ["real bullet"]);
    }

    #[test]
    fn lookahead_leaves_non_title_lines_in_place() {
        let doc = parse("Experience\nAcme Inc\n- first\nBeta LLC\nStaff Engineer\n- second\n");
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.experience[0].title, "");
        assert_eq!(doc.experience[0].responsibilities, ["first"]);
        assert_eq!(doc.experience[1].title, "Staff Engineer");
        assert_eq!(doc.experience[1].dates, "");
        assert_eq!(doc.experience[1].responsibilities, ["second"]);
    }

    #[test]
    fn unstructured_text_yields_empty_document() {
        let doc = parse("just some words\nand more words\n");
        assert_eq!(doc.name, "JUST SOME WORDS");
        assert!(doc.profile.is_empty());
        assert!(doc.experience.is_empty());
        assert!(doc.skills.is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn name_must_appear_in_the_first_ten_lines() {
        let text_with_name_at = |index: usize| {
            let mut lines: Vec<String> = (0..index).map(|i| format!("filler{i}")).collect();
            lines.push("Jane Doe".into());
            lines.join("\n")
        };
        assert_eq!(parse(&text_with_name_at(9)).name, "JANE DOE");
        assert_eq!(parse(&text_with_name_at(10)).name, "");
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse(FULL), parse(FULL));
    }
}
