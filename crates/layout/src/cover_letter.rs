//! Cover letter document to content blocks.

use crate::blocks::{ContentBlock, RuleBlock};
use itertools::Itertools;
use vitae_idf::CoverLetterDocument;
use vitae_style::PageLayout;
use vitae_style::names::*;
use vitae_style::presets::ACCENT;

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_SALUTATION: &str = "Dear Hiring Manager,";
pub const DEFAULT_CLOSING: &str = "Sincerely,";
const MAX_CONTACT_ITEMS: usize = 4;

/// Caller-supplied header details that are not part of the letter text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterHeader<'a> {
    pub applicant_name: &'a str,
    /// Newline-separated contact lines.
    pub contact_info: &'a str,
    /// Used when the letter has no date of its own.
    pub fallback_date: &'a str,
}

/// The explicit name, else the first contact line that looks like one.
pub fn resolve_applicant_name(applicant_name: &str, contact_info: &str) -> String {
    let name = applicant_name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    // The digit check looks at the untrimmed line.
    contact_info
        .lines()
        .find(|line| {
            !line.trim().is_empty()
                && !line.contains('@')
                && !line.chars().take(5).any(|c| c.is_ascii_digit())
        })
        .map_or(DEFAULT_NAME, str::trim)
        .to_string()
}

pub fn cover_letter_blocks(
    doc: &CoverLetterDocument,
    header: LetterHeader<'_>,
    page: &PageLayout,
) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    let name = resolve_applicant_name(header.applicant_name, header.contact_info);
    blocks.push(ContentBlock::text(LETTER_NAME, name.as_str()));
    blocks.push(ContentBlock::Spacer(6.0));

    let contact = header
        .contact_info
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != name)
        .take(MAX_CONTACT_ITEMS)
        .join(" • ");
    if !contact.is_empty() {
        blocks.push(ContentBlock::text(LETTER_CONTACT, contact));
    }

    blocks.push(ContentBlock::Spacer(8.0));
    blocks.push(ContentBlock::Rule(RuleBlock {
        width: page.content_width(),
        thickness: 2.0,
        color: ACCENT,
        space_before: 0.0,
        space_after: 0.0,
    }));
    blocks.push(ContentBlock::Spacer(24.0));

    let date = if doc.date.is_empty() { header.fallback_date } else { doc.date.as_str() };
    blocks.push(ContentBlock::text(LETTER_DATE, date));

    if !doc.recipient_info.is_empty() {
        blocks.extend(
            doc.recipient_info
                .iter()
                .map(|line| ContentBlock::text(LETTER_RECIPIENT, line.as_str())),
        );
        blocks.push(ContentBlock::Spacer(20.0));
    }

    blocks.push(ContentBlock::text(LETTER_SALUTATION, or_default(&doc.salutation, DEFAULT_SALUTATION)));
    blocks.extend(
        doc.body_paragraphs
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| ContentBlock::text(LETTER_BODY, p.as_str())),
    );
    blocks.push(ContentBlock::text(LETTER_CLOSING, or_default(&doc.closing, DEFAULT_CLOSING)));
    if !doc.signature.is_empty() {
        blocks.push(ContentBlock::text(LETTER_SIGNATURE, doc.signature.as_str()));
    }
    blocks.push(ContentBlock::Spacer(20.0));

    blocks
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::TextBlock;
    use vitae_style::Stylesheet;

    fn texts(blocks: &[ContentBlock]) -> Vec<(&str, &str)> {
        blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Text(TextBlock { style, content }) => Some((style.as_str(), content.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn name_resolution() {
        assert_eq!(resolve_applicant_name("  Jane Doe ", "ignored"), "Jane Doe");
        assert_eq!(
            resolve_applicant_name("", "jane@doe.dev\n555-123-4567\nJane Doe\nPortland"),
            "Jane Doe"
        );
        assert_eq!(resolve_applicant_name("", "12 Main St\nme@x.io"), DEFAULT_NAME);
        assert_eq!(resolve_applicant_name("", ""), DEFAULT_NAME);
    }

    #[test]
    fn leading_whitespace_counts_toward_the_digit_window() {
        assert_eq!(resolve_applicant_name("", "  Jane Doe  \nPortland"), "Jane Doe");
        assert_eq!(resolve_applicant_name("", "    12 Main\nJane Doe"), "Jane Doe");
        assert_eq!(resolve_applicant_name("", "     123 Elm St"), "123 Elm St");
    }

    #[test]
    fn fallbacks_fill_missing_parts() {
        let page = Stylesheet::cover_letter().page;
        let header = LetterHeader {
            fallback_date: "January 02, 2026",
            ..Default::default()
        };
        let blocks = cover_letter_blocks(&CoverLetterDocument::default(), header, &page);
        assert_eq!(
            texts(&blocks),
            [
                (LETTER_NAME, DEFAULT_NAME),
                (LETTER_DATE, "January 02, 2026"),
                (LETTER_SALUTATION, DEFAULT_SALUTATION),
                (LETTER_CLOSING, DEFAULT_CLOSING),
            ]
        );
        assert_eq!(blocks.last(), Some(&ContentBlock::Spacer(20.0)));
        assert_eq!(blocks.iter().filter(|b| **b == ContentBlock::Spacer(20.0)).count(), 1);
    }

    #[test]
    fn full_letter_in_order() {
        let page = Stylesheet::cover_letter().page;
        let doc = CoverLetterDocument {
            date: "March 3, 2024".into(),
            recipient_info: vec!["Hiring Manager".into(), "Globex".into()],
            salutation: "Dear Ms. Rivera,".into(),
            body_paragraphs: vec!["One.".into(), " ".into(), "Two.".into()],
            closing: "Best regards,".into(),
            signature: "Jane Doe".into(),
        };
        let header = LetterHeader {
            applicant_name: "Jane Doe",
            contact_info: "Jane Doe\njane@doe.dev\n555-123-4567\nPortland, OR\nlinkedin.com/in/jane\ngithub.com/jane",
            fallback_date: "unused",
        };
        let blocks = cover_letter_blocks(&doc, header, &page);
        assert_eq!(
            texts(&blocks),
            [
                (LETTER_NAME, "Jane Doe"),
                (
                    LETTER_CONTACT,
                    "jane@doe.dev • 555-123-4567 • Portland, OR • linkedin.com/in/jane"
                ),
                (LETTER_DATE, "March 3, 2024"),
                (LETTER_RECIPIENT, "Hiring Manager"),
                (LETTER_RECIPIENT, "Globex"),
                (LETTER_SALUTATION, "Dear Ms. Rivera,"),
                (LETTER_BODY, "One."),
                (LETTER_BODY, "Two."),
                (LETTER_CLOSING, "Best regards,"),
                (LETTER_SIGNATURE, "Jane Doe"),
            ]
        );
        assert_eq!(blocks.iter().filter(|b| **b == ContentBlock::Spacer(20.0)).count(), 2);
    }
}
