//! Built-in stylesheets for resumes and cover letters.

use crate::dimension::{Margins, PageSize};
use crate::font::{FontStyle, FontWeight};
use crate::stylesheet::{ElementStyle, PageLayout, Stylesheet};
use crate::text::TextAlign;
use vitae_types::Color;

pub const PRIMARY: Color = Color::rgb(0x2C, 0x3E, 0x50);
pub const ACCENT: Color = Color::rgb(0x34, 0x98, 0xDB);
pub const SECONDARY: Color = Color::rgb(0x34, 0x49, 0x5E);
pub const LIGHT_GREY: Color = Color::gray(0xD3);

/// Background colors cycled through by skill tags.
pub const SKILL_PALETTE: [Color; 6] = [
    Color::rgb(51, 128, 204),
    Color::rgb(38, 102, 166),
    Color::rgb(64, 140, 191),
    Color::rgb(26, 89, 153),
    Color::rgb(77, 153, 204),
    Color::rgb(46, 115, 179),
];

/// 0.75 inch.
pub const PAGE_MARGIN: f32 = 54.0;

pub mod names {
    pub const NAME: &str = "name";
    pub const CONTACT: &str = "contact";
    pub const SECTION_HEADER: &str = "section-header";
    pub const JOB_TITLE: &str = "job-title";
    pub const COMPANY_DATE: &str = "company-date";
    pub const BODY: &str = "body";
    pub const BULLET: &str = "bullet";
    pub const SKILL_CATEGORY: &str = "skill-category";
    pub const SKILL_TAG: &str = "skill-tag";

    pub const LETTER_NAME: &str = "letter-name";
    pub const LETTER_CONTACT: &str = "letter-contact";
    pub const LETTER_DATE: &str = "letter-date";
    pub const LETTER_RECIPIENT: &str = "letter-recipient";
    pub const LETTER_SALUTATION: &str = "letter-salutation";
    pub const LETTER_BODY: &str = "letter-body";
    pub const LETTER_CLOSING: &str = "letter-closing";
    pub const LETTER_SIGNATURE: &str = "letter-signature";
}

fn text(size: f32, color: Color) -> ElementStyle {
    ElementStyle {
        font_family: Some("Helvetica".to_string()),
        font_size: Some(size),
        font_weight: Some(FontWeight::Regular),
        font_style: Some(FontStyle::Normal),
        text_align: Some(TextAlign::Left),
        color: Some(color),
        ..Default::default()
    }
}

fn bold(size: f32, color: Color) -> ElementStyle {
    ElementStyle {
        font_weight: Some(FontWeight::Bold),
        ..text(size, color)
    }
}

fn spaced(mut style: ElementStyle, before: f32, after: f32, leading: Option<f32>) -> ElementStyle {
    style.space_before = Some(before);
    style.space_after = Some(after);
    style.line_height = leading;
    style
}

fn letter_page() -> PageLayout {
    PageLayout {
        size: PageSize::Letter,
        margins: Margins::all(PAGE_MARGIN),
    }
}

impl Stylesheet {
    pub fn resume() -> Self {
        use names::*;
        let styles = [
            (
                NAME,
                ElementStyle {
                    text_align: Some(TextAlign::Center),
                    ..spaced(bold(28.0, PRIMARY), 0.0, 8.0, Some(32.0))
                },
            ),
            (
                CONTACT,
                ElementStyle {
                    text_align: Some(TextAlign::Center),
                    ..spaced(text(11.0, PRIMARY), 0.0, 12.0, Some(14.0))
                },
            ),
            (SECTION_HEADER, spaced(bold(14.0, PRIMARY), 16.0, 8.0, Some(16.0))),
            (JOB_TITLE, spaced(bold(12.0, PRIMARY), 8.0, 4.0, Some(14.0))),
            (
                COMPANY_DATE,
                ElementStyle {
                    font_style: Some(FontStyle::Oblique),
                    ..spaced(text(11.0, ACCENT), 0.0, 6.0, Some(13.0))
                },
            ),
            (
                BODY,
                ElementStyle {
                    text_align: Some(TextAlign::Justify),
                    ..spaced(text(10.0, PRIMARY), 0.0, 4.0, Some(12.0))
                },
            ),
            (
                BULLET,
                ElementStyle {
                    left_indent: Some(12.0),
                    ..spaced(text(10.0, PRIMARY), 0.0, 3.0, Some(12.0))
                },
            ),
            (SKILL_CATEGORY, spaced(bold(12.0, PRIMARY), 10.0, 8.0, Some(14.0))),
            (
                SKILL_TAG,
                ElementStyle {
                    text_align: Some(TextAlign::Center),
                    padding: Some(Margins::symmetric(6.0, 12.0)),
                    ..spaced(bold(9.0, Color::WHITE), 0.0, 0.0, Some(11.0))
                },
            ),
        ];

        Self {
            page: letter_page(),
            styles: styles
                .into_iter()
                .map(|(name, style)| (name.to_string(), style))
                .collect(),
        }
    }

    pub fn cover_letter() -> Self {
        use names::*;
        let styles = [
            (
                LETTER_NAME,
                ElementStyle {
                    letter_spacing: Some(1.0),
                    ..spaced(bold(24.0, PRIMARY), 0.0, 8.0, None)
                },
            ),
            (LETTER_CONTACT, spaced(text(10.0, SECONDARY), 0.0, 0.0, Some(12.0))),
            (
                LETTER_DATE,
                ElementStyle {
                    text_align: Some(TextAlign::Right),
                    ..spaced(text(11.0, Color::BLACK), 0.0, 16.0, None)
                },
            ),
            (LETTER_RECIPIENT, spaced(text(11.0, Color::BLACK), 0.0, 6.0, Some(14.0))),
            (LETTER_SALUTATION, spaced(bold(12.0, PRIMARY), 0.0, 18.0, None)),
            (
                LETTER_BODY,
                ElementStyle {
                    text_align: Some(TextAlign::Justify),
                    ..spaced(text(11.0, Color::BLACK), 0.0, 16.0, Some(16.0))
                },
            ),
            (LETTER_CLOSING, spaced(text(11.0, Color::BLACK), 0.0, 36.0, None)),
            (LETTER_SIGNATURE, spaced(bold(12.0, PRIMARY), 0.0, 0.0, None)),
        ];

        Self {
            page: letter_page(),
            styles: styles
                .into_iter()
                .map(|(name, style)| (name.to_string(), style))
                .collect(),
        }
    }
}
