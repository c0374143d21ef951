//! Resume document to content blocks.

use crate::blocks::{ContentBlock, GridBlock, RuleBlock};
use crate::skills::{TAGS_PER_ROW, pack_skill_tags};
use itertools::Itertools;
use vitae_idf::{ExperienceEntry, ResumeDocument, SkillMap};
use vitae_style::names::*;
use vitae_style::presets::{ACCENT, LIGHT_GREY};
use vitae_style::{PageLayout, SKILL_PALETTE};
use vitae_types::Color;

/// 6.5 inch.
const SKILL_UNDERLINE_WIDTH: f32 = 468.0;
/// 2.2 inch.
const SKILL_COLUMN_WIDTH: f32 = 158.4;
const SKILL_ROW_HEIGHT: f32 = 24.0;

pub fn resume_blocks(doc: &ResumeDocument, page: &PageLayout) -> Vec<ContentBlock> {
    let content_width = page.content_width();
    let mut blocks = Vec::new();

    header(&mut blocks, doc, content_width);

    if !doc.profile.is_empty() {
        section(&mut blocks, "Professional Summary", |b| {
            b.push(ContentBlock::text(BODY, doc.profile.as_str()));
        });
    }
    if !doc.experience.is_empty() {
        section(&mut blocks, "Work Experience", |b| {
            doc.experience.iter().for_each(|entry| experience_entry(b, entry));
        });
    }
    if doc.skills.values().any(|skills| !skills.is_empty()) {
        section(&mut blocks, "Technical Skills", |b| {
            skill_categories(b, &doc.skills, content_width);
        });
    }
    for (title, items) in [
        ("Education", &doc.education),
        ("Certifications & Training", &doc.certifications),
        ("Additional Skills & Attributes", &doc.additional_skills),
    ] {
        if !items.is_empty() {
            section(&mut blocks, title, |b| {
                b.extend(items.iter().map(|item| ContentBlock::text(BODY, format!("• {item}"))));
            });
        }
    }

    blocks
}

fn header(blocks: &mut Vec<ContentBlock>, doc: &ResumeDocument, content_width: f32) {
    if !doc.name.is_empty() {
        blocks.push(ContentBlock::text(NAME, doc.name.as_str()));
    }

    let contact = &doc.contact;
    let parts = [
        ("Phone", &contact.phone),
        ("Email", &contact.email),
        ("Address", &contact.address),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .join(" | ");
    if !parts.is_empty() {
        blocks.push(ContentBlock::text(CONTACT, parts));
    }

    blocks.push(ContentBlock::Spacer(12.0));
    blocks.push(ContentBlock::Rule(RuleBlock {
        width: content_width,
        thickness: 2.0,
        color: ACCENT,
        space_before: 0.0,
        space_after: 16.0,
    }));
}

fn section(blocks: &mut Vec<ContentBlock>, title: &str, content: impl FnOnce(&mut Vec<ContentBlock>)) {
    blocks.push(ContentBlock::text(SECTION_HEADER, title.to_uppercase()));
    content(blocks);
    blocks.push(ContentBlock::Spacer(12.0));
}

fn experience_entry(blocks: &mut Vec<ContentBlock>, entry: &ExperienceEntry) {
    if !entry.title.is_empty() {
        blocks.push(ContentBlock::text(JOB_TITLE, entry.title.as_str()));
    }
    let company_date = [&entry.company, &entry.dates]
        .into_iter()
        .filter(|part| !part.is_empty())
        .join(" | ");
    if !company_date.is_empty() {
        blocks.push(ContentBlock::text(COMPANY_DATE, company_date));
    }
    for responsibility in entry.responsibilities.iter().filter(|r| !r.trim().is_empty()) {
        blocks.push(ContentBlock::text(BULLET, format!("• {responsibility}")));
    }
    blocks.push(ContentBlock::Spacer(8.0));
}

fn skill_categories(blocks: &mut Vec<ContentBlock>, skills: &SkillMap, content_width: f32) {
    for (category, list) in skills.iter().filter(|(_, list)| !list.is_empty()) {
        blocks.push(ContentBlock::text(SKILL_CATEGORY, category.as_str()));
        blocks.push(ContentBlock::Rule(RuleBlock {
            width: SKILL_UNDERLINE_WIDTH.min(content_width),
            thickness: 1.0,
            color: LIGHT_GREY,
            space_before: 6.0,
            space_after: 0.0,
        }));
        blocks.push(ContentBlock::Grid(GridBlock {
            column_width: SKILL_COLUMN_WIDTH.min(content_width / TAGS_PER_ROW as f32),
            min_row_height: SKILL_ROW_HEIGHT,
            style: SKILL_TAG.to_string(),
            empty_background: Color::WHITE,
            edge_color: LIGHT_GREY,
            edge_thickness: 0.5,
            rows: pack_skill_tags(list, &SKILL_PALETTE),
        }));
        blocks.push(ContentBlock::Spacer(12.0));
    }
}
