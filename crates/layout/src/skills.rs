//! Skill-tag packing.

use crate::blocks::{GridCell, GridRow};
use itertools::Itertools;
use vitae_types::Color;

/// Tags shown per category; the rest are dropped.
pub const MAX_TAGS: usize = 12;
pub const TAGS_PER_ROW: usize = 3;

/// Packs up to [`MAX_TAGS`] skills into rows of exactly [`TAGS_PER_ROW`] cells.
///
/// The final row is padded with `GridCell::Empty`. The palette counter only
/// advances on tag cells, so skill `k` is colored `palette[k % palette.len()]`.
pub fn pack_skill_tags(skills: &[String], palette: &[Color]) -> Vec<GridRow> {
    let mut color_index = 0;

    skills
        .iter()
        .take(MAX_TAGS)
        .chunks(TAGS_PER_ROW)
        .into_iter()
        .map(|chunk| {
            let mut cells: Vec<GridCell> = chunk
                .map(|skill| {
                    let background = palette
                        .get(color_index % palette.len().max(1))
                        .copied()
                        .unwrap_or(Color::BLACK);
                    let cell = GridCell::Tag {
                        text: skill.clone(),
                        color_index,
                        background,
                    };
                    color_index += 1;
                    cell
                })
                .collect();
            cells.resize(TAGS_PER_ROW, GridCell::Empty);
            GridRow { cells }
        })
        .collect()
}
