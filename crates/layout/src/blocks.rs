//! Content blocks: the flat, ordered output of document composition.

use vitae_types::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// A paragraph set in a named stylesheet style.
    Text(TextBlock),
    /// Fixed vertical gap in points.
    Spacer(f32),
    /// A filled horizontal bar.
    Rule(RuleBlock),
    Grid(GridBlock),
}

impl ContentBlock {
    pub fn text(style: &str, content: impl Into<String>) -> Self {
        ContentBlock::Text(TextBlock {
            style: style.to_string(),
            content: content.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub style: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleBlock {
    pub width: f32,
    pub thickness: f32,
    pub color: Color,
    pub space_before: f32,
    pub space_after: f32,
}

/// A fixed-column table whose cells carry a background fill.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBlock {
    pub column_width: f32,
    pub min_row_height: f32,
    /// Style used for cell text.
    pub style: String,
    /// Fill for `GridCell::Empty`.
    pub empty_background: Color,
    /// Color and thickness of the bottom and right cell edges.
    pub edge_color: Color,
    pub edge_thickness: f32,
    pub rows: Vec<GridRow>,
}

impl GridBlock {
    pub fn columns(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }

    pub fn width(&self) -> f32 {
        self.columns() as f32 * self.column_width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    Tag {
        text: String,
        /// Position in the palette cycle, before wrapping.
        color_index: usize,
        background: Color,
    },
    Empty,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        matches!(self, GridCell::Empty)
    }
}
