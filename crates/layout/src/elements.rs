//! Positioned output of pagination.
//!
//! Coordinates are in points measured from the top-left corner of the page,
//! y growing downwards. Renderers flip them into their own space.

use crate::metrics::FontFace;
use vitae_types::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Page {
            number,
            elements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    /// Filled box covering the element bounds.
    Rectangle { fill: Color },
    /// Stroked segment between two absolute points.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub face: FontFace,
    pub font_size: f32,
    pub color: Color,
    pub letter_spacing: f32,
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Start of the baseline.
    pub x: f32,
    pub baseline: f32,
    pub width: f32,
    /// Extra advance per space, used for justified lines.
    pub word_spacing: f32,
}
