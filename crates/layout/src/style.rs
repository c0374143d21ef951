use crate::metrics::FontFace;
use log::warn;
use vitae_style::{ElementStyle, FontStyle, FontWeight, Margins, Stylesheet, TextAlign};
use vitae_types::Color;

/// A named style with every property resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub line_height: f32,
    pub text_align: TextAlign,
    pub color: Color,
    pub letter_spacing: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub padding: Margins,
    pub background_color: Option<Color>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            line_height: 14.4,
            text_align: TextAlign::Left,
            color: Color::BLACK,
            letter_spacing: 0.0,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
            padding: Margins::default(),
            background_color: None,
        }
    }
}

impl ComputedStyle {
    /// Resolves `name` against the stylesheet. An unknown name yields the defaults.
    pub fn resolve(stylesheet: &Stylesheet, name: &str) -> Self {
        match stylesheet.get_style(name) {
            Some(style) => Self::from_element_style(style),
            None => {
                warn!("unknown style '{}', using defaults", name);
                Self::default()
            }
        }
    }

    pub fn from_element_style(style: &ElementStyle) -> Self {
        let mut computed = Self::default();
        if let Some(family) = &style.font_family {
            computed.font_family = family.clone();
        }
        if let Some(size) = style.font_size {
            computed.font_size = size;
        }
        // Leading follows the font size unless set explicitly.
        computed.line_height = style.line_height.unwrap_or(computed.font_size * 1.2);
        if let Some(weight) = style.font_weight {
            computed.font_weight = weight;
        }
        if let Some(font_style) = style.font_style {
            computed.font_style = font_style;
        }
        if let Some(align) = style.text_align {
            computed.text_align = align;
        }
        if let Some(color) = style.color {
            computed.color = color;
        }
        computed.letter_spacing = style.letter_spacing.unwrap_or_default();
        computed.space_before = style.space_before.unwrap_or_default();
        computed.space_after = style.space_after.unwrap_or_default();
        computed.left_indent = style.left_indent.unwrap_or_default();
        computed.padding = style.padding.unwrap_or_default();
        computed.background_color = style.background_color;
        computed
    }

    pub fn face(&self) -> FontFace {
        if !self.font_family.eq_ignore_ascii_case("helvetica") {
            warn!("font family '{}' is not available, using Helvetica", self.font_family);
        }
        FontFace::from_style(self.font_weight, self.font_style)
    }
}
