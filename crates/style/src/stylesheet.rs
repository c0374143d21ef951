//! Defines the top-level stylesheet structure that holds all styling information.

use super::dimension::{Margins, PageSize};
use super::error::StyleParseError;
use super::font::{FontStyle, FontWeight};
use super::text::TextAlign;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vitae_types::Color;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// The page every document of this kind is laid out on.
    pub page: PageLayout,
    /// A map of all named element styles.
    pub styles: HashMap<String, ElementStyle>,
}

impl Stylesheet {
    /// Looks up a style by its name.
    pub fn get_style(&self, name: &str) -> Option<&ElementStyle> {
        self.styles.get(name)
    }

    /// Overlays a JSON document of the form `{"page": {...}, "styles": {"name": {...}}}`.
    ///
    /// Fields present in an override replace the current value; absent fields keep it.
    /// Names without an existing style are added as new styles.
    pub fn merge_json(&mut self, json: &str) -> Result<(), StyleParseError> {
        let overrides: StylesheetOverrides = serde_json::from_str(json)?;

        if let Some(page) = overrides.page {
            if let Some(size) = page.size {
                self.page.size = size;
            }
            if let Some(margins) = page.margins {
                self.page.margins = margins;
            }
        }

        for (name, style) in overrides.styles {
            if let Some(size) = style.font_size.filter(|size| *size <= 0.0) {
                return Err(StyleParseError::InvalidValue {
                    property: format!("{name}.fontSize"),
                    value: size.to_string(),
                });
            }
            self.styles.entry(name).or_default().merge(&style);
        }
        Ok(())
    }
}

#[derive(Deserialize, Default)]
struct StylesheetOverrides {
    #[serde(default)]
    page: Option<PageOverride>,
    #[serde(default)]
    styles: HashMap<String, ElementStyle>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PageOverride {
    size: Option<PageSize>,
    margins: Option<Margins>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default)]
    pub margins: Margins,
}

impl PageLayout {
    pub fn content_width(&self) -> f32 {
        self.size.dimensions_pt().0 - self.margins.horizontal()
    }

    pub fn content_height(&self) -> f32 {
        self.size.dimensions_pt().1 - self.margins.vertical()
    }
}

#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    // Font & Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,

    // Spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_indent: Option<f32>,

    // Box Model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Margins>,
}

impl ElementStyle {
    /// Copies every field that is set on `other` onto `self`.
    pub fn merge(&mut self, other: &ElementStyle) {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        overlay!(
            font_family,
            font_size,
            font_weight,
            font_style,
            line_height,
            text_align,
            color,
            letter_spacing,
            space_before,
            space_after,
            left_indent,
            background_color,
            padding,
        );
    }
}
