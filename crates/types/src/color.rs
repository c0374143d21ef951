use serde::{Deserialize, Deserializer, Serialize, de};
use std::str::FromStr;

/// An opaque sRGB color with 8-bit channels.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Builds a color from unit-interval channels, rounding to the nearest 8-bit value.
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Channels scaled to `0.0..=1.0`, the form PDF color operators take.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => Ok(Color::rgb(
                component(&hex[0..1].repeat(2), "red")?,
                component(&hex[1..2].repeat(2), "green")?,
                component(&hex[2..3].repeat(2), "blue")?,
            )),
            6 => Ok(Color::rgb(
                component(&hex[0..2], "red")?,
                component(&hex[2..4], "green")?,
                component(&hex[4..6], "blue")?,
            )),
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!("#2C3E50".parse::<Color>().unwrap(), Color::rgb(0x2C, 0x3E, 0x50));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert!("2C3E50".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn deserializes_from_string_or_map() {
        let from_str: Color = serde_json::from_str("\"#3498DB\"").unwrap();
        let from_map: Color = serde_json::from_str(r#"{"r":52,"g":152,"b":219}"#).unwrap();
        assert_eq!(from_str, from_map);
    }

    #[test]
    fn unit_conversion_rounds() {
        assert_eq!(Color::from_unit(0.2, 0.5, 0.8), Color::rgb(51, 128, 204));
        let [r, _, b] = Color::WHITE.to_unit();
        assert_eq!((r, b), (1.0, 1.0));
    }
}
