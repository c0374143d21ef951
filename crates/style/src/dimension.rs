//! Page geometry and box spacing, in PDF points.
use serde::{Deserialize, Deserializer, Serialize, de};

/// Points per unit for the length suffixes accepted in shorthand values.
const UNITS: &[(&str, f32)] = &[("pt", 1.0), ("px", 1.0), ("in", 72.0), ("cm", 28.35), ("mm", 2.835)];

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical and horizontal pairs, as in the two-value CSS shorthand.
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Parse a length with an optional unit suffix ("54", "54pt", "0.75in").
    fn parse_length(input: &str) -> Result<f32, String> {
        let input = input.trim();
        let (number, scale) = UNITS
            .iter()
            .find_map(|(suffix, scale)| input.strip_suffix(suffix).map(|n| (n, *scale)))
            .unwrap_or((input, 1.0));
        number
            .trim()
            .parse::<f32>()
            .map(|v| v * scale)
            .map_err(|e| format!("Invalid length '{}': {}", input, e))
    }

    /// Parse the 1, 2 or 4 value margin shorthand.
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [v, h] => Ok(Margins::symmetric(*v, *h)),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            other => Err(format!(
                "Invalid margin shorthand: expected 1, 2, or 4 values, got {}",
                other.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a string like '54pt' or '6pt 12pt', or a map")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margins.top = map.next_value()?,
                        "right" => margins.right = map.next_value()?,
                        "bottom" => margins.bottom = map.next_value()?,
                        "left" => margins.left = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    A4,
    #[default]
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_shorthand_units() {
        let m: Margins = serde_json::from_str("\"0.75in\"").unwrap();
        assert_eq!(m, Margins::all(54.0));
        let m: Margins = serde_json::from_str("\"6pt 12pt\"").unwrap();
        assert_eq!(m, Margins::symmetric(6.0, 12.0));
        assert_eq!(m.horizontal(), 24.0);
        let m: Margins = serde_json::from_str("10").unwrap();
        assert_eq!(m, Margins::all(10.0));
        assert!(serde_json::from_str::<Margins>("\"1 2 3\"").is_err());
    }

    #[test]
    fn page_size_by_name_or_map() {
        let letter: PageSize = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(letter.dimensions_pt(), (612.0, 792.0));
        let custom: PageSize = serde_json::from_str(r#"{"width":300,"height":400}"#).unwrap();
        assert_eq!(custom.dimensions_pt(), (300.0, 400.0));
    }
}
