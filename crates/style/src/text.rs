use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlign {
    /// Horizontal offset of a line of `line_width` inside a frame of `frame_width`.
    pub fn offset(&self, frame_width: f32, line_width: f32) -> f32 {
        let slack = (frame_width - line_width).max(0.0);
        match self {
            TextAlign::Left | TextAlign::Justify => 0.0,
            TextAlign::Right => slack,
            TextAlign::Center => slack / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_alignment() {
        assert_eq!(TextAlign::Left.offset(100.0, 40.0), 0.0);
        assert_eq!(TextAlign::Right.offset(100.0, 40.0), 60.0);
        assert_eq!(TextAlign::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(TextAlign::Center.offset(100.0, 140.0), 0.0);
    }
}
