//! Advance widths for the standard Helvetica family.
//!
//! Widths are AFM units (1/1000 em) for the printable ASCII range. The
//! oblique faces share the upright widths.

use vitae_style::{FontStyle, FontWeight};

/// Height of capitals above the baseline, as a fraction of the font size.
pub const ASCENT: f32 = 0.718;
/// Depth below the baseline, as a fraction of the font size.
pub const DESCENT: f32 = 0.207;

const FIRST_CHAR: u32 = 32;
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// One of the four standard Helvetica faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl FontFace {
    pub const ALL: [FontFace; 4] = [
        FontFace::Helvetica,
        FontFace::HelveticaBold,
        FontFace::HelveticaOblique,
        FontFace::HelveticaBoldOblique,
    ];

    pub fn from_style(weight: FontWeight, style: FontStyle) -> Self {
        match (weight.is_bold(), style.is_slanted()) {
            (false, false) => FontFace::Helvetica,
            (true, false) => FontFace::HelveticaBold,
            (false, true) => FontFace::HelveticaOblique,
            (true, true) => FontFace::HelveticaBoldOblique,
        }
    }

    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
            FontFace::HelveticaOblique => "Helvetica-Oblique",
            FontFace::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, FontFace::HelveticaBold | FontFace::HelveticaBoldOblique)
    }

    /// Advance width of `ch` in 1/1000 em.
    pub fn char_width(self, ch: char) -> u16 {
        let table = if self.is_bold() { &HELVETICA_BOLD } else { &HELVETICA };
        match ch {
            '•' => 350,
            '–' => 556,
            '—' => 1000,
            _ => (ch as u32)
                .checked_sub(FIRST_CHAR)
                .and_then(|i| table.get(i as usize))
                .copied()
                .unwrap_or(FALLBACK_WIDTH),
        }
    }

    /// Width of `text` set at `size` points, with `letter_spacing` added after every character.
    pub fn text_width(self, text: &str, size: f32, letter_spacing: f32) -> f32 {
        let (units, count) = text
            .chars()
            .fold((0u32, 0usize), |(units, count), ch| (units + self.char_width(ch) as u32, count + 1));
        units as f32 * size / 1000.0 + count as f32 * letter_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_selection() {
        assert_eq!(FontFace::from_style(FontWeight::Bold, FontStyle::Normal), FontFace::HelveticaBold);
        assert_eq!(FontFace::from_style(FontWeight::Regular, FontStyle::Oblique), FontFace::HelveticaOblique);
        assert_eq!(FontFace::from_style(FontWeight::Numeric(800), FontStyle::Italic), FontFace::HelveticaBoldOblique);
        assert_eq!(FontFace::HelveticaBoldOblique.postscript_name(), "Helvetica-BoldOblique");
    }

    #[test]
    fn known_widths() {
        assert_eq!(FontFace::Helvetica.char_width(' '), 278);
        assert_eq!(FontFace::Helvetica.char_width('W'), 944);
        assert_eq!(FontFace::Helvetica.char_width('i'), 222);
        assert_eq!(FontFace::HelveticaBold.char_width('i'), 278);
        assert_eq!(FontFace::Helvetica.char_width('~'), 584);
        assert_eq!(FontFace::Helvetica.char_width('•'), 350);
        assert_eq!(FontFace::Helvetica.char_width('é'), FALLBACK_WIDTH);
    }

    #[test]
    fn text_width_scales_with_size_and_spacing() {
        // "Hi" = 722 + 222
        let w = FontFace::Helvetica.text_width("Hi", 10.0, 0.0);
        assert!((w - 9.44).abs() < 1e-4);
        let spaced = FontFace::Helvetica.text_width("Hi", 10.0, 1.0);
        assert!((spaced - 11.44).abs() < 1e-4);
    }
}
