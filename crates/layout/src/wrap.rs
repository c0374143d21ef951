//! Greedy word wrapping against measured Helvetica widths.

use crate::metrics::FontFace;

#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub width: f32,
    pub spaces: usize,
    /// The last line of its paragraph; never stretched when justifying.
    pub is_last: bool,
}

/// Breaks `text` into lines no wider than `max_width`.
///
/// Whitespace runs collapse to single spaces. A word wider than the frame
/// gets a line of its own and overflows it.
pub fn wrap_text(
    text: &str,
    face: FontFace,
    font_size: f32,
    letter_spacing: f32,
    max_width: f32,
) -> Vec<WrappedLine> {
    let measure = |s: &str| face.text_width(s, font_size, letter_spacing);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) > max_width {
                lines.push(finish(std::mem::take(&mut current), &measure, false));
                current.push_str(word);
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            lines.push(finish(current, &measure, true));
        }
    }
    lines
}

fn finish(text: String, measure: &impl Fn(&str) -> f32, is_last: bool) -> WrappedLine {
    WrappedLine {
        width: measure(&text),
        spaces: text.matches(' ').count(),
        text,
        is_last,
    }
}
