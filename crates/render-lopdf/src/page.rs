//! Translates positioned layout elements into a page content stream.

use crate::encoding::to_win_ansi;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use vitae_layout::{LayoutElement, PositionedElement, TextElement};
use vitae_render_core::utils::{flip_y, font_resource_name};
use vitae_types::Color;

pub(crate) struct PageContext {
    content: Content,
    page_height: f32,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            content: Content { operations: Vec::new() },
            page_height,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text),
            LayoutElement::Rectangle { fill } => self.fill_rect(el, *fill),
            LayoutElement::Line { from, to, thickness, color } => {
                self.stroke_line(*from, *to, *thickness, *color)
            }
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn fill_rect(&mut self, el: &PositionedElement, fill: Color) {
        let [r, g, b] = fill.to_unit();
        let y = flip_y(el.y + el.height, self.page_height);
        self.push("rg", vec![r.into(), g.into(), b.into()]);
        self.push("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.push("f", vec![]);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        let [r, g, b] = color.to_unit();
        self.push("w", vec![thickness.into()]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        self.push("m", vec![from.0.into(), flip_y(from.1, self.page_height).into()]);
        self.push("l", vec![to.0.into(), flip_y(to.1, self.page_height).into()]);
        self.push("S", vec![]);
    }

    /// Each line is its own text object positioned absolutely.
    fn draw_text(&mut self, text: &TextElement) {
        let font_name = font_resource_name(text.face);
        let [r, g, b] = text.color.to_unit();

        for line in &text.lines {
            self.push("BT", vec![]);
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.push(
                "Tf",
                vec![Object::Name(font_name.as_bytes().to_vec()), text.font_size.into()],
            );
            self.push("Tc", vec![text.letter_spacing.into()]);
            self.push("Tw", vec![line.word_spacing.into()]);
            self.push(
                "Td",
                vec![line.x.into(), flip_y(line.baseline, self.page_height).into()],
            );
            self.push("Tj", vec![Object::String(to_win_ansi(&line.text), StringFormat::Literal)]);
            self.push("ET", vec![]);
        }
    }
}
