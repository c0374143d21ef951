//! Places content blocks top-to-bottom inside the page frame, breaking pages
//! when the next piece does not fit.
//!
//! Text breaks between lines and grids between rows. A spacer that does not
//! fit is dropped. A rule moves to the next page whole.

use crate::blocks::{ContentBlock, GridBlock, GridCell, RuleBlock, TextBlock};
use crate::elements::{LayoutElement, Page, PositionedElement, TextElement, TextLine};
use crate::metrics::{ASCENT, DESCENT};
use crate::style::ComputedStyle;
use crate::wrap::{WrappedLine, wrap_text};
use log::{debug, trace};
use vitae_style::{PageLayout, Stylesheet, TextAlign};

const EPSILON: f32 = 0.001;

pub struct LayoutEngine<'a> {
    stylesheet: &'a Stylesheet,
    page_layout: PageLayout,
    pages: Vec<Page>,
    current_y: f32,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(stylesheet: &'a Stylesheet) -> Self {
        LayoutEngine {
            stylesheet,
            page_layout: stylesheet.page,
            pages: vec![Page::new(1)],
            current_y: stylesheet.page.margins.top,
        }
    }

    pub fn layout_blocks(&mut self, blocks: &[ContentBlock]) {
        for block in blocks {
            match block {
                ContentBlock::Text(text) => self.layout_text(text),
                ContentBlock::Spacer(height) => self.layout_spacer(*height),
                ContentBlock::Rule(rule) => self.layout_rule(rule),
                ContentBlock::Grid(grid) => self.layout_grid(grid),
            }
        }
    }

    /// The laid out pages. There is always at least one, possibly empty.
    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    fn layout_text(&mut self, block: &TextBlock) {
        let style = ComputedStyle::resolve(self.stylesheet, &block.style);
        let face = style.face();
        let x = self.frame_left() + style.left_indent + style.padding.left;
        let frame_width = self.frame_width() - style.left_indent - style.padding.horizontal();

        let lines = wrap_text(
            &block.content,
            face,
            style.font_size,
            style.letter_spacing,
            frame_width,
        );
        if lines.is_empty() {
            trace!("skipping empty '{}' paragraph", block.style);
            return;
        }

        if !self.at_page_top() {
            self.current_y += style.space_before;
        }
        self.current_y += style.padding.top;

        let mut cursor = 0;
        while cursor < lines.len() {
            if self.needs_page_break(style.line_height) {
                self.new_page();
                continue;
            }

            let available = self.frame_bottom() - self.current_y;
            let fit = ((available + EPSILON) / style.line_height).floor() as usize;
            let count = fit.clamp(1, lines.len() - cursor);
            let chunk = &lines[cursor..cursor + count];

            let top = self.current_y;
            let text_lines = chunk
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let line_top = top + i as f32 * style.line_height;
                    place_line(line, &style, x, line_top, frame_width)
                })
                .collect();
            let height = count as f32 * style.line_height;

            if let Some(fill) = style.background_color {
                let pad_top = if cursor == 0 { style.padding.top } else { 0.0 };
                let pad_bottom = if cursor + count == lines.len() { style.padding.bottom } else { 0.0 };
                self.add_element(PositionedElement {
                    x: x - style.padding.left,
                    y: top - pad_top,
                    width: frame_width + style.padding.horizontal(),
                    height: pad_top + height + pad_bottom,
                    element: LayoutElement::Rectangle { fill },
                });
            }

            self.add_element(PositionedElement {
                x,
                y: top,
                width: frame_width,
                height,
                element: LayoutElement::Text(TextElement {
                    face,
                    font_size: style.font_size,
                    color: style.color,
                    letter_spacing: style.letter_spacing,
                    lines: text_lines,
                }),
            });

            self.current_y += height;
            cursor += count;
        }

        self.current_y += style.padding.bottom + style.space_after;
    }

    fn layout_spacer(&mut self, height: f32) {
        if self.needs_page_break(height) {
            trace!("dropping {height}pt spacer at page break");
            self.new_page();
            return;
        }
        self.current_y += height;
    }

    fn layout_rule(&mut self, rule: &RuleBlock) {
        if self.needs_page_break(rule.space_before + rule.thickness) {
            self.new_page();
        }
        let y = self.current_y + rule.space_before;
        let width = rule.width.min(self.frame_width());

        self.add_element(PositionedElement {
            x: self.frame_left(),
            y,
            width,
            height: rule.thickness,
            element: LayoutElement::Rectangle { fill: rule.color },
        });
        self.current_y = y + rule.thickness + rule.space_after;
    }

    fn layout_grid(&mut self, grid: &GridBlock) {
        let style = ComputedStyle::resolve(self.stylesheet, &grid.style);
        let face = style.face();
        let cell_text_width = grid.column_width - style.padding.horizontal();
        let left = self.frame_left() + ((self.frame_width() - grid.width()) / 2.0).max(0.0);
        let content_height = |lines: usize| lines as f32 * style.line_height + style.padding.vertical();

        for (row_index, row) in grid.rows.iter().enumerate() {
            let wrapped: Vec<Vec<WrappedLine>> = row
                .cells
                .iter()
                .map(|cell| match cell {
                    GridCell::Tag { text, .. } => {
                        wrap_text(text, face, style.font_size, style.letter_spacing, cell_text_width)
                    }
                    GridCell::Empty => Vec::new(),
                })
                .collect();
            let most_lines = wrapped.iter().map(Vec::len).max().unwrap_or(0);
            let row_height = grid.min_row_height.max(content_height(most_lines));

            if self.needs_page_break(row_height) {
                debug!("grid row {row_index} moves to a new page");
                self.new_page();
            }
            let top = self.current_y;

            for (col, (cell, lines)) in row.cells.iter().zip(&wrapped).enumerate() {
                let x = left + col as f32 * grid.column_width;
                let fill = match cell {
                    GridCell::Tag { background, .. } => *background,
                    GridCell::Empty => grid.empty_background,
                };
                self.add_element(PositionedElement {
                    x,
                    y: top,
                    width: grid.column_width,
                    height: row_height,
                    element: LayoutElement::Rectangle { fill },
                });

                if !lines.is_empty() {
                    let block_height = lines.len() as f32 * style.line_height;
                    let text_top = top + (row_height - block_height) / 2.0;
                    let text_x = x + style.padding.left;
                    let text_lines = lines
                        .iter()
                        .enumerate()
                        .map(|(i, line)| {
                            let line_top = text_top + i as f32 * style.line_height;
                            place_line(line, &style, text_x, line_top, cell_text_width)
                        })
                        .collect();
                    self.add_element(PositionedElement {
                        x: text_x,
                        y: text_top,
                        width: cell_text_width,
                        height: block_height,
                        element: LayoutElement::Text(TextElement {
                            face,
                            font_size: style.font_size,
                            color: style.color,
                            letter_spacing: style.letter_spacing,
                            lines: text_lines,
                        }),
                    });
                }

                let (right, bottom) = (x + grid.column_width, top + row_height);
                for (from, to) in [((x, bottom), (right, bottom)), ((right, top), (right, bottom))] {
                    self.add_element(PositionedElement {
                        x: from.0,
                        y: from.1,
                        width: to.0 - from.0,
                        height: to.1 - from.1,
                        element: LayoutElement::Line {
                            from,
                            to,
                            thickness: grid.edge_thickness,
                            color: grid.edge_color,
                        },
                    });
                }
            }

            self.current_y = top + row_height;
        }
    }

    fn frame_left(&self) -> f32 {
        self.page_layout.margins.left
    }

    fn frame_width(&self) -> f32 {
        self.page_layout.content_width()
    }

    fn frame_bottom(&self) -> f32 {
        self.page_layout.size.dimensions_pt().1 - self.page_layout.margins.bottom
    }

    fn at_page_top(&self) -> bool {
        self.current_y <= self.page_layout.margins.top + EPSILON
    }

    fn needs_page_break(&self, required_height: f32) -> bool {
        !self.at_page_top() && self.current_y + required_height > self.frame_bottom() + EPSILON
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        debug!("starting page {number}");
        self.pages.push(Page::new(number));
        self.current_y = self.page_layout.margins.top;
    }

    fn add_element(&mut self, element: PositionedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }
}

/// Positions one wrapped line inside a frame starting at `x`.
fn place_line(line: &WrappedLine, style: &ComputedStyle, x: f32, line_top: f32, frame_width: f32) -> TextLine {
    let glyph_height = (ASCENT + DESCENT) * style.font_size;
    let baseline = line_top + (style.line_height - glyph_height) / 2.0 + ASCENT * style.font_size;

    let justify = style.text_align == TextAlign::Justify && !line.is_last && line.spaces > 0;
    let (offset, word_spacing, width) = if justify {
        let slack = (frame_width - line.width).max(0.0);
        (0.0, slack / line.spaces as f32, frame_width)
    } else {
        (style.text_align.offset(frame_width, line.width), 0.0, line.width)
    };

    TextLine {
        text: line.text.clone(),
        x: x + offset,
        baseline,
        width,
        word_spacing,
    }
}

/// Lays out `blocks` on the stylesheet's page.
pub fn paginate(stylesheet: &Stylesheet, blocks: &[ContentBlock]) -> Vec<Page> {
    let mut engine = LayoutEngine::new(stylesheet);
    engine.layout_blocks(blocks);
    engine.into_pages()
}
