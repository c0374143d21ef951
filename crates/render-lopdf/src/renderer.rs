use crate::encoding::to_pdf_text_string;
use crate::page::PageContext;
use crate::writer::StreamingPdfWriter;
use lopdf::{Dictionary, Object, ObjectId, dictionary};
use std::io::{Cursor, Seek, Write};
use vitae_layout::{FontFace, Page};
use vitae_render_core::utils::font_resource_name;
use vitae_render_core::{DocumentInfo, DocumentRenderer, RenderError, render_pages};

const PDF_VERSION: &str = "1.7";

/// A PDF renderer using the `lopdf` object model and the streaming writer.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self { writer: None }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }
}

impl<W: Write + Seek + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

/// The four standard Helvetica faces, registered as `F1`..`F4`.
fn font_dictionary() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for face in FontFace::ALL {
        let single_font_dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.postscript_name(),
            "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(font_resource_name(face), Object::Dictionary(single_font_dict));
    }
    font_dict
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut writer = StreamingPdfWriter::new(writer, PDF_VERSION, font_dictionary())?;
        writer.set_info(dictionary! {
            "Title" => to_pdf_text_string(&info.title),
            "Producer" => to_pdf_text_string(&info.producer),
        });
        self.writer = Some(writer);
        Ok(())
    }

    fn render_page_content(&mut self, page: &Page, page_height: f32) -> Result<ObjectId, RenderError> {
        let mut ctx = PageContext::new(page_height);
        for el in &page.elements {
            ctx.draw_element(el);
        }
        self.writer_mut()?.buffer_content_stream(ctx.finish())
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };
        Ok(writer.buffer_object(page_dict.into()))
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut writer = renderer
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("Document was never started with begin_document".into()))?;
        writer.set_page_ids(page_ids);
        Ok(writer.finish()?)
    }
}

/// Renders laid-out pages into an in-memory PDF.
pub fn render_to_bytes(
    pages: &[Page],
    page_size: (f32, f32),
    info: &DocumentInfo,
) -> Result<Vec<u8>, RenderError> {
    let renderer = Box::new(LopdfRenderer::new());
    let cursor = render_pages(renderer, Cursor::new(Vec::new()), info, pages, page_size)?;
    let bytes = cursor.into_inner();
    log::info!(
        "Rendered '{}': {} page(s), {} bytes",
        info.title,
        pages.len().max(1),
        bytes.len()
    );
    Ok(bytes)
}
