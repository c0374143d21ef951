use crate::error::RenderError;
use lopdf::ObjectId;
use std::io::{Seek, Write};
use vitae_layout::Page;

/// Document-level metadata written to the PDF `/Info` dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
}

impl DocumentInfo {
    pub fn titled(title: impl Into<String>) -> Self {
        DocumentInfo {
            title: title.into(),
            producer: concat!("vitae ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A trait for document renderers, abstracting the PDF-writing primitives.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    fn render_page_content(&mut self, page: &Page, page_height: f32) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}

/// Drives a renderer over laid-out pages, one content stream per page.
///
/// An empty page list still produces a single blank page so the output is
/// always a valid document.
pub fn render_pages<W, R>(
    mut renderer: Box<R>,
    writer: W,
    info: &DocumentInfo,
    pages: &[Page],
    (page_width, page_height): (f32, f32),
) -> Result<W, RenderError>
where
    W: Write + Seek + Send,
    R: DocumentRenderer<W> + ?Sized,
{
    renderer.begin_document(writer, info)?;

    let blank = [Page::new(1)];
    let pages = if pages.is_empty() { &blank[..] } else { pages };

    let mut page_ids = Vec::with_capacity(pages.len());
    for page in pages {
        let content_id = renderer.render_page_content(page, page_height)?;
        page_ids.push(renderer.write_page_object(vec![content_id], page_width, page_height)?);
    }
    renderer.finish(page_ids)
}
