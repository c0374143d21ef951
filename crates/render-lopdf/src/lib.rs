//! PDF renderer using lopdf.
//!
//! Pages are turned into content streams with the standard Helvetica faces
//! and written through a streaming writer that emits its own cross-reference
//! table.

mod encoding;
mod page;
mod renderer;
mod writer;

pub use encoding::{to_pdf_text_string, to_win_ansi};
pub use renderer::{LopdfRenderer, render_to_bytes};
pub use writer::StreamingPdfWriter;
