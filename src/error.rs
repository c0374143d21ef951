use thiserror::Error;
use vitae_render_core::RenderError;
use vitae_style::StyleParseError;

/// Errors surfaced by the rendering pipeline.
///
/// Parsing never fails; only configuration and the PDF backend can.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Stylesheet is invalid: {0}")]
    Stylesheet(#[from] StyleParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
