//! Turns free-form resume and cover letter text into structured documents
//! and renders them as paginated PDFs.
//!
//! ```no_run
//! let doc = vitae::parse_resume("JOHN SMITH\nPhone: 555-123-4567\n");
//! let pdf = vitae::render_resume(&doc)?;
//! # Ok::<(), vitae::PipelineError>(())
//! ```

mod error;
mod pipeline;

pub use error::PipelineError;
pub use pipeline::{COVER_LETTER_TITLE, DocumentPipeline, PipelineBuilder, RESUME_TITLE};
pub use vitae_idf::{Contact, CoverLetterDocument, ExperienceEntry, ResumeDocument, SkillMap};
pub use vitae_parser::{normalize, parse_cover_letter, parse_resume};
pub use vitae_render_core::RenderError;
pub use vitae_style::Stylesheet;

/// Renders a resume with the built-in stylesheet.
pub fn render_resume(doc: &ResumeDocument) -> Result<Vec<u8>, PipelineError> {
    DocumentPipeline::default().render_resume(doc)
}

/// Renders a cover letter with the built-in stylesheet, dated today when the
/// letter has no date line.
pub fn render_cover_letter(
    doc: &CoverLetterDocument,
    applicant_name: &str,
    contact_info: &str,
) -> Result<Vec<u8>, PipelineError> {
    DocumentPipeline::default().render_cover_letter(doc, applicant_name, contact_info)
}
