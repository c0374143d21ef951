use crate::error::PipelineError;
use chrono::{Local, NaiveDate};
use vitae_idf::{CoverLetterDocument, ResumeDocument};
use vitae_layout::{LetterHeader, cover_letter_blocks, paginate, resume_blocks};
use vitae_render_core::DocumentInfo;
use vitae_render_lopdf::render_to_bytes;
use vitae_style::Stylesheet;

pub const RESUME_TITLE: &str = "Professional Resume";
pub const COVER_LETTER_TITLE: &str = "Professional Cover Letter";
const LETTER_DATE_FORMAT: &str = "%B %d, %Y";

/// Lays out and renders documents with a fixed configuration.
///
/// Each call works on its own data, so one pipeline can be shared between
/// threads.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    resume_stylesheet: Stylesheet,
    cover_letter_stylesheet: Stylesheet,
    title: Option<String>,
    letter_date: Option<NaiveDate>,
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self {
            resume_stylesheet: Stylesheet::resume(),
            cover_letter_stylesheet: Stylesheet::cover_letter(),
            title: None,
            letter_date: None,
        }
    }
}

impl DocumentPipeline {
    pub fn render_resume(&self, doc: &ResumeDocument) -> Result<Vec<u8>, PipelineError> {
        let stylesheet = &self.resume_stylesheet;
        let blocks = resume_blocks(doc, &stylesheet.page);
        log::debug!("Resume produced {} content blocks", blocks.len());
        self.render(stylesheet, &blocks, RESUME_TITLE)
    }

    /// `applicant_name` and `contact_info` come from the caller, not the letter text.
    pub fn render_cover_letter(
        &self,
        doc: &CoverLetterDocument,
        applicant_name: &str,
        contact_info: &str,
    ) -> Result<Vec<u8>, PipelineError> {
        let stylesheet = &self.cover_letter_stylesheet;
        let fallback_date = self.fallback_date();
        let header = LetterHeader {
            applicant_name,
            contact_info,
            fallback_date: &fallback_date,
        };
        let blocks = cover_letter_blocks(doc, header, &stylesheet.page);
        log::debug!("Cover letter produced {} content blocks", blocks.len());
        self.render(stylesheet, &blocks, COVER_LETTER_TITLE)
    }

    fn render(
        &self,
        stylesheet: &Stylesheet,
        blocks: &[vitae_layout::ContentBlock],
        default_title: &str,
    ) -> Result<Vec<u8>, PipelineError> {
        let pages = paginate(stylesheet, blocks);
        let info = DocumentInfo::titled(self.title.as_deref().unwrap_or(default_title));
        Ok(render_to_bytes(&pages, stylesheet.page.size.dimensions_pt(), &info)?)
    }

    fn fallback_date(&self) -> String {
        let date = self.letter_date.unwrap_or_else(|| Local::now().date_naive());
        date.format(LETTER_DATE_FORMAT).to_string()
    }
}

/// A builder for creating a `DocumentPipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    resume_overrides: Vec<String>,
    cover_letter_overrides: Vec<String>,
    title: Option<String>,
    letter_date: Option<NaiveDate>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Overlays JSON style overrides on the built-in resume stylesheet.
    /// Overrides apply in the order given.
    pub fn with_resume_stylesheet_json(mut self, json: &str) -> Self {
        self.resume_overrides.push(json.to_string());
        self
    }

    pub fn with_cover_letter_stylesheet_json(mut self, json: &str) -> Self {
        self.cover_letter_overrides.push(json.to_string());
        self
    }

    /// Replaces the default document title written to the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fixes the date used when a cover letter carries none.
    pub fn with_letter_date(mut self, date: NaiveDate) -> Self {
        self.letter_date = Some(date);
        self
    }

    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        let mut resume_stylesheet = Stylesheet::resume();
        for json in &self.resume_overrides {
            resume_stylesheet.merge_json(json)?;
        }
        let mut cover_letter_stylesheet = Stylesheet::cover_letter();
        for json in &self.cover_letter_overrides {
            cover_letter_stylesheet.merge_json(json)?;
        }
        Ok(DocumentPipeline {
            resume_stylesheet,
            cover_letter_stylesheet,
            title: self.title,
            letter_date: self.letter_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_date_is_the_fallback() -> Result<(), PipelineError> {
        let pipeline = PipelineBuilder::new()
            .with_letter_date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())
            .build()?;
        assert_eq!(pipeline.fallback_date(), "January 02, 2026");
        Ok(())
    }

    #[test]
    fn invalid_override_fails_the_build() {
        let result = PipelineBuilder::new()
            .with_resume_stylesheet_json(r#"{"styles": {"body": {"fontSize": -1}}}"#)
            .build();
        assert!(matches!(result, Err(PipelineError::Stylesheet(_))));

        let result = PipelineBuilder::new()
            .with_cover_letter_stylesheet_json("not json")
            .build();
        assert!(matches!(result, Err(PipelineError::Stylesheet(_))));
    }

    #[test]
    fn overrides_reach_the_stylesheet() -> Result<(), PipelineError> {
        let pipeline = PipelineBuilder::new()
            .with_resume_stylesheet_json(r#"{"styles": {"body": {"fontSize": 11}}}"#)
            .build()?;
        let body = pipeline.resume_stylesheet.get_style("body").and_then(|s| s.font_size);
        assert_eq!(body, Some(11.0));
        Ok(())
    }
}
