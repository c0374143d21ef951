pub mod pdf_assertions;

use chrono::NaiveDate;
use lopdf::Document as LopdfDocument;
use vitae::{DocumentPipeline, PipelineBuilder};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A pipeline whose cover letters are dated 2 January 2026 when undated.
#[allow(dead_code)]
pub fn fixed_date_pipeline() -> Result<DocumentPipeline, Box<dyn std::error::Error>> {
    let date = NaiveDate::from_ymd_opt(2026, 1, 2).ok_or("invalid date")?;
    Ok(PipelineBuilder::new().with_letter_date(date).build()?)
}
