mod common;

use common::pdf_assertions::get_title;
use common::{GeneratedPdf, TestResult, fixed_date_pipeline, init_logging};
use vitae::CoverLetterDocument;

const LETTER: &str = "\
Hiring Manager
Globex Corporation
Dear Ms. Rivera,
I am writing to apply for the platform role.
I have shipped build tooling used by hundreds of engineers.
Sincerely,
Alex Morgan
";

const DATED: &str = "\
March 3, 2024
Dear Hiring Manager,
Please find my application attached.
Best regards,
Alex Morgan
";

#[test]
fn parsed_letter_renders_every_part() -> TestResult {
    init_logging();
    let doc = vitae::parse_cover_letter(LETTER);
    assert_eq!(doc.date, "");
    assert_eq!(doc.recipient_info, ["Hiring Manager", "Globex Corporation"]);
    assert_eq!(doc.signature, "Alex Morgan");

    let pipeline = fixed_date_pipeline()?;
    let bytes = pipeline.render_cover_letter(&doc, "Alex Morgan", "alex@morgan.io\n555-010-2000")?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_page_size!(pdf, 1, 612.0, 792.0);
    assert_pdf_contains_text!(pdf, "Alex Morgan");
    assert_pdf_contains_text!(pdf, "alex@morgan.io");
    assert_pdf_contains_text!(pdf, "January 02, 2026");
    assert_pdf_contains_text!(pdf, "Globex Corporation");
    assert_pdf_contains_text!(pdf, "Dear Ms. Rivera,");
    assert_pdf_contains_text!(pdf, "Sincerely,");
    assert_eq!(get_title(&pdf.doc).as_deref(), Some("Professional Cover Letter"));
    Ok(())
}

#[test]
fn default_pipeline_dates_undated_letters_today() -> TestResult {
    let doc = vitae::parse_cover_letter(LETTER);
    let pdf = GeneratedPdf::from_bytes(vitae::render_cover_letter(&doc, "Alex Morgan", "")?)?;
    let today = chrono::Local::now().date_naive().format("%B %d, %Y").to_string();
    assert_pdf_contains_text!(pdf, &today);
    Ok(())
}

#[test]
fn empty_letter_uses_fallbacks() -> TestResult {
    let pipeline = fixed_date_pipeline()?;
    let bytes = pipeline.render_cover_letter(&CoverLetterDocument::default(), "", "")?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;

    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Your Name");
    assert_pdf_contains_text!(pdf, "January 02, 2026");
    assert_pdf_contains_text!(pdf, "Dear Hiring Manager,");
    assert_pdf_contains_text!(pdf, "Sincerely,");
    Ok(())
}

#[test]
fn name_falls_back_to_contact_info() -> TestResult {
    let pipeline = fixed_date_pipeline()?;
    let doc = vitae::parse_cover_letter(LETTER);
    let bytes = pipeline.render_cover_letter(&doc, "  ", "jo@example.com\nJo Park\nSeoul")?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;

    assert_pdf_contains_text!(pdf, "Jo Park");
    assert_pdf_not_contains_text!(pdf, "Your Name");
    Ok(())
}

#[test]
fn letter_date_wins_over_the_configured_fallback() -> TestResult {
    let pipeline = fixed_date_pipeline()?;
    let bytes = pipeline.render_cover_letter(&vitae::parse_cover_letter(DATED), "Alex Morgan", "")?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;

    assert_pdf_contains_text!(pdf, "March 3, 2024");
    assert_pdf_contains_text!(pdf, "Best regards,");
    assert_pdf_not_contains_text!(pdf, "January 02, 2026");
    Ok(())
}
