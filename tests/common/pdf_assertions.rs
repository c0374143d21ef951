use lopdf::{Dictionary, Document as LopdfDocument, Object};

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, object: &'a Object) -> Option<&'a Dictionary> {
    match object.as_reference() {
        Ok(id) => doc.get_object(id).ok()?.as_dict().ok(),
        Err(_) => object.as_dict().ok(),
    }
}

/// Base font names referenced from page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = std::collections::BTreeSet::new();

    for page_id in doc.get_pages().values() {
        let Some(page_dict) = doc.get_object(*page_id).ok().and_then(|o| o.as_dict().ok()) else {
            continue;
        };
        let Some(resources) = page_dict.get(b"Resources").ok().and_then(|r| resolve_dict(doc, r)) else {
            continue;
        };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|f| resolve_dict(doc, f)) else {
            continue;
        };
        for (_name, font) in font_dict.iter() {
            if let Some(font) = resolve_dict(doc, font)
                && let Ok(base_font) = font.get(b"BaseFont").and_then(Object::as_name)
            {
                fonts.insert(String::from_utf8_lossy(base_font).to_string());
            }
        }
    }

    fonts.into_iter().collect()
}

pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_dict = doc.get_object(*pages.get(&page_num)?).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// The `/Title` entry of the document information dictionary
pub fn get_title(doc: &LopdfDocument) -> Option<String> {
    let info = resolve_dict(doc, doc.trailer.get(b"Info").ok()?)?;
    let title = info.get(b"Title").ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(title).to_string())
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
