//! Single-pass cover letter parser.

use crate::rules;
use log::{debug, trace};
use vitae_idf::CoverLetterDocument;

/// Recipient lines are only looked for this close to the top.
const RECIPIENT_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Body,
    Signature,
}

/// Parses already normalized lines.
pub fn parse_lines(lines: &[String]) -> CoverLetterDocument {
    let mut doc = CoverLetterDocument::default();
    let mut mode = Mode::Body;

    for (i, line) in lines.iter().enumerate() {
        if i == 0 && rules::is_date_line(line) {
            debug!("date line {:?}", line);
            doc.date = line.clone();
            continue;
        }

        if rules::is_salutation(line) {
            debug!("salutation at line {}", i);
            doc.salutation = line.clone();
            mode = Mode::Body;
            continue;
        }

        if rules::is_closing(line) {
            debug!("closing at line {}", i);
            doc.closing = line.clone();
            mode = Mode::Signature;
            continue;
        }

        if i < RECIPIENT_WINDOW
            && doc.salutation.is_empty()
            && doc.date.is_empty()
            && rules::is_recipient_line(line)
        {
            trace!("recipient line {}: {:?}", i, line);
            doc.recipient_info.push(line.clone());
            continue;
        }

        match mode {
            Mode::Body => doc.body_paragraphs.push(line.clone()),
            Mode::Signature => {
                doc.signature = line.clone();
                break;
            }
        }
    }

    debug!(
        "cover letter: {} recipient lines, {} paragraphs",
        doc.recipient_info.len(),
        doc.body_paragraphs.len()
    );
    doc
}
