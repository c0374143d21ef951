//! Text encoding for the standard Type1 fonts and for metadata strings.

use lopdf::{Object, StringFormat};

/// Encodes `s` as WinAnsi (CP-1252) bytes.
///
/// Latin-1 passes through; the typographic punctuation in the 0x80-0x9F block
/// is mapped explicitly. Anything else is replaced with `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            c => {
                log::warn!("Character {:?} has no WinAnsi encoding, replacing with '?'", c);
                b'?'
            }
        })
        .collect()
}

/// Encodes `s` as a PDF text string for document metadata.
///
/// ASCII and Latin-1 are stored as-is. Anything else switches the whole
/// string to UTF-16BE with a byte order mark.
pub fn to_pdf_text_string(s: &str) -> Object {
    let single_byte = s
        .chars()
        .all(|c| (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)));
    if single_byte {
        return Object::String(s.chars().map(|c| c as u8).collect(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    bytes.extend(s.encode_utf16().flat_map(u16::to_be_bytes));
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_pass_through() {
        assert_eq!(to_win_ansi("Hi (1)"), b"Hi (1)");
        assert_eq!(to_win_ansi("café"), [b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn punctuation_maps_to_code_points() {
        assert_eq!(to_win_ansi("• – — ‘’“”"), [0x95, b' ', 0x96, b' ', 0x97, b' ', 0x91, 0x92, 0x93, 0x94]);
    }

    #[test]
    fn unencodable_characters_become_question_marks() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(to_win_ansi("a→b 日"), b"a?b ?");
    }

    #[test]
    fn metadata_strings_use_utf16_outside_latin1() {
        let Object::String(bytes, StringFormat::Literal) = to_pdf_text_string("Résumé") else {
            panic!("expected a literal string");
        };
        assert_eq!(bytes, [b'R', 0xE9, b's', b'u', b'm', 0xE9]);

        let Object::String(bytes, StringFormat::Hexadecimal) = to_pdf_text_string("A • B") else {
            panic!("expected a UTF-16 string");
        };
        assert_eq!(bytes, [0xFE, 0xFF, 0x00, b'A', 0x00, b' ', 0x20, 0x22, 0x00, b' ', 0x00, b'B']);
    }
}
