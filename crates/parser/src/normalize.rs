//! Markdown-emphasis stripping and whitespace cleanup for generated text.

use regex::Regex;
use std::sync::LazyLock;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("BUG: invalid BOLD_RE regex literal"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("BUG: invalid ITALIC_RE regex literal"));

static LEADING_STARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*+\s*").expect("BUG: invalid LEADING_STARS_RE regex literal"));

static TRAILING_STARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\*+$").expect("BUG: invalid TRAILING_STARS_RE regex literal")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("BUG: invalid WHITESPACE_RE regex literal"));

fn clean_once(line: &str) -> String {
    let line = BOLD_RE.replace_all(line, "$1");
    let line = ITALIC_RE.replace_all(&line, "$1");
    let line = LEADING_STARS_RE.replace(&line, "");
    let line = TRAILING_STARS_RE.replace(&line, "");
    WHITESPACE_RE.replace_all(&line, " ").trim().to_string()
}

/// Cleans a single line.
///
/// A single pass can expose new markers (`***a***` loses its bold pair and
/// leaves an italic pair), so passes repeat until the line stops changing.
/// Every pass that changes the line either shortens it or only rewrites
/// whitespace, so this terminates.
pub fn clean_line(line: &str) -> String {
    let mut current = clean_once(line);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Splits raw text into cleaned, non-empty lines.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}
