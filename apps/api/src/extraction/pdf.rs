//! Heuristic PDF text recovery.
//!
//! Scans for `stream` … `endstream` regions and keeps whatever printable
//! ASCII they contain. Compressed or font-remapped content is not decoded;
//! only text objects stored as literal readable bytes survive.

use std::sync::LazyLock;

use regex::Regex;

use super::collapse_whitespace;

/// Returned when neither the stream regions nor the whole byte stream
/// yielded any readable content.
pub const PDF_PLACEHOLDER: &str =
    "Could not extract text from PDF. Please ensure the PDF contains readable text.";

static STREAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)stream\s*(.*?)\s*endstream").unwrap());

pub(crate) fn extract_text(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);

    let mut segments = Vec::new();
    for caps in STREAM_RE.captures_iter(&text) {
        let cleaned = printable_ascii(&caps[1]);
        if !cleaned.is_empty() {
            segments.push(cleaned);
        }
    }
    let mut extracted = segments.join(" ");

    // No delimited content recovered: fall back to filtering the whole stream.
    if extracted.trim().is_empty() {
        extracted = printable_ascii(&text);
    }

    if extracted.is_empty() {
        PDF_PLACEHOLDER.to_string()
    } else {
        extracted
    }
}

/// Keeps printable ASCII plus tab/newline/carriage-return (everything else
/// becomes a space), then collapses whitespace runs.
fn printable_ascii(segment: &str) -> String {
    let filtered: String = segment
        .chars()
        .map(|c| match c {
            ' '..='~' | '\n' | '\r' | '\t' => c,
            _ => ' ',
        })
        .collect();
    collapse_whitespace(&filtered)
}
