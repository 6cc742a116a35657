//! Heuristic DOCX/DOC text recovery.
//!
//! Reads the byte stream as UTF-8 and pulls the inner content of every
//! `<w:t>…</w:t>` occurrence. DOCX is really a zip container; uncompressed
//! runs of the document XML are all this recovers.

use std::sync::LazyLock;

use regex::Regex;

use super::collapse_whitespace;

/// Returned when no `<w:t>` content was found.
pub const DOCX_PLACEHOLDER: &str =
    "Could not extract text from DOCX. Please ensure the document contains readable text.";

static WT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<w:t[^>]*>(.*?)</w:t>").unwrap());

pub(crate) fn extract_text(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);

    let pieces: Vec<String> = WT_RE
        .captures_iter(&text)
        .map(|caps| decode_entities(&caps[1]))
        .collect();

    let extracted = collapse_whitespace(&pieces.join(" "));

    if extracted.is_empty() {
        DOCX_PLACEHOLDER.to_string()
    } else {
        extracted
    }
}

/// Decodes the five standard XML entities, in the same fixed order the
/// documents were encoded with.
fn decode_entities(content: &str) -> String {
    content
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
