//! Extraction Pipeline — converts raw document bytes into plain text.
//!
//! Dispatch is purely on the declared file extension; the two extractors are
//! deliberate lossy heuristics that treat the container as opaque text (no
//! zip/deflate decoding). They always return a string for a recognized
//! extension — a fixed placeholder when nothing readable was recovered.

pub mod docx;
pub mod handlers;
pub mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}. Only PDF and DOCX files are supported.")]
    UnsupportedFormat(String),
}

/// Extracts best-effort plain text from `raw`, picking the extractor from
/// the declared file name. Pure with respect to its inputs; persistence is
/// the caller's job.
pub fn extract(raw: &[u8], file_name: &str) -> Result<String, ExtractError> {
    let name = file_name.to_lowercase();
    if name.ends_with(".pdf") {
        Ok(pdf::extract_text(raw))
    } else if name.ends_with(".docx") || name.ends_with(".doc") {
        Ok(docx::extract_text(raw))
    } else {
        Err(ExtractError::UnsupportedFormat(file_name.to_string()))
    }
}

/// Collapses every run of whitespace to a single space and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_rejected_before_parsing() {
        let err = extract(b"plain text resume", "resume.txt").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("resume.txt"));
    }

    #[test]
    fn test_no_extension_rejected() {
        assert!(extract(b"bytes", "resume").is_err());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(extract(b"%PDF-1.4", "Resume.PDF").is_ok());
        assert!(extract(b"<w:t>x</w:t>", "Resume.DocX").is_ok());
    }

    #[test]
    fn test_doc_and_docx_both_dispatch() {
        assert!(extract(b"<w:t>x</w:t>", "old.doc").is_ok());
        assert!(extract(b"<w:t>x</w:t>", "new.docx").is_ok());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b\r\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
