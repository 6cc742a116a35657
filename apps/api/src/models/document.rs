use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Placeholder written by the upload flow before extraction has run.
/// A document carrying this value is treated as not yet parsed.
pub const PARSING_PENDING: &str = "File uploaded - parsing pending";

/// The two document kinds the pipelines operate on.
/// Wire names match the upload flow: `job_description` / `resume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    JobDescription,
    Resume,
}

impl DocumentKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            DocumentKind::JobDescription => "job_descriptions",
            DocumentKind::Resume => "resumes",
        }
    }

    /// Column holding the display name: job title vs candidate name.
    pub fn display_column(&self) -> &'static str {
        match self {
            DocumentKind::JobDescription => "title",
            DocumentKind::Resume => "candidate_name",
        }
    }
}

/// Read model for a single document row, shared by both kinds.
/// `display_name` is the job title or the candidate name depending on kind.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRecord {
    pub display_name: String,
    pub location: Option<String>,
    pub parsed_text: Option<String>,
}

impl DocumentRecord {
    /// Returns the extracted text if it is genuinely usable: present,
    /// non-blank after trimming, and not the parsing-pending placeholder.
    pub fn usable_text(&self) -> Option<&str> {
        let text = self.parsed_text.as_deref()?;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == PARSING_PENDING {
            return None;
        }
        Some(text)
    }
}
