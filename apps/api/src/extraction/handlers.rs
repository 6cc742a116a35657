//! Axum route handler for the document parse trigger.
//!
//! The upload flow stores the raw blob and a pending placeholder row, then
//! invokes this endpoint to extract text and write it back.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::blob;
use crate::errors::AppError;
use crate::extraction;
use crate::models::document::DocumentKind;
use crate::state::AppState;

/// Characters of extracted text echoed back for display.
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDocumentRequest {
    pub file_path: String,
    pub bucket_name: String,
    pub document_id: Uuid,
    pub document_type: DocumentKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDocumentResponse {
    pub success: bool,
    pub text_length: usize,
    pub preview: String,
}

/// POST /api/v1/documents/parse
///
/// Downloads the uploaded blob, extracts plain text, and persists it onto
/// the document row.
pub async fn handle_parse_document(
    State(state): State<AppState>,
    Json(request): Json<ParseDocumentRequest>,
) -> Result<Json<ParseDocumentResponse>, AppError> {
    info!(
        "Parsing document {} from bucket {}",
        request.file_path, request.bucket_name
    );

    let raw = blob::download(&state.s3, &request.bucket_name, &request.file_path).await?;

    let text = extraction::extract(&raw, &request.file_path)?;
    info!("Extracted text length: {} characters", text.len());

    state
        .store
        .update_parsed_text(request.document_type, request.document_id, &text)
        .await?;

    let preview: String = text.chars().take(PREVIEW_CHARS).collect::<String>() + "...";

    Ok(Json(ParseDocumentResponse {
        success: true,
        text_length: text.len(),
        preview,
    }))
}
