//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::analyzer::assess;
use crate::models::assessment::MatchAssessment;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_id: Uuid,
    pub resume_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub result: MatchAssessment,
}

/// POST /api/v1/matches/analyze
///
/// Runs one analysis of a resume against a job description. Backend
/// unreliability comes back as a degraded-but-successful result; only
/// missing prerequisite text or a missing credential fails the request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let result = assess(
        state.store.as_ref(),
        state.llm.as_ref(),
        request.job_id,
        request.resume_id,
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        result,
    }))
}
