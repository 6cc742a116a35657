//! Match analysis pipeline.
//!
//! Flow: concurrent record fetch → text preconditions → prompt build →
//! backend call → validate/repair → persist → return.
//!
//! Backend-quality failures never surface to the caller: a failed call or an
//! unusable reply degrades to a fixed assessment that is persisted and
//! returned like any other. Only missing prerequisite data, a missing
//! credential, and store failures are real errors.

use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::llm_client::{CompletionBackend, CompletionError};
use crate::matching::prompts::{
    build_analysis_prompt, ANALYSIS_MAX_TOKENS, ANALYSIS_SYSTEM, ANALYSIS_TEMPERATURE,
};
use crate::matching::repair::{parse_assessment, service_unavailable_assessment};
use crate::models::assessment::MatchAssessment;
use crate::models::document::DocumentKind;
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Job description text not available. Please ensure the document was parsed successfully.")]
    JobTextUnavailable,

    #[error("Resume text not available. Please ensure the document was parsed successfully.")]
    ResumeTextUnavailable,

    #[error("Analysis backend API key not configured")]
    BackendNotConfigured,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Runs one full analysis of a resume against a job description and persists
/// the resulting assessment. Stateless across invocations; callers may run
/// any number of pairs concurrently.
pub async fn assess(
    store: &dyn DocumentStore,
    backend: &dyn CompletionBackend,
    job_id: Uuid,
    resume_id: Uuid,
) -> Result<MatchAssessment, MatchError> {
    info!("Analyzing resume {resume_id} against job {job_id}");

    // Independent reads, no ordering dependency.
    let (job, resume) = tokio::join!(
        store.get_document(DocumentKind::JobDescription, job_id),
        store.get_document(DocumentKind::Resume, resume_id),
    );

    let job = job?.ok_or(MatchError::JobTextUnavailable)?;
    let resume = resume?.ok_or(MatchError::ResumeTextUnavailable)?;

    let job_text = job.usable_text().ok_or(MatchError::JobTextUnavailable)?;
    let resume_text = resume
        .usable_text()
        .ok_or(MatchError::ResumeTextUnavailable)?;

    info!("Job: {}, Candidate: {}", job.display_name, resume.display_name);

    let prompt = build_analysis_prompt(&job, job_text, &resume, resume_text);

    let assessment = match backend
        .complete(ANALYSIS_SYSTEM, &prompt, ANALYSIS_MAX_TOKENS, ANALYSIS_TEMPERATURE)
        .await
    {
        Ok(reply) => parse_assessment(&reply),
        Err(CompletionError::NotConfigured) => return Err(MatchError::BackendNotConfigured),
        Err(e) => {
            error!("Analysis backend call failed: {e}");
            service_unavailable_assessment(&e.to_string())
        }
    };

    info!(
        "Analysis complete. Score: {}%, Verdict: {}",
        assessment.score,
        assessment.verdict.as_str()
    );

    store.insert_match(job_id, resume_id, &assessment).await?;

    Ok(assessment)
}
