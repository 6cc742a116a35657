// All LLM prompt constants for the Matching module.

use crate::models::document::DocumentRecord;

/// System prompt for match analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert recruitment analyst. \
    Always respond with valid JSON in the exact format requested. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Output bound for one analysis reply. Scoring is a short structured task,
/// not open generation.
pub const ANALYSIS_MAX_TOKENS: u32 = 1000;

/// Low temperature: determinism over creativity for a scoring task.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Stands in for a missing job or candidate location.
pub const LOCATION_NOT_SPECIFIED: &str = "Not specified";

/// Analysis prompt template. Placeholders are replaced in
/// `build_analysis_prompt` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert recruitment analyst. Analyze how well this candidate's resume matches the job requirements.

JOB DESCRIPTION:
Title: {job_title}
Location: {job_location}
Requirements and Description:
{job_text}

CANDIDATE RESUME:
Name: {candidate_name}
Location: {candidate_location}
Resume Content:
{resume_text}

Please provide a comprehensive analysis in the following JSON format:
{
  "score": <integer between 0-100>,
  "verdict": "<High|Medium|Low>",
  "missing_skills": ["skill1", "skill2", ...],
  "feedback": "<detailed feedback paragraph>"
}

Scoring Guidelines:
- 80-100: High match - Excellent fit with most requirements met
- 60-79: Medium match - Good fit with some gaps
- 0-59: Low match - Significant gaps in requirements

Focus on:
1. Technical skills alignment
2. Experience level match
3. Industry experience
4. Educational background
5. Location compatibility
6. Soft skills and cultural fit indicators

Provide specific, actionable feedback and identify the top 3-5 missing skills if any."#;

/// Builds the deterministic analysis prompt for one (job, resume) pair.
/// The texts are passed separately because the records' `parsed_text` has
/// already been validated by the pipeline preconditions.
pub fn build_analysis_prompt(
    job: &DocumentRecord,
    job_text: &str,
    resume: &DocumentRecord,
    resume_text: &str,
) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_title}", &job.display_name)
        .replace(
            "{job_location}",
            job.location.as_deref().unwrap_or(LOCATION_NOT_SPECIFIED),
        )
        .replace("{job_text}", job_text)
        .replace("{candidate_name}", &resume.display_name)
        .replace(
            "{candidate_location}",
            resume.location.as_deref().unwrap_or(LOCATION_NOT_SPECIFIED),
        )
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> DocumentRecord {
        DocumentRecord {
            display_name: "Senior Rust Engineer".to_string(),
            location: Some("Berlin".to_string()),
            parsed_text: Some("5+ years Rust, axum, Postgres".to_string()),
        }
    }

    fn resume() -> DocumentRecord {
        DocumentRecord {
            display_name: "Ada Lovelace".to_string(),
            location: None,
            parsed_text: Some("Rust since 2016, sqlx, tokio".to_string()),
        }
    }

    #[test]
    fn test_prompt_embeds_both_documents() {
        let prompt = build_analysis_prompt(
            &job(),
            "5+ years Rust, axum, Postgres",
            &resume(),
            "Rust since 2016, sqlx, tokio",
        );
        assert!(prompt.contains("Title: Senior Rust Engineer"));
        assert!(prompt.contains("Location: Berlin"));
        assert!(prompt.contains("5+ years Rust, axum, Postgres"));
        assert!(prompt.contains("Name: Ada Lovelace"));
        assert!(prompt.contains("Rust since 2016, sqlx, tokio"));
    }

    #[test]
    fn test_missing_location_uses_placeholder() {
        let prompt = build_analysis_prompt(&job(), "jd", &resume(), "cv");
        assert!(prompt.contains(&format!("Location: {LOCATION_NOT_SPECIFIED}")));
    }

    #[test]
    fn test_prompt_states_scoring_bands_and_shape() {
        let prompt = build_analysis_prompt(&job(), "jd", &resume(), "cv");
        assert!(prompt.contains("80-100: High match"));
        assert!(prompt.contains("60-79: Medium match"));
        assert!(prompt.contains("0-59: Low match"));
        assert!(prompt.contains(r#""missing_skills""#));
        assert!(prompt.contains(r#""verdict""#));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_analysis_prompt(&job(), "jd", &resume(), "cv");
        let b = build_analysis_prompt(&job(), "jd", &resume(), "cv");
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_unreplaced_placeholders() {
        let prompt = build_analysis_prompt(&job(), "jd", &resume(), "cv");
        for placeholder in [
            "{job_title}",
            "{job_location}",
            "{job_text}",
            "{candidate_name}",
            "{candidate_location}",
            "{resume_text}",
        ] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }
}
