//! Response validation and normalization for backend analysis replies.
//!
//! The backend's JSON is treated as untrusted: every field is repaired
//! independently, and an unparseable body degrades to a fixed assessment
//! instead of failing the pipeline.

use serde_json::Value;
use tracing::warn;

use crate::models::assessment::{MatchAssessment, Verdict};

/// Missing-skills sentinel when the reply could not be parsed.
pub const SKILLS_UNKNOWN: &str = "Unable to determine specific skills";

/// Missing-skills sentinel when the backend call itself failed.
pub const SERVICE_UNAVAILABLE: &str = "Analysis service temporarily unavailable";

const DEFAULT_SCORE: i32 = 50;

/// Degraded assessment for a failed backend call. Returned as a success so
/// analysis always completes; the error detail lands in the feedback.
pub fn service_unavailable_assessment(detail: &str) -> MatchAssessment {
    MatchAssessment {
        score: DEFAULT_SCORE,
        verdict: Verdict::Medium,
        missing_skills: vec![SERVICE_UNAVAILABLE.to_string()],
        feedback: format!(
            "Unable to complete detailed AI analysis due to service error: {detail}. \
            Please try again later."
        ),
    }
}

/// Degraded assessment for a reply that was not valid JSON.
fn unparseable_assessment() -> MatchAssessment {
    MatchAssessment {
        score: DEFAULT_SCORE,
        verdict: Verdict::Medium,
        missing_skills: vec![SKILLS_UNKNOWN.to_string()],
        feedback: format!(
            "Analysis completed but a detailed breakdown is not available. \
            Overall match score: {DEFAULT_SCORE}%."
        ),
    }
}

/// Parses a raw backend reply into a `MatchAssessment`, applying field-level
/// repair. Never fails: unparseable input yields the degraded assessment.
pub fn parse_assessment(raw: &str) -> MatchAssessment {
    let body = strip_json_fences(raw);
    match serde_json::from_str::<Value>(body) {
        Ok(value) => repair_fields(&value),
        Err(e) => {
            warn!("Backend reply was not valid JSON ({e}); raw reply: {raw}");
            unparseable_assessment()
        }
    }
}

fn repair_fields(value: &Value) -> MatchAssessment {
    let score = repair_score(value.get("score"));
    let verdict = repair_verdict(value.get("verdict"), score);
    let missing_skills = repair_skills(value.get("missing_skills"));
    let feedback = repair_feedback(value.get("feedback"), score);

    MatchAssessment {
        score,
        verdict,
        missing_skills,
        feedback,
    }
}

/// Missing or non-numeric scores default to 50; everything is clamped into
/// [0, 100]. 0 and 100 are fixed points.
fn repair_score(value: Option<&Value>) -> i32 {
    let raw = value
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_SCORE as f64);
    raw.round().clamp(0.0, 100.0) as i32
}

/// The verdict is derived from the clamped score. A label that is missing,
/// invalid, or disagrees with the score band is never trusted.
fn repair_verdict(value: Option<&Value>, score: i32) -> Verdict {
    let derived = Verdict::from_score(score);
    if let Some(label) = value.and_then(Value::as_str) {
        let claimed = match label {
            "High" => Some(Verdict::High),
            "Medium" => Some(Verdict::Medium),
            "Low" => Some(Verdict::Low),
            _ => None,
        };
        if let Some(claimed) = claimed {
            if claimed != derived {
                warn!("Backend verdict '{label}' disagrees with score {score}; using score band");
            }
        }
    }
    derived
}

fn repair_skills(value: Option<&Value>) -> Vec<String> {
    match value.and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

fn repair_feedback(value: Option<&Value>, score: i32) -> String {
    match value.and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => format!("Candidate scored {score}% match for this position."),
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_reply_passes_through() {
        let assessment = parse_assessment(
            r#"{"score": 85, "verdict": "High", "missing_skills": ["Kafka"], "feedback": "Strong candidate."}"#,
        );
        assert_eq!(assessment.score, 85);
        assert_eq!(assessment.verdict, Verdict::High);
        assert_eq!(assessment.missing_skills, vec!["Kafka".to_string()]);
        assert_eq!(assessment.feedback, "Strong candidate.");
    }

    #[test]
    fn test_score_clamped_above() {
        let assessment = parse_assessment(r#"{"score": 150, "feedback": "x"}"#);
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.verdict, Verdict::High);
    }

    #[test]
    fn test_score_clamped_below() {
        let assessment = parse_assessment(r#"{"score": -20, "feedback": "x"}"#);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.verdict, Verdict::Low);
    }

    #[test]
    fn test_clamp_is_noop_at_bounds() {
        assert_eq!(parse_assessment(r#"{"score": 0}"#).score, 0);
        assert_eq!(parse_assessment(r#"{"score": 100}"#).score, 100);
    }

    #[test]
    fn test_missing_score_defaults_to_50() {
        let assessment = parse_assessment(r#"{"verdict": "High"}"#);
        assert_eq!(assessment.score, 50);
    }

    #[test]
    fn test_non_numeric_score_defaults_to_50() {
        let assessment = parse_assessment(r#"{"score": "eighty"}"#);
        assert_eq!(assessment.score, 50);
        assert_eq!(assessment.verdict, Verdict::Low);
    }

    #[test]
    fn test_fractional_score_rounds() {
        assert_eq!(parse_assessment(r#"{"score": 79.6}"#).score, 80);
    }

    #[test]
    fn test_verdict_rederived_when_label_disagrees() {
        let assessment = parse_assessment(r#"{"score": 85, "verdict": "Low"}"#);
        assert_eq!(assessment.verdict, Verdict::High);
    }

    #[test]
    fn test_verdict_rederived_when_label_invalid() {
        let assessment = parse_assessment(r#"{"score": 65, "verdict": "Excellent"}"#);
        assert_eq!(assessment.verdict, Verdict::Medium);
    }

    #[test]
    fn test_verdict_rederived_when_label_absent() {
        assert_eq!(parse_assessment(r#"{"score": 90}"#).verdict, Verdict::High);
        assert_eq!(parse_assessment(r#"{"score": 60}"#).verdict, Verdict::Medium);
        assert_eq!(parse_assessment(r#"{"score": 59}"#).verdict, Verdict::Low);
    }

    #[test]
    fn test_non_array_skills_replaced_with_empty() {
        let assessment = parse_assessment(r#"{"score": 70, "missing_skills": "none"}"#);
        assert!(assessment.missing_skills.is_empty());
    }

    #[test]
    fn test_non_string_skill_entries_dropped() {
        let assessment =
            parse_assessment(r#"{"score": 70, "missing_skills": ["Kafka", 42, null, "Go"]}"#);
        assert_eq!(
            assessment.missing_skills,
            vec!["Kafka".to_string(), "Go".to_string()]
        );
    }

    #[test]
    fn test_missing_feedback_generated_from_score() {
        let assessment = parse_assessment(r#"{"score": 73}"#);
        assert_eq!(
            assessment.feedback,
            "Candidate scored 73% match for this position."
        );
    }

    #[test]
    fn test_blank_feedback_replaced() {
        let assessment = parse_assessment(r#"{"score": 40, "feedback": "   "}"#);
        assert!(assessment.feedback.contains("40"));
    }

    #[test]
    fn test_invalid_json_degrades_with_score_in_feedback() {
        let assessment = parse_assessment("The candidate looks great, roughly an 85.");
        assert_eq!(assessment.score, 50);
        assert_eq!(assessment.verdict, Verdict::Medium);
        assert_eq!(assessment.missing_skills, vec![SKILLS_UNKNOWN.to_string()]);
        assert!(assessment.feedback.contains("50"));
    }

    #[test]
    fn test_fenced_json_accepted() {
        let assessment =
            parse_assessment("```json\n{\"score\": 66, \"feedback\": \"ok\"}\n```");
        assert_eq!(assessment.score, 66);
        assert_eq!(assessment.verdict, Verdict::Medium);
    }

    #[test]
    fn test_bare_fences_accepted() {
        let assessment = parse_assessment("```\n{\"score\": 10}\n```");
        assert_eq!(assessment.score, 10);
    }

    #[test]
    fn test_service_unavailable_shape() {
        let assessment = service_unavailable_assessment("API error (status 503): overloaded");
        assert_eq!(assessment.score, 50);
        assert_eq!(assessment.verdict, Verdict::Medium);
        assert_eq!(
            assessment.missing_skills,
            vec![SERVICE_UNAVAILABLE.to_string()]
        );
        assert!(assessment.feedback.contains("status 503"));
    }
}
