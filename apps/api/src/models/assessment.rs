use serde::{Deserialize, Serialize};

/// Categorical verdict on a (job, resume) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    High,
    Medium,
    Low,
}

impl Verdict {
    /// Maps a score to its band: 80-100 High, 60-79 Medium, 0-59 Low.
    /// The same bands are spelled out in the analysis prompt.
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            Verdict::High
        } else if score >= 60 {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::High => "High",
            Verdict::Medium => "Medium",
            Verdict::Low => "Low",
        }
    }
}

/// One compatibility assessment between a job description and a resume.
/// Inserted into `matches` exactly once per analysis invocation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAssessment {
    pub score: i32,
    pub verdict: Verdict,
    pub missing_skills: Vec<String>,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(Verdict::from_score(100), Verdict::High);
        assert_eq!(Verdict::from_score(80), Verdict::High);
        assert_eq!(Verdict::from_score(79), Verdict::Medium);
        assert_eq!(Verdict::from_score(60), Verdict::Medium);
        assert_eq!(Verdict::from_score(59), Verdict::Low);
        assert_eq!(Verdict::from_score(0), Verdict::Low);
    }

    #[test]
    fn test_verdict_serializes_as_plain_label() {
        assert_eq!(serde_json::to_string(&Verdict::High).unwrap(), r#""High""#);
        assert_eq!(serde_json::to_string(&Verdict::Low).unwrap(), r#""Low""#);
    }

    #[test]
    fn test_as_str_matches_wire_labels() {
        assert_eq!(Verdict::Medium.as_str(), "Medium");
    }
}
