// Humanyze Data Models
// Shared types for the scorer, humanizer, and remote client

use serde::{Deserialize, Serialize};

// ============ Score Report ============

/// Per-feature sub-scores behind an AI-likelihood estimate.
/// Each field is an integer in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAnalysis {
    pub formal_language: i32,
    pub repetitive_patterns: i32,
    pub sentence_uniformity: i32,
}

/// Heuristic estimate of how likely a text is machine-generated.
/// Invariant: `ai_score + human_score == 100`, all fields in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub ai_score: i32,
    pub human_score: i32,
    pub analysis: ScoreAnalysis,
}

impl ScoreReport {
    /// Neutral report for degenerate input (empty text, single sentence).
    pub fn neutral() -> Self {
        Self {
            ai_score: 50,
            human_score: 50,
            analysis: ScoreAnalysis {
                formal_language: 50,
                repetitive_patterns: 50,
                sentence_uniformity: 50,
            },
        }
    }
}

// ============ Humanization ============

/// Where a humanized rewrite came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HumanizeSource {
    Remote,
    LocalFallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizedResult {
    pub original_text: String,
    pub humanized_text: String,
    pub source: HumanizeSource,
}

// ============ Remote API Wire Types ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeApiRequest {
    pub text: String,
    pub request_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeApiResponse {
    pub humanized_text: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_report_balances() {
        let report = ScoreReport::neutral();
        assert_eq!(report.ai_score + report.human_score, 100);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ScoreReport::neutral();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("aiScore"));
        assert!(json.contains("sentenceUniformity"));
    }

    #[test]
    fn test_source_serialization() {
        let json = serde_json::to_string(&HumanizeSource::LocalFallback).unwrap();
        assert_eq!(json, "\"localFallback\"");
    }
}
