//! Display-ready view of the six analysis scores.

use serde::Serialize;

use crate::scoring::analyzer::{AnalysisOutcome, AnalysisResult};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Green,
    Orange,
    Red,
    Gray,
}

impl ScoreBand {
    pub fn for_score(score: Option<f64>) -> Self {
        match score {
            None => ScoreBand::Gray,
            Some(s) if s >= 80.0 => ScoreBand::Green,
            Some(s) if s >= 60.0 => ScoreBand::Orange,
            Some(_) => ScoreBand::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub label: &'static str,
    pub value: String,
    pub band: ScoreBand,
}

impl ScoreEntry {
    fn new(label: &'static str, score: Option<f64>) -> Self {
        Self {
            label,
            value: score
                .map(|s| format!("{s:.0}"))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            band: ScoreBand::for_score(score),
        }
    }
}

/// Entries in dashboard order: Overall CV, Projects, Uniqueness, Work Experience,
/// Skills, Education. A failed analysis renders every entry as "N/A".
pub fn build_scorecard(outcome: &AnalysisOutcome) -> Vec<ScoreEntry> {
    let scores = outcome.result().map(scores_in_order).unwrap_or([None; 6]);
    LABELS
        .into_iter()
        .zip(scores)
        .map(|(label, score)| ScoreEntry::new(label, score))
        .collect()
}

const LABELS: [&str; 6] = [
    "Overall CV Score",
    "Projects Score",
    "Uniqueness Score",
    "Work Experience Score",
    "Skills Score",
    "Education Score",
];

fn scores_in_order(result: &AnalysisResult) -> [Option<f64>; 6] {
    [
        result.overall_cv_score,
        result.projects_score,
        result.uniqueness_score,
        result.work_experience_score,
        result.skills_score,
        result.education_score,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(overall: Option<f64>, skills: Option<f64>) -> AnalysisResult {
        AnalysisResult {
            overall_cv_score: overall,
            uniqueness_score: Some(59.9),
            projects_score: Some(60.0),
            work_experience_score: Some(80.0),
            skills_score: skills,
            education_score: Some(100.0),
            best_suited_role: None,
            overall_summary: None,
            suggestions: vec![],
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::for_score(Some(80.0)), ScoreBand::Green);
        assert_eq!(ScoreBand::for_score(Some(79.99)), ScoreBand::Orange);
        assert_eq!(ScoreBand::for_score(Some(60.0)), ScoreBand::Orange);
        assert_eq!(ScoreBand::for_score(Some(59.9)), ScoreBand::Red);
        assert_eq!(ScoreBand::for_score(Some(0.0)), ScoreBand::Red);
        assert_eq!(ScoreBand::for_score(None), ScoreBand::Gray);
    }

    #[test]
    fn test_scorecard_order_and_values() {
        let card = build_scorecard(&AnalysisOutcome::Complete(result_with(Some(72.4), None)));
        let labels: Vec<_> = card.iter().map(|e| e.label).collect();
        assert_eq!(labels, LABELS.to_vec());

        assert_eq!(card[0].value, "72");
        assert_eq!(card[0].band, ScoreBand::Orange);
        assert_eq!(card[1].value, "60");
        assert_eq!(card[2].value, "60");
        assert_eq!(card[2].band, ScoreBand::Red);
        assert_eq!(card[4].value, NOT_AVAILABLE);
        assert_eq!(card[4].band, ScoreBand::Gray);
        assert_eq!(card[5].band, ScoreBand::Green);
    }

    #[test]
    fn test_failed_analysis_is_all_not_available() {
        let card = build_scorecard(&AnalysisOutcome::Failed {
            error: "Error parsing response: boom".to_string(),
        });
        assert_eq!(card.len(), 6);
        assert!(card
            .iter()
            .all(|e| e.value == NOT_AVAILABLE && e.band == ScoreBand::Gray));
    }

    #[test]
    fn test_band_serialises_lowercase() {
        assert_eq!(
            serde_json::to_string(&ScoreBand::Orange).unwrap(),
            "\"orange\""
        );
    }
}
