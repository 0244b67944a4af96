//! Resume Analyzer: hiring-manager style scoring of a resume against a target role.
//!
//! The LLM is asked for six 0–100 scores, a best-suited role, a summary and a list of
//! suggestions. Replies are loosely typed, so interpretation is lenient per field:
//! - scores accept numbers or numeric strings, anything else is absent ("N/A")
//! - `suggestions` may come back as one string; it is split newline-first, then comma
//!
//! A reply that cannot be interpreted is not an error for the caller: the outcome is
//! `AnalysisOutcome::Failed`, which serialises as `{"error": "..."}`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::response::{parse_json_reply, MalformedResponseError};
use crate::llm_client::{LlmError, TextGenerator};
use crate::scoring::prompts::build_analysis_prompt;

/// Parsed analysis. Scores are `None` when the model omitted them or sent non-numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub overall_cv_score: Option<f64>,
    pub uniqueness_score: Option<f64>,
    pub projects_score: Option<f64>,
    pub work_experience_score: Option<f64>,
    pub skills_score: Option<f64>,
    pub education_score: Option<f64>,
    pub best_suited_role: Option<String>,
    pub overall_summary: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Complete(AnalysisResult),
    /// No analysis available; every score renders as "N/A".
    Failed { error: String },
}

impl AnalysisOutcome {
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Complete(result) => Some(result),
            AnalysisOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisParseError {
    #[error(transparent)]
    Malformed(#[from] MalformedResponseError),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("suggestions must be a list or a string, got {0}")]
    BadSuggestions(&'static str),
}

#[derive(Clone)]
pub struct ResumeAnalyzer {
    llm: Arc<dyn TextGenerator>,
}

impl ResumeAnalyzer {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Scores `resume_text` for `role`. Only transport/API failures are returned as errors.
    pub async fn analyze(&self, resume_text: &str, role: &str) -> Result<AnalysisOutcome, LlmError> {
        info!("Analyzing resume for role '{role}'");
        let raw = self
            .llm
            .generate(&build_analysis_prompt(resume_text, role))
            .await?;

        match interpret_reply(&raw) {
            Ok(result) => {
                info!(
                    "Resume analysis finished: overall_cv_score={:?}, {} suggestion(s)",
                    result.overall_cv_score,
                    result.suggestions.len()
                );
                Ok(AnalysisOutcome::Complete(result))
            }
            Err(e) => {
                warn!("Analysis reply could not be interpreted: {e}");
                Ok(AnalysisOutcome::Failed {
                    error: format!("Error parsing response: {e}"),
                })
            }
        }
    }
}

pub fn interpret_reply(raw: &str) -> Result<AnalysisResult, AnalysisParseError> {
    let parsed = parse_json_reply(raw)?;
    let fields = match &parsed {
        Value::Object(map) => map,
        other => return Err(AnalysisParseError::NotAnObject(json_kind(other))),
    };

    Ok(AnalysisResult {
        overall_cv_score: score(fields, "overall_cv_score"),
        uniqueness_score: score(fields, "uniqueness_score"),
        projects_score: score(fields, "projects_score"),
        work_experience_score: score(fields, "work_experience_score"),
        skills_score: score(fields, "skills_score"),
        education_score: score(fields, "education_score"),
        best_suited_role: text(fields, "best_suited_role"),
        overall_summary: text(fields, "overall_summary"),
        suggestions: suggestions(fields.get("suggestions"))?,
    })
}

/// Splits a single-string suggestions value into entries.
///
/// Newline-separated entries win. When the newline split yields at most one entry the
/// string is re-split on commas. A suggestion that itself contains commas and arrives
/// alone on one line is therefore broken apart; that is a known limitation.
pub fn split_suggestions(raw: &str) -> Vec<String> {
    let by_line = split_trimmed(raw, '\n');
    if by_line.len() > 1 {
        return by_line;
    }
    split_trimmed(raw, ',')
}

fn split_trimmed(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn suggestions(value: Option<&Value>) -> Result<Vec<String>, AnalysisParseError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(s)) => Ok(split_suggestions(s)),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()),
        Some(other) => Err(AnalysisParseError::BadSuggestions(json_kind(other))),
    }
}

fn score(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    match fields.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
