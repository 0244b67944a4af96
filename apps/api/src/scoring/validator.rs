//! Resume Validator: asks the LLM whether the text is a resume at all.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::response::parse_json_reply;
use crate::llm_client::{LlmError, TextGenerator};
use crate::scoring::prompts::build_validation_prompt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub comments: String,
}

#[derive(Clone)]
pub struct ResumeValidator {
    llm: Arc<dyn TextGenerator>,
}

impl ResumeValidator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// Judges `resume_text` on content only.
    ///
    /// A reply that is not JSON degrades to an invalid result whose comments carry the
    /// parse error and the raw reply. Only transport/API failures are returned as errors.
    pub async fn validate(&self, resume_text: &str) -> Result<ValidationResult, LlmError> {
        info!("Validating resume text ({} chars)", resume_text.len());
        let raw = self.llm.generate(&build_validation_prompt(resume_text)).await?;

        let result = match parse_json_reply(&raw) {
            Ok(parsed) => ValidationResult {
                is_valid: parsed.get("valid").and_then(Value::as_bool).unwrap_or(false),
                comments: parsed.get("comments").map(comment_text).unwrap_or_default(),
            },
            Err(e) => {
                warn!("Validation reply was not JSON: {}", e.source);
                ValidationResult {
                    is_valid: false,
                    comments: format!("Error parsing API response: {e}"),
                }
            }
        };

        info!("Resume validation finished: valid={}", result.is_valid);
        Ok(result)
    }
}

fn comment_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::CannedGenerator;

    async fn validate_with(reply: &str) -> ValidationResult {
        let llm = Arc::new(CannedGenerator::replying(reply));
        ResumeValidator::new(llm).validate("Jane Doe").await.unwrap()
    }

    #[tokio::test]
    async fn test_fenced_valid_reply() {
        let result = validate_with("```json\n{\"valid\": true, \"comments\": \"ok\"}\n```").await;
        assert_eq!(
            result,
            ValidationResult {
                is_valid: true,
                comments: "ok".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_reply_keeps_comments() {
        let result =
            validate_with("{\"valid\": false, \"comments\": \"This is a recipe.\"}").await;
        assert!(!result.is_valid);
        assert_eq!(result.comments, "This is a recipe.");
    }

    #[tokio::test]
    async fn test_missing_keys_default_to_invalid_and_empty() {
        let result = validate_with("{}").await;
        assert!(!result.is_valid);
        assert_eq!(result.comments, "");
    }

    #[tokio::test]
    async fn test_non_boolean_valid_is_invalid() {
        let result = validate_with("{\"valid\": \"yes\", \"comments\": 3}").await;
        assert!(!result.is_valid);
        assert_eq!(result.comments, "3");
    }

    #[tokio::test]
    async fn test_malformed_reply_never_raises() {
        let raw = "I think this is a resume!";
        let result = validate_with(raw).await;
        assert!(!result.is_valid);
        assert!(result.comments.starts_with("Error parsing API response: "));
        assert!(result.comments.ends_with(&format!("Raw response: {raw}")));
    }

    #[tokio::test]
    async fn test_prompt_carries_resume_text() {
        let llm = Arc::new(CannedGenerator::replying("{\"valid\": true}"));
        ResumeValidator::new(llm.clone())
            .validate("Experience: 5 years Rust")
            .await
            .unwrap();
        assert!(llm.last_prompt().ends_with("Experience: 5 years Rust"));
    }

    #[tokio::test]
    async fn test_remote_failure_propagates() {
        let llm = Arc::new(CannedGenerator::failing_with_status(503));
        let err = ResumeValidator::new(llm).validate("x").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }
}
