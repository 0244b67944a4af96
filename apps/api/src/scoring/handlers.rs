//! Axum route handlers for resume evaluation.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;

use crate::errors::{AppError, UPLOAD_VALID_RESUME};
use crate::scoring::evaluation::{run_evaluation, EvaluationRequest, DEFAULT_ROLE};
use crate::session::SessionView;
use crate::state::AppState;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// POST /api/v1/resumes/evaluate
///
/// Multipart fields: `role` (text) and `file` (PDF). Runs the full pipeline and
/// returns the resulting session page.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let mut role = String::new();
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "role" => {
                role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read role: {e}")))?;
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read file: {e}")))?;
                check_upload(&file_name, &data)?;
                file = Some(data);
            }
            _ => {
                field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read field '{name}': {e}"))
                })?;
            }
        }
    }

    let file = file
        .filter(|data| !data.is_empty())
        .ok_or_else(|| AppError::Validation(UPLOAD_VALID_RESUME.to_string()))?;
    let role = match role.trim() {
        "" => DEFAULT_ROLE.to_string(),
        trimmed => trimmed.to_string(),
    };

    let view = run_evaluation(&state, EvaluationRequest { role, file }).await?;
    Ok(Json(view))
}

fn check_upload(file_name: &str, data: &Bytes) -> Result<(), AppError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    if !file_name.is_empty() && extension != "pdf" {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF files are allowed".to_string(),
        ));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File too large. Maximum size is 10MB".to_string(),
        ));
    }
    Ok(())
}
