//! Evaluation pipeline: one sequential run per submitted resume.
//!
//! Flow: extract → normalize → ensure output dir → validate → (analyze) → session update.
//! The session moves to `Validating { run_id }` before any work starts. A run that
//! fails, or whose future is dropped mid-flight (client disconnect, timeout), rolls
//! its own run back to `Upload`. A run that finishes after the session moved on
//! gets `SessionError::StaleRun` and its result is discarded.

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipeline::extract::extract_text;
use crate::pipeline::normalize::clean_text;
use crate::pipeline::output::ensure_output_directory;
use crate::scoring::analyzer::AnalysisOutcome;
use crate::session::SessionView;
use crate::state::AppState;

pub const DEFAULT_ROLE: &str = "Software Engineer";

#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub role: String,
    pub file: Bytes,
}

enum Verdict {
    Invalid(String),
    Analyzed(AnalysisOutcome),
}

/// Aborts its run on drop unless disarmed.
struct RunGuard<'a> {
    state: &'a AppState,
    run_id: Uuid,
    armed: bool,
}

impl<'a> RunGuard<'a> {
    fn new(state: &'a AppState, run_id: Uuid) -> Self {
        Self {
            state,
            run_id,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.state.lock_session().abort(self.run_id) {
            warn!("Evaluation {} abandoned mid-flight, session rolled back", self.run_id);
        }
    }
}

pub async fn run_evaluation(
    state: &AppState,
    request: EvaluationRequest,
) -> Result<SessionView, AppError> {
    let run_id = state.lock_session().begin()?;
    let mut guard = RunGuard::new(state, run_id);

    let verdict = evaluate(state, &request).await;
    guard.disarm();

    let mut session = state.lock_session();
    match verdict {
        Ok(Verdict::Invalid(comments)) => session.mark_invalid(run_id, comments)?,
        Ok(Verdict::Analyzed(analysis)) => {
            let evaluation_id = session.mark_analyzed(run_id, request.role, analysis)?;
            info!("Evaluation {evaluation_id} complete");
        }
        Err(e) => {
            session.abort(run_id);
            return Err(e);
        }
    }
    Ok(session.view())
}

async fn evaluate(state: &AppState, request: &EvaluationRequest) -> Result<Verdict, AppError> {
    let extracted = extract_text(request.file.clone()).await?;
    let resume_text = clean_text(&extracted);

    ensure_output_directory(&state.output_dir).await?;

    let validation = state.validator.validate(&resume_text).await?;
    if !validation.is_valid {
        info!("Resume rejected by validator");
        return Ok(Verdict::Invalid(validation.comments));
    }

    let analysis = state.analyzer.analyze(&resume_text, &request.role).await?;
    Ok(Verdict::Analyzed(analysis))
}
