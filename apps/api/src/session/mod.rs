//! Page state of the single evaluation session.
//!
//! ```text
//! Upload ──begin──▶ Validating{run} ──▶ Invalid ──reset──▶ Upload
//!                       │     └───────▶ Analyzed ─reset──▶ Upload
//!                       └─abort─▶ Upload
//! ```
//! Transitions only move forward; `reset` is the single way back.
//!
//! Every run gets an id at `begin`. Results and aborts name the run they belong
//! to and are dropped when the session has moved on to another run (or was reset).

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::scoring::analyzer::AnalysisOutcome;
use crate::scoring::scorecard::{build_scorecard, ScoreEntry};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Cannot {action} while the session is in state '{state}'")]
    IllegalTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Evaluation {run_id} was superseded; its result was discarded")]
    StaleRun { run_id: Uuid },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageState {
    #[default]
    Upload,
    Validating {
        run_id: Uuid,
    },
    Invalid {
        comments: String,
    },
    Analyzed {
        evaluation_id: Uuid,
        evaluated_at: DateTime<Utc>,
        role: String,
        analysis: AnalysisOutcome,
    },
}

impl PageState {
    pub fn name(&self) -> &'static str {
        match self {
            PageState::Upload => "upload",
            PageState::Validating { .. } => "validating",
            PageState::Invalid { .. } => "invalid",
            PageState::Analyzed { .. } => "analyzed",
        }
    }

    /// Upload → Validating. Rejects a second submission while one is in flight.
    /// Returns the id of the new run.
    pub fn begin(&mut self) -> Result<Uuid, SessionError> {
        if *self != PageState::Upload {
            return Err(SessionError::IllegalTransition {
                action: "submit a resume",
                state: self.name(),
            });
        }
        let run_id = Uuid::new_v4();
        *self = PageState::Validating { run_id };
        Ok(run_id)
    }

    /// Validating → Invalid.
    pub fn mark_invalid(&mut self, run_id: Uuid, comments: String) -> Result<(), SessionError> {
        self.expect_run(run_id)?;
        *self = PageState::Invalid { comments };
        Ok(())
    }

    /// Validating → Analyzed. Returns the id assigned to this evaluation.
    pub fn mark_analyzed(
        &mut self,
        run_id: Uuid,
        role: String,
        analysis: AnalysisOutcome,
    ) -> Result<Uuid, SessionError> {
        self.expect_run(run_id)?;
        let evaluation_id = Uuid::new_v4();
        *self = PageState::Analyzed {
            evaluation_id,
            evaluated_at: Utc::now(),
            role,
            analysis,
        };
        Ok(evaluation_id)
    }

    /// Validating → Upload for a run that failed or was abandoned.
    /// Returns false, leaving the state alone, when `run_id` is not the current run.
    pub fn abort(&mut self, run_id: Uuid) -> bool {
        if self.is_running(run_id) {
            *self = PageState::Upload;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = PageState::Upload;
    }

    pub fn is_running(&self, run_id: Uuid) -> bool {
        matches!(self, PageState::Validating { run_id: current } if *current == run_id)
    }

    /// Snapshot for the presentation layer, with a scorecard once analyzed.
    pub fn view(&self) -> SessionView {
        let scorecard = match self {
            PageState::Analyzed { analysis, .. } => Some(build_scorecard(analysis)),
            _ => None,
        };
        SessionView {
            page: self.clone(),
            scorecard,
        }
    }

    fn expect_run(&self, run_id: Uuid) -> Result<(), SessionError> {
        if self.is_running(run_id) {
            Ok(())
        } else {
            Err(SessionError::StaleRun { run_id })
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub page: PageState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scorecard: Option<Vec<ScoreEntry>>,
}
