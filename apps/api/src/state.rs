use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::llm_client::TextGenerator;
use crate::scoring::analyzer::ResumeAnalyzer;
use crate::scoring::validator::ResumeValidator;
use crate::session::PageState;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub validator: ResumeValidator,
    pub analyzer: ResumeAnalyzer,
    /// Artifact directory ensured before each validation.
    pub output_dir: PathBuf,
    /// The single user session. Never held across an await.
    pub session: Arc<Mutex<PageState>>,
}

impl AppState {
    pub fn new(llm: Arc<dyn TextGenerator>, output_dir: PathBuf) -> Self {
        Self {
            validator: ResumeValidator::new(llm.clone()),
            analyzer: ResumeAnalyzer::new(llm),
            output_dir,
            session: Arc::new(Mutex::new(PageState::default())),
        }
    }

    /// Every transition leaves a whole `PageState` behind, so a poisoned lock is still usable.
    pub fn lock_session(&self) -> MutexGuard<'_, PageState> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
