//! Application state shared across handlers.

use std::sync::Arc;

use lectern_context::{FragmentStore, ResearchAgent};
use lectern_inference::LectureEditor;

/// Shared state injected into every handler. Built once at startup from
/// [`crate::config::ApiConfig`]; there is no process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// Completion-backed editing service.
    pub editor: Arc<LectureEditor>,
    /// Retrieval subsystem, present only when a fragment database is
    /// configured.
    pub context: Option<ContextServices>,
}

/// The optional retrieval subsystem: fragment store + research agent.
#[derive(Clone)]
pub struct ContextServices {
    pub store: Arc<FragmentStore>,
    pub agent: Arc<ResearchAgent>,
    /// Fragments retrieved per merge.
    pub top_k: i64,
}
