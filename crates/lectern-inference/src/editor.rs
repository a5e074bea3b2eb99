//! The note-editing operations: edit, merge, diagram.
//!
//! [`LectureEditor`] is the one service the HTTP gateway talks to for
//! completion-backed work. It owns prompt construction, input validation,
//! and output normalization; the transport lives behind
//! [`GenerationBackend`].

use std::sync::Arc;

use tracing::debug;

use lectern_core::{Error, GenerationBackend, GenerationRequest, Result, SamplingParams};

use crate::{mermaid, prompts};

/// Optional context attached to a merge: nearest-neighbor fragments from
/// the context store and the research agent's summary. Both default to
/// empty; a degraded retrieval pass simply leaves them that way.
#[derive(Debug, Clone, Default)]
pub struct MergeContext {
    pub related: Vec<String>,
    pub research: String,
}

/// Completion-backed editing service for lecture notes.
pub struct LectureEditor {
    backend: Arc<dyn GenerationBackend>,
}

impl LectureEditor {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Rewrite `selection` according to `suggestion` and return the edited
    /// selection text (trimmed).
    ///
    /// Fails with [`Error::InvalidInput`] when `selection` or `suggestion`
    /// is blank, and with [`Error::NotFound`] when `selection` does not
    /// occur verbatim in `whole_text`. Membership is checked before the
    /// remote call, so a stale selection never spends provider tokens.
    pub async fn edit(&self, whole_text: &str, selection: &str, suggestion: &str) -> Result<String> {
        if selection.trim().is_empty() {
            return Err(Error::InvalidInput(
                "selected text must not be empty".to_string(),
            ));
        }
        if suggestion.trim().is_empty() {
            return Err(Error::InvalidInput(
                "suggestion must not be empty".to_string(),
            ));
        }
        if !whole_text.contains(selection) {
            return Err(Error::NotFound(
                "selected text not present in the lecture".to_string(),
            ));
        }

        let request = GenerationRequest::new(
            prompts::edit_system(),
            prompts::edit_prompt(selection, suggestion),
            SamplingParams::edit(),
        );

        let edited = self.backend.generate(&request).await?;
        debug!(
            op = "edit",
            response_len = edited.len(),
            "edit generation complete"
        );

        Ok(edited.trim().to_string())
    }

    /// Merge current notes with new lecture content into one coherent
    /// document. No input validation: empty notes are a valid starting
    /// point for a first lecture.
    pub async fn merge_lecture(
        &self,
        current_content: &str,
        lecture_content: &str,
        context: &MergeContext,
    ) -> Result<String> {
        let request = GenerationRequest::new(
            prompts::merge_system(),
            prompts::merge_prompt(
                current_content,
                lecture_content,
                &context.related,
                &context.research,
            ),
            SamplingParams::merge(),
        );

        let merged = self.backend.generate(&request).await?;
        debug!(
            op = "merge_lecture",
            result_count = context.related.len(),
            response_len = merged.len(),
            "merge generation complete"
        );

        Ok(merged)
    }

    /// Generate Mermaid diagram markup for free-form source text.
    ///
    /// Fails with [`Error::InvalidInput`] on blank input and with
    /// [`Error::ModelOutput`] when the provider's answer does not open one
    /// of the accepted grammars.
    pub async fn diagram(&self, source_text: &str) -> Result<String> {
        if source_text.trim().is_empty() {
            return Err(Error::InvalidInput("text must not be empty".to_string()));
        }

        let request = GenerationRequest::new(
            prompts::diagram_system(),
            prompts::diagram_prompt(source_text),
            SamplingParams::diagram(),
        );

        let raw = self.backend.generate(&request).await?;
        mermaid::validate(&raw)
    }
}
