//! Lecture editing and merging handlers.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use lectern_context::best_effort;
use lectern_core::splice;
use lectern_inference::MergeContext;

use super::require;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditLectureRequest {
    pub whole_lecture: Option<String>,
    pub part_to_modify: Option<String>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditLectureResponse {
    pub modified_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessLectureRequest {
    pub note_id: Option<String>,
    pub current_content: Option<String>,
    pub lecture_content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessLectureResponse {
    pub processed_content: String,
}

/// Edit a selection inside a lecture document.
///
/// The editor rewrites the selection per the suggestion; the gateway then
/// splices the edited text over the first occurrence of the selection and
/// returns the whole document.
pub async fn edit_lecture(
    State(state): State<AppState>,
    Json(req): Json<EditLectureRequest>,
) -> Result<Json<EditLectureResponse>, ApiError> {
    let whole_lecture = require(req.whole_lecture, "wholeLecture")?;
    let part_to_modify = require(req.part_to_modify, "partToModify")?;
    let suggestion = require(req.suggestion, "suggestion")?;

    let edited = state
        .editor
        .edit(&whole_lecture, &part_to_modify, &suggestion)
        .await?;

    let modified_text = splice::replace_first(&whole_lecture, &part_to_modify, &edited)?;

    Ok(Json(EditLectureResponse { modified_text }))
}

/// Merge current notes with new lecture content.
///
/// The retrieval subsystem, when configured, contributes nearest-neighbor
/// fragments and a research summary. Both contributions are best-effort: a
/// failing store or agent degrades to an empty contribution and the merge
/// still answers 200. After a successful merge the lecture content is
/// indexed (best-effort) so later merges can retrieve it.
pub async fn process_lecture(
    State(state): State<AppState>,
    Json(req): Json<ProcessLectureRequest>,
) -> Result<Json<ProcessLectureResponse>, ApiError> {
    let note_id = require(req.note_id, "noteId")?;
    let current_content = require(req.current_content, "currentContent")?;
    let lecture_content = require(req.lecture_content, "lectureContent")?;

    info!(note_id = %note_id, "processing lecture");

    let mut context = MergeContext::default();

    if let Some(services) = &state.context {
        let related = best_effort(
            "query_nearest",
            Vec::new(),
            services.store.query_nearest(&lecture_content, services.top_k),
        )
        .await;
        context.related = related
            .into_iter()
            .map(|hit| hit.fragment.content)
            .collect();

        context.research = best_effort(
            "find_relevant_info",
            String::new(),
            services.agent.find_relevant_info(&lecture_content),
        )
        .await;
    }

    let processed_content = state
        .editor
        .merge_lecture(&current_content, &lecture_content, &context)
        .await?;

    if let Some(services) = &state.context {
        best_effort("index_fragment", (), async {
            services
                .store
                .index(&lecture_content, "lecture")
                .await
                .map(|_| ())
        })
        .await;
    }

    Ok(Json(ProcessLectureResponse { processed_content }))
}
