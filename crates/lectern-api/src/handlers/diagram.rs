//! Diagram generation handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::require;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateDiagramRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateDiagramResponse {
    pub diagram: String,
}

/// Generate Mermaid diagram markup from free-form text.
pub async fn generate_diagram(
    State(state): State<AppState>,
    Json(req): Json<GenerateDiagramRequest>,
) -> Result<Json<GenerateDiagramResponse>, ApiError> {
    let text = require(req.text, "text")?;

    let diagram = state.editor.diagram(&text).await?;

    Ok(Json(GenerateDiagramResponse { diagram }))
}
