//! Liveness and health handlers.

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// Root liveness route. Answers the fixed welcome payload regardless of
/// any subsystem's health.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to NoteApp API"
    }))
}

/// Health route: process is up, plus whether retrieval is configured.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "retrieval_enabled": state.context.is_some(),
    }))
}
