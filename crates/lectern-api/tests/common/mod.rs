//! Shared helpers for router-level tests: state construction around the
//! mock backend, and request/response plumbing via `tower::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lectern_api::{build_router, AppState, ContextServices};
use lectern_context::{FragmentStore, ResearchAgent};
use lectern_inference::{LectureEditor, MockBackend};

pub fn test_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

/// Router with the given mock backing the editor and no retrieval subsystem.
pub fn app_with_mock(mock: MockBackend) -> Router {
    let state = AppState {
        editor: Arc::new(LectureEditor::new(Arc::new(mock))),
        context: None,
    };
    build_router(state, &test_origins())
}

/// Router with separate mocks for the editor, the fragment store's
/// embedder, and the research agent, so each can fail independently.
pub async fn app_with_context(
    editor_mock: MockBackend,
    embed_mock: MockBackend,
    agent_mock: MockBackend,
) -> Router {
    let store = FragmentStore::open_in_memory(Arc::new(embed_mock))
        .await
        .unwrap();

    let state = AppState {
        editor: Arc::new(LectureEditor::new(Arc::new(editor_mock))),
        context: Some(ContextServices {
            store: Arc::new(store),
            agent: Arc::new(ResearchAgent::new(Arc::new(agent_mock))),
            top_k: 3,
        }),
    };

    build_router(state, &test_origins())
}

/// POST a JSON body and return (status, parsed response body).
pub async fn post_json(
    app: Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// GET a path and return (status, parsed response body).
pub async fn get_json(app: Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}
