//! Router-level tests for POST /lecture/edit.
//!
//! The completion provider is mocked, so these tests pin the gateway's
//! contract: splice semantics, 400 on client faults (including a selection
//! absent from the document), 500 on upstream failure.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app_with_mock, post_json};
use lectern_inference::MockBackend;

#[tokio::test]
async fn test_edit_replaces_first_occurrence_of_selection() {
    let app = app_with_mock(MockBackend::new().with_fixed_response("REPLACED"));

    let (status, body) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "Hello world",
            "partToModify": "world",
            "suggestion": "anything"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedText"], "Hello REPLACED");
}

#[tokio::test]
async fn test_edit_leaves_later_occurrences_untouched() {
    let app = app_with_mock(MockBackend::new().with_fixed_response("X"));

    let (status, body) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "one two one two",
            "partToModify": "two",
            "suggestion": "replace it"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedText"], "one X one two");
}

#[tokio::test]
async fn test_edit_trims_model_whitespace_before_splicing() {
    let app = app_with_mock(MockBackend::new().with_fixed_response("  tidy  \n"));

    let (status, body) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "a messy sentence",
            "partToModify": "messy",
            "suggestion": "clean up"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedText"], "a tidy sentence");
}

#[tokio::test]
async fn test_edit_empty_selection_is_rejected() {
    let app = app_with_mock(MockBackend::new());

    let (status, body) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "Hello world",
            "partToModify": "",
            "suggestion": "anything"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid input"));
}

#[tokio::test]
async fn test_edit_empty_suggestion_is_rejected() {
    let app = app_with_mock(MockBackend::new());

    let (status, _) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "Hello world",
            "partToModify": "world",
            "suggestion": "   "
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_missing_selection_is_a_client_error() {
    // The selection is well-formed but stale: it no longer occurs in the
    // document. That is the caller's fault, so 400, not 500.
    let mock = MockBackend::new();
    let calls = mock.clone();
    let app = app_with_mock(mock);

    let (status, body) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "abc",
            "partToModify": "xyz",
            "suggestion": "anything"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Not found"));
    // The stale selection is detected before any provider spend.
    assert_eq!(calls.generate_call_count(), 0);
}

#[tokio::test]
async fn test_edit_missing_field_is_rejected_with_field_name() {
    let app = app_with_mock(MockBackend::new());

    let (status, body) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "Hello world",
            "suggestion": "anything"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("partToModify"));
}

#[tokio::test]
async fn test_edit_upstream_failure_maps_to_500() {
    let app = app_with_mock(MockBackend::new().with_generation_failure("provider down"));

    let (status, body) = post_json(
        app,
        "/lecture/edit",
        json!({
            "wholeLecture": "Hello world",
            "partToModify": "world",
            "suggestion": "anything"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("provider down"));
}
