//! # lectern-api
//!
//! HTTP API server for lectern: router construction, request handlers,
//! error mapping, and startup configuration. The binary in `main.rs` wires
//! environment configuration to [`build_router`]; tests drive the router
//! directly with a mock backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::{AppState, ContextServices};

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically. Useful for
/// log correlation when chasing a slow provider call.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Convert the configured origin allow-list into header values, dropping
/// entries that do not parse. Never produces a wildcard.
fn allowed_origin_values(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}

/// Build the application router with the full middleware stack.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        .route("/lecture/edit", post(handlers::lecture::edit_lecture))
        .route("/lecture/process", post(handlers::lecture::process_lecture))
        .route("/diagram/generate", post(handlers::diagram::generate_diagram))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origin_values(allowed_origins)))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true)
                .max_age(std::time::Duration::from_secs(3600)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origin_values_parses_valid_origins() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "https://notes.example.com".to_string(),
        ];
        let values = allowed_origin_values(&origins);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].to_str().unwrap(), "http://localhost:5173");
    }

    #[test]
    fn test_allowed_origin_values_drops_unparsable_entries() {
        let origins = vec!["http://ok.example".to_string(), "bad\norigin".to_string()];
        let values = allowed_origin_values(&origins);
        assert_eq!(values.len(), 1);
    }
}
