//! HTTP error mapping for the gateway.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use lectern_core::Error;

/// Gateway-level error carrying its HTTP classification.
#[derive(Debug)]
pub enum ApiError {
    /// Client fault: missing/empty fields, stale selection. Maps to 400.
    BadRequest(String),
    /// Upstream or internal fault. Maps to 500.
    Internal(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            // NotFound here always means "selection not present in the
            // document": a client-supplied precondition failure, not a
            // missing server resource, so it classifies as 400.
            Error::InvalidInput(_) | Error::NotFound(_) => ApiError::BadRequest(err.to_string()),
            _ => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let api_err: ApiError = Error::InvalidInput("empty field".to_string()).into();
        assert!(matches!(api_err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_not_found_maps_to_bad_request() {
        let api_err: ApiError = Error::NotFound("selection missing".to_string()).into();
        match api_err {
            ApiError::BadRequest(msg) => assert!(msg.contains("selection missing")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_inference_error_maps_to_internal() {
        let api_err: ApiError = Error::Inference("provider down".to_string()).into();
        assert!(matches!(api_err, ApiError::Internal(_)));
    }

    #[test]
    fn test_model_output_error_maps_to_internal() {
        let api_err: ApiError = Error::ModelOutput("not a diagram".to_string()).into();
        assert!(matches!(api_err, ApiError::Internal(_)));
    }
}
