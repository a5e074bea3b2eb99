//! HTTP handlers for the gateway routes.

pub mod diagram;
pub mod lecture;
pub mod system;

use crate::error::ApiError;

/// Field-presence validation. A missing field must answer 400 naming the
/// field; the framework's default rejection would answer 422.
pub(crate) fn require(field: Option<String>, name: &str) -> Result<String, ApiError> {
    field.ok_or_else(|| ApiError::BadRequest(format!("Missing field: {name}")))
}
