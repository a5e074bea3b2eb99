//! Error types for lectern.

use thiserror::Error;

/// Result type alias using lectern's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for lectern operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Client-supplied data fails a precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced text or resource is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generation call to the completion provider failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Embedding generation failed
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// The provider answered but the text is unusable for the requested format
    #[error("Unusable model output: {0}")]
    ModelOutput(String),

    /// Fragment store operation failed
    #[error("Context error: {0}")]
    Context(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("selection must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: selection must not be empty");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("selection not present".to_string());
        assert_eq!(err.to_string(), "Not found: selection not present");
    }

    #[test]
    fn test_error_display_inference() {
        let err = Error::Inference("model timeout".to_string());
        assert_eq!(err.to_string(), "Inference error: model timeout");
    }

    #[test]
    fn test_error_display_embedding() {
        let err = Error::Embedding("failed to generate".to_string());
        assert_eq!(err.to_string(), "Embedding error: failed to generate");
    }

    #[test]
    fn test_error_display_model_output() {
        let err = Error::ModelOutput("not a diagram".to_string());
        assert_eq!(err.to_string(), "Unusable model output: not a diagram");
    }

    #[test]
    fn test_error_display_context() {
        let err = Error::Context("index unavailable".to_string());
        assert_eq!(err.to_string(), "Context error: index unavailable");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }

    #[test]
    fn test_error_display_request() {
        let err = Error::Request("network unreachable".to_string());
        assert_eq!(err.to_string(), "Request error: network unreachable");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        match err {
            Error::Io(_) => {}
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }
}
