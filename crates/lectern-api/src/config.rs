//! Startup configuration for the API server.
//!
//! All environment variables are read once here into an explicit struct that
//! gets injected into the services. Missing required configuration fails the
//! process at startup, before the listener binds.

use lectern_core::defaults;
use lectern_core::{Error, Result};

/// Gateway configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// CORS origin allow-list.
    pub allowed_origins: Vec<String>,
    /// Fragment database path. `None` disables the retrieval subsystem.
    pub context_db: Option<String>,
    /// Fragments retrieved per merge.
    pub context_top_k: i64,
}

impl ApiConfig {
    /// Read configuration from the environment.
    ///
    /// Fails with [`Error::Config`] when the completion provider's API key
    /// is absent or blank: the server is useless without it, so it refuses
    /// to start.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(defaults::ENV_OPENAI_API_KEY).unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "{} not found in environment",
                defaults::ENV_OPENAI_API_KEY
            )));
        }

        let port = match std::env::var(defaults::ENV_PORT) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("Invalid {}: '{raw}'", defaults::ENV_PORT)))?,
            Err(_) => defaults::DEFAULT_PORT,
        };

        let origins_raw = std::env::var(defaults::ENV_ALLOWED_ORIGINS)
            .unwrap_or_else(|_| defaults::DEFAULT_ALLOWED_ORIGINS.to_string());

        let context_top_k = std::env::var(defaults::ENV_CONTEXT_TOP_K)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::DEFAULT_CONTEXT_TOP_K);

        Ok(Self {
            host: std::env::var(defaults::ENV_HOST)
                .unwrap_or_else(|_| defaults::DEFAULT_HOST.to_string()),
            port,
            allowed_origins: parse_origin_list(&origins_raw),
            context_db: std::env::var(defaults::ENV_CONTEXT_DB)
                .ok()
                .filter(|s| !s.trim().is_empty()),
            context_top_k,
        })
    }
}

/// Split a comma-separated origin list, dropping blanks. An empty input
/// falls back to the default allow-list.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![defaults::DEFAULT_ALLOWED_ORIGINS.to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_origin() {
        let origins = parse_origin_list("http://localhost:5173");
        assert_eq!(origins, vec!["http://localhost:5173".to_string()]);
    }

    #[test]
    fn test_parse_multiple_origins_with_whitespace() {
        let origins = parse_origin_list("https://notes.example.com, http://localhost:5173 ");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "https://notes.example.com");
        assert_eq!(origins[1], "http://localhost:5173");
    }

    #[test]
    fn test_parse_empty_list_falls_back_to_default() {
        let origins = parse_origin_list("  ,  ");
        assert_eq!(origins, vec![defaults::DEFAULT_ALLOWED_ORIGINS.to_string()]);
    }
}
