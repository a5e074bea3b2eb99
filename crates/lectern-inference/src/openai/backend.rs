//! OpenAI-compatible inference backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use lectern_core::defaults;
use lectern_core::{
    EmbeddingBackend, Error, GenerationBackend, GenerationRequest, InferenceBackend, Result,
};

use super::types::*;

/// Configuration for the OpenAI-compatible backend.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key for authentication (optional for local endpoints).
    pub api_key: Option<String>,
    /// Model to use for generation.
    pub gen_model: String,
    /// Model to use for embeddings.
    pub embed_model: String,
    /// Expected embedding dimension.
    pub embed_dimension: usize,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_OPENAI_URL.to_string(),
            api_key: None,
            gen_model: defaults::DEFAULT_GEN_MODEL.to_string(),
            embed_model: defaults::DEFAULT_EMBED_MODEL.to_string(),
            embed_dimension: defaults::DEFAULT_EMBED_DIMENSION,
            timeout_seconds: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl OpenAIConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for everything except the API key.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(defaults::ENV_OPENAI_BASE_URL)
                .unwrap_or_else(|_| defaults::DEFAULT_OPENAI_URL.to_string()),
            api_key: std::env::var(defaults::ENV_OPENAI_API_KEY).ok(),
            gen_model: std::env::var(defaults::ENV_OPENAI_GEN_MODEL)
                .unwrap_or_else(|_| defaults::DEFAULT_GEN_MODEL.to_string()),
            embed_model: std::env::var(defaults::ENV_OPENAI_EMBED_MODEL)
                .unwrap_or_else(|_| defaults::DEFAULT_EMBED_MODEL.to_string()),
            embed_dimension: std::env::var(defaults::ENV_OPENAI_EMBED_DIM)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::DEFAULT_EMBED_DIMENSION),
            timeout_seconds: std::env::var(defaults::ENV_OPENAI_TIMEOUT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// OpenAI-compatible inference backend.
///
/// One instance is built at process start and shared across requests;
/// the inner `reqwest::Client` carries the only configured timeout.
pub struct OpenAIBackend {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Initializing completion backend: url={}, gen={}, embed={}",
            config.base_url, config.gen_model, config.embed_model
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAIConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// Build a POST request with authentication if configured.
    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req.header("Content-Type", "application/json")
    }

    /// Build a GET request with authentication.
    fn build_get_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.get(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req
    }
}

#[async_trait]
impl GenerationBackend for OpenAIBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        debug!(
            "Generating with model {}, prompt length: {}",
            self.config.gen_model,
            request.prompt.len()
        );

        let mut messages = Vec::new();

        if !request.system.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: request.system.clone(),
            });
        }

        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        });

        let body = ChatCompletionRequest {
            model: self.config.gen_model.clone(),
            messages,
            temperature: Some(request.params.temperature),
            top_p: Some(request.params.top_p),
            max_tokens: Some(request.params.max_tokens),
        };

        let response = self
            .build_request("/chat/completions")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let envelope: ErrorEnvelope = response
                .json()
                .await
                .unwrap_or_else(|_| ErrorEnvelope::unknown());
            return Err(Error::Inference(format!(
                "Provider returned {}: {}",
                status, envelope.error.message
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let content = result
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| Error::Inference("Response contained no choices".to_string()))?;

        debug!("Generation complete, response length: {}", content.len());
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.config.gen_model
    }
}

#[async_trait]
impl EmbeddingBackend for OpenAIBackend {
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        debug!(
            "Embedding {} texts with model {}",
            texts.len(),
            self.config.embed_model
        );

        let body = EmbeddingRequest {
            model: self.config.embed_model.clone(),
            input: texts.to_vec(),
            encoding_format: Some("float".to_string()),
        };

        let response = self
            .build_request("/embeddings")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Embedding(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let envelope: ErrorEnvelope = response
                .json()
                .await
                .unwrap_or_else(|_| ErrorEnvelope::unknown());
            return Err(Error::Embedding(format!(
                "Provider returned {}: {}",
                status, envelope.error.message
            )));
        }

        let result: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| Error::Embedding(format!("Failed to parse response: {}", e)))?;

        // Sort by index to ensure correct ordering
        let mut data = result.data;
        data.sort_by_key(|d| d.index);

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimension(&self) -> usize {
        self.config.embed_dimension
    }

    fn model_name(&self) -> &str {
        &self.config.embed_model
    }
}

#[async_trait]
impl InferenceBackend for OpenAIBackend {
    async fn health_check(&self) -> Result<bool> {
        // A minimal models-list request doubles as a liveness probe.
        let response = self
            .build_get_request("/models")
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => {
                if resp.status().is_success() {
                    Ok(true)
                } else {
                    warn!("Provider health check failed: {}", resp.status());
                    Ok(false)
                }
            }
            Err(e) => {
                warn!("Provider health check error: {}", e);
                Ok(false)
            }
        }
    }
}
