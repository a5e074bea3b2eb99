//! Core traits for lectern abstractions.
//!
//! These traits define the seams between the service layer and the remote
//! inference provider, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::sampling::SamplingParams;

/// A single chat-completion request: system instruction, user prompt,
/// and the sampling controls for this operation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System message. Empty string means "send no system message".
    pub system: String,
    /// User message.
    pub prompt: String,
    /// Sampling controls for this call.
    pub params: SamplingParams,
}

impl GenerationRequest {
    pub fn new(
        system: impl Into<String>,
        prompt: impl Into<String>,
        params: SamplingParams,
    ) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            params,
        }
    }
}

/// Backend for text generation (LLM).
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text for the given request, returning the first choice's
    /// message text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Backend for generating text embeddings.
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    /// Generate embeddings for the given texts.
    ///
    /// Returns one embedding vector per input text, in input order.
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get the expected dimension of embedding vectors.
    fn dimension(&self) -> usize;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Combined inference backend supporting both embedding and generation.
#[async_trait]
pub trait InferenceBackend: EmbeddingBackend + GenerationBackend {
    /// Check if the backend is available and responding.
    async fn health_check(&self) -> Result<bool>;
}
