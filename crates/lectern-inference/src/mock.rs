//! Mock inference backend for deterministic testing.
//!
//! Provides fixed or input-mapped generation responses, deterministic
//! embeddings, switchable failures, and a call log for assertions. Enabled
//! with the `mock` feature so dependents can use it from their own tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use lectern_core::{
    EmbeddingBackend, Error, GenerationBackend, GenerationRequest, InferenceBackend, Result,
};

/// Mock inference backend for testing.
#[derive(Clone)]
pub struct MockBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    default_response: String,
    /// Responses keyed by prompt substring; first match wins.
    response_map: Vec<(String, String)>,
    /// Embeddings keyed by exact input text.
    embedding_map: HashMap<String, Vec<f32>>,
    dimension: usize,
    generation_failure: Option<String>,
    embedding_failure: Option<String>,
}

/// One logged backend invocation.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub input: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            default_response: "Mock response".to_string(),
            response_map: Vec::new(),
            embedding_map: HashMap::new(),
            dimension: 8,
            generation_failure: None,
            embedding_failure: None,
        }
    }
}

impl MockBackend {
    /// Create a new mock backend with default configuration.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the response returned for any generation request.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = response.into();
        self
    }

    /// Return `response` for prompts containing `prompt_fragment`.
    pub fn with_response_for(
        mut self,
        prompt_fragment: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .response_map
            .push((prompt_fragment.into(), response.into()));
        self
    }

    /// Return `embedding` for the exact input `text`; other inputs get a
    /// deterministic byte-derived vector.
    pub fn with_embedding_for(mut self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Arc::make_mut(&mut self.config)
            .embedding_map
            .insert(text.into(), embedding);
        self
    }

    /// Set the embedding dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        Arc::make_mut(&mut self.config).dimension = dimension;
        self
    }

    /// Make every generation call fail with the given message.
    pub fn with_generation_failure(mut self, message: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).generation_failure = Some(message.into());
        self
    }

    /// Make every embedding call fail with the given message.
    pub fn with_embedding_failure(mut self, message: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).embedding_failure = Some(message.into());
        self
    }

    /// Get all logged calls for assertion.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of generation calls made.
    pub fn generate_call_count(&self) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == "generate")
            .count()
    }

    /// Number of embedding calls made.
    pub fn embed_call_count(&self) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == "embed_texts")
            .count()
    }

    /// The prompt of the most recent generation call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|c| c.operation == "generate")
            .map(|c| c.input.clone())
    }

    fn log(&self, operation: &str, input: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            input: input.to_string(),
        });
    }

    /// Deterministic embedding: fold the text's bytes into `dimension`
    /// buckets so equal inputs always embed identically.
    fn derive_embedding(&self, text: &str) -> Vec<f32> {
        let dim = self.config.dimension;
        let mut v = vec![0f32; dim];
        for (i, byte) in text.bytes().enumerate() {
            v[i % dim] += f32::from(byte) / 255.0;
        }
        v
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.log("generate", &request.prompt);

        if let Some(ref msg) = self.config.generation_failure {
            return Err(Error::Inference(msg.clone()));
        }

        for (fragment, response) in &self.config.response_map {
            if request.prompt.contains(fragment) {
                return Ok(response.clone());
            }
        }

        Ok(self.config.default_response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-gen"
    }
}

#[async_trait]
impl EmbeddingBackend for MockBackend {
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        for text in texts {
            self.log("embed_texts", text);
        }

        if let Some(ref msg) = self.config.embedding_failure {
            return Err(Error::Embedding(msg.clone()));
        }

        Ok(texts
            .iter()
            .map(|t| {
                self.config
                    .embedding_map
                    .get(t)
                    .cloned()
                    .unwrap_or_else(|| self.derive_embedding(t))
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn model_name(&self) -> &str {
        "mock-embed"
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn health_check(&self) -> Result<bool> {
        Ok(self.config.generation_failure.is_none())
    }
}
