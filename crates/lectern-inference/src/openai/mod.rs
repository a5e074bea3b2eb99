//! OpenAI-compatible backend: chat completions and embeddings over HTTP.

pub mod backend;
pub mod types;

pub use backend::{OpenAIBackend, OpenAIConfig};
