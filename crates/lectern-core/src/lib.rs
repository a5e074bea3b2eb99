//! # lectern-core
//!
//! Core types, traits, and abstractions for lectern.
//!
//! This crate provides:
//! - The workspace error taxonomy and `Result` alias
//! - Backend traits for generation and embeddings
//! - Sampling parameter presets for each gateway operation
//! - The pure selection-splice function used by the edit route
//! - Environment defaults and structured-logging field constants

pub mod defaults;
pub mod error;
pub mod logging;
pub mod sampling;
pub mod splice;
pub mod traits;

pub use error::{Error, Result};
pub use sampling::SamplingParams;
pub use splice::replace_first;
pub use traits::{EmbeddingBackend, GenerationBackend, GenerationRequest, InferenceBackend};
