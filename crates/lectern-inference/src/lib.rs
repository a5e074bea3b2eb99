//! # lectern-inference
//!
//! Completion-provider backend and note-editing operations for lectern.
//!
//! This crate provides:
//! - An OpenAI-compatible HTTP backend (chat completions + embeddings)
//! - The [`LectureEditor`] service: edit, merge, and diagram operations
//! - Instruction templates and Mermaid output validation
//! - A deterministic mock backend (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lectern_inference::{LectureEditor, MergeContext, OpenAIBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = Arc::new(OpenAIBackend::from_env().unwrap());
//!     let editor = LectureEditor::new(backend);
//!     let merged = editor
//!         .merge_lecture("current notes", "new lecture", &MergeContext::default())
//!         .await
//!         .unwrap();
//!     println!("{merged}");
//! }
//! ```

pub mod editor;
pub mod mermaid;
pub mod openai;
pub mod prompts;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use lectern_core::*;

pub use editor::{LectureEditor, MergeContext};
pub use openai::{OpenAIBackend, OpenAIConfig};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockBackend;
