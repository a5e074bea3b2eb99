//! # lectern-context
//!
//! Embedding-indexed fragment store and research agent for lectern.
//!
//! Both subsystems are optional contributors to the merge operation and are
//! consumed through [`best_effort`], which downgrades any failure to a
//! default value instead of failing the caller's request.

pub mod agent;
pub mod store;

pub use agent::{AgentSpec, ResearchAgent, TaskSpec};
pub use store::{FragmentStore, ScoredFragment, StoredFragment};

use std::future::Future;

use tracing::warn;

use lectern_core::Result;

/// Await a fallible operation, substituting `default` on failure.
///
/// The failure is logged at WARN and never reaches the caller: this is the
/// degraded-result contract of the optional subsystems.
pub async fn best_effort<T, F>(operation: &'static str, default: T, fut: F) -> T
where
    F: Future<Output = Result<T>>,
{
    match fut.await {
        Ok(value) => value,
        Err(e) => {
            warn!(op = operation, error = %e, "degraded: substituting default");
            default
        }
    }
}
