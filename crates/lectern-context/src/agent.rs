//! Single-agent research step for the merge operation.
//!
//! One declared agent, one declared task, run synchronously through a
//! generation backend. The reasoning loop belongs to the model; this module
//! only renders the declarations into a completion request.

use std::sync::Arc;

use tracing::debug;

use lectern_core::{GenerationBackend, GenerationRequest, Result, SamplingParams};

/// Declaration of an agent: who it is and what it is for.
#[derive(Debug, Clone)]
pub struct AgentSpec {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentSpec {
    /// The lecture research assistant used by the merge operation.
    pub fn researcher() -> Self {
        Self {
            role: "Lecture Research Assistant".to_string(),
            goal: "Surface background information that helps a student understand new lecture material".to_string(),
            backstory: "You assist a note-taking service. Given a fragment of lecture content, you recall definitions, context, and connections a well-prepared student would want alongside it.".to_string(),
        }
    }

    fn render_system(&self) -> String {
        format!(
            "You are {role}. {backstory}\nYour goal: {goal}",
            role = self.role,
            backstory = self.backstory,
            goal = self.goal
        )
    }
}

/// Declaration of a task handed to an agent.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    pub description: String,
    pub expected_output: String,
}

/// Best-effort research agent wrapping a single agent + task run.
pub struct ResearchAgent {
    backend: Arc<dyn GenerationBackend>,
    spec: AgentSpec,
}

impl ResearchAgent {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            spec: AgentSpec::researcher(),
        }
    }

    /// Run a declared task through the agent and return its raw text output.
    pub async fn run(&self, task: &TaskSpec) -> Result<String> {
        let prompt = format!(
            "{description}\n\nExpected output: {expected}",
            description = task.description,
            expected = task.expected_output
        );

        let request = GenerationRequest::new(
            self.spec.render_system(),
            prompt,
            SamplingParams::research(),
        );

        let output = self.backend.generate(&request).await?;
        debug!(
            op = "agent_run",
            response_len = output.len(),
            "research task complete"
        );

        Ok(output.trim().to_string())
    }

    /// Surface relevant background for a content fragment.
    ///
    /// Callers treat this as best-effort: wrap it with
    /// [`crate::best_effort`] so a failure degrades to an empty summary.
    pub async fn find_relevant_info(&self, fragment: &str) -> Result<String> {
        let task = TaskSpec {
            description: format!(
                "Identify information relevant to understanding the following lecture content:\n\n{fragment}"
            ),
            expected_output:
                "A short plain-text summary of relevant background, or an empty response if nothing applies."
                    .to_string(),
        };

        self.run(&task).await
    }
}
