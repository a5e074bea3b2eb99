//! Sampling parameters for completion requests.
//!
//! Each gateway operation calls the completion provider with a fixed,
//! deterministic-leaning preset. Presets are defined here so the editor
//! and the agent share one vocabulary for temperature / top-p / token caps.

use serde::{Deserialize, Serialize};

/// Sampling controls sent with every chat-completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Randomness of token selection. Low values keep edits close to the input.
    pub temperature: f32,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl SamplingParams {
    /// Preset for in-place text edits: the output must track the selection
    /// closely, so randomness stays low and the cap is small.
    pub const fn edit() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.9,
            max_tokens: 1000,
        }
    }

    /// Preset for merging notes with new lecture content. Documents can be
    /// long, so the token cap is generous.
    pub const fn merge() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            max_tokens: 4000,
        }
    }

    /// Preset for diagram markup generation. The grammar leaves no room
    /// for creative variation.
    pub const fn diagram() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.9,
            max_tokens: 1500,
        }
    }

    /// Preset for the research agent's free-text summarisation task.
    pub const fn research() -> Self {
        Self {
            temperature: 0.5,
            top_p: 0.9,
            max_tokens: 1000,
        }
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_deterministic_leaning() {
        assert!(SamplingParams::edit().temperature <= 0.3);
        assert!(SamplingParams::merge().temperature <= 0.3);
        assert!(SamplingParams::diagram().temperature <= 0.3);
    }

    #[test]
    fn test_merge_has_largest_token_cap() {
        let merge = SamplingParams::merge();
        assert!(merge.max_tokens > SamplingParams::edit().max_tokens);
        assert!(merge.max_tokens > SamplingParams::diagram().max_tokens);
    }

    #[test]
    fn test_params_serde_roundtrip() {
        let params = SamplingParams::edit();
        let json = serde_json::to_string(&params).unwrap();
        let parsed: SamplingParams = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);
    }
}
