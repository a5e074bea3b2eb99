//! Validation of model-produced Mermaid markup.
//!
//! The diagram instruction constrains output to three grammars, but the
//! provider's adherence is not guaranteed. Responses are normalized (code
//! fences stripped) and rejected with [`Error::ModelOutput`] unless they
//! open with a known grammar.

use lectern_core::{Error, Result};

/// Header tokens opening each accepted grammar. `graph` is the legacy
/// Mermaid spelling of a flowchart and still common in model output.
const GRAMMAR_OPENERS: [&str; 4] = ["flowchart", "graph", "sequenceDiagram", "classDiagram"];

/// Validate raw model output as Mermaid markup.
///
/// Strips a Markdown code fence if the model wrapped its answer in one,
/// then requires the first non-empty line to open one of the accepted
/// grammars. Returns the normalized markup.
pub fn validate(raw: &str) -> Result<String> {
    let markup = strip_fence(raw.trim());

    let first_line = markup
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    let opener = first_line.split_whitespace().next().unwrap_or("");

    if GRAMMAR_OPENERS.contains(&opener) {
        Ok(markup.trim().to_string())
    } else {
        Err(Error::ModelOutput(format!(
            "Expected Mermaid markup (flowchart, sequenceDiagram, or classDiagram), got: {}",
            truncate(first_line, 80)
        )))
    }
}

/// Remove a surrounding Markdown code fence, tolerating a language tag
/// such as ```` ```mermaid ````.
fn strip_fence(text: &str) -> String {
    if !text.starts_with("```") {
        return text.to_string();
    }

    text.lines()
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
