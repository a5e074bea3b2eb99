//! Instruction templates for the note-editing operations.
//!
//! Free functions returning the system/user message pair sent to the
//! completion provider. Templates state an explicit output contract so
//! responses can be used verbatim (edit, merge) or validated (diagram).

/// System instruction for the edit operation.
pub fn edit_system() -> &'static str {
    "You are an expert note editor."
}

/// User prompt for the edit operation: rewrite `selection` per `suggestion`.
///
/// The model is asked for the edited selection only; the caller splices it
/// back into the full document.
pub fn edit_prompt(selection: &str, suggestion: &str) -> String {
    format!(
        r#"Original text: {selection}
Edit instruction: {suggestion}

Provide only the edited version of the text, maintaining the same style and format. If the instruction is to remove the text, reply with an empty string."#
    )
}

/// System instruction for the merge operation.
pub fn merge_system() -> &'static str {
    "You are an expert at processing and organizing lecture notes. Your task is to take the current notes and new lecture content and merge them into a well-structured, coherent document. Maintain academic tone and organize content logically."
}

/// User prompt for the merge operation.
///
/// `related` carries nearest-neighbor fragments from the context store and
/// `research` the agent's background summary; both sections are omitted
/// when empty so a degraded retrieval pass leaves the prompt identical to
/// the no-context case.
pub fn merge_prompt(current: &str, lecture: &str, related: &[String], research: &str) -> String {
    let mut prompt = format!(
        r#"Current Notes:
{current}

New Lecture Content:
{lecture}
"#
    );

    if !related.is_empty() {
        prompt.push_str("\nRelated material from earlier lectures:\n");
        for fragment in related {
            prompt.push_str("- ");
            prompt.push_str(fragment);
            prompt.push('\n');
        }
    }

    if !research.trim().is_empty() {
        prompt.push_str("\nBackground research:\n");
        prompt.push_str(research.trim());
        prompt.push('\n');
    }

    prompt.push_str(
        "\nPlease process and merge these into well-structured notes, maintaining the existing format and adding new information appropriately.",
    );

    prompt
}

/// System instruction for diagram generation. Output is constrained to one
/// of three Mermaid grammars with no surrounding prose.
pub fn diagram_system() -> &'static str {
    "You are a diagram generator. Convert the user's text into a single Mermaid diagram. Use exactly one of these diagram types: flowchart, sequenceDiagram, or classDiagram. Respond with the Mermaid markup only: no explanation, no surrounding prose, no code fences."
}

/// User prompt for diagram generation.
pub fn diagram_prompt(text: &str) -> String {
    format!("Generate a diagram for the following text:\n\n{text}")
}
