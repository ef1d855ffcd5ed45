//! Structured-output **instruction composition**.
//!
//! When the field tree names at least one field, the derived example payload
//! is spliced into the system instructions together with a fixed set of
//! formatting rules, so the model's free-text reply follows the requested
//! JSON structure:
//!
//! ```text
//! <system instructions>
//!
//! CRITICAL: Your response must be ONLY valid JSON with no additional text.
//!
//! Required JSON structure:
//! <pretty-printed example payload>
//!
//! Instructions:
//! - Follow the exact structure shown above
//! - All values must match the specified types
//! - Use the examples as a guide for expected values
//! ```
//!
//! Without any named field the instructions pass through unmodified.
use promptshape_schema::FieldTree;

use crate::builder::PromptBuilder;

pub const JSON_ONLY_NOTICE: &str =
    "CRITICAL: Your response must be ONLY valid JSON with no additional text.";
pub const STRUCTURE_HEADING: &str = "Required JSON structure:";
pub const RULES_HEADING: &str = "Instructions:";
pub const FORMAT_RULES: [&str; 3] = [
    "Follow the exact structure shown above",
    "All values must match the specified types",
    "Use the examples as a guide for expected values",
];

/// Append the structured-output directive for `fields` to `system_prompt`.
///
/// ```rust
/// use promptshape_prompt::directive::compose_instructions;
/// use promptshape_schema::{FieldPatch, FieldTree};
///
/// let empty = FieldTree::new();
/// assert_eq!(compose_instructions("Be nice.", &empty), "Be nice.");
///
/// let mut tree = FieldTree::new();
/// tree.insert_with(None, FieldPatch::new().name("answer"));
/// let composed = compose_instructions("Be nice.", &tree);
/// assert!(composed.starts_with("Be nice.\n\nCRITICAL:"));
/// assert!(composed.contains("\"answer\": \"example string\""));
/// ```
pub fn compose_instructions(system_prompt: &str, fields: &FieldTree) -> String {
    if !fields.has_named_field() {
        return system_prompt.to_owned();
    }

    let builder = PromptBuilder::new()
        .add_line(system_prompt)
        .add_blank_line()
        .add_line(JSON_ONLY_NOTICE)
        .add_blank_line()
        .add_line(STRUCTURE_HEADING)
        .add_line(fields.example_preview())
        .add_blank_line()
        .add_line(RULES_HEADING);

    FORMAT_RULES
        .iter()
        .fold(builder, |builder, rule| builder.add_bullet(rule))
        .finalize_trimmed()
}
