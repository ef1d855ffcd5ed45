//! Builder‐style helper for assembling **plain-text / markdown prompts**.
//!
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use promptshape_prompt::builder::PromptBuilder;
//!
//! let text = PromptBuilder::new()
//!     .add_line("Instructions:")
//!     .add_bullet("Be brief")
//!     .add_bullet("Be kind")
//!     .finalize();
//!
//! assert_eq!(text, "Instructions:\n- Be brief\n- Be kind\n");
//! ```
//!
//! The builder performs no validation and no smart-formatting: newlines and
//! whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper owning a growing `String` buffer.
///
/// Call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "## {line}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a `- item` bullet and a trailing newline.
    pub fn add_bullet(mut self, item: impl Display) -> Self {
        writeln!(self.buffer, "- {item}").expect("failed to write buffer");
        self
    }

    /// Add a key–value pair in **bold**:
    /// `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Embed a code block fenced as `json`.
    pub fn add_text_json(self, content: impl Display) -> Self {
        self.add_line("```json").add_line(content).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }

    /// Like [`Self::finalize`], minus the newline closing the last line.
    pub fn finalize_trimmed(self) -> String {
        let mut buffer = self.buffer;
        if buffer.ends_with('\n') {
            buffer.pop();
        }
        buffer
    }
}
