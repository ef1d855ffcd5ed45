//! Generic message and role types used by the *promptshape-core* crate.
//!
//! They mirror the concepts exposed by most provider APIs (“system”,
//! “user”, “assistant”) and convert into provider-specific structs via a
//! simple `From`/`Into` in each backend crate.
//!
//! Only data that is **required by every back-end** lives here. Anything
//! provider-specific belongs in the backend's own wire types.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lightweight container representing a single chat message that is
/// independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 content.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// ```rust
    /// use promptshape_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful bot.", GenericRole::System);
    /// assert_eq!(sys.role.to_string(), "system");
    /// ```
    pub fn new(content: impl Into<String>, role: GenericRole) -> Self {
        Self {
            content: content.into(),
            role,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(content, GenericRole::System)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, GenericRole::User)
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// “System” messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Text reply of a single, non-streaming completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericChatCompletionResponse {
    pub content: String,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
