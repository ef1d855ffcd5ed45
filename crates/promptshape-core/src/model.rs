//! Model catalog used throughout the **promptshape** workspace.
//!
//! Callers select a model by its catalog id (`"openai-gpt-4"`,
//! `"anthropic-claude-3-haiku"`, …).  The catalog maps every id onto the
//! provider that serves it and onto the provider's own model name, so the
//! gateway can dispatch without any string juggling at the call-site.
//!
//! # Adding more models
//!
//! 1. Append a [`ModelInfo`] entry to [`MODELS`].
//! 2. If the model belongs to a new provider, add a [`Provider`] variant and
//!    a backend crate implementing
//!    [`ChatCompletionProvider`](crate::provider::ChatCompletionProvider).
//!
//! # Example
//!
//! ```rust
//! use promptshape_core::model::{find_model, Provider};
//!
//! let model = find_model("anthropic-claude-3-haiku").unwrap();
//! assert_eq!(model.provider, Provider::Anthropic);
//! assert_eq!(model.provider_model, "claude-3-haiku-20240307");
//! ```
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Hosted LLM vendors the gateway can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    OpenAi,
    Anthropic,
}

impl Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "OpenAI"),
            Provider::Anthropic => write!(f, "Anthropic"),
        }
    }
}

/// One selectable model.
///
/// * `id` – stable identifier exchanged at the gateway boundary.
/// * `name` / `description` – human-facing labels.
/// * `provider_model` – the name the provider API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: Provider,
    pub description: &'static str,
    pub provider_model: &'static str,
}

/// Every model the gateway knows about, in presentation order.
pub static MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "openai-gpt-4",
        name: "GPT-4",
        provider: Provider::OpenAi,
        description: "Most capable model, best for complex tasks",
        provider_model: "gpt-4",
    },
    ModelInfo {
        id: "openai-gpt-3.5-turbo",
        name: "GPT-3.5 Turbo",
        provider: Provider::OpenAi,
        description: "Fast and efficient, good for most tasks",
        provider_model: "gpt-3.5-turbo",
    },
    ModelInfo {
        id: "anthropic-claude-3-opus",
        name: "Claude 3 Opus",
        provider: Provider::Anthropic,
        description: "Most capable Claude model",
        provider_model: "claude-3-opus-20240229",
    },
    ModelInfo {
        id: "anthropic-claude-3-sonnet",
        name: "Claude 3 Sonnet",
        provider: Provider::Anthropic,
        description: "Balanced performance and speed",
        provider_model: "claude-3-sonnet-20240229",
    },
    ModelInfo {
        id: "anthropic-claude-3-haiku",
        name: "Claude 3 Haiku",
        provider: Provider::Anthropic,
        description: "Fastest and most cost-effective",
        provider_model: "claude-3-haiku-20240307",
    },
];

/// Look up a catalog entry by its id.
pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|model| model.id == id)
}

/// The model preselected for a fresh session.
pub fn default_model() -> &'static ModelInfo {
    &MODELS[0]
}

/// All catalog entries served by `provider`.
pub fn models_for(provider: Provider) -> impl Iterator<Item = &'static ModelInfo> {
    MODELS.iter().filter(move |model| model.provider == provider)
}
