//! The **Model Gateway** boundary.
//!
//! A gateway accepts a prompt, a catalog model id and optional system
//! instructions, and answers with generated text. The request/response
//! structs serialise to the camelCase JSON shape exchanged with browser
//! front ends:
//!
//! ```json
//! { "prompt": "…", "model": "openai-gpt-4", "systemPrompt": "…" }
//! { "response": "…", "model": "openai-gpt-4", "usage": { … }, "systemPrompt": "…" }
//! ```
use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

use crate::{error::Result, generic::GenericUsageReport};

/// Boxed future returned by [`ModelGateway::generate`].
pub type GenerateFuture<'a> = Pin<Box<dyn Future<Output = Result<GatewayResponse>> + Send + 'a>>;

/// Anything that can turn a [`GatewayRequest`] into generated text.
///
/// [`GatewayClient`](crate::client::GatewayClient) is the production
/// implementation; tests substitute an in-memory gateway.
pub trait ModelGateway: Send + Sync {
    fn generate<'a>(&'a self, request: GatewayRequest) -> GenerateFuture<'a>;
}

impl<G: ModelGateway + ?Sized> ModelGateway for std::sync::Arc<G> {
    fn generate<'a>(&'a self, request: GatewayRequest) -> GenerateFuture<'a> {
        (**self).generate(request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    pub prompt: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl GatewayRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub response: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<GenericUsageReport>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}
