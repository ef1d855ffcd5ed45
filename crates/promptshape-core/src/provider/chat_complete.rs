use std::{future::Future, pin::Pin};

use crate::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericMessage},
    model::{ModelInfo, Provider},
};

/// Boxed future returned by [`ChatCompletionProvider::chat_complete`].
pub type ChatCompleteFuture<'p> =
    Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>;

/// A **backend** turns a chat prompt into a network call to a concrete provider
/// (OpenAI, Anthropic, …) and parses the text reply.
///
/// The trait is intentionally minimal:
///
/// * **`provider`** – which catalog provider this backend serves, used by the
///   gateway router as its lookup key.
/// * **`chat_complete`** – a *single* non-streaming round-trip.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so the trait stays
/// object-safe without pulling in `async_trait`; the router stores backends
/// as `Arc<dyn ChatCompletionProvider>`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Provider whose catalog entries this backend can serve.
    fn provider(&self) -> Provider;

    /// Execute the chat prompt and return the provider’s text reply.
    fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p>;
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters {
    pub messages: Vec<GenericMessage>,
    pub model: &'static ModelInfo,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl ChatCompleteParameters {
    pub fn new(messages: Vec<GenericMessage>, model: &'static ModelInfo) -> Self {
        Self {
            messages,
            model,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn messages(&self) -> &[GenericMessage] {
        &self.messages
    }

    pub fn model(&self) -> &'static ModelInfo {
        self.model
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
