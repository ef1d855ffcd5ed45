//! Multi-provider router implementing the [`ModelGateway`] contract.
//!
//! The client owns at most one backend per [`Provider`].  A request names a
//! catalog model id; the router resolves it through
//! [`find_model`](crate::model::find_model), picks the backend registered for
//! that model's provider and forwards a [`ChatCompleteParameters`] value.
//!
//! ```rust
//! use promptshape_core::{
//!     client::GatewayClient,
//!     generic::GenericChatCompletionResponse,
//!     model::Provider,
//!     provider::{ChatCompleteFuture, ChatCompleteParameters, ChatCompletionProvider},
//! };
//!
//! struct Echo;
//!
//! impl ChatCompletionProvider for Echo {
//!     fn provider(&self) -> Provider {
//!         Provider::OpenAi
//!     }
//!
//!     fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p> {
//!         Box::pin(async move {
//!             Ok(GenericChatCompletionResponse {
//!                 content: params.messages.last().unwrap().content.clone(),
//!                 usage: None,
//!             })
//!         })
//!     }
//! }
//!
//! let client = GatewayClient::new().with_backend(Echo);
//! assert!(client.backend(Provider::OpenAi).is_some());
//! ```
use std::{collections::HashMap, sync::Arc};

use crate::{
    error::{PromptShapeError, Result},
    gateway::{GatewayRequest, GatewayResponse, GenerateFuture, ModelGateway},
    generic::GenericMessage,
    model::{find_model, Provider},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

/// Completion budget applied when the caller does not configure one.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// A gateway bound to a set of provider backends.
///
/// Cloning is cheap: backends are shared behind `Arc`s.
#[derive(Clone)]
pub struct GatewayClient {
    backends: HashMap<Provider, Arc<dyn ChatCompletionProvider>>,
    max_tokens: u32,
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("providers", &self.backends.keys().collect::<Vec<_>>())
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl GatewayClient {
    /// Create a client without any backend.
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Register `backend` for the provider it reports. A later registration
    /// for the same provider replaces the earlier one.
    pub fn with_backend(mut self, backend: impl ChatCompletionProvider + 'static) -> Self {
        self.backends.insert(backend.provider(), Arc::new(backend));
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Access the backend registered for `provider`.
    pub fn backend(&self, provider: Provider) -> Option<&Arc<dyn ChatCompletionProvider>> {
        self.backends.get(&provider)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Resolve the request into a backend and the parameters to send it.
    fn route(
        &self,
        request: &GatewayRequest,
    ) -> Result<(Arc<dyn ChatCompletionProvider>, ChatCompleteParameters)> {
        if request.prompt.is_empty() || request.model.is_empty() {
            return Err(PromptShapeError::InvalidRequest(
                "prompt and model are required".into(),
            ));
        }

        let model = find_model(&request.model)
            .ok_or_else(|| PromptShapeError::UnknownModel(request.model.clone()))?;

        let backend = self.backends.get(&model.provider).cloned().ok_or(
            PromptShapeError::BackendNotConfigured {
                provider: model.provider,
            },
        )?;

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request
            .system_prompt
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            messages.push(GenericMessage::system(system));
        }
        messages.push(GenericMessage::user(request.prompt.as_str()));

        let params = ChatCompleteParameters::new(messages, model).with_max_tokens(self.max_tokens);

        Ok((backend, params))
    }
}

impl ModelGateway for GatewayClient {
    fn generate<'a>(&'a self, request: GatewayRequest) -> GenerateFuture<'a> {
        Box::pin(async move {
            let (backend, params) = self.route(&request)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                model = %request.model,
                provider = %params.model.provider,
                messages = params.messages.len(),
                "dispatching gateway request"
            );

            let completion = backend.chat_complete(params).await;

            #[cfg(feature = "tracing")]
            if let Err(err) = &completion {
                tracing::warn!(model = %request.model, error = %err, "gateway request failed");
            }

            let completion = completion?;

            Ok(GatewayResponse {
                response: completion.content,
                model: request.model,
                usage: completion.usage,
                // An empty system prompt echoes as `null`, blank ones verbatim.
                system_prompt: request.system_prompt.filter(|system| !system.is_empty()),
            })
        })
    }
}
