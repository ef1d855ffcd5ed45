use std::{env, sync::Arc, time::Duration};

use promptshape_core::error::{PromptShapeError, Result};
use reqwest::Client as HttpClient;

use crate::{
    client::{AnthropicClient, DEFAULT_TIMEOUT},
    error::AnthropicError,
};

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// [`AnthropicClient`] packaged as a
/// [`ChatCompletionProvider`](promptshape_core::provider::ChatCompletionProvider).
#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    pub(crate) client: Arc<AnthropicClient>,
}

impl AnthropicAdapter {
    pub fn client(&self) -> &AnthropicClient {
        &self.client
    }
}

/// Builder for [`AnthropicAdapter`].
///
/// ```rust,no_run
/// use promptshape_anthropic::AnthropicAdapterBuilder;
///
/// let backend = AnthropicAdapterBuilder::new_from_env()
///     .build()
///     .expect("ANTHROPIC_API_KEY must be set");
/// ```
#[derive(Debug, Default)]
pub struct AnthropicAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl AnthropicAdapterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `ANTHROPIC_API_KEY`. Missing keys only surface during
    /// [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// # Errors
    ///
    /// * [`PromptShapeError::Invalid`] – if the API key is missing or blank.
    /// * [`PromptShapeError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<AnthropicAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                PromptShapeError::Invalid(format!("missing env variable: `{API_KEY_ENV}`"))
            })?;

        let http = HttpClient::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(AnthropicError::from)?;

        Ok(AnthropicAdapter {
            client: Arc::new(AnthropicClient::with_http(api_key, http, self.base_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_api_key() {
        let err = AnthropicAdapterBuilder::new().build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid: missing env variable: `ANTHROPIC_API_KEY`"
        );
    }

    #[test]
    fn base_url_defaults_to_public_api() {
        let adapter = AnthropicAdapterBuilder::new()
            .with_api_key("sk-ant-test")
            .build()
            .unwrap();
        assert_eq!(adapter.client().base_url(), "https://api.anthropic.com/v1");
    }
}
