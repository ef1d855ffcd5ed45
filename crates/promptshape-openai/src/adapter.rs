use std::{env, sync::Arc, time::Duration};

use promptshape_core::error::{PromptShapeError, Result};
use reqwest::Client as HttpClient;

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`promptshape_core::provider::ChatCompletionProvider`].
///
/// Register it with a [`promptshape_core::GatewayClient`]; the adapter
/// itself only exposes the underlying client.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use promptshape_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
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

    /// Point the adapter at a compatible endpoint instead of
    /// `https://api.openai.com/v1`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`PromptShapeError::Invalid`] – if the API key is missing or blank.
    /// * [`PromptShapeError::Backend`] – if the HTTP client cannot be built.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                PromptShapeError::Invalid(format!("missing env variable: `{API_KEY_ENV}`"))
            })?;

        let http = HttpClient::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(crate::error::OpenAiError::from)?;

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::with_http(api_key, http, self.base_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_api_key() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert_eq!(err.to_string(), "invalid: missing env variable: `OPENAI_API_KEY`");

        let err = OpenAiAdapterBuilder::new().with_api_key("  ").build().unwrap_err();
        assert!(matches!(err, PromptShapeError::Invalid(_)));
    }

    #[test]
    fn build_with_explicit_key_and_base_url() {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("sk-test")
            .with_base_url("http://localhost:8080/v1")
            .build()
            .unwrap();
        assert_eq!(adapter.client().base_url(), "http://localhost:8080/v1");
    }
}
