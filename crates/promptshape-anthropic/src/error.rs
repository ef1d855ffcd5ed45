use promptshape_core::error::PromptShapeError;
use reqwest::{StatusCode, header::InvalidHeaderValue};

#[derive(Debug, thiserror::Error)]
pub enum AnthropicError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key is not a valid header value")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("Anthropic returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Anthropic format error: {0}")]
    Format(String),
}

impl From<AnthropicError> for PromptShapeError {
    fn from(value: AnthropicError) -> Self {
        PromptShapeError::Backend(Box::new(value))
    }
}
