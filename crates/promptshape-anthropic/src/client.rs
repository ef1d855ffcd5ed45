use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{MessagesRequest, MessagesResponse},
    error::AnthropicError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const API_VERSION: &str = "2023-06-01";


/// HTTP client for the Messages endpoint. Cloning shares the connection pool.
#[derive(Clone)]
pub struct AnthropicClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, AnthropicError> {
        let http = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self::with_http(api_key, http, None))
    }

    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url
                .map(|base| base.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub async fn messages(
        &self,
        request: MessagesRequest,
    ) -> Result<MessagesResponse, AnthropicError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-api-key", HeaderValue::from_str(&self.api_key)?);
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));

        let url = format!("{}/messages", self.base);
        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "Anthropic request failed");

            return Err(AnthropicError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    use super::*;
    use crate::api_v1::Message;

    fn request() -> MessagesRequest {
        MessagesRequest::new("claude-3-haiku-20240307", vec![Message::user("hello")])
    }

    #[tokio::test]
    async fn sends_key_and_version_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(header("x-api-key", "sk-ant-test"))
            .and(header("anthropic-version", API_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_1",
                "model": "claude-3-haiku-20240307",
                "content": [{ "type": "text", "text": "hi" }],
                "stop_reason": "end_turn",
                "usage": { "input_tokens": 3, "output_tokens": 1 }
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = AnthropicClient::with_http("sk-ant-test", HttpClient::new(), Some(server.uri()));

        let response = client.messages(request()).await.unwrap();

        assert_eq!(response.text().as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(529).set_body_json(json!({
                "type": "error",
                "error": { "type": "overloaded_error", "message": "Overloaded" }
            })))
            .mount(&server)
            .await;
        let client = AnthropicClient::with_http("sk-ant-test", HttpClient::new(), Some(server.uri()));

        let err = client.messages(request()).await.unwrap_err();

        assert!(matches!(err, AnthropicError::Api { status, .. } if status.as_u16() == 529));
        assert!(err.to_string().contains("Overloaded"));
    }
}
