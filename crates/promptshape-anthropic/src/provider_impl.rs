use std::sync::Arc;

use promptshape_core::{
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    model::Provider,
    provider::{ChatCompleteFuture, ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{AnthropicAdapter, api_v1::MessagesRequest, error::AnthropicError};

impl ChatCompletionProvider for AnthropicAdapter {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = MessagesRequest::try_from(params)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                model = %request.model,
                has_system = request.system.is_some(),
                "Anthropic messages request"
            );

            let response = client.messages(request).await?;
            let usage: Option<GenericUsageReport> = response.usage.map(Into::into);

            let content = response
                .text()
                .ok_or_else(|| AnthropicError::Format("response has no text content".into()))?;

            Ok(GenericChatCompletionResponse { content, usage })
        })
    }
}

#[cfg(test)]
mod tests {
    use promptshape_core::{
        GatewayClient,
        error::PromptShapeError,
        gateway::{GatewayRequest, ModelGateway},
    };
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    use crate::AnthropicAdapterBuilder;

    fn gateway(server: &MockServer) -> GatewayClient {
        let adapter = AnthropicAdapterBuilder::new()
            .with_api_key("sk-ant-test")
            .with_base_url(server.uri())
            .build()
            .unwrap();
        GatewayClient::new().with_backend(adapter)
    }

    #[tokio::test]
    async fn gateway_round_trip_through_anthropic_adapter() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(body_json(json!({
                "model": "claude-3-sonnet-20240229",
                "max_tokens": 1000,
                "system": "Answer in JSON.",
                "messages": [{ "role": "user", "content": "hello" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_1",
                "model": "claude-3-sonnet-20240229",
                "content": [{ "type": "text", "text": "{\"response\":\"hi\"}" }],
                "stop_reason": "end_turn",
                "usage": { "input_tokens": 30, "output_tokens": 7 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = gateway(&server)
            .generate(
                GatewayRequest::new("hello", "anthropic-claude-3-sonnet")
                    .with_system_prompt("Answer in JSON."),
            )
            .await
            .unwrap();

        assert_eq!(reply.response, "{\"response\":\"hi\"}");
        assert_eq!(reply.model, "anthropic-claude-3-sonnet");
        assert_eq!(reply.system_prompt.as_deref(), Some("Answer in JSON."));
        assert_eq!(reply.usage.unwrap().total_tokens, 37);
    }

    #[tokio::test]
    async fn response_without_text_is_a_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "claude-3-opus-20240229",
                "content": [],
                "stop_reason": "end_turn"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .generate(GatewayRequest::new("hello", "anthropic-claude-3-opus"))
            .await
            .unwrap_err();

        assert!(matches!(err, PromptShapeError::Backend(_)));
        assert!(err.to_string().contains("no text content"));
    }
}
