use std::sync::Arc;

use promptshape_core::{
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    model::Provider,
    provider::{ChatCompleteFuture, ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionRequest, FinishReason},
    error::OpenAiError,
};

impl ChatCompletionProvider for OpenAiAdapter {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn chat_complete<'p>(&'p self, params: ChatCompleteParameters) -> ChatCompleteFuture<'p> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(model = %request.model, messages = request.messages.len(), "OpenAI chat completion");

            let response = client.chat_completion(request).await?;
            let usage: Option<GenericUsageReport> = response.usage.map(Into::into);

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenAiError::Format("response has no choices".into()).into());
            };

            if first_choice.finish_reason == Some(FinishReason::ContentFilter) {
                return Err(OpenAiError::Format("response was blocked by the content filter".into()).into());
            }

            let message = first_choice.message;
            let content = match (message.content, message.refusal) {
                (Some(content), _) => content,
                (None, Some(refusal)) => {
                    return Err(OpenAiError::Format(format!("model refused: {refusal}")).into());
                }
                (None, None) => {
                    return Err(OpenAiError::Format("response message has no content".into()).into());
                }
            };

            Ok(GenericChatCompletionResponse { content, usage })
        })
    }
}
