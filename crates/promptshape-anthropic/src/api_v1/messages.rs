//! Wire types for `POST /v1/messages`.
use promptshape_core::{
    client::DEFAULT_MAX_TOKENS,
    error::PromptShapeError,
    generic::{GenericRole, GenericUsageReport},
    provider::ChatCompleteParameters,
};
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MessagesRequest {
    pub model: String,
    /// Mandatory on this API, unlike OpenAI.
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl MessagesRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system: None,
            messages,
            temperature: None,
        }
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// System messages move into the top-level `system` field; the API only
/// accepts `user` and `assistant` turns in `messages`.
impl TryFrom<ChatCompleteParameters> for MessagesRequest {
    type Error = PromptShapeError;

    fn try_from(value: ChatCompleteParameters) -> Result<Self, Self::Error> {
        let model = map_model(value.model).ok_or_else(|| PromptShapeError::ModelNotSupported {
            provider: value.model.provider,
            model: value.model.id.to_owned(),
        })?;

        let mut system = Vec::new();
        let mut messages = Vec::with_capacity(value.messages.len());
        for message in value.messages {
            match message.role {
                GenericRole::System => system.push(message.content),
                GenericRole::User => messages.push(Message::user(message.content)),
                GenericRole::Assistant => messages.push(Message::assistant(message.content)),
            }
        }

        if messages.is_empty() {
            return Err(PromptShapeError::InvalidRequest(
                "at least one user message is required".into(),
            ));
        }

        Ok(Self {
            model: model.to_owned(),
            max_tokens: value.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            system: (!system.is_empty()).then(|| system.join("\n\n")),
            messages,
            temperature: value.temperature,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub input_tokens: i64,
    pub output_tokens: i64,
}

impl From<Usage> for GenericUsageReport {
    fn from(value: Usage) -> Self {
        GenericUsageReport {
            prompt_tokens: value.input_tokens,
            completion_tokens: value.output_tokens,
            total_tokens: value.input_tokens + value.output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub id: Option<String>,
    pub model: String,
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<String>,
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// All text blocks joined in order, or `None` when there are none.
    pub fn text(&self) -> Option<String> {
        let mut texts = self.content.iter().filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        });
        let first = texts.next()?;
        Some(texts.fold(first.to_owned(), |mut acc, text| {
            acc.push_str(text);
            acc
        }))
    }
}

#[cfg(test)]
mod tests {
    use promptshape_core::{generic::GenericMessage, model::find_model};
    use serde_json::json;

    use super::*;

    #[test]
    fn system_messages_are_lifted_out() {
        let params = ChatCompleteParameters::new(
            vec![
                GenericMessage::system("Be brief."),
                GenericMessage::user("hello"),
            ],
            find_model("anthropic-claude-3-opus").unwrap(),
        );

        let request = MessagesRequest::try_from(params).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "claude-3-opus-20240229",
                "max_tokens": 1000,
                "system": "Be brief.",
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn no_system_field_without_system_message() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("hello")],
            find_model("anthropic-claude-3-haiku").unwrap(),
        )
        .with_max_tokens(64);

        let value = serde_json::to_value(MessagesRequest::try_from(params).unwrap()).unwrap();
        assert_eq!(value["max_tokens"], 64);
        assert!(value.get("system").is_none());
    }

    #[test]
    fn openai_model_is_rejected() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("hello")],
            find_model("openai-gpt-4").unwrap(),
        );
        assert!(matches!(
            MessagesRequest::try_from(params),
            Err(PromptShapeError::ModelNotSupported { .. })
        ));
    }

    #[test]
    fn response_text_joins_text_blocks_only() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_1",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-haiku-20240307",
            "content": [
                { "type": "text", "text": "{\"a\":" },
                { "type": "tool_use", "id": "t1", "name": "x", "input": {} },
                { "type": "text", "text": "1}" }
            ],
            "stop_reason": "end_turn",
            "usage": { "input_tokens": 10, "output_tokens": 4 }
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
        let usage: GenericUsageReport = response.usage.unwrap().into();
        assert_eq!(usage.total_tokens, 14);
    }

    #[test]
    fn response_without_text_blocks() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "model": "claude-3-haiku-20240307",
            "content": []
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }
}
