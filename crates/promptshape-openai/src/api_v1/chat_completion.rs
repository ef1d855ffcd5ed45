use promptshape_core::error::PromptShapeError;
use promptshape_core::generic::{GenericMessage, GenericRole, GenericUsageReport};
use promptshape_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            max_tokens: None,
            temperature: None,
            top_p: None,
            n: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    n: i64
);

impl TryFrom<ChatCompleteParameters> for ChatCompletionRequest {
    type Error = PromptShapeError;

    fn try_from(value: ChatCompleteParameters) -> Result<Self, Self::Error> {
        let model = map_model(value.model).ok_or_else(|| PromptShapeError::ModelNotSupported {
            provider: value.model.provider,
            model: value.model.id.to_owned(),
        })?;

        Ok(Self {
            model: model.to_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            max_tokens: value.max_tokens,
            temperature: value.temperature,
            top_p: None,
            n: None,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    #[serde(other)]
    Other,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

impl From<common::Usage> for GenericUsageReport {
    fn from(value: common::Usage) -> Self {
        GenericUsageReport {
            prompt_tokens: value.prompt_tokens as i64,
            completion_tokens: value.completion_tokens as i64,
            total_tokens: value.total_tokens as i64,
        }
    }
}
