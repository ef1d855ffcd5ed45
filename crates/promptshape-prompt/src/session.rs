//! One user's prompt-composition state and its submission flow.
//!
//! A [`PromptSession`] bundles everything a submission needs: the prompt
//! draft, the selected model, the free-text system prompt and the response
//! structure. [`PromptSession::submit`] composes the final instructions,
//! forwards them to a [`ModelGateway`] and awaits the single outcome.
//!
//! Submitting borrows the session mutably, so a second submission cannot
//! start while one is outstanding. There is no cancellation; the caller
//! awaits either the reply or the error.
//!
//! ```rust,no_run
//! use promptshape_core::GatewayClient;
//! use promptshape_prompt::session::PromptSession;
//!
//! # async fn run(gateway: GatewayClient) -> promptshape_core::error::Result<()> {
//! let mut session = PromptSession::new();
//! session.draft_mut().set_text("I had two eggs and ran 5k.");
//! let submission = session.submit(&gateway).await?;
//! println!("{}", submission.response);
//! # Ok(())
//! # }
//! ```
use promptshape_core::{
    error::{PromptShapeError, Result},
    gateway::{GatewayRequest, ModelGateway},
    generic::GenericUsageReport,
    model::{ModelInfo, default_model, find_model},
};
use promptshape_schema::FieldTree;

use crate::{
    builder::PromptBuilder,
    directive::compose_instructions,
    draft::PromptDraft,
    presets::{default_preset, default_response_fields, find_preset},
};

/// Outcome of a successful [`PromptSession::submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub prompt: String,
    pub response: String,
    pub model: String,
    /// The system prompt as the user wrote it, before composition.
    pub system_prompt: String,
    /// Pretty-printed schema document, present when structured output was
    /// requested.
    pub json_schema: Option<String>,
    pub usage: Option<GenericUsageReport>,
}

impl Submission {
    /// Markdown transcript entry for this exchange.
    pub fn to_markdown(&self) -> String {
        let mut builder = PromptBuilder::new()
            .add_section_h2("Submission")
            .add_key_value("Model", &self.model)
            .add_key_value("Prompt", &self.prompt)
            .add_blank_line()
            .add_line(&self.response);

        if let Some(schema) = &self.json_schema {
            builder = builder.add_blank_line().add_text_json(schema);
        }

        builder.finalize()
    }
}

#[derive(Debug, Clone)]
pub struct PromptSession {
    draft: PromptDraft,
    model: &'static ModelInfo,
    system_prompt: String,
    fields: FieldTree,
    structured_output: bool,
}

impl Default for PromptSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSession {
    /// Default model, default system-prompt preset, the default response
    /// structure and structured output switched on.
    pub fn new() -> Self {
        Self {
            draft: PromptDraft::new(),
            model: default_model(),
            system_prompt: default_preset().prompt.to_owned(),
            fields: default_response_fields(),
            structured_output: true,
        }
    }

    pub fn with_draft(mut self, draft: PromptDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_fields(mut self, fields: FieldTree) -> Self {
        self.fields = fields;
        self
    }

    pub fn draft(&self) -> &PromptDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PromptDraft {
        &mut self.draft
    }

    pub fn model(&self) -> &'static ModelInfo {
        self.model
    }

    /// Select a catalog model by id.
    ///
    /// # Errors
    ///
    /// * [`PromptShapeError::UnknownModel`] – the id is not in the catalog;
    ///   the previous selection is kept.
    pub fn select_model(&mut self, id: &str) -> Result<()> {
        self.model = find_model(id).ok_or_else(|| PromptShapeError::UnknownModel(id.to_owned()))?;
        Ok(())
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn set_system_prompt(&mut self, system_prompt: impl Into<String>) {
        self.system_prompt = system_prompt.into();
    }

    /// Load a named preset into the system prompt. Returns `false` and keeps
    /// the current prompt if no preset has that name.
    pub fn select_preset(&mut self, name: &str) -> bool {
        match find_preset(name) {
            Some(preset) => {
                self.system_prompt = preset.prompt.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn fields(&self) -> &FieldTree {
        &self.fields
    }

    /// Mutable access for tree edits (insert / update / remove).
    pub fn fields_mut(&mut self) -> &mut FieldTree {
        &mut self.fields
    }

    pub fn structured_output(&self) -> bool {
        self.structured_output
    }

    pub fn set_structured_output(&mut self, enabled: bool) {
        self.structured_output = enabled;
    }

    /// The system instructions that the next submission will send.
    pub fn instructions(&self) -> String {
        if self.structured_output {
            compose_instructions(&self.system_prompt, &self.fields)
        } else {
            self.system_prompt.clone()
        }
    }

    /// Build the gateway request for the current state.
    ///
    /// # Errors
    ///
    /// * [`PromptShapeError::InvalidRequest`] – the draft is blank or over
    ///   its length limit.
    pub fn request(&self) -> Result<GatewayRequest> {
        if self.draft.is_blank() {
            return Err(PromptShapeError::InvalidRequest("prompt is empty".into()));
        }
        if self.draft.is_over_limit() {
            return Err(PromptShapeError::InvalidRequest(format!(
                "prompt exceeds {} characters",
                self.draft.max_length()
            )));
        }

        Ok(GatewayRequest::new(self.draft.text(), self.model.id)
            .with_system_prompt(self.instructions()))
    }

    /// Send the current prompt and wait for the reply.
    ///
    /// On success the draft is cleared; on failure it is left untouched so
    /// the user can retry manually.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<Submission>
    where
        G: ModelGateway + ?Sized,
    {
        let request = self.request()?;
        let prompt = request.prompt.clone();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            model = %request.model,
            structured = self.structured_output,
            "submitting prompt"
        );

        let reply = gateway.generate(request).await?;

        let json_schema = self
            .structured_output
            .then(|| self.fields.schema_preview());

        #[cfg(feature = "tracing")]
        tracing::info!(model = %reply.model, chars = reply.response.len(), "submission completed");

        self.draft.clear();

        Ok(Submission {
            prompt,
            response: reply.response,
            model: reply.model,
            system_prompt: self.system_prompt.clone(),
            json_schema,
            usage: reply.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use promptshape_core::gateway::{GatewayResponse, GenerateFuture};
    use promptshape_schema::{FieldKind, FieldPatch};

    use super::*;

    /// Replies with a fixed text, or fails, and remembers the requests.
    #[derive(Default)]
    struct MockGateway {
        fail: bool,
        requests: Mutex<Vec<GatewayRequest>>,
    }

    impl ModelGateway for MockGateway {
        fn generate<'a>(&'a self, request: GatewayRequest) -> GenerateFuture<'a> {
            self.requests.lock().unwrap().push(request.clone());
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    return Err(PromptShapeError::Backend("upstream unavailable".into()));
                }
                Ok(GatewayResponse {
                    response: "{\"response\":\"hi\"}".into(),
                    model: request.model,
                    usage: None,
                    system_prompt: request.system_prompt,
                })
            })
        }
    }

    fn session_with_text(text: &str) -> PromptSession {
        let mut session = PromptSession::new();
        assert!(session.draft_mut().set_text(text));
        session
    }

    #[test]
    fn fresh_session_defaults() {
        let session = PromptSession::new();
        assert_eq!(session.model().id, "openai-gpt-4");
        assert_eq!(session.system_prompt(), default_preset().prompt);
        assert_eq!(session.fields().len(), 1);
        assert!(session.structured_output());
        assert!(session.request().is_err());
    }

    #[test]
    fn select_model_keeps_previous_on_unknown_id() {
        let mut session = PromptSession::new();
        session.select_model("anthropic-claude-3-sonnet").unwrap();
        assert_eq!(session.model().id, "anthropic-claude-3-sonnet");

        let err = session.select_model("gpt-5").unwrap_err();
        assert!(matches!(err, PromptShapeError::UnknownModel(_)));
        assert_eq!(session.model().id, "anthropic-claude-3-sonnet");
    }

    #[test]
    fn select_preset_replaces_system_prompt() {
        let mut session = PromptSession::new();
        assert!(session.select_preset("Custom"));
        assert_eq!(session.system_prompt(), "");
        assert!(!session.select_preset("Pirate"));
        assert_eq!(session.system_prompt(), "");
    }

    #[test]
    fn instructions_follow_toggle_and_field_names() {
        let mut session = PromptSession::new();
        session.set_system_prompt("sys");
        assert!(session.instructions().starts_with("sys\n\nCRITICAL:"));

        session.set_structured_output(false);
        assert_eq!(session.instructions(), "sys");

        session.set_structured_output(true);
        let only = session.fields().roots().next().unwrap().id();
        session.fields_mut().remove(only);
        assert_eq!(session.instructions(), "sys");
    }

    #[tokio::test]
    async fn submit_sends_composed_instructions_and_clears_draft() {
        let gateway = MockGateway::default();
        let mut session = session_with_text("hello there");
        session.set_system_prompt("Answer politely.");
        session.select_model("anthropic-claude-3-haiku").unwrap();

        let submission = session.submit(&gateway).await.unwrap();

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "hello there");
        assert_eq!(requests[0].model, "anthropic-claude-3-haiku");
        assert_eq!(
            requests[0].system_prompt.as_deref(),
            Some(session.instructions().as_str())
        );

        assert_eq!(submission.prompt, "hello there");
        assert_eq!(submission.response, "{\"response\":\"hi\"}");
        assert_eq!(submission.system_prompt, "Answer politely.");
        assert_eq!(submission.json_schema, Some(session.fields().schema_preview()));
        assert_eq!(session.draft().text(), "");
    }

    #[tokio::test]
    async fn submit_without_structured_output_omits_schema() {
        let gateway = MockGateway::default();
        let mut session = session_with_text("plain");
        session.set_structured_output(false);

        let submission = session.submit(&gateway).await.unwrap();

        assert_eq!(submission.json_schema, None);
        assert_eq!(
            gateway.requests.lock().unwrap()[0].system_prompt.as_deref(),
            Some(default_preset().prompt)
        );
    }

    #[tokio::test]
    async fn failed_submission_keeps_draft() {
        let gateway = MockGateway {
            fail: true,
            ..Default::default()
        };
        let mut session = session_with_text("keep me");

        let err = session.submit(&gateway).await.unwrap_err();

        assert_eq!(err.to_string(), "backend returned an error: upstream unavailable");
        assert_eq!(session.draft().text(), "keep me");
    }

    #[tokio::test]
    async fn blank_draft_never_reaches_gateway() {
        let gateway = MockGateway::default();
        let mut session = session_with_text("   ");

        let err = session.submit(&gateway).await.unwrap_err();

        assert!(matches!(err, PromptShapeError::InvalidRequest(_)));
        assert!(gateway.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn overlong_draft_never_reaches_gateway() {
        let gateway = MockGateway::default();
        let mut session = session_with_text("two eggs and toast");
        session.draft_mut().set_max_length(8);

        let err = session.submit(&gateway).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            PromptShapeError::InvalidRequest("prompt exceeds 8 characters".into()).to_string()
        );
        assert!(gateway.requests.lock().unwrap().is_empty());
        assert_eq!(session.draft().text(), "two eggs and toast");
    }

    #[test]
    fn submission_markdown_embeds_schema() {
        let mut fields = FieldTree::new();
        fields.insert_with(None, FieldPatch::new().name("n").kind(FieldKind::Number));
        let submission = Submission {
            prompt: "count".into(),
            response: "{\"n\": 3}".into(),
            model: "openai-gpt-4".into(),
            system_prompt: String::new(),
            json_schema: Some(fields.schema_preview()),
            usage: None,
        };

        let markdown = submission.to_markdown();
        assert!(markdown.starts_with("## Submission\n**Model**: openai-gpt-4\n**Prompt**: count\n"));
        assert!(markdown.contains("```json\n{\n  \"type\": \"object\""));
        assert!(markdown.ends_with("```\n"));
    }
}
