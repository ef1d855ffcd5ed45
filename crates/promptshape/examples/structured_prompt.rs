//! # Structured prompt against a hosted model
//!
//! Registers every backend whose API key is present in the environment,
//! asks for a JSON answer in a custom shape and prints the reply.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-…         # and/or
//! export ANTHROPIC_API_KEY=sk-ant-…
//! cargo run -p promptshape --example structured_prompt -- anthropic-claude-3-haiku
//! ```
//!
//! The optional argument picks a catalog model id; it defaults to the first
//! model whose provider is configured.
use promptshape::{
    GatewayClient,
    anthropic::AnthropicAdapterBuilder,
    model::{MODELS, find_model},
    openai::OpenAiAdapterBuilder,
    prompt::PromptSession,
    schema::{FieldKind, FieldPatch},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut gateway = GatewayClient::new();
    if let Ok(openai) = OpenAiAdapterBuilder::new_from_env().build() {
        gateway = gateway.with_backend(openai);
    }
    if let Ok(anthropic) = AnthropicAdapterBuilder::new_from_env().build() {
        gateway = gateway.with_backend(anthropic);
    }

    let model = match std::env::args().nth(1) {
        Some(id) => find_model(&id).ok_or_else(|| anyhow::anyhow!("unknown model `{id}`"))?,
        None => MODELS
            .iter()
            .find(|model| gateway.backend(model.provider).is_some())
            .ok_or_else(|| anyhow::anyhow!("set OPENAI_API_KEY or ANTHROPIC_API_KEY"))?,
    };

    let mut session = PromptSession::new();
    session.select_model(model.id)?;
    session.select_preset("Academic Tutor");

    let fields = session.fields_mut();
    let concepts = fields
        .insert_with(
            None,
            FieldPatch::new()
                .name("keyConcepts")
                .kind(FieldKind::Array)
                .description("The ideas a student must understand first"),
        )
        .ok_or_else(|| anyhow::anyhow!("root insert cannot miss"))?;
    fields.insert_with(Some(concepts), FieldPatch::new().name("concept"));
    fields.insert_with(
        None,
        FieldPatch::new()
            .name("difficulty")
            .kind(FieldKind::Number)
            .description("1 (easy) to 5 (hard)")
            .required(true),
    );

    session
        .draft_mut()
        .set_text("Explain Rust's borrow checker to a Python developer.");

    println!("{} → {}", model.name, model.provider);
    let submission = session.submit(&gateway).await?;

    println!("{}", submission.to_markdown());
    if let Some(usage) = submission.usage {
        println!("tokens: {} in / {} out", usage.prompt_tokens, usage.completion_tokens);
    }

    Ok(())
}
