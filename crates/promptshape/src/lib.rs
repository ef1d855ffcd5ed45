//! # `promptshape` – the umbrella crate
//!
//! One dependency line for the whole workspace:
//!
//! | Crate                       | What it provides                                                        |
//! |-----------------------------|-------------------------------------------------------------------------|
//! | **`promptshape-core`**      | Model catalog, gateway contract and router, backend trait, errors       |
//! | **`promptshape-schema`**    | The field tree and its schema / example derivations                     |
//! | **`promptshape-prompt`**    | Prompt builder, instruction composition, drafts, presets, sessions      |
//! | **`promptshape-openai`**    | OpenAI chat-completions backend *(feature `openai`)*                    |
//! | **`promptshape-anthropic`** | Anthropic Messages backend *(feature `anthropic`)*                      |
//!
//! Both provider backends are enabled by default. Disable default features
//! to stay provider-agnostic and plug in your own
//! [`ChatCompletionProvider`](provider::ChatCompletionProvider).
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use promptshape::{
//!     GatewayClient,
//!     prompt::PromptSession,
//!     schema::{FieldKind, FieldPatch},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let gateway = GatewayClient::new()
//!         .with_backend(promptshape::openai::OpenAiAdapterBuilder::new_from_env().build()?);
//!
//!     let mut session = PromptSession::new();
//!     session
//!         .fields_mut()
//!         .insert_with(None, FieldPatch::new().name("mood").kind(FieldKind::String));
//!     session.draft_mut().set_text("How do I feel after a 10k run?");
//!
//!     let submission = session.submit(&gateway).await?;
//!     println!("{}", submission.response);
//!     Ok(())
//! }
//! ```
pub use promptshape_core::*;
pub use promptshape_prompt as prompt;
pub use promptshape_schema as schema;

#[cfg(feature = "anthropic")]
pub use promptshape_anthropic as anthropic;
#[cfg(feature = "openai")]
pub use promptshape_openai as openai;
