//! Prompt-side helpers of the **promptshape** workspace.
//!
//! * [`builder`] – fluent markdown/plain-text assembly.
//! * [`directive`] – splices the structured-output directive into system
//!   instructions.
//! * [`draft`] – the user prompt under edit, with its length metrics.
//! * [`presets`] – named system prompts and the default response structure.
//! * [`session`] – ties everything together and submits to a gateway.
pub mod builder;
pub mod directive;
pub mod draft;
pub mod presets;
pub mod session;

pub use directive::compose_instructions;
pub use draft::PromptDraft;
pub use session::{PromptSession, Submission};
