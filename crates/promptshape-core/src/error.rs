//! Unified error type exposed by **`promptshape-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to the [`GatewayClient`](crate::client::GatewayClient).
//! Field-tree mutations never produce errors; only the gateway boundary and
//! the submission flow do.

use thiserror::Error;

use crate::model::Provider;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PromptShapeError>;

#[derive(Debug, Error)]
pub enum PromptShapeError {
    /// A request targeted a provider for which no backend has been
    /// registered in the [`GatewayClient`](crate::client::GatewayClient).
    #[error("backend for provider `{provider}` is not configured")]
    BackendNotConfigured { provider: Provider },

    /// The selected backend is present but does not serve the requested
    /// `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported { provider: Provider, model: String },

    /// The model identifier is not part of the catalog.
    #[error("invalid model selected: `{0}`")]
    UnknownModel(String),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}
