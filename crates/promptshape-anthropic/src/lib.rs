//! Anthropic (Claude) backend for the **promptshape** gateway, speaking the
//! Messages API.
//!
//! ```rust,no_run
//! use promptshape_anthropic::AnthropicAdapterBuilder;
//! use promptshape_core::GatewayClient;
//!
//! let claude = AnthropicAdapterBuilder::new_from_env()
//!     .build()
//!     .expect("ANTHROPIC_API_KEY must be set");
//! let gateway = GatewayClient::new().with_backend(claude);
//! ```
mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{AnthropicAdapter, AnthropicAdapterBuilder};
pub use client::AnthropicClient;
pub mod api_v1;
mod client;
pub mod error;
