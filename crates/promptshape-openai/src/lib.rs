//! OpenAI backend for the **promptshape** gateway.
//!
//! ```rust,no_run
//! use promptshape_core::GatewayClient;
//! use promptshape_openai::OpenAiAdapterBuilder;
//!
//! let openai = OpenAiAdapterBuilder::new_from_env()
//!     .build()
//!     .expect("OPENAI_API_KEY must be set");
//! let gateway = GatewayClient::new().with_backend(openai);
//! ```
mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub use client::OpenAiClient;
pub mod api_v1;
mod client;
pub mod error;
