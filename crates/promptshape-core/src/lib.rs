//! Provider-agnostic building blocks of the **promptshape** workspace:
//! the error type, generic chat messages, the model catalog, the backend
//! trait and the [`GatewayClient`] router that implements the
//! [`ModelGateway`](gateway::ModelGateway) contract.
pub mod client;
pub mod error;
pub mod gateway;
pub mod generic;
pub mod model;
pub mod provider;

pub use client::GatewayClient;
