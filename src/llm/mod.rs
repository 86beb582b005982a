//! Remote text generation.
//!
//! [`client::GatewayClient`] talks to an OpenAI-compatible chat-completion
//! gateway; [`prompts`] holds the per-feature system instructions and
//! language table. Prompt text is configuration, not logic; the gateway is
//! an external collaborator this crate treats as opaque.

pub mod client;
pub mod prompts;

pub use client::GatewayClient;
