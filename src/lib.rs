//! Sahay: voice-first consumer health companion services.
//!
//! This crate provides the non-visual services behind a health companion
//! UI:
//!
//! - **Health calculators**: BMR, calorie targets, macro split, BMI
//! - **Diet planning**: deterministic numbers plus one generated narrative
//! - **Voice session**: one utterance, one recognition session, never both
//! - **Gateway client + proxy**: thin forwarding to an external
//!   chat-completion gateway (`/health-chat`, `/analyze-report`)
//! - **Facility lookup**: via the embedded `sahay-locate` crate
//!
//! Everything is session-scoped and in-memory; there is no persistence,
//! no authentication, and nothing retries automatically: every failure is
//! terminal for that user action until the user re-triggers it.

pub mod chat;
pub mod config;
pub mod diet;
pub mod error;
pub mod llm;
pub mod metrics;
pub mod server;
pub mod view;
pub mod voice;

pub use chat::{ChatMessage, ChatRole, ChatTranscript};
pub use config::CompanionConfig;
pub use diet::DietPlan;
pub use error::{CompanionError, Result};
pub use llm::GatewayClient;
pub use metrics::UserHealthProfile;
pub use server::ProxyServer;
pub use view::{Section, ViewController};
pub use voice::{VoiceCapability, VoiceSession, VoiceState};
