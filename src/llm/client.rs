//! Client for the upstream OpenAI-compatible chat-completion gateway.
//!
//! One request per user action, no retries: the gateway call is billed and
//! rate-limited externally, so every failure is surfaced immediately and the
//! user decides whether to try again.

use crate::config::GatewayConfig;
use crate::error::{CompanionError, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Thin client over the remote text-generation gateway.
pub struct GatewayClient {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Create a client.
    ///
    /// The API key reference is kept, not resolved: resolution happens on
    /// every request, so a missing key never stops the proxy from starting.
    /// It surfaces per invocation as a configuration error, which the proxy
    /// maps to its 500-plus-fallback response.
    ///
    /// # Errors
    ///
    /// Returns [`CompanionError::Config`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| CompanionError::Config(format!("failed to build HTTP client: {e}")))?;

        info!(url = config.api_url.as_str(), model = config.api_model.as_str(), "gateway client configured");

        Ok(Self {
            config: config.clone(),
            http,
        })
    }

    /// Send one system + user prompt pair and return the generated text.
    ///
    /// Single attempt: any transport failure, non-2xx status, or malformed
    /// response body is an immediate [`CompanionError::Gateway`]. A key
    /// that fails to resolve is a [`CompanionError::Config`], reported
    /// before anything is sent.
    pub async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let api_key = self.config.api_key.resolve()?;
        let url = chat_completions_url(&self.config.api_url);
        let body = serde_json::json!({
            "model": self.config.api_model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        debug!(url = url.as_str(), "gateway request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompanionError::Gateway(format!("gateway request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompanionError::Gateway(format!(
                "gateway returned HTTP {status}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompanionError::Gateway(format!("invalid gateway response: {e}")))?;

        extract_content(&payload)
    }
}

/// Normalise the configured base URL into the chat-completions endpoint.
///
/// Accepts bases with or without a trailing `/v1` or slash.
fn chat_completions_url(api_url: &str) -> String {
    let base = api_url.strip_suffix("/v1").unwrap_or(api_url);
    let base = base.trim_end_matches('/');
    format!("{base}/v1/chat/completions")
}

/// Pull `choices[0].message.content` out of a completion response.
fn extract_content(payload: &serde_json::Value) -> Result<String> {
    payload["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| {
            CompanionError::Gateway("gateway response has no message content".to_owned())
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn url_normalisation() {
        assert_eq!(
            chat_completions_url("https://gw.example.com"),
            "https://gw.example.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("https://gw.example.com/"),
            "https://gw.example.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("https://gw.example.com/v1"),
            "https://gw.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn extract_content_happy_path() {
        let payload = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "Drink water." } }]
        });
        assert_eq!(extract_content(&payload).unwrap(), "Drink water.");
    }

    #[test]
    fn extract_content_missing_is_gateway_error() {
        let payload = serde_json::json!({ "choices": [] });
        assert!(matches!(
            extract_content(&payload),
            Err(CompanionError::Gateway(_))
        ));
    }

    #[test]
    fn new_accepts_missing_api_key() {
        let config = GatewayConfig {
            api_key: crate::config::ApiKeyRef::None,
            ..Default::default()
        };
        assert!(GatewayClient::new(&config).is_ok());
    }

    #[tokio::test]
    async fn generate_fails_per_request_without_api_key() {
        // Unroutable address: a config error must surface before any
        // connection attempt.
        let config = GatewayConfig {
            api_url: "http://127.0.0.1:1".to_owned(),
            api_key: crate::config::ApiKeyRef::None,
            ..Default::default()
        };
        let client = GatewayClient::new(&config).unwrap();
        assert!(matches!(
            client.generate("sys", "user").await,
            Err(CompanionError::Config(_))
        ));
    }
}
