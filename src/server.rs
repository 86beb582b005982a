//! HTTP proxy endpoints for the companion front end.
//!
//! Two thin proxies forward prompts to the upstream chat-completion gateway:
//!
//! - `POST /health-chat`: body `{message, language?}` to `{response}`
//! - `POST /analyze-report`: body `{reportText}` to `{analysis}`
//!
//! Every failure (missing field, missing API key, upstream error) maps to
//! HTTP 500 with a generic apologetic fallback in the same field the UI
//! reads on success, so the caller never has to special-case the shape.
//! CORS is open to all origins and both routes answer OPTIONS pre-flights.

use crate::config::ServerConfig;
use crate::error::{CompanionError, Result};
use crate::llm::{prompts, GatewayClient};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body for `POST /health-chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's health question.
    pub message: String,
    /// Response language code; defaults to English.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_owned()
}

/// Success body for `POST /health-chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated assistant text.
    pub response: String,
}

/// Request body for `POST /analyze-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// The raw medical report text.
    pub report_text: String,
}

/// Success body for `POST /analyze-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Generated plain-language analysis.
    pub analysis: String,
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    /// Gateway client shared across requests.
    client: Arc<GatewayClient>,
}

// ---------------------------------------------------------------------------
// ProxyServer
// ---------------------------------------------------------------------------

/// The companion's HTTP proxy server.
///
/// Binds a listener, serves on a background tokio task, and aborts the task
/// on shutdown or drop.
pub struct ProxyServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl ProxyServer {
    /// Start the proxy server.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(client: Arc<GatewayClient>, config: &ServerConfig) -> Result<Self> {
        let app = router(client);

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| CompanionError::Server(format!("proxy bind failed: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| CompanionError::Server(format!("failed to get local addr: {e}")))?;

        info!("proxy server listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("proxy server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ProxyServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Build the axum router. Exposed for in-process testing.
pub(crate) fn router(client: Arc<GatewayClient>) -> Router {
    let state = AppState { client };
    Router::new()
        .route(
            "/health-chat",
            post(handle_health_chat).options(handle_preflight),
        )
        .route(
            "/analyze-report",
            post(handle_analyze_report).options(handle_preflight),
        )
        .with_state(state)
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Attach the open CORS policy to a response.
fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

/// `OPTIONS` pre-flight for both routes: CORS headers, no body.
async fn handle_preflight() -> Response {
    with_cors(StatusCode::NO_CONTENT.into_response())
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// Parse the raw request body, mapping malformed JSON and shape problems
/// alike to a validation error so the route still answers with its
/// 500-plus-fallback contract (and CORS headers) rather than an extractor
/// rejection. The handlers take `Bytes` for the same reason: a typed `Json`
/// extractor rejects bad bodies before the handler runs, without CORS.
fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| CompanionError::Validation(format!("invalid request body: {e}")))
}

/// `POST /health-chat`: forward a chat message to the gateway.
async fn handle_health_chat(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();

    let result = match parse_body::<ChatRequest>(&body) {
        Ok(request) if request.message.trim().is_empty() => {
            Err(CompanionError::Validation("message is required".to_owned()))
        }
        Ok(request) => {
            info!(%request_id, language = request.language.as_str(), "health chat request");
            state
                .client
                .generate(&prompts::chat_system_prompt(&request.language), &request.message)
                .await
        }
        Err(e) => Err(e),
    };

    let response = match result {
        Ok(text) => (StatusCode::OK, Json(serde_json::json!({ "response": text }))),
        Err(e) => {
            error!(%request_id, error = %e, "health chat failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": e.to_string(),
                    "response": prompts::CHAT_FALLBACK,
                })),
            )
        }
    };
    with_cors(response.into_response())
}

/// `POST /analyze-report`: forward report text to the gateway.
async fn handle_analyze_report(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();

    let result = match parse_body::<AnalyzeRequest>(&body) {
        Ok(request) if request.report_text.trim().is_empty() => Err(CompanionError::Validation(
            "report text is required".to_owned(),
        )),
        Ok(request) => {
            info!(%request_id, "report analysis request");
            state
                .client
                .generate(
                    prompts::ANALYZER_SYSTEM_PROMPT,
                    &prompts::analyzer_user_prompt(&request.report_text),
                )
                .await
        }
        Err(e) => Err(e),
    };

    let response = match result {
        Ok(text) => (StatusCode::OK, Json(serde_json::json!({ "analysis": text }))),
        Err(e) => {
            error!(%request_id, error = %e, "report analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": e.to_string(),
                    "analysis": prompts::ANALYSIS_FALLBACK,
                })),
            )
        }
    };
    with_cors(response.into_response())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn chat_request_language_defaults_to_english() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(request.language, "en");
    }

    #[test]
    fn chat_request_round_trip() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message":"fever at night","language":"hi"}"#).unwrap();
        assert_eq!(request.message, "fever at night");
        assert_eq!(request.language, "hi");
    }

    #[test]
    fn analyze_request_uses_camel_case() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"reportText":"Hb 11.2 g/dL"}"#).unwrap();
        assert_eq!(request.report_text, "Hb 11.2 g/dL");

        let json = serde_json::to_string(&AnalyzeRequest {
            report_text: "x".into(),
        })
        .unwrap();
        assert!(json.contains("reportText"));
    }

    #[test]
    fn cors_headers_applied() {
        let response = with_cors(StatusCode::OK.into_response());
        assert_eq!(
            response.headers()["Access-Control-Allow-Origin"],
            HeaderValue::from_static("*")
        );
        assert_eq!(
            response.headers()["Access-Control-Allow-Headers"],
            HeaderValue::from_static(ALLOWED_HEADERS)
        );
    }
}
