//! Error types for the Sahay companion services.

/// Top-level error type for the health companion.
#[derive(Debug, thiserror::Error)]
pub enum CompanionError {
    /// A required profile or request field is missing or out of range.
    /// Reported before any remote call is attempted.
    #[error("validation error: {0}")]
    Validation(String),

    /// The upstream text-generation gateway rejected or failed the request.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// A voice capability (synthesis or recognition) is not available in
    /// this host environment.
    #[error("voice capability unavailable: {0}")]
    VoiceUnavailable(String),

    /// A voice session operation failed (backend error, microphone denied).
    #[error("voice error: {0}")]
    Voice(String),

    /// Configuration error (missing API key, unreadable config file).
    #[error("config error: {0}")]
    Config(String),

    /// Proxy server error (bind failure, address lookup).
    #[error("server error: {0}")]
    Server(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, CompanionError>;
