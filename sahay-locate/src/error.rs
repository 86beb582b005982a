//! Error types for the sahay-locate crate.
//!
//! All errors use stable string messages suitable for display to users.
//! Transport failures and empty result sets are deliberately distinct:
//! an area with no mapped facilities is `Ok(vec![])`, never an error.

/// Errors that can occur while locating healthcare facilities.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// An HTTP request to the Overpass interpreter failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse the Overpass JSON response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid locator configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for sahay-locate results.
pub type Result<T> = std::result::Result<T, LocateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = LocateError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = LocateError::Parse("missing elements array".into());
        assert_eq!(err.to_string(), "parse error: missing elements array");
    }

    #[test]
    fn display_config() {
        let err = LocateError::Config("radius_m must be > 0".into());
        assert_eq!(err.to_string(), "config error: radius_m must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LocateError>();
    }
}
