//! Configuration types for the companion services.

use crate::error::{CompanionError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for the companion services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// Upstream text-generation gateway settings.
    pub gateway: GatewayConfig,
    /// Proxy server settings.
    pub server: ServerConfig,
}

impl CompanionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CompanionError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CompanionError::Config(format!("failed to read config {}: {e}", path.display()))
        })?;
        toml::from_str(&raw).map_err(|e| {
            CompanionError::Config(format!("invalid config {}: {e}", path.display()))
        })
    }
}

/// API key reference for the upstream gateway.
///
/// Inline literals are discouraged; prefer resolving from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiKeyRef {
    /// No API key configured.
    #[default]
    None,
    /// Inline literal key.
    Literal { value: String },
    /// Resolve the key from an environment variable.
    Env { var: String },
}

impl ApiKeyRef {
    /// Resolve the API key.
    ///
    /// Called per request rather than once at startup, matching how the
    /// gateway proxy reports a missing key: as a 500 on each invocation,
    /// never as a startup failure.
    ///
    /// # Errors
    ///
    /// Returns [`CompanionError::Config`] when no key is configured or the
    /// named environment variable is missing or empty.
    pub fn resolve(&self) -> Result<String> {
        match self {
            Self::None => Err(CompanionError::Config(
                "gateway API key is not configured".to_owned(),
            )),
            Self::Literal { value } => {
                if value.trim().is_empty() {
                    return Err(CompanionError::Config(
                        "gateway API key literal is empty".to_owned(),
                    ));
                }
                Ok(value.clone())
            }
            Self::Env { var } => {
                let value = std::env::var(var).map_err(|_| {
                    CompanionError::Config(format!("gateway API key env var is missing: {var}"))
                })?;
                if value.trim().is_empty() {
                    return Err(CompanionError::Config(format!(
                        "gateway API key env var is empty: {var}"
                    )));
                }
                Ok(value)
            }
        }
    }
}

/// Upstream chat-completion gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Gateway base URL.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub api_model: String,
    /// API key reference.
    pub api_key: ApiKeyRef,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens per generation.
    pub max_tokens: usize,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: "https://ai.gateway.lovable.dev".to_owned(),
            api_model: "google/gemini-2.5-flash".to_owned(),
            api_key: ApiKeyRef::Env {
                var: "SAHAY_GATEWAY_API_KEY".to_owned(),
            },
            temperature: 0.7,
            max_tokens: 2048,
            timeout_seconds: 60,
        }
    }
}

/// Proxy server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Port to listen on (0 = auto-assign).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    struct EnvGuard {
        key: &'static str,
        old: Option<std::ffi::OsString>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let old = std::env::var_os(key);
            unsafe { std::env::set_var(key, value) };
            Self { key, old }
        }

        fn unset(key: &'static str) -> Self {
            let old = std::env::var_os(key);
            unsafe { std::env::remove_var(key) };
            Self { key, old }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old {
                Some(v) => unsafe { std::env::set_var(self.key, v) },
                None => unsafe { std::env::remove_var(self.key) },
            }
        }
    }

    #[test]
    fn defaults_are_sensible() {
        let config = CompanionConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.gateway.api_model, "google/gemini-2.5-flash");
        assert!(matches!(config.gateway.api_key, ApiKeyRef::Env { .. }));
    }

    #[test]
    fn load_parses_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sahay.toml");
        std::fs::write(
            &path,
            r#"
[gateway]
api_model = "local/test-model"

[gateway.api_key]
type = "literal"
value = "sk-test"

[server]
port = 9090
"#,
        )
        .unwrap();

        let config = CompanionConfig::load(&path).unwrap();
        assert_eq!(config.gateway.api_model, "local/test-model");
        assert_eq!(
            config.gateway.api_key,
            ApiKeyRef::Literal {
                value: "sk-test".to_owned()
            }
        );
        assert_eq!(config.server.port, 9090);
        // Unspecified fields keep defaults.
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.gateway.max_tokens, 2048);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = CompanionConfig::load(Path::new("/nonexistent/sahay.toml")).unwrap_err();
        assert!(matches!(err, CompanionError::Config(_)));
    }

    #[test]
    fn api_key_env_resolves() {
        let _env = EnvGuard::set("SAHAY_TEST_KEY", "secret-123");
        let key = ApiKeyRef::Env {
            var: "SAHAY_TEST_KEY".to_owned(),
        };
        assert_eq!(key.resolve().unwrap(), "secret-123");
    }

    #[test]
    fn api_key_env_missing_errors() {
        let _env = EnvGuard::unset("SAHAY_TEST_KEY_MISSING");
        let key = ApiKeyRef::Env {
            var: "SAHAY_TEST_KEY_MISSING".to_owned(),
        };
        assert!(key.resolve().is_err());
    }

    #[test]
    fn api_key_none_errors() {
        assert!(ApiKeyRef::None.resolve().is_err());
    }

    #[test]
    fn api_key_empty_literal_errors() {
        let key = ApiKeyRef::Literal {
            value: "  ".to_owned(),
        };
        assert!(key.resolve().is_err());
    }
}
