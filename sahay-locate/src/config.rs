//! Locator configuration with sensible defaults.

use crate::error::LocateError;

/// Public Overpass interpreter endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Configuration for a facility lookup.
///
/// Use [`Default::default()`] for the standard 3 km / 15-result query, or
/// construct with field overrides.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Overpass interpreter URL.
    pub endpoint: String,
    /// Search radius around the query point in metres.
    pub radius_m: u32,
    /// Maximum number of facilities to return, in discovery order.
    pub max_results: usize,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            radius_m: 3000,
            max_results: 15,
            timeout_seconds: 25,
        }
    }
}

impl LocatorConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    pub fn validate(&self) -> Result<(), LocateError> {
        if self.endpoint.trim().is_empty() {
            return Err(LocateError::Config("endpoint must not be empty".into()));
        }
        if self.radius_m == 0 {
            return Err(LocateError::Config("radius_m must be greater than 0".into()));
        }
        if self.max_results == 0 {
            return Err(LocateError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(LocateError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
