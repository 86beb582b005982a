//! The facility locator client.

use crate::config::LocatorConfig;
use crate::error::{LocateError, Result};
use crate::overpass;
use crate::types::{FacilityKind, HealthcareFacility};
use std::time::Duration;
use tracing::{debug, warn};

/// Queries the Overpass interpreter for healthcare facilities near a point.
pub struct FacilityLocator {
    config: LocatorConfig,
    http: reqwest::Client,
}

impl FacilityLocator {
    /// Create a locator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Config`] if the configuration is invalid, or
    /// [`LocateError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: LocatorConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LocateError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Find up to `max_results` facilities within `radius_m` of `(lat, lng)`.
    ///
    /// Results are in discovery order (not sorted by distance), each
    /// annotated with its great-circle distance from the query point.
    /// An area with no mapped facilities returns `Ok(vec![])`; only
    /// transport and parse failures are errors.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::Http`] on request failure or a non-2xx status,
    /// and [`LocateError::Parse`] when the response is not valid Overpass JSON.
    pub async fn locate(&self, lat: f64, lng: f64) -> Result<Vec<HealthcareFacility>> {
        let query = overpass::build_query(lat, lng, self.config.radius_m);
        debug!(lat, lng, radius_m = self.config.radius_m, "overpass query");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Content-Type", "text/plain")
            .body(query)
            .send()
            .await
            .map_err(|e| LocateError::Http(format!("Overpass request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocateError::Http(format!(
                "Overpass returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LocateError::Http(format!("failed to read Overpass body: {e}")))?;

        let facilities = overpass::parse_response(&body, (lat, lng), self.config.max_results)?;
        debug!(count = facilities.len(), "facilities found");
        Ok(facilities)
    }

    /// Like [`locate`](Self::locate), but maps any failure to the legacy
    /// single-placeholder list instead of surfacing the error.
    ///
    /// The map view historically showed one synthetic facility near the
    /// query point when the upstream query failed, conflating "error" with
    /// "no data". Prefer [`locate`](Self::locate); this exists for callers
    /// that still want that presentation.
    pub async fn locate_or_fallback(&self, lat: f64, lng: f64) -> Vec<HealthcareFacility> {
        match self.locate(lat, lng).await {
            Ok(facilities) => facilities,
            Err(e) => {
                warn!(error = %e, "facility lookup failed, using fallback entry");
                vec![fallback_facility(lat, lng)]
            }
        }
    }
}

/// The deterministic placeholder facility shown when a lookup fails.
///
/// Sits 0.01 degrees north-east of the query point, mirroring the original
/// map view's hard-coded fallback.
pub fn fallback_facility(lat: f64, lng: f64) -> HealthcareFacility {
    HealthcareFacility {
        id: "fallback-1".to_owned(),
        name: "Sample Hospital".to_owned(),
        kind: FacilityKind::Hospital,
        lat: lat + 0.01,
        lng: lng + 0.01,
        address: "Sample address".to_owned(),
        distance_km: crate::geo::haversine_km((lat, lng), (lat + 0.01, lng + 0.01)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn new_rejects_invalid_config() {
        let config = LocatorConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(matches!(
            FacilityLocator::new(config),
            Err(LocateError::Config(_))
        ));
    }

    #[test]
    fn fallback_sits_near_query_point() {
        let f = fallback_facility(28.6139, 77.2090);
        assert_eq!(f.id, "fallback-1");
        assert_eq!(f.kind, FacilityKind::Hospital);
        assert!((f.lat - 28.6239).abs() < 1e-9);
        assert!((f.lng - 77.2190).abs() < 1e-9);
        assert!(f.distance_km > 0.0);
        assert!(f.distance_km < 2.0);
    }
}
