//! # sahay-locate
//!
//! Healthcare facility lookup for Sahay.
//!
//! This crate finds hospitals, pharmacies and clinics near a point by
//! querying the public Overpass (OpenStreetMap) interpreter directly, with
//! no API keys or user setup required. It compiles into Sahay's binary as a
//! library dependency.
//!
//! ## Design
//!
//! - One Overpass QL query per lookup (hospital + pharmacy + clinic nodes)
//! - Results kept in discovery order, capped at a configured maximum
//! - Each facility annotated with its haversine distance from the query point
//! - "No data" and "error" are distinct: an empty area is `Ok(vec![])`
//! - Missing device geolocation falls back to a fixed default position
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners; this is a library, not a server
//! - Query coordinates are logged only at debug level

pub mod config;
pub mod error;
pub mod geo;
pub mod locator;
pub mod overpass;
pub mod types;

pub use config::LocatorConfig;
pub use error::{LocateError, Result};
pub use geo::{haversine_km, position_or_default, DEFAULT_POSITION};
pub use locator::{fallback_facility, FacilityLocator};
pub use types::{FacilityKind, HealthcareFacility};

/// Find healthcare facilities near `(lat, lng)` with the given configuration.
///
/// Convenience wrapper that constructs a [`FacilityLocator`] for a single
/// lookup.
///
/// # Errors
///
/// Returns [`LocateError`] if the configuration is invalid, the Overpass
/// request fails, or the response cannot be parsed. Zero results in the
/// area is not an error.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> sahay_locate::Result<()> {
/// let config = sahay_locate::LocatorConfig::default();
/// let (lat, lng) = sahay_locate::position_or_default(None);
/// let facilities = sahay_locate::locate(lat, lng, &config).await?;
/// for f in &facilities {
///     println!("{} ({}): {}", f.name, f.kind, f.distance_label());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn locate(
    lat: f64,
    lng: f64,
    config: &LocatorConfig,
) -> Result<Vec<HealthcareFacility>> {
    FacilityLocator::new(config.clone())?.locate(lat, lng).await
}
