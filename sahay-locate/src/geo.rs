//! Great-circle distance and geolocation defaults.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default query position used when device geolocation is unavailable
/// or permission is denied (central New Delhi).
pub const DEFAULT_POSITION: (f64, f64) = (28.6139, 77.2090);

/// Haversine great-circle distance between two (lat, lng) points, in km.
///
/// Identical points yield exactly `0.0`.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let d_lat = (b.0 - a.0).to_radians();
    let d_lng = (b.1 - a.1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.0.to_radians().cos() * b.0.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Resolve the query position from an optional device fix.
///
/// `None` (no geolocation support, or permission denied) falls back to
/// [`DEFAULT_POSITION`] rather than failing the feature.
pub fn position_or_default(device: Option<(f64, f64)>) -> (f64, f64) {
    device.unwrap_or(DEFAULT_POSITION)
}
