//! Core types for healthcare facility lookup results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of healthcare facility the locator recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityKind {
    /// General hospital.
    Hospital,
    /// Pharmacy / chemist.
    Pharmacy,
    /// Outpatient clinic.
    Clinic,
}

impl FacilityKind {
    /// Returns the human-readable name of this facility kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Pharmacy => "pharmacy",
            Self::Clinic => "clinic",
        }
    }

    /// Maps an OpenStreetMap `amenity` tag value onto a facility kind.
    ///
    /// Anything that is not a pharmacy or a clinic is treated as a hospital,
    /// matching how the map view groups its markers.
    pub fn from_amenity(amenity: &str) -> Self {
        match amenity {
            "pharmacy" => Self::Pharmacy,
            "clinic" => Self::Clinic,
            _ => Self::Hospital,
        }
    }
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single healthcare facility near the query point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthcareFacility {
    /// Stable identifier (OSM node id, stringified).
    pub id: String,
    /// Facility display name.
    pub name: String,
    /// What kind of facility this is.
    pub kind: FacilityKind,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Best-effort street address.
    pub address: String,
    /// Great-circle distance from the query point in kilometres.
    pub distance_km: f64,
}

impl HealthcareFacility {
    /// Distance formatted for display, one decimal place with unit.
    ///
    /// `1.234` → `"1.2 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amenity_mapping() {
        assert_eq!(FacilityKind::from_amenity("pharmacy"), FacilityKind::Pharmacy);
        assert_eq!(FacilityKind::from_amenity("clinic"), FacilityKind::Clinic);
        assert_eq!(FacilityKind::from_amenity("hospital"), FacilityKind::Hospital);
        // Unknown amenities group with hospitals.
        assert_eq!(FacilityKind::from_amenity("doctors"), FacilityKind::Hospital);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&FacilityKind::Pharmacy).unwrap();
        assert_eq!(json, "\"pharmacy\"");
    }

    #[test]
    fn distance_label_one_decimal() {
        let facility = HealthcareFacility {
            id: "1".into(),
            name: "City Hospital".into(),
            kind: FacilityKind::Hospital,
            lat: 28.62,
            lng: 77.21,
            address: "Address not available".into(),
            distance_km: 1.2499,
        };
        assert_eq!(facility.distance_label(), "1.2 km");
    }

    #[test]
    fn distance_label_zero() {
        let facility = HealthcareFacility {
            id: "2".into(),
            name: "Corner Pharmacy".into(),
            kind: FacilityKind::Pharmacy,
            lat: 0.0,
            lng: 0.0,
            address: String::new(),
            distance_km: 0.0,
        };
        assert_eq!(facility.distance_label(), "0.0 km");
    }
}
