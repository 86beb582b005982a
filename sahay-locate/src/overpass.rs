//! Overpass QL query construction and response parsing.
//!
//! The locator asks the public Overpass interpreter for hospital, pharmacy
//! and clinic nodes around a point, then maps the JSON elements onto
//! [`HealthcareFacility`] values. Only named nodes are kept; everything else
//! on the map is noise for this view.

use crate::error::{LocateError, Result};
use crate::geo::haversine_km;
use crate::types::{FacilityKind, HealthcareFacility};

/// Build the Overpass QL query for healthcare nodes around `(lat, lng)`.
pub fn build_query(lat: f64, lng: f64, radius_m: u32) -> String {
    format!(
        "[out:json][timeout:25];\n\
         (\n\
           node[\"amenity\"=\"hospital\"](around:{radius_m},{lat},{lng});\n\
           node[\"amenity\"=\"pharmacy\"](around:{radius_m},{lat},{lng});\n\
           node[\"amenity\"=\"clinic\"](around:{radius_m},{lat},{lng});\n\
         );\n\
         out geom;"
    )
}

/// Parse an Overpass JSON response body into facilities.
///
/// Elements without a `name` or `name:en` tag are dropped. Discovery order
/// is preserved (no distance sort) and the list is capped at `max_results`.
/// Each facility is annotated with its haversine distance from the query
/// point.
pub fn parse_response(
    body: &str,
    query_point: (f64, f64),
    max_results: usize,
) -> Result<Vec<HealthcareFacility>> {
    let doc: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| LocateError::Parse(format!("invalid Overpass JSON: {e}")))?;

    let elements = doc["elements"]
        .as_array()
        .ok_or_else(|| LocateError::Parse("missing elements array".into()))?;

    let mut facilities = Vec::new();
    for element in elements {
        if facilities.len() >= max_results {
            break;
        }
        if let Some(facility) = parse_element(element, query_point) {
            facilities.push(facility);
        }
    }
    Ok(facilities)
}

fn parse_element(
    element: &serde_json::Value,
    query_point: (f64, f64),
) -> Option<HealthcareFacility> {
    let tags = element.get("tags")?;
    let name = tags["name"]
        .as_str()
        .or_else(|| tags["name:en"].as_str())?
        .to_owned();

    let id = match &element["id"] {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        _ => return None,
    };
    let lat = element["lat"].as_f64()?;
    let lng = element["lon"].as_f64()?;

    let kind = FacilityKind::from_amenity(tags["amenity"].as_str().unwrap_or(""));

    Some(HealthcareFacility {
        id,
        name,
        kind,
        lat,
        lng,
        address: assemble_address(tags),
        distance_km: haversine_km(query_point, (lat, lng)),
    })
}

/// Best-effort address from OSM tags: `addr:full`, then house number plus
/// street, then a fixed placeholder.
fn assemble_address(tags: &serde_json::Value) -> String {
    if let Some(full) = tags["addr:full"].as_str() {
        return full.to_owned();
    }
    let joined = format!(
        "{} {}",
        tags["addr:housenumber"].as_str().unwrap_or(""),
        tags["addr:street"].as_str().unwrap_or("")
    );
    let joined = joined.trim();
    if joined.is_empty() {
        "Address not available".to_owned()
    } else {
        joined.to_owned()
    }
}
