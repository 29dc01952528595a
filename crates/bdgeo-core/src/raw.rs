// crates/bdgeo-core/src/raw.rs
use crate::model::LocationKind;
use serde::{Deserialize, Serialize};

/// Raw coordinates as they appear in the dataset JSON.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinatesRaw {
    pub lat: f64,
    pub lng: f64,
}

/// Raw location record from JSON:
///
/// ```json
/// { "id": "area-dhanmondi", "name": "Dhanmondi", "nameBn": "ধানমন্ডি",
///   "type": "area", "parentId": "dis-dhaka",
///   "coordinates": { "lat": 23.7465, "lng": 90.376 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRaw {
    pub id: String,
    pub name: String,
    pub name_bn: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub coordinates: CoordinatesRaw,
}

pub type LocationsRaw = Vec<LocationRaw>;
