// crates/bdgeo-core/src/geo.rs

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres.
///
/// ```rust
/// use bdgeo_core::geo::haversine_km;
///
/// // Dhaka to Chattogram is roughly 215 km as the crow flies.
/// let d = haversine_km(23.8103, 90.4125, 22.3569, 91.7832);
/// assert!((200.0..230.0).contains(&d));
/// ```
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let (lat1_rad, lat2_rad) = (lat1.to_radians(), lat2.to_radians());
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1_rad.cos() * lat2_rad.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}
