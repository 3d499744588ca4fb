//! Great-circle geometry for flight planning.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average ground speed used to derive flight duration, in kilometres per minute.
pub const CRUISE_SPEED_KM_PER_MINUTE: f64 = 15.0;

/// Haversine distance between two coordinates given in decimal degrees.
///
/// # Arguments
/// - `from` - `(latitude, longitude)` of the origin
/// - `to` - `(latitude, longitude)` of the destination
///
/// # Returns
/// - Distance in kilometres
pub fn great_circle_distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = (from.0.to_radians(), from.1.to_radians());
    let (lat2, lon2) = (to.0.to_radians(), to.1.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Flight duration in whole minutes for a distance at cruise speed.
pub fn flight_duration_minutes(distance_km: f64) -> i32 {
    (distance_km / CRUISE_SPEED_KM_PER_MINUTE).round() as i32
}
