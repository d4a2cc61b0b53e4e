//! Great-circle helpers on a spherical earth.
//!
//! All distance math in the application goes through these three
//! primitives: haversine leg distance, forward azimuth, and a fixed-bearing
//! offset that converts meters back to degrees with the same radius.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("latitude must be between -90 and 90")]
    LatitudeOutOfRange,
    #[error("longitude must be between -180 and 180")]
    LongitudeOutOfRange,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange);
        }
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }
}

/// Haversine great-circle distance in kilometers.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Forward azimuth from `from` towards `to`, in radians from north.
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    y.atan2(x)
}

/// Point reached from `origin` after `meters` along a fixed `bearing`
/// (radians from north). Small-displacement approximation: meters become
/// degrees through the earth radius, longitude scaled by cos(latitude).
pub fn offset_by(origin: GeoPoint, bearing: f64, meters: f64) -> GeoPoint {
    let delta_lat = (meters * bearing.cos() / EARTH_RADIUS_M).to_degrees();
    let delta_lng =
        (meters * bearing.sin() / (EARTH_RADIUS_M * origin.latitude.to_radians().cos()))
            .to_degrees();
    GeoPoint {
        latitude: origin.latitude + delta_lat,
        longitude: origin.longitude + delta_lng,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_of_identical_points_is_zero() {
        let p = GeoPoint::new(44.8378, -0.5792);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn haversine_matches_known_short_leg() {
        // The Bordeaux fixture from the route estimator: ~0.25 km.
        let start = GeoPoint::new(44.8378, -0.5792);
        let stop = GeoPoint::new(44.8400, -0.5800);
        let d = haversine_km(start, stop);
        assert!((d - 0.2526).abs() < 0.005, "got {d}");
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = GeoPoint::new(44.8378, -0.5792);
        let b = GeoPoint::new(44.8572, -0.5657);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-12);
    }

    #[test]
    fn bearing_points_north_for_due_north_leg() {
        let a = GeoPoint::new(44.0, -0.5);
        let b = GeoPoint::new(45.0, -0.5);
        assert!(initial_bearing(a, b).abs() < 1e-9);
    }

    #[test]
    fn offset_by_moves_the_requested_distance() {
        let origin = GeoPoint::new(44.8378, -0.5792);
        for bearing in [0.0, 1.0, 2.5, -1.2] {
            let moved = offset_by(origin, bearing, 150.0);
            let back = haversine_km(origin, moved) * 1000.0;
            assert!((back - 150.0).abs() < 1.0, "bearing {bearing} gave {back} m");
        }
    }

    #[test]
    fn validated_rejects_out_of_range_coordinates() {
        assert_eq!(
            GeoPoint::validated(91.0, 0.0),
            Err(CoordinateError::LatitudeOutOfRange)
        );
        assert_eq!(
            GeoPoint::validated(0.0, -200.0),
            Err(CoordinateError::LongitudeOutOfRange)
        );
        assert!(GeoPoint::validated(44.8378, -0.5792).is_ok());
    }
}
