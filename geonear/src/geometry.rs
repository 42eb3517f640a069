//! Geographic point type and great-circle distance math.
//!
//! Distances are computed with the Haversine formula on a spherical Earth
//! model. This is accurate to well under 0.5% everywhere, which is far more
//! precision than the fixed-degree rectangle filter in front of it.

use serde::{Deserialize, Serialize};

use crate::errors::{GeonearError, GeonearResult};

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated geographic point (latitude/longitude in degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint with validated geographic coordinates.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    ///
    /// # Errors
    /// Returns an error if coordinates are out of valid range.
    pub fn new(latitude: f64, longitude: f64) -> GeonearResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeonearError::InvalidCoordinate(format!(
                "latitude must be between -90 and 90 degrees, got: {}",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeonearError::InvalidCoordinate(format!(
                "longitude must be between -180 and 180 degrees, got: {}",
                longitude
            )));
        }
        Ok(Self { latitude, longitude })
    }

    /// Gets the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Calculates the great-circle distance to another point in kilometers.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_distance_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeoPoint(lat={:.6}, lon={:.6})", self.latitude, self.longitude)
    }
}

/// Calculates the great-circle distance between two points in kilometers
/// using the Haversine formula.
///
/// Deterministic and free of side effects; the only failure modes are the
/// usual floating-point ones.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_coordinates() {
        let point = GeoPoint::new(40.7506, -73.9972).unwrap();
        assert_eq!(point.latitude(), 40.7506);
        assert_eq!(point.longitude(), -73.9972);
    }

    #[test]
    fn test_new_latitude_out_of_range() {
        let result = GeoPoint::new(90.5, 0.0);
        assert!(matches!(result, Err(GeonearError::InvalidCoordinate(_))));

        let result = GeoPoint::new(-91.0, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_longitude_out_of_range() {
        let result = GeoPoint::new(0.0, 180.5);
        assert!(matches!(result, Err(GeonearError::InvalidCoordinate(_))));

        let result = GeoPoint::new(0.0, -181.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_boundary_coordinates_valid() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_haversine_same_point() {
        let distance = haversine_distance_km(40.0, -74.0, 40.0, -74.0);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // New York City to Los Angeles, approximately 3,936 km
        let distance = haversine_distance_km(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((distance - 3936.0).abs() < 40.0, "got {}", distance);
    }

    #[test]
    fn test_haversine_one_degree_on_equator() {
        // One degree of longitude on the equator is about 111.19 km
        let distance = haversine_distance_km(0.0, 0.0, 0.0, 1.0);
        assert!((distance - 111.19).abs() < 0.1, "got {}", distance);
    }

    #[test]
    fn test_haversine_symmetry() {
        let forward = haversine_distance_km(52.52, 13.405, 48.8566, 2.3522);
        let backward = haversine_distance_km(48.8566, 2.3522, 52.52, 13.405);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_distance_km_method() {
        let berlin = GeoPoint::new(52.52, 13.405).unwrap();
        let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
        // Berlin to Paris, approximately 878 km
        let distance = berlin.distance_km(&paris);
        assert!((distance - 878.0).abs() < 10.0, "got {}", distance);
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(40.75, -73.99).unwrap();
        assert_eq!(format!("{}", point), "GeoPoint(lat=40.750000, lon=-73.990000)");
    }

    #[test]
    fn test_serialization() {
        let point = GeoPoint::new(40.75, -73.99).unwrap();
        let json = serde_json::to_string(&point).unwrap();
        let deserialized: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, deserialized);
    }
}
