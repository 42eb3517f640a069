//! Normalized input records supplied by the dataset collaborator.

use serde::{Deserialize, Serialize};

/// A normalized geolocated point record.
///
/// The identifier is globally unique within an input set (a postal code for
/// the geonames dataset). City and region are descriptive attributes carried
/// through from the source data; the resolution core never reads them.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Globally unique identifier (postal code)
    pub id: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// City name (not used by the resolution core)
    pub city: String,
    /// Region code (not used by the resolution core)
    pub region: String,
}

impl PointRecord {
    /// Creates a new point record.
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        city: impl Into<String>,
        region: impl Into<String>,
    ) -> PointRecord {
        PointRecord {
            id: id.into(),
            latitude,
            longitude,
            city: city.into(),
            region: region.into(),
        }
    }
}
