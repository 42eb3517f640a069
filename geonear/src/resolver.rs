//! Exact-radius proximity resolution over index candidates.
//!
//! A resolver invocation runs both phases of a proximity query: the R-tree
//! rectangle search for candidates, then the exact haversine distance filter
//! against the radius threshold.

use crate::bounding_box::BoundingBox;
use crate::geometry::haversine_distance_km;
use crate::index::{IndexedPoint, SpatialIndex, POINT_MARGIN_DEGREES};

/// The proximity radius in kilometers. Inclusive: a candidate at exactly
/// this distance is a neighbor.
pub const RADIUS_KM: f64 = 25.0;

/// A unit of resolution work: one task exists per indexed point.
///
/// Tasks are independent, carry no shared mutable state, and are produced
/// once, consumed by exactly one worker, then discarded.
#[derive(Debug, Clone)]
pub struct Task {
    /// Identifier of the point being resolved
    pub id: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Query rectangle centered on the point
    pub bounds: BoundingBox,
}

impl Task {
    /// Creates the resolution task for an indexed point.
    pub fn for_point(point: &IndexedPoint) -> Task {
        Task {
            id: point.id().to_string(),
            latitude: point.latitude(),
            longitude: point.longitude(),
            bounds: BoundingBox::from_center(
                point.longitude(),
                point.latitude(),
                POINT_MARGIN_DEGREES,
            ),
        }
    }
}

/// The neighbors resolved for one point. Produced once per task by exactly
/// one worker; no ordering is imposed on the neighbor list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPair {
    /// Identifier of the resolved point
    pub id: String,
    /// Identifiers of every point within [`RADIUS_KM`], including the point itself
    pub neighbors: Vec<String>,
}

/// Resolves which indexed points are truly within [`RADIUS_KM`] of the task's
/// point.
///
/// Candidates come from the index's rectangle-intersection query and are
/// refined with the exact great-circle distance. The point is always included
/// in its own neighbor set: identity short-circuits the distance check.
///
/// Infallible given a well-formed task and a built index.
pub fn resolve(task: &Task, index: &SpatialIndex) -> ResultPair {
    let mut neighbors = Vec::new();

    for candidate in index.query_intersecting(&task.bounds) {
        if candidate.id() == task.id {
            neighbors.push(candidate.id().to_string());
            continue;
        }

        let distance_km = haversine_distance_km(
            task.latitude,
            task.longitude,
            candidate.latitude(),
            candidate.longitude(),
        );
        if distance_km <= RADIUS_KM {
            neighbors.push(candidate.id().to_string());
        }
    }

    ResultPair {
        id: task.id.clone(),
        neighbors,
    }
}
