//! # Geonear - Geodesic Proximity Resolution
//!
//! This crate computes, for a large set of geolocated points (postal codes
//! with latitude/longitude), the set of all other points within a fixed
//! geodesic radius, producing a complete adjacency mapping from point
//! identifier to neighbor identifiers.
//!
//! ## Two-Phase Resolution
//!
//! Every proximity query runs in two phases:
//!
//! 1. **Phase 1 (R-tree rectangle search)**: Fast but may include false
//!    positives. The R-tree stores fixed-margin bounding rectangles around
//!    each point, not exact positions, so rectangle overlap is only a coarse
//!    superset test for the true distance threshold.
//! 2. **Phase 2 (haversine refinement)**: The exact great-circle distance is
//!    computed for every candidate and compared against the 25 km radius.
//!
//! ## Pipeline
//!
//! Resolution is applied to every point concurrently: a producer emits one
//! task per indexed point into a bounded queue, a fixed pool of worker
//! threads resolves tasks against the shared read-only index, and a single
//! aggregator drains the result queue into the final [`AdjacencyMap`].
//!
//! ## Quick Start
//!
//! ```rust
//! use geonear::{pipeline, PointRecord, SpatialIndex};
//!
//! let records = vec![
//!     PointRecord::new("10001", 40.7506, -73.9972, "New York", "NY"),
//!     PointRecord::new("10002", 40.7157, -73.9862, "New York", "NY"),
//! ];
//!
//! let index = SpatialIndex::build(&records);
//! let adjacency = pipeline::run(&index);
//!
//! assert!(adjacency["10001"].contains(&"10002".to_string()));
//! ```

pub mod aggregator;
pub mod bounding_box;
pub mod diagnostics;
pub mod errors;
pub mod geometry;
pub mod index;
pub mod pipeline;
pub mod record;
pub mod resolver;

// Re-export core types
pub use aggregator::{AdjacencyMap, Aggregator};
pub use bounding_box::BoundingBox;
pub use diagnostics::DiagnosticLog;
pub use errors::{GeonearError, GeonearResult};
pub use geometry::{haversine_distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use index::{IndexedPoint, SpatialIndex, POINT_MARGIN_DEGREES};
pub use record::PointRecord;
pub use resolver::{resolve, ResultPair, Task, RADIUS_KM};

// Re-export pipeline entry points
pub use pipeline::{default_worker_count, WORKER_MULTIPLIER};
