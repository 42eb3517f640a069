//! R-tree spatial index over fixed-margin point rectangles.
//!
//! The index is a coarse spatial filter, not a precision structure: every
//! point is stored under a rectangle with a fixed half-width margin, and
//! queries return every point whose rectangle intersects the query
//! rectangle. Callers must always refine candidates with an exact distance
//! check.
//!
//! Construction fully precedes all queries. The tree is never mutated after
//! [`SpatialIndex::build`] returns, so workers may share it read-only with
//! no locking.

use rstar::{RTree, RTreeObject, AABB};

use crate::bounding_box::BoundingBox;
use crate::record::PointRecord;

/// Fixed half-width, in degrees, of the rectangle stored around each point.
///
/// Roughly 25 km of longitude at mid-latitudes, so a query rectangle built
/// with the same half-width is guaranteed to intersect the rectangle of any
/// point within 25 km at non-extreme latitudes. Degrees-per-km shrinks
/// toward the poles, where this fixed margin can under- or over-cover; that
/// is a documented limitation of the design, not corrected here.
pub const POINT_MARGIN_DEGREES: f64 = 0.25;

/// A point as stored in the spatial index: identifier, coordinates, and its
/// fixed-margin bounding rectangle.
///
/// Created exactly once per [`PointRecord`] when the index is built, never
/// mutated afterward, and owned exclusively by the [`SpatialIndex`].
#[derive(Debug, Clone)]
pub struct IndexedPoint {
    id: String,
    latitude: f64,
    longitude: f64,
    bounds: BoundingBox,
}

impl IndexedPoint {
    /// Creates an indexed point from a normalized record.
    pub fn from_record(record: &PointRecord) -> IndexedPoint {
        IndexedPoint {
            id: record.id.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            bounds: BoundingBox::from_center(
                record.longitude,
                record.latitude,
                POINT_MARGIN_DEGREES,
            ),
        }
    }

    /// Gets the point identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the stored bounding rectangle.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

/// A read-only R-tree over all indexed points supporting
/// rectangle-intersection range queries.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<IndexedPoint>,
}

impl SpatialIndex {
    /// Builds the index from a sequence of point records.
    ///
    /// Insertion order does not affect query correctness, only internal tree
    /// balance; bulk loading produces a well-balanced tree regardless.
    pub fn build(records: &[PointRecord]) -> SpatialIndex {
        let points: Vec<IndexedPoint> = records.iter().map(IndexedPoint::from_record).collect();
        let tree = RTree::bulk_load(points);
        log::debug!("spatial index built over {} points", tree.size());
        SpatialIndex { tree }
    }

    /// Returns every indexed point whose stored rectangle intersects the
    /// query rectangle.
    ///
    /// This is an over-approximation by construction (rectangle overlap, not
    /// point-in-circle), so the caller must always apply an exact distance
    /// filter afterward.
    pub fn query_intersecting<'a>(
        &'a self,
        query: &BoundingBox,
    ) -> impl Iterator<Item = &'a IndexedPoint> {
        let envelope = AABB::from_corners([query.min_x, query.min_y], [query.max_x, query.max_y]);
        self.tree.locate_in_envelope_intersecting(&envelope)
    }

    /// Iterates over all indexed points.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedPoint> {
        self.tree.iter()
    }

    /// Returns the number of indexed points.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Checks if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, lat: f64, lon: f64) -> PointRecord {
        PointRecord::new(id, lat, lon, "Test City", "TS")
    }

    #[test]
    fn test_build_empty() {
        let index = SpatialIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_build_and_len() {
        let records = vec![
            record("A", 0.0, 0.0),
            record("B", 10.0, 10.0),
            record("C", -10.0, -10.0),
        ];
        let index = SpatialIndex::build(&records);
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_indexed_point_from_record() {
        let point = IndexedPoint::from_record(&record("A", 40.0, -74.0));
        assert_eq!(point.id(), "A");
        assert_eq!(point.latitude(), 40.0);
        assert_eq!(point.longitude(), -74.0);

        let bounds = point.bounds();
        assert_eq!(bounds.min_x, -74.25);
        assert_eq!(bounds.max_x, -73.75);
        assert_eq!(bounds.min_y, 39.75);
        assert_eq!(bounds.max_y, 40.25);
    }

    #[test]
    fn test_query_finds_nearby_rectangles() {
        let records = vec![
            record("A", 0.0, 0.0),
            record("B", 0.0, 0.1),
            record("C", 0.0, 5.0),
        ];
        let index = SpatialIndex::build(&records);

        let query = BoundingBox::from_center(0.0, 0.0, POINT_MARGIN_DEGREES);
        let mut ids: Vec<&str> = index.query_intersecting(&query).map(|p| p.id()).collect();
        ids.sort_unstable();

        // C's rectangle is 5 degrees away and cannot intersect
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_query_includes_own_rectangle() {
        let records = vec![record("A", 42.0, -71.0)];
        let index = SpatialIndex::build(&records);

        let query = BoundingBox::from_center(-71.0, 42.0, POINT_MARGIN_DEGREES);
        let found: Vec<&IndexedPoint> = index.query_intersecting(&query).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "A");
    }

    #[test]
    fn test_query_over_approximates() {
        // Centers 0.45 degrees apart: rectangles overlap even though the
        // points are ~50 km apart on the equator, well beyond 25 km. The
        // exact distance filter is the caller's job.
        let records = vec![record("A", 0.0, 0.0), record("B", 0.0, 0.45)];
        let index = SpatialIndex::build(&records);

        let query = BoundingBox::from_center(0.0, 0.0, POINT_MARGIN_DEGREES);
        let ids: Vec<&str> = index.query_intersecting(&query).map(|p| p.id()).collect();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_query_empty_region() {
        let records = vec![record("A", 0.0, 0.0)];
        let index = SpatialIndex::build(&records);

        let query = BoundingBox::from_center(50.0, 50.0, POINT_MARGIN_DEGREES);
        assert_eq!(index.query_intersecting(&query).count(), 0);
    }

    #[test]
    fn test_iter_visits_every_point() {
        let records = vec![
            record("A", 0.0, 0.0),
            record("B", 1.0, 1.0),
            record("C", 2.0, 2.0),
            record("D", 3.0, 3.0),
        ];
        let index = SpatialIndex::build(&records);

        let mut ids: Vec<&str> = index.iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
    }
}
