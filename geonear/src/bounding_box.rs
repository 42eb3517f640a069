//! Axis-aligned bounding rectangles in (longitude, latitude) degree space.

use serde::{Deserialize, Serialize};

/// A 2D bounding box represented by minimum and maximum coordinates.
///
/// `BoundingBox` defines a rectangular area in (longitude, latitude) space
/// using the minimum (min_x, min_y) and maximum (max_x, max_y) corners. The
/// x axis is longitude and the y axis is latitude, both in degrees.
///
/// # Examples
///
/// ```rust
/// use geonear::BoundingBox;
///
/// // A 0.5 x 0.5 degree rectangle centered on the origin
/// let bbox = BoundingBox::from_center(0.0, 0.0, 0.25);
/// assert!(bbox.contains_point(0.1, -0.2));
/// ```
#[derive(Clone, Copy, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum X coordinate (western longitude)
    pub min_x: f64,
    /// Minimum Y coordinate (southern latitude)
    pub min_y: f64,
    /// Maximum X coordinate (eastern longitude)
    pub max_x: f64,
    /// Maximum Y coordinate (northern latitude)
    pub max_y: f64,
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundingBox({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl BoundingBox {
    /// Creates a new bounding box with the specified corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a bounding box centered at `(x, y)` extending `half_width`
    /// degrees in each direction along both axes.
    ///
    /// # Arguments
    /// * `x` - Center X coordinate (longitude, degrees)
    /// * `y` - Center Y coordinate (latitude, degrees)
    /// * `half_width` - Half the side length, in degrees
    pub fn from_center(x: f64, y: f64, half_width: f64) -> BoundingBox {
        BoundingBox {
            min_x: x - half_width,
            min_y: y - half_width,
            max_x: x + half_width,
            max_y: y + half_width,
        }
    }

    /// Checks if this bounding box contains a point.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Checks if this bounding box intersects another bounding box.
    /// Touching edges count as intersection.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }
}
