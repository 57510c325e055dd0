use crate::geometry::Polygon;
use crate::math::Point2;

/// Rotates a polygon 180° about the origin.
///
/// Implemented as exact negation of both coordinates, so applying it twice
/// returns the original vertices bit for bit.
pub struct HalfTurn<'a> {
    polygon: &'a Polygon,
}

impl<'a> HalfTurn<'a> {
    /// Creates a new `HalfTurn` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the rotation, returning the rotated copy.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        let rotated: Vec<Point2> = self
            .polygon
            .vertices()
            .iter()
            .map(|v| Point2::new(-v.x, -v.y))
            .collect();
        Polygon::from_valid(rotated)
    }
}
