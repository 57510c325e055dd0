use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::polygon_2d::{
    is_convex_2d, rotate_to_canonical_start, signed_area_2d, winding_number_2d,
};
use crate::math::{Point2, TOLERANCE};

/// A closed polygon in the impedance plane.
///
/// The ring is implicitly closed: the last vertex connects back to the first.
/// Vertex order matters for rendering only; containment does not depend on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from at least three finite vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than three vertices or a
    /// non-finite coordinate.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "a polygon needs at least 3 vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        if let Some(bad) = vertices.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::Degenerate(format!(
                "non-finite vertex ({}, {})",
                bad.x, bad.y
            ))
            .into());
        }
        Ok(Self { vertices })
    }

    /// Wraps vertices already known to form a valid ring.
    pub(crate) fn from_valid(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Returns the vertices in ring order, without repeating the first one.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of distinct ring vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the edges `(start, end)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area: positive for counter-clockwise rings, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Unsigned area in ohm².
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn is_convex(&self) -> bool {
        is_convex_2d(&self.vertices)
    }

    /// Distance from `point` to the nearest edge.
    #[must_use]
    pub fn boundary_distance(&self, point: &Point2) -> f64 {
        self.edges()
            .map(|(a, b)| point_to_segment_dist(point, &a, &b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Returns `true` if `point` lies strictly inside the polygon.
    ///
    /// Points within [`TOLERANCE`] of an edge are on the boundary and not contained.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        winding_number_2d(point, &self.vertices) != 0 && self.boundary_distance(point) > TOLERANCE
    }

    /// Returns `true` if `point` lies inside the polygon or on its boundary.
    #[must_use]
    pub fn covers(&self, point: &Point2) -> bool {
        winding_number_2d(point, &self.vertices) != 0 || self.boundary_distance(point) <= TOLERANCE
    }

    /// Returns the same ring rotated to start at its leftmost-bottom vertex.
    ///
    /// Two congruent rings with the same orientation compare equal after this.
    #[must_use]
    pub fn canonical(&self) -> Self {
        Self {
            vertices: rotate_to_canonical_start(&self.vertices),
        }
    }

    /// Returns the closed ring as `(R, X)` pairs with the first vertex repeated
    /// at the end, ready for plotting.
    #[must_use]
    pub fn to_ring(&self) -> Vec<(f64, f64)> {
        self.vertices
            .iter()
            .chain(self.vertices.first())
            .map(|p| (p.x, p.y))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::ZoneError;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Polygon {
        Polygon::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]).unwrap()
    }

    #[test]
    fn rejects_too_few_vertices() {
        let err = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            ZoneError::GeometricConfiguration(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn rejects_non_finite_vertex() {
        let err = Polygon::new(vec![p(0.0, 0.0), p(f64::NAN, 0.0), p(1.0, 1.0)]).unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn area_and_orientation() {
        let sq = square();
        assert_abs_diff_eq!(sq.signed_area(), 4.0);
        let cw = Polygon::new(sq.vertices().iter().rev().copied().collect()).unwrap();
        assert_abs_diff_eq!(cw.signed_area(), -4.0);
        assert_abs_diff_eq!(cw.area(), 4.0);
    }

    #[test]
    fn contains_excludes_boundary() {
        let sq = square();
        assert!(sq.contains(&p(1.0, 1.0)));
        assert!(!sq.contains(&p(2.0, 1.0)));
        assert!(!sq.contains(&p(3.0, 1.0)));
        assert!(sq.covers(&p(2.0, 1.0)));
        assert!(sq.covers(&p(0.0, 0.0)));
        assert!(!sq.covers(&p(3.0, 1.0)));
    }

    #[test]
    fn ring_is_closed() {
        let ring = square().to_ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn canonical_matches_rotated_ring() {
        let sq = square();
        let shifted =
            Polygon::new(vec![p(2.0, 2.0), p(0.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)]).unwrap();
        assert_eq!(sq.canonical(), shifted.canonical());
    }

    #[test]
    fn edges_wrap_around() {
        let sq = square();
        let edges: Vec<_> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (p(0.0, 2.0), p(0.0, 0.0)));
    }
}
