use crate::error::{GeometryError, Result};
use crate::geometry::{Polygon, Segment};
use crate::math::distance_2d::signed_line_dist;
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::polygon_2d::simplify_ring;
use crate::math::TOLERANCE;

/// Slices a convex polygon with a finite segment.
///
/// The polygon is only divided when the segment runs across it from boundary
/// to boundary. A segment that misses the polygon, touches it, runs along an
/// edge or ends inside it leaves the polygon whole.
pub struct SplitPolygon<'a> {
    polygon: &'a Polygon,
    cutter: Segment,
}

impl<'a> SplitPolygon<'a> {
    /// Creates a new `SplitPolygon` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon, cutter: Segment) -> Self {
        Self { polygon, cutter }
    }

    /// Executes the split, returning the components: the untouched polygon,
    /// or the pieces left and right of the cutter (in that order).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the cutter has zero length or the
    /// polygon is not convex.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        let start = *self.cutter.start();
        let len = self.cutter.length();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate("zero-length cutting segment".into()).into());
        }
        if !self.polygon.is_convex() {
            return Err(
                GeometryError::Degenerate("only convex polygons can be split".into()).into(),
            );
        }
        let dir = (*self.cutter.end() - start) / len;

        let verts = self.polygon.vertices();
        let dists: Vec<f64> = verts
            .iter()
            .map(|v| signed_line_dist(v, &start, &dir))
            .collect();
        let has_left = dists.iter().any(|&d| d > TOLERANCE);
        let has_right = dists.iter().any(|&d| d < -TOLERANCE);
        if !(has_left && has_right) {
            return Ok(vec![self.polygon.clone()]);
        }

        let n = verts.len();
        let mut left = Vec::with_capacity(n + 2);
        let mut right = Vec::with_capacity(n + 2);
        // Positions of the cut along the cutter, measured from its start.
        let mut chord = Vec::with_capacity(2);
        for i in 0..n {
            let j = (i + 1) % n;
            let (a, da) = (verts[i], dists[i]);
            let (b, db) = (verts[j], dists[j]);

            if da >= -TOLERANCE {
                left.push(a);
            }
            if da <= TOLERANCE {
                right.push(a);
            }
            if da.abs() <= TOLERANCE {
                chord.push((a - start).dot(&dir));
            }

            let crosses =
                (da > TOLERANCE && db < -TOLERANCE) || (da < -TOLERANCE && db > TOLERANCE);
            if crosses {
                let edge = b - a;
                let (t, u) = line_line_intersect_2d(&a, &edge, &start, &dir).ok_or_else(|| {
                    GeometryError::Degenerate("edge parallel to cutter changes side".into())
                })?;
                let hit = point_at(&a, &edge, t);
                left.push(hit);
                right.push(hit);
                chord.push(u);
            }
        }

        let (lo, hi) = chord
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &u| {
                (lo.min(u), hi.max(u))
            });
        if lo < -TOLERANCE || hi > len + TOLERANCE {
            tracing::trace!(lo, hi, len, "cutter ends inside polygon, left whole");
            return Ok(vec![self.polygon.clone()]);
        }

        let mut pieces = Vec::with_capacity(2);
        for ring in [left, right] {
            let ring = simplify_ring(&ring);
            if ring.len() >= 3 {
                let piece = Polygon::new(ring)?;
                if piece.area() > TOLERANCE {
                    pieces.push(piece);
                }
            }
        }
        tracing::trace!(pieces = pieces.len(), "polygon split");
        Ok(pieces)
    }
}
