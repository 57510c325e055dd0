use super::{Point2, Vector2};

/// Returns the minimum distance from point `p` to the line segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

/// Signed distance from `p` to the infinite line through `origin` along unit `direction`.
///
/// Positive on the left of the direction, negative on the right.
#[must_use]
pub fn signed_line_dist(p: &Point2, origin: &Point2, direction: &Vector2) -> f64 {
    let v = p - origin;
    direction.x * v.y - direction.y * v.x
}
