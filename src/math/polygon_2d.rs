use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
#[must_use]
pub fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let p0 = verts[i];
        let p1 = verts[(i + 1) % n];
        let side = (p1 - p0).perp(&(point - p0));

        if p0.y <= point.y {
            if p1.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if p1.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Returns `true` if the polygon turns the same way at every vertex.
///
/// Collinear vertices are tolerated.
#[must_use]
pub fn is_convex_2d(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut left_turns: Option<bool> = None;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let turn = (b - a).perp(&(c - b));
        if turn.abs() < TOLERANCE {
            continue;
        }
        match left_turns {
            None => left_turns = Some(turn > 0.0),
            Some(left) if left != (turn > 0.0) => return false,
            Some(_) => {}
        }
    }
    true
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
            best = i;
        }
    }
    if best == 0 {
        return points.to_vec();
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Removes consecutive duplicates (including the wrap-around pair) and
/// vertices lying on the straight edge between their neighbours.
#[must_use]
pub fn simplify_ring(points: &[Point2]) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if ring.last().is_none_or(|last| (pt - last).norm() > TOLERANCE) {
            ring.push(pt);
        }
    }
    while ring.len() > 1 && (ring[0] - ring[ring.len() - 1]).norm() <= TOLERANCE {
        ring.pop();
    }

    let mut changed = true;
    while changed && ring.len() >= 3 {
        changed = false;
        let n = ring.len();
        for i in 0..n {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            let edge = next - prev;
            let len = edge.norm();
            if len > TOLERANCE && edge.perp(&(ring[i] - prev)).abs() / len < TOLERANCE {
                ring.remove(i);
                changed = true;
                break;
            }
        }
    }
    ring
}
