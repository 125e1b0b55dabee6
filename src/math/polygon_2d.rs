use super::{Point2, TOLERANCE};

/// Ray-casting point-in-polygon parity test.
///
/// The ring is implicitly closed (last vertex connects back to the first) and
/// must have at least 3 vertices; fewer returns `false`. Points exactly on
/// the boundary are not classified consistently — the half-open `y`
/// comparison sends them to either side depending on edge orientation.
/// Callers that need boundary hits test the edges with segment intersection
/// instead of relying on containment.
#[must_use]
pub fn point_in_polygon(point: &Point2, ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&ring[i], &ring[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(ring: &[Point2]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += ring[i].x * ring[j].y - ring[j].x * ring[i].y;
    }
    sum * 0.5
}

/// Axis-aligned bounding box of a point set as `(min, max)` corners.
///
/// Returns `None` for an empty input.
#[must_use]
pub fn polygon_bounds(ring: &[Point2]) -> Option<(Point2, Point2)> {
    let first = ring.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &ring[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}
