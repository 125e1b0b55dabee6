use super::{Point2, Vector2, TOLERANCE};

/// Parametric intersection of an unbounded line with a bounded segment.
///
/// The line is `origin + t * dir`; the segment goes from `b0` to `b1`.
/// Returns `(point, t)` where `t` is unbounded (negative values allowed),
/// while the segment parameter must land in `[0, 1]`. Returns `None` for
/// parallel inputs.
#[must_use]
pub fn line_segment_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64)> {
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);
    let cross = dir.x * db.y - dir.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = b0.x - origin.x;
    let dy = b0.y - origin.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * dir.y - dy * dir.x) / cross;

    // Use a small epsilon to include segment endpoints.
    let eps = TOLERANCE;
    if u >= -eps && u <= 1.0 + eps {
        Some((Point2::new(origin.x + dir.x * t, origin.y + dir.y * t), t))
    } else {
        None
    }
}

/// Bounded segment-segment intersection.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Endpoint touches count as intersections. Parallel and collinear segments
/// (cross-product magnitude below [`TOLERANCE`]) return `None`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = Vector2::new(a1.x - a0.x, a1.y - a0.y);
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = Point2::new(a0.x + da.x * t_clamped, a0.y + da.y * t_clamped);
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn segment_segment_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 2.0);
        let b0 = Point2::new(0.0, 2.0);
        let b1 = Point2::new(2.0, 0.0);
        let (pt, t, u) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1).unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn segment_segment_no_crossing() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(0.0, 1.0);
        let b1 = Point2::new(1.0, 1.0);
        assert!(segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_none());
    }

    #[test]
    fn segment_segment_parallel_returns_none() {
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 2.0);
        let b0 = Point2::new(1.0, 0.0);
        let b1 = Point2::new(3.0, 2.0);
        assert!(segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_none());
    }

    #[test]
    fn segment_segment_endpoint_touch_counts() {
        // Second segment starts exactly where the first one ends.
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(2.0, 0.0);
        let b0 = Point2::new(2.0, 0.0);
        let b1 = Point2::new(2.0, 2.0);
        let (pt, t, u) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1).unwrap();
        assert!((pt.x - 2.0).abs() < TOLERANCE);
        assert!(pt.y.abs() < TOLERANCE);
        assert!((t - 1.0).abs() < TOLERANCE);
        assert!(u.abs() < TOLERANCE);
    }

    #[test]
    fn segment_segment_out_of_range_returns_none() {
        // The infinite lines cross, but beyond the first segment's extent.
        let a0 = Point2::new(0.0, 0.0);
        let a1 = Point2::new(1.0, 0.0);
        let b0 = Point2::new(5.0, -1.0);
        let b1 = Point2::new(5.0, 1.0);
        assert!(segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_none());
    }

    #[test]
    fn line_segment_unbounded_line_parameter() {
        // Line pointing +x from (2, 0) hits the segment "behind" the origin.
        let origin = Point2::new(2.0, 0.0);
        let dir = Vector2::new(1.0, 0.0);
        let b0 = Point2::new(0.0, -1.0);
        let b1 = Point2::new(0.0, 1.0);
        let (pt, t) = line_segment_intersect_2d(&origin, &dir, &b0, &b1).unwrap();
        assert!((t + 2.0).abs() < TOLERANCE);
        assert!(pt.x.abs() < TOLERANCE);
        assert!(pt.y.abs() < TOLERANCE);
    }

    #[test]
    fn line_segment_rejects_out_of_segment() {
        let origin = Point2::new(0.0, 5.0);
        let dir = Vector2::new(1.0, 0.0);
        let b0 = Point2::new(3.0, 0.0);
        let b1 = Point2::new(3.0, 1.0);
        assert!(line_segment_intersect_2d(&origin, &dir, &b0, &b1).is_none());
    }

    #[test]
    fn line_segment_parallel_returns_none() {
        let origin = Point2::new(0.0, 0.0);
        let dir = Vector2::new(1.0, 0.0);
        let b0 = Point2::new(0.0, 1.0);
        let b1 = Point2::new(4.0, 1.0);
        assert!(line_segment_intersect_2d(&origin, &dir, &b0, &b1).is_none());
    }
}
