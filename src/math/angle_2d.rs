use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::Point2;

/// Dominant angle of a polyline: the direction of the vector from the first
/// to the last vertex.
///
/// Intermediate bends are deliberately ignored — arterials in this engine are
/// treated as dominantly straight, so the chord direction is the signal that
/// matters. Fewer than 2 points returns `0.0`.
#[must_use]
pub fn polyline_angle(points: &[Point2]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let first = points[0];
    let last = points[points.len() - 1];
    (last.y - first.y).atan2(last.x - first.x)
}

/// Acute angular deviation of `candidate` from the nearest axis of an
/// orthogonal grid oriented at `grid`, in radians.
///
/// An orthogonal grid is 4-fold symmetric: a road at 0° is as grid-aligned as
/// one at 90°, 180°, or 270°. The raw difference is folded modulo π/2 and
/// reflected above π/4, so the result is always in `[0, π/4]`.
#[must_use]
pub fn angle_diff_from_grid(candidate: f64, grid: f64) -> f64 {
    let d = (candidate - grid).abs() % FRAC_PI_2;
    if d > FRAC_PI_4 {
        FRAC_PI_2 - d
    } else {
        d
    }
}
