use std::f64::consts::PI;

use crate::math::angle_2d::{angle_diff_from_grid, polyline_angle};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::point_in_polygon;
use crate::math::Point2;
use crate::plan::{District, Road, RoadClass};

/// Minimum deviation from the grid for a road to qualify as diagonal (15°).
pub const MIN_DIAGONAL_ANGLE: f64 = PI / 12.0;

/// Maximum qualifying diagonal arterials a district will accept.
pub const MAX_DIAGONALS_PER_DISTRICT: usize = 2;

/// Classification of a drawn polyline against one district's grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagonalVerdict {
    pub is_diagonal: bool,
    /// Deviation from the nearest grid axis, rounded to whole degrees.
    pub angle_degrees: i32,
    /// Set when the district's diagonal quota is already exhausted.
    pub warning: Option<String>,
}

/// Returns the districts a drawn polyline passes through, in input order.
///
/// A district is crossed when any polyline vertex lies inside its boundary,
/// or any polyline segment intersects any boundary edge (the closing edge
/// included).
#[must_use]
pub fn districts_crossed_by_arterial<'a>(
    points: &[Point2],
    districts: &'a [District],
) -> Vec<&'a District> {
    districts
        .iter()
        .filter(|d| polyline_crosses_district(points, d))
        .collect()
}

fn polyline_crosses_district(points: &[Point2], district: &District) -> bool {
    let ring = &district.boundary;
    if ring.len() < 3 {
        return false;
    }
    if points.iter().any(|p| point_in_polygon(p, ring)) {
        return true;
    }
    for seg in points.windows(2) {
        for i in 0..ring.len() {
            let j = (i + 1) % ring.len();
            if segment_segment_intersect_2d(&seg[0], &seg[1], &ring[i], &ring[j]).is_some() {
                return true;
            }
        }
    }
    false
}

/// Validates a drawn polyline as a diagonal arterial for one district.
///
/// Polylines deviating less than [`MIN_DIAGONAL_ANGLE`] from the grid are
/// ordinary grid-aligned roads: not diagonal, never warned. Qualifying
/// diagonals are always reported as diagonal; a warning is attached once the
/// district already holds [`MAX_DIAGONALS_PER_DISTRICT`] qualifying diagonal
/// arterials, leaving the go/no-go decision to the caller.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn validate_diagonal_for_district(
    points: &[Point2],
    district: &District,
    existing_roads: &[Road],
) -> DiagonalVerdict {
    if points.len() < 2 {
        return DiagonalVerdict {
            is_diagonal: false,
            angle_degrees: 0,
            warning: None,
        };
    }

    let diff = angle_diff_from_grid(polyline_angle(points), district.grid_angle);
    // diff is in [0, π/4], so the rounded degree value fits comfortably.
    let angle_degrees = diff.to_degrees().round() as i32;

    if diff < MIN_DIAGONAL_ANGLE {
        return DiagonalVerdict {
            is_diagonal: false,
            angle_degrees,
            warning: None,
        };
    }

    let existing = count_diagonal_arterials(district, existing_roads);
    let warning = (existing >= MAX_DIAGONALS_PER_DISTRICT).then(|| {
        format!(
            "district {} already has {existing} diagonal arterials (limit {MAX_DIAGONALS_PER_DISTRICT})",
            district.id
        )
    });

    DiagonalVerdict {
        is_diagonal: true,
        angle_degrees,
        warning,
    }
}

/// Counts the qualifying diagonal arterials already inside a district.
///
/// A road counts only if it is an arterial, was not generated by this
/// district's own grid, has at least 2 points, has at least one vertex inside
/// the boundary, and deviates at least [`MIN_DIAGONAL_ANGLE`] from the grid.
/// The threshold is inclusive: a road exactly at 15° counts.
#[must_use]
pub fn count_diagonal_arterials(district: &District, roads: &[Road]) -> usize {
    roads
        .iter()
        .filter(|r| {
            r.class == RoadClass::Arterial
                && !r.provenance.generated_by(&district.id)
                && r.points.len() >= 2
                && r.points
                    .iter()
                    .any(|p| point_in_polygon(p, &district.boundary))
                && angle_diff_from_grid(polyline_angle(&r.points), district.grid_angle)
                    >= MIN_DIAGONAL_ANGLE
        })
        .count()
}
