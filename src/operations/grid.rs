use std::f64::consts::FRAC_PI_2;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::intersect_2d::line_segment_intersect_2d;
use crate::math::polygon_2d::{point_in_polygon, polygon_bounds};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::plan::{District, Provenance, Road, RoadClass, RoadId};

/// Parameters for a district's generated street grid.
#[derive(Debug, Clone)]
pub struct GridSpec {
    /// Distance between parallel streets, in world units.
    pub spacing: f64,
    /// Every n-th street of a family is a collector; the rest are locals.
    pub collector_every: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            collector_every: 3,
        }
    }
}

/// Generates a district's orthogonal street grid, clipped to its boundary.
///
/// Two families of parallel sweep lines are laid across the boundary, one at
/// the district's `grid_angle` and one perpendicular to it. Each line is
/// clipped against the boundary with the even-odd rule; every inside span
/// becomes one road owned by the district (`Provenance::Generated`). Line
/// indices sweep from the min side, and spans are emitted in ascending
/// parameter order, so the output is deterministic for a given input.
///
/// Road ids are `"{districtId}-h{line}-{span}"` for the first family and
/// `"-v{line}-{span}"` for the second.
///
/// # Errors
///
/// Returns an error when the boundary has fewer than 3 vertices, the spacing
/// is not positive, or `collector_every` is zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn generate_district_grid(district: &District, spec: &GridSpec) -> Result<Vec<Road>> {
    if district.boundary.len() < 3 {
        return Err(GeometryError::Degenerate(format!(
            "district {} boundary has {} vertices, need at least 3",
            district.id,
            district.boundary.len()
        ))
        .into());
    }
    if spec.spacing <= 0.0 {
        return Err(OperationError::InvalidInput(format!(
            "spacing must be positive, got {}",
            spec.spacing
        ))
        .into());
    }
    if spec.collector_every == 0 {
        return Err(OperationError::InvalidInput(
            "collector_every must be at least 1".into(),
        )
        .into());
    }

    let Some((min, max)) = polygon_bounds(&district.boundary) else {
        return Ok(Vec::new());
    };
    let center = Point2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
    // Half the bounding-box diagonal reaches every corner from the center,
    // whatever the grid orientation.
    let radius = ((max.x - min.x).powi(2) + (max.y - min.y).powi(2)).sqrt() / 2.0;
    let steps = (radius / spec.spacing).ceil() as i64;

    let mut roads = Vec::new();
    for (family, label) in [(0u8, 'h'), (1, 'v')] {
        let angle = if family == 0 {
            district.grid_angle
        } else {
            district.grid_angle + FRAC_PI_2
        };
        let dir = Vector2::new(angle.cos(), angle.sin());
        let normal = Vector2::new(-dir.y, dir.x);

        for i in -steps..=steps {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * spec.spacing;
            let origin = center + normal * offset;
            let line_index = (i + steps) as usize;
            let class = if (line_index + 1) % spec.collector_every == 0 {
                RoadClass::Collector
            } else {
                RoadClass::Local
            };

            for (span_index, (t0, t1)) in
                clip_line_to_ring(&origin, &dir, &district.boundary)
                    .into_iter()
                    .enumerate()
            {
                let p0 = origin + dir * t0;
                let p1 = origin + dir * t1;
                roads.push(Road::new(
                    RoadId::new(format!("{}-{label}{line_index}-{span_index}", district.id)),
                    class,
                    Provenance::Generated {
                        district: district.id.clone(),
                    },
                    vec![p0, p1],
                ));
            }
        }
    }
    Ok(roads)
}

/// How far to each side of a span midpoint the interior probe reaches.
const SPAN_INTERIOR_PROBE: f64 = 1e-6;

/// Clips the unbounded line `origin + t * dir` against a closed ring,
/// returning the parameter intervals that lie inside.
///
/// Crossing parameters are collected on every edge, sorted, deduplicated
/// (a crossing exactly at a shared vertex registers on both edges), and
/// paired even-odd. Each span's midpoint is probed on both sides of the
/// line: a street needs district interior on both sides, which rejects
/// tangent grazes and spans collinear with a boundary edge.
fn clip_line_to_ring(origin: &Point2, dir: &Vector2, ring: &[Point2]) -> Vec<(f64, f64)> {
    let mut params: Vec<f64> = Vec::new();
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        if let Some((_, t)) = line_segment_intersect_2d(origin, dir, &ring[i], &ring[j]) {
            params.push(t);
        }
    }
    params.sort_by(f64::total_cmp);
    params.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);

    let normal = Vector2::new(-dir.y, dir.x);
    let mut spans = Vec::new();
    for pair in params.chunks_exact(2) {
        let (t0, t1) = (pair[0], pair[1]);
        if t1 - t0 < TOLERANCE {
            continue;
        }
        let mid = origin + dir * ((t0 + t1) / 2.0);
        let left = mid + normal * SPAN_INTERIOR_PROBE;
        let right = mid - normal * SPAN_INTERIOR_PROBE;
        if point_in_polygon(&left, ring) && point_in_polygon(&right, ring) {
            spans.push((t0, t1));
        }
    }
    spans
}
