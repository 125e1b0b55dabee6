use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;
use crate::plan::{DistrictId, Road, RoadClass, RoadId};

/// Road-set delta produced by splitting a district's grid streets.
///
/// The caller applies this as a remove-then-insert transaction: every id in
/// `removed_road_ids` is replaced end-to-end by its pieces in `new_roads`.
#[derive(Debug, Clone, Default)]
pub struct SplitOutcome {
    pub removed_road_ids: Vec<RoadId>,
    pub new_roads: Vec<Road>,
}

/// One crossing of a street by the arterial.
struct Hit {
    /// Index of the street segment that was crossed.
    segment_index: usize,
    point: Point2,
    /// Normalized parameter along that segment.
    t: f64,
}

/// Splits a district's generated local and collector streets where a diagonal
/// arterial crosses them, producing clean T-intersections.
///
/// Only streets generated by `district_id` are eligible: user-drawn roads and
/// other districts' grids are never touched, even when geometrically crossed.
/// Each crossed street is replaced by its split pieces, which keep the
/// original class, name, and provenance; piece ids follow
/// `"{id}-split-{n}"` with `n` increasing along the street. Streets the
/// arterial misses are left out of the outcome entirely.
#[must_use]
pub fn split_grid_streets_at_arterial(
    district_id: &DistrictId,
    roads: &[Road],
    arterial_points: &[Point2],
) -> SplitOutcome {
    let mut outcome = SplitOutcome::default();
    if arterial_points.len() < 2 {
        return outcome;
    }

    for road in roads {
        if !matches!(road.class, RoadClass::Local | RoadClass::Collector)
            || !road.provenance.generated_by(district_id)
            || road.points.len() < 2
        {
            continue;
        }

        let mut hits = collect_hits(&road.points, arterial_points);
        if hits.is_empty() {
            continue;
        }
        // Deterministic along-road order for multi-crossing streets.
        hits.sort_by(|a, b| {
            a.segment_index
                .cmp(&b.segment_index)
                .then(a.t.total_cmp(&b.t))
        });

        outcome.removed_road_ids.push(road.id.clone());
        outcome.new_roads.extend(split_road_at_hits(road, &hits));
    }
    outcome
}

fn collect_hits(street: &[Point2], arterial: &[Point2]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (segment_index, seg) in street.windows(2).enumerate() {
        for art in arterial.windows(2) {
            // The solver's first parameter is already the normalized distance
            // along the street segment.
            if let Some((point, t, _)) =
                segment_segment_intersect_2d(&seg[0], &seg[1], &art[0], &art[1])
            {
                hits.push(Hit {
                    segment_index,
                    point,
                    t,
                });
            }
        }
    }
    hits
}

/// Walks the street's vertices, closing out a sub-path at every hit and
/// restarting from the hit point; `hits` must be sorted along the street.
fn split_road_at_hits(road: &Road, hits: &[Hit]) -> Vec<Road> {
    let mut pieces = Vec::new();
    let mut part_index = 0usize;
    let mut current = vec![road.points[0]];
    let mut remaining = hits.iter().peekable();

    for (i, seg) in road.points.windows(2).enumerate() {
        while let Some(hit) = remaining.peek() {
            if hit.segment_index != i {
                break;
            }
            current.push(hit.point);
            if current.len() >= 2 {
                pieces.push(make_piece(road, part_index, std::mem::take(&mut current)));
                part_index += 1;
            }
            current = vec![hit.point];
            remaining.next();
        }
        current.push(seg[1]);
    }

    if current.len() >= 2 {
        pieces.push(make_piece(road, part_index, current));
    }
    pieces
}

fn make_piece(road: &Road, part_index: usize, points: Vec<Point2>) -> Road {
    Road {
        id: RoadId::new(format!("{}-split-{part_index}", road.id)),
        class: road.class,
        provenance: road.provenance.clone(),
        points,
        name: road.name.clone(),
    }
}
