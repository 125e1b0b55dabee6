use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Point2;
use crate::plan::{Interchange, InterchangeKind, Road, RoadClass};

/// Two crossings along the same connected road closer than this per
/// coordinate, in world units, collapse into one marker.
pub const INTERCHANGE_MERGE_DISTANCE: f64 = 1.0;

/// Finds where a newly drawn highway crosses the arterial/collector tier.
///
/// Local streets and trails never produce interchanges, and neither do other
/// highways — interchanges only connect highways to arterials and collectors.
/// Nearby hits along one connected road are merged (a cheap tolerance filter,
/// not a clustering pass); hits on different roads stay separate even at the
/// literal same position. Marker ids are `"{highwayId}-ix-{n}"` with `n`
/// increasing across the call.
#[must_use]
pub fn detect_interchanges(
    highway: &Road,
    existing_roads: &[Road],
    kind: InterchangeKind,
) -> Vec<Interchange> {
    let mut interchanges = Vec::new();
    if highway.points.len() < 2 {
        return interchanges;
    }

    let mut counter = 0usize;
    for road in existing_roads {
        if !matches!(road.class, RoadClass::Arterial | RoadClass::Collector)
            || road.id == highway.id
            || road.points.len() < 2
        {
            continue;
        }

        let mut positions: Vec<Point2> = Vec::new();
        for hseg in highway.points.windows(2) {
            for rseg in road.points.windows(2) {
                let Some((point, _, _)) =
                    segment_segment_intersect_2d(&hseg[0], &hseg[1], &rseg[0], &rseg[1])
                else {
                    continue;
                };
                let duplicate = positions.iter().any(|p| {
                    (p.x - point.x).abs() < INTERCHANGE_MERGE_DISTANCE
                        && (p.y - point.y).abs() < INTERCHANGE_MERGE_DISTANCE
                });
                if !duplicate {
                    positions.push(point);
                }
            }
        }

        for position in positions {
            interchanges.push(Interchange {
                id: format!("{}-ix-{counter}", highway.id),
                kind,
                position,
                highway: highway.id.clone(),
                connected_road: road.id.clone(),
            });
            counter += 1;
        }
    }
    interchanges
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::plan::{Provenance, RoadId};

    use super::*;

    fn road(id: &str, class: RoadClass, points: Vec<Point2>) -> Road {
        Road::new(RoadId::new(id), class, Provenance::User, points)
    }

    fn highway() -> Road {
        road(
            "hwy-1",
            RoadClass::Highway,
            vec![Point2::new(0.0, 50.0), Point2::new(100.0, 50.0)],
        )
    }

    #[test]
    fn crossing_arterial_produces_marker() {
        let arterial = road(
            "a-1",
            RoadClass::Arterial,
            vec![Point2::new(30.0, 0.0), Point2::new(30.0, 100.0)],
        );
        let found = detect_interchanges(&highway(), &[arterial], InterchangeKind::default());
        assert_eq!(found.len(), 1);
        let ix = &found[0];
        assert_eq!(ix.kind, InterchangeKind::Diamond);
        assert!((ix.position.x - 30.0).abs() < 1e-9);
        assert!((ix.position.y - 50.0).abs() < 1e-9);
        assert_eq!(ix.highway, RoadId::new("hwy-1"));
        assert_eq!(ix.connected_road, RoadId::new("a-1"));
        assert_eq!(ix.id, "hwy-1-ix-0");
    }

    #[test]
    fn local_and_trail_crossings_are_ignored() {
        let local = road(
            "l-1",
            RoadClass::Local,
            vec![Point2::new(30.0, 0.0), Point2::new(30.0, 100.0)],
        );
        let trail = road(
            "t-1",
            RoadClass::Trail,
            vec![Point2::new(60.0, 0.0), Point2::new(60.0, 100.0)],
        );
        let found = detect_interchanges(&highway(), &[local, trail], InterchangeKind::default());
        assert!(found.is_empty());
    }

    #[test]
    fn highway_crossings_are_ignored() {
        let other = road(
            "hwy-2",
            RoadClass::Highway,
            vec![Point2::new(30.0, 0.0), Point2::new(30.0, 100.0)],
        );
        let found = detect_interchanges(&highway(), &[other], InterchangeKind::default());
        assert!(found.is_empty());
    }

    #[test]
    fn highway_never_matches_itself() {
        let hwy = highway();
        let mut self_copy = hwy.clone();
        self_copy.class = RoadClass::Arterial;
        // Same id as the highway: excluded regardless of class.
        let found = detect_interchanges(&hwy, &[self_copy], InterchangeKind::default());
        assert!(found.is_empty());
    }

    #[test]
    fn nearby_hits_on_one_road_are_merged() {
        // A collector running almost parallel, weaving across the highway
        // twice within a world unit.
        let collector = road(
            "c-1",
            RoadClass::Collector,
            vec![
                Point2::new(40.0, 49.9),
                Point2::new(40.3, 50.1),
                Point2::new(40.6, 49.9),
            ],
        );
        let found = detect_interchanges(&highway(), &[collector], InterchangeKind::default());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn coincident_hits_on_different_roads_stay_separate() {
        let a = road(
            "a-1",
            RoadClass::Arterial,
            vec![Point2::new(30.0, 0.0), Point2::new(30.0, 100.0)],
        );
        let b = road(
            "a-2",
            RoadClass::Collector,
            vec![Point2::new(30.0, 100.0), Point2::new(30.0, 0.0)],
        );
        let found = detect_interchanges(&highway(), &[a, b], InterchangeKind::default());
        assert_eq!(found.len(), 2);
        assert_ne!(found[0].id, found[1].id);
        assert_eq!(found[0].connected_road, RoadId::new("a-1"));
        assert_eq!(found[1].connected_road, RoadId::new("a-2"));
    }

    #[test]
    fn degenerate_highway_yields_nothing() {
        let mut hwy = highway();
        hwy.points.truncate(1);
        let arterial = road(
            "a-1",
            RoadClass::Arterial,
            vec![Point2::new(30.0, 0.0), Point2::new(30.0, 100.0)],
        );
        let found = detect_interchanges(&hwy, &[arterial], InterchangeKind::default());
        assert!(found.is_empty());
    }

    #[test]
    fn bent_highway_crossing_twice_yields_two_markers() {
        let hwy = road(
            "hwy-1",
            RoadClass::Highway,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(50.0, 80.0),
                Point2::new(100.0, 0.0),
            ],
        );
        let arterial = road(
            "a-1",
            RoadClass::Arterial,
            vec![Point2::new(0.0, 40.0), Point2::new(100.0, 40.0)],
        );
        let found = detect_interchanges(&hwy, &[arterial], InterchangeKind::Cloverleaf);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|ix| ix.kind == InterchangeKind::Cloverleaf));
        assert_eq!(found[0].id, "hwy-1-ix-0");
        assert_eq!(found[1].id, "hwy-1-ix-1");
    }
}
