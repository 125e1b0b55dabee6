//! Gridplan sketch walkthrough — exercises the full drawing pipeline on a
//! small plan:
//!
//! ```text
//! cargo run --example sketch
//! ```
//!
//! 1. Generate a district's street grid.
//! 2. Validate a user-drawn diagonal arterial against the district.
//! 3. Split the grid streets the diagonal crosses.
//! 4. Drop a highway through the plan and detect its interchanges.

use gridplan::math::Point2;
use gridplan::operations::diagonal::{districts_crossed_by_arterial, validate_diagonal_for_district};
use gridplan::operations::grid::{generate_district_grid, GridSpec};
use gridplan::operations::interchange::detect_interchanges;
use gridplan::operations::split::split_grid_streets_at_arterial;
use gridplan::plan::{District, DistrictId, InterchangeKind, Provenance, Road, RoadClass, RoadId};
use gridplan::Result;

fn main() -> Result<()> {
    let district = District::new(
        DistrictId::new("riverside"),
        vec![
            Point2::new(30.0, 30.0),
            Point2::new(70.0, 30.0),
            Point2::new(70.0, 70.0),
            Point2::new(30.0, 70.0),
        ],
    );

    let mut roads = generate_district_grid(&district, &GridSpec::default())?;
    println!("generated {} grid streets for {}", roads.len(), district.id);

    // The user draws a 45° arterial across the district.
    let drawn = vec![Point2::new(25.0, 25.0), Point2::new(75.0, 75.0)];
    let districts = vec![district];
    let crossed = districts_crossed_by_arterial(&drawn, &districts);
    println!("drawn arterial crosses {} district(s)", crossed.len());

    for district in &crossed {
        let verdict = validate_diagonal_for_district(&drawn, district, &roads);
        println!(
            "{}: diagonal = {}, angle = {}°, warning = {:?}",
            district.id, verdict.is_diagonal, verdict.angle_degrees, verdict.warning
        );
        if !verdict.is_diagonal || verdict.warning.is_some() {
            continue;
        }

        let outcome = split_grid_streets_at_arterial(&district.id, &roads, &drawn);
        println!(
            "split {} street(s) into {} piece(s)",
            outcome.removed_road_ids.len(),
            outcome.new_roads.len()
        );
        roads.retain(|r| !outcome.removed_road_ids.contains(&r.id));
        roads.extend(outcome.new_roads);
        roads.push(
            Road::new(
                RoadId::new("diag-1"),
                RoadClass::Arterial,
                Provenance::User,
                drawn.clone(),
            )
            .with_name("Riverside Diagonal"),
        );
    }

    // Then a highway north-south through the plan.
    let highway = Road::new(
        RoadId::new("hwy-1"),
        RoadClass::Highway,
        Provenance::User,
        vec![Point2::new(50.0, 0.0), Point2::new(50.0, 100.0)],
    );
    let interchanges = detect_interchanges(&highway, &roads, InterchangeKind::Diamond);
    println!("highway produces {} interchange(s):", interchanges.len());
    for ix in &interchanges {
        println!(
            "  {} at ({:.1}, {:.1}) with {}",
            ix.id, ix.position.x, ix.position.y, ix.connected_road
        );
    }

    Ok(())
}
