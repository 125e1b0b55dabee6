use std::fmt;

use crate::math::Point2;

/// Identifier of a district.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistrictId(String);

impl DistrictId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a road.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoadId(String);

impl RoadId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Functional class of a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadClass {
    Highway,
    Arterial,
    Collector,
    Local,
    Trail,
}

/// Where a road came from.
///
/// Grid-generated streets belong to the district whose generator emitted
/// them; that ownership decides which roads the split operation may touch and
/// which arterials the diagonal quota ignores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Drawn by the user.
    User,
    /// Emitted by a district's grid generator.
    Generated { district: DistrictId },
}

impl Provenance {
    /// True when the road was generated by the given district's grid.
    #[must_use]
    pub fn generated_by(&self, district: &DistrictId) -> bool {
        matches!(self, Provenance::Generated { district: d } if d == district)
    }
}

/// A district: a closed boundary ring plus the orientation of its internal
/// street grid.
///
/// The boundary is immutable during the geometric operations in this crate;
/// it needs at least 3 vertices to participate in containment and crossing
/// tests.
#[derive(Debug, Clone)]
pub struct District {
    pub id: DistrictId,
    /// Closed ring; the last vertex connects implicitly back to the first.
    pub boundary: Vec<Point2>,
    /// Orientation of the generated orthogonal grid, in radians.
    pub grid_angle: f64,
}

impl District {
    /// Creates a district with the default (axis-aligned) grid orientation.
    #[must_use]
    pub fn new(id: DistrictId, boundary: Vec<Point2>) -> Self {
        Self {
            id,
            boundary,
            grid_angle: 0.0,
        }
    }

    /// Sets the grid orientation in radians.
    #[must_use]
    pub fn with_grid_angle(mut self, grid_angle: f64) -> Self {
        self.grid_angle = grid_angle;
        self
    }
}

/// A road: an open polyline with a functional class and provenance.
///
/// Needs at least 2 points to participate in intersection queries.
#[derive(Debug, Clone)]
pub struct Road {
    pub id: RoadId,
    pub class: RoadClass,
    pub provenance: Provenance,
    pub points: Vec<Point2>,
    pub name: Option<String>,
}

impl Road {
    #[must_use]
    pub fn new(id: RoadId, class: RoadClass, provenance: Provenance, points: Vec<Point2>) -> Self {
        Self {
            id,
            class,
            provenance,
            points,
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Interchange geometry style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterchangeKind {
    #[default]
    Diamond,
    Cloverleaf,
    Trumpet,
}

/// A point marker where a highway crosses an arterial or collector road.
#[derive(Debug, Clone)]
pub struct Interchange {
    pub id: String,
    pub kind: InterchangeKind,
    pub position: Point2,
    pub highway: RoadId,
    pub connected_road: RoadId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_generated_by_matches_owner_only() {
        let a = DistrictId::new("d-a");
        let b = DistrictId::new("d-b");
        let generated = Provenance::Generated {
            district: a.clone(),
        };
        assert!(generated.generated_by(&a));
        assert!(!generated.generated_by(&b));
        assert!(!Provenance::User.generated_by(&a));
    }

    #[test]
    fn district_defaults_to_axis_aligned_grid() {
        let d = District::new(DistrictId::new("d1"), Vec::new());
        assert!(d.grid_angle.abs() < f64::EPSILON);
    }
}
