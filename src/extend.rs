use crate::types::{Point, Value};
use crate::utils::clamp_unit;

/// Tolerance when checking whether a ray exit still counts as "on" the unit
/// square. A jagged sample can sit a hair outside the surface, so exits are
/// accepted within this slack and clamped afterwards.
const BOUNDARY_SLACK: Value = 0.01;

/// Extrapolates a gesture endpoint outward to the unit-square boundary.
///
/// `neighbor` is the endpoint's adjacent interior sample; the ray direction
/// is `endpoint − neighbor`, i.e. "keep going the way the finger was
/// heading". For the path start, call with the roles swapped so the ray
/// points backwards out of the surface.
///
/// ```text
///        x=0                     x=1
///         |  exit                 |
///   y=0 --*----·~~~~~~~~~~·-------|--  candidates with t ≥ 0 and both
///         |     \          \      |    coordinates within ±0.01 of the
///         |      neighbor   \     |    square compete; the nearest one
///         |                  exit?|    wins and is clamped into [0,1]².
/// ```
///
/// A zero t is allowed so an endpoint already sitting on an edge resolves to
/// itself instead of being dragged to another edge. Axes with a zero
/// direction component contribute no candidates. When nothing qualifies
/// (zero direction, or the ray only leaves through a far corner), the
/// endpoint is projected straight up onto the top edge: the tear must
/// always span the surface, so the resolver never fails.
pub fn extend_to_boundary(endpoint: Point, neighbor: Point) -> Point {
    let dir = endpoint - neighbor;

    // The crossed coordinate is pinned to the edge value rather than
    // recomputed from t, so accepted exits sit on the boundary exactly.
    let mut exits: Vec<(Value, Point)> = Vec::with_capacity(4);
    if dir.x != 0.0 {
        for edge in [0.0, 1.0] {
            let t = (edge - endpoint.x) / dir.x;
            exits.push((t, Point::new(edge, endpoint.y + dir.y * t)));
        }
    }
    if dir.y != 0.0 {
        for edge in [0.0, 1.0] {
            let t = (edge - endpoint.y) / dir.y;
            exits.push((t, Point::new(endpoint.x + dir.x * t, edge)));
        }
    }

    let mut best: Option<(Value, Point)> = None;
    for (t, candidate) in exits {
        if t < 0.0 {
            continue;
        }
        let on_surface = (-BOUNDARY_SLACK..=1.0 + BOUNDARY_SLACK).contains(&candidate.x)
            && (-BOUNDARY_SLACK..=1.0 + BOUNDARY_SLACK).contains(&candidate.y);
        if !on_surface {
            continue;
        }
        if best.is_none_or(|(nearest, _)| t < nearest) {
            best = Some((t, candidate));
        }
    }

    match best {
        Some((_, exit)) => clamp_unit(exit),
        None => Point::new(endpoint.x.clamp(0.0, 1.0), 0.0),
    }
}
