use crate::interp::lerp_point;
use crate::noise::NoiseSource;
use crate::types::{Point, Value, Vector};

/// Fraction of the jaggedness magnitude applied as omnidirectional
/// micro-jitter on top of the perpendicular displacement.
const MICRO_JITTER: Value = 0.3;

/// Unit normal of the segment `p1 → p2`, or the zero vector when the segment
/// has no length (so degenerate input perturbs nothing instead of dividing
/// by zero).
fn segment_normal(p1: Point, p2: Point) -> Vector {
    let dir = p2 - p1;
    let len = dir.norm();
    if len == 0.0 {
        Vector::new(0.0, 0.0)
    } else {
        Vector::new(-dir.y, dir.x) / len
    }
}

/// Subdivides `p1 → p2` into `segments` pieces and roughens the interior
/// vertices.
///
/// Endpoints are returned exactly. Each of the `segments − 1` interior
/// points sits at an even parametric step along the straight line, displaced
/// by a centered perpendicular offset of up to `jaggedness`, plus a smaller
/// jitter ([`MICRO_JITTER`] of `jaggedness`) on both axes for fiber-level
/// roughness. Draws come from `noise` in a fixed order, so the same source
/// state always reproduces the same edge.
pub fn jagged_segment(
    p1: Point,
    p2: Point,
    jaggedness: Value,
    segments: usize,
    noise: &mut NoiseSource,
) -> Vec<Point> {
    let segments = segments.max(1);
    let normal = segment_normal(p1, p2);
    let mut points = Vec::with_capacity(segments + 1);

    points.push(p1);
    for i in 1..segments {
        let t = i as Value / segments as Value;
        let base = lerp_point(p1, p2, t);
        let along_normal = noise.range(-jaggedness, jaggedness);
        let jitter_x = noise.range(-MICRO_JITTER * jaggedness, MICRO_JITTER * jaggedness);
        let jitter_y = noise.range(-MICRO_JITTER * jaggedness, MICRO_JITTER * jaggedness);
        points.push(base + normal * along_normal + Vector::new(jitter_x, jitter_y));
    }
    points.push(p2);

    points
}

/// Roughens a whole polyline into one continuous jagged path.
///
/// Every consecutive pair of `spine` points is expanded with
/// [`jagged_segment`]; the first vertex of each segment after the first is
/// dropped because it duplicates the previous segment's last vertex. A
/// single [`NoiseSource`] seeded with `seed` feeds the whole chain, so the
/// path is a pure function of `(spine, jaggedness, segments_per_edge, seed)`.
///
/// Fewer than two spine points come back unchanged.
pub fn jagged_path(
    spine: &[Point],
    jaggedness: Value,
    segments_per_edge: usize,
    seed: u32,
) -> Vec<Point> {
    if spine.len() < 2 {
        return spine.to_vec();
    }

    let mut noise = NoiseSource::new(seed);
    let mut points = Vec::with_capacity(spine.len() * segments_per_edge.max(1) + 1);
    for (i, pair) in spine.windows(2).enumerate() {
        let segment = jagged_segment(pair[0], pair[1], jaggedness, segments_per_edge, &mut noise);
        if i == 0 {
            points.extend(segment);
        } else {
            points.extend(segment.into_iter().skip(1));
        }
    }

    points
}
