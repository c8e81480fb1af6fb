use crate::types::{Point, Value};

/// Clamps both coordinates into the unit square.
///
/// Every point stored in a gesture path or tear spine goes through this
/// first; pointer capture means raw positions can land well outside the
/// sheet.
#[inline]
pub fn clamp_unit(p: Point) -> Point {
    Point::new(p.x.clamp(0.0, 1.0), p.y.clamp(0.0, 1.0))
}

/// Distance from `p` to the nearest edge of the unit square.
///
/// ```text
///  min(x, 1-x, y, 1-y)
/// ```
///
/// Negative when `p` lies outside the square.
#[inline]
pub fn nearest_edge_distance(p: Point) -> Value {
    let dx = p.x.min(1.0 - p.x);
    let dy = p.y.min(1.0 - p.y);
    dx.min(dy)
}

/// Sum of segment lengths along a polyline.
#[inline]
pub fn path_length(points: &[Point]) -> Value {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Signed shoelace area of a closed polygon (positive when the vertex order
/// is counter-clockwise in y-up terms, negative otherwise).
#[inline]
pub fn polygon_signed_area(points: &[Point]) -> Value {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Absolute shoelace area. The two clip polygons of a full tear sum to
/// ~1.0 in normalized coordinates.
#[inline]
pub fn polygon_area(points: &[Point]) -> Value {
    polygon_signed_area(points).abs()
}
