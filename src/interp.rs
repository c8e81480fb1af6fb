use crate::types::{Point, Value};

// Linear interpolation
pub fn lerp(a: Value, b: Value, t: Value) -> Value {
    a + (b - a) * t
}

// Linearly interpolate between two points by factor t
pub fn lerp_point(p0: Point, p1: Point, t: Value) -> Point {
    Point::new(lerp(p0.x, p1.x, t), lerp(p0.y, p1.y, t))
}

/// Cubic ease-out: fast start, decelerating finish.
///
/// Drives the two-piece separation so the halves jump apart and settle.
pub fn ease_out_cubic(t: Value) -> Value {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out, for gentler secondary motion (the greeting demo fades
/// its card content in with this).
pub fn ease_in_out_cubic(t: Value) -> Value {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_point_midpoint() {
        let p = lerp_point(Point::new(0.0, 0.0), Point::new(1.0, 2.0), 0.5);
        assert_eq!(p, Point::new(0.5, 1.0));
    }

    #[test]
    fn easing_hits_both_ends() {
        for ease in [ease_out_cubic, ease_in_out_cubic] {
            assert_eq!(ease(0.0), 0.0);
            assert_eq!(ease(1.0), 1.0);
            // clamped outside the unit interval
            assert_eq!(ease(-1.0), 0.0);
            assert_eq!(ease(2.0), 1.0);
        }
    }

    #[test]
    fn ease_out_front_loads_motion() {
        assert!(ease_out_cubic(0.3) > 0.3);
        assert!(ease_in_out_cubic(0.25) < 0.25);
    }
}
