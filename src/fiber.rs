use std::f32::consts::TAU;

use crate::interp::lerp_point;
use crate::noise::NoiseSource;
use crate::types::{Point, Value, Vector};

/// Whisker length range, render units.
const FIBER_LENGTH: (Value, Value) = (2.0, 8.0);
/// Whisker opacity range.
const FIBER_OPACITY: (Value, Value) = (0.15, 0.40);
/// Grain fleck radius range, render units.
const GRAIN_RADIUS: (Value, Value) = (0.4, 1.6);
/// Grain fleck opacity range. Much fainter than fibers, so it reads as paper
/// tone rather than marks.
const GRAIN_OPACITY: (Value, Value) = (0.04, 0.12);

/// A short whisker of torn paper, in render units (sheet-local, y-down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fiber {
    pub start: Point,
    pub end: Point,
    pub opacity: Value,
}

/// One speck of static paper grain, in render units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainFleck {
    pub position: Point,
    pub radius: Value,
    pub opacity: Value,
}

/// Scatters `count` fibers along a jagged path.
///
/// Each fiber picks a uniformly random segment of the path, a uniform
/// position along it, a uniform angle in `[0, 2π)`, a length in
/// [`FIBER_LENGTH`] and an opacity in [`FIBER_OPACITY`]. `path` is
/// normalized; `width`/`height` scale the anchors into render units.
///
/// Paths with fewer than two points have no segments to anchor to and yield
/// no fibers.
pub fn scatter_fibers(
    path: &[Point],
    width: Value,
    height: Value,
    count: usize,
    seed: u32,
) -> Vec<Fiber> {
    if path.len() < 2 {
        return Vec::new();
    }

    let mut noise = NoiseSource::new(seed);
    let mut fibers = Vec::with_capacity(count);
    for _ in 0..count {
        // next_value() < 1, so the index never reaches the last vertex.
        let segment = (noise.next_value() * (path.len() - 1) as Value) as usize;
        let t = noise.next_value();
        let anchor = lerp_point(path[segment], path[segment + 1], t);
        let anchor = Point::new(anchor.x * width, anchor.y * height);

        let angle = noise.next_value() * TAU;
        let length = noise.range(FIBER_LENGTH.0, FIBER_LENGTH.1);
        let opacity = noise.range(FIBER_OPACITY.0, FIBER_OPACITY.1);

        fibers.push(Fiber {
            start: anchor,
            end: anchor + Vector::new(angle.cos(), angle.sin()) * length,
            opacity,
        });
    }

    fibers
}

/// Scatters `count` static grain flecks across the whole sheet.
///
/// This is the paper-texture consumer of the noise source: positions are
/// uniform over the sheet, radii in [`GRAIN_RADIUS`], opacities in
/// [`GRAIN_OPACITY`]. Pure in `(width, height, count, seed)`.
pub fn scatter_grain(width: Value, height: Value, count: usize, seed: u32) -> Vec<GrainFleck> {
    let mut noise = NoiseSource::new(seed);
    (0..count)
        .map(|_| GrainFleck {
            position: Point::new(noise.next_value() * width, noise.next_value() * height),
            radius: noise.range(GRAIN_RADIUS.0, GRAIN_RADIUS.1),
            opacity: noise.range(GRAIN_OPACITY.0, GRAIN_OPACITY.1),
        })
        .collect()
}
