use bevy::prelude::*;

use crate::types::{Point, Value};

/// A tearable paper sheet.
///
/// Spawn one of these (plus a `Transform` for placement) and the plugin does
/// the rest: it attaches a gesture tracker, spawns the piece and overlay
/// children, and rebuilds their meshes whenever the tear geometry changes.
///
/// Tear geometry lives in normalized sheet coordinates ([0,1]², y down, origin
/// at the sheet's top-left corner); this component owns the mapping between
/// that space, pointer render units, and Bevy's centered y-up local space.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct TearSheet {
    /// Render size in world units.
    pub width: Value,
    pub height: Value,
    /// Perpendicular tear-edge amplitude, as a fraction of the sheet.
    pub jaggedness: Value,
    /// Jagged subdivisions per recorded path segment.
    pub detail: usize,
    /// Whisker count along a committed tear edge.
    pub fiber_count: usize,
    /// Static paper-grain fleck count.
    pub grain_count: usize,
    /// Seed for every deterministic draw this sheet makes.
    pub seed: u32,
}

impl TearSheet {
    pub fn new(width: Value, height: Value) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_jaggedness(mut self, jaggedness: Value) -> Self {
        self.jaggedness = jaggedness;
        self
    }

    pub fn with_detail(mut self, detail: usize) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_fibers(mut self, fiber_count: usize) -> Self {
        self.fiber_count = fiber_count;
        self
    }

    pub fn with_grain(mut self, grain_count: usize) -> Self {
        self.grain_count = grain_count;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn diagonal(&self) -> Value {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Normalized sheet point → Bevy local position (centered, y up).
    pub fn local_from_normalized(&self, p: Point) -> Vec2 {
        Vec2::new((p.x - 0.5) * self.width, (0.5 - p.y) * self.height)
    }

    /// Bevy local position → pointer render units (top-left origin, y down),
    /// the space the gesture tracker samples in.
    pub fn pointer_from_local(&self, local: Vec2) -> Point {
        Point::new(local.x + self.width * 0.5, self.height * 0.5 - local.y)
    }

    /// Inverse of [`pointer_from_local`](TearSheet::pointer_from_local);
    /// fibers and grain flecks are generated in render units.
    pub fn local_from_pointer(&self, p: Point) -> Vec2 {
        Vec2::new(p.x - self.width * 0.5, self.height * 0.5 - p.y)
    }

    /// Whether a Bevy local position lands on the sheet.
    pub fn contains_local(&self, local: Vec2) -> bool {
        local.x.abs() <= self.width * 0.5 && local.y.abs() <= self.height * 0.5
    }
}

impl Default for TearSheet {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
            jaggedness: 0.02,
            detail: 6,
            fiber_count: 90,
            grain_count: 140,
            seed: 1,
        }
    }
}
