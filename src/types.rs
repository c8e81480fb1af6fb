use nalgebra::{Point2, Vector2};

/// Scalar used throughout the tear geometry.
pub type Value = f32;

/// A 2D point with [`Value`] components.
///
/// Tear geometry lives in *normalized* sheet coordinates: both axes in
/// `[0, 1]`, `(0, 0)` at the sheet's top-left corner, y growing downward.
/// Render-unit positions (sheet-local pixels) use the same type; which space
/// a function expects is stated at its definition.
pub type Point = Point2<Value>;

/// A 2D vector with [`Value`] components.
pub type Vector = Vector2<Value>;
