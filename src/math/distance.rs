//! Scalar distance metrics on pairs of 2D points

use num_traits::{AsPrimitive, Signed};

/// Taxicab distance between `(x1, y1)` and `(x2, y2)`
///
/// # Panics
///
/// Overflows (and panics in debug builds) if a coordinate difference or the
/// sum does not fit in `T`. Widen to a larger type first when inputs may sit
/// near the limits, as [`Coord::manhattan_distance`] does.
///
/// [`Coord::manhattan_distance`]: crate::spatial::coord::Coord::manhattan_distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Signed + Copy,
{
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Straight-line distance between `(x1, y1)` and `(x2, y2)`
///
/// Inputs are widened to `f64` before subtracting, so integer inputs
/// near the type limits do not overflow.
pub fn euclidean_distance<T>(x1: T, y1: T, x2: T, y2: T) -> f64
where
    T: AsPrimitive<f64>,
{
    let dx = x1.as_() - x2.as_();
    let dy = y1.as_() - y2.as_();
    dx.hypot(dy)
}
