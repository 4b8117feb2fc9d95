//! Epsilon tiers and the tolerance-based equality built on them.
//!
//! No comparison in the kernel uses exact float equality. Three tiers exist:
//!
//! - [`EPSILON_LOW`]: coarse, for inputs where noise is expected (duplicate
//!   vertex removal, visual comparisons).
//! - [`EPSILON`]: the default for intersection and containment math.
//! - [`EPSILON_HIGH`]: fine, for hull angle comparisons and for cleaning
//!   residue out of coordinates produced by trigonometry.

use super::Point2;

/// Coarse tolerance.
pub const EPSILON_LOW: f64 = 3e-6;

/// Default tolerance for intersection and containment tests.
pub const EPSILON: f64 = 1e-6;

/// Fine tolerance.
pub const EPSILON_HIGH: f64 = 1e-14;

/// Iteration ceiling for the gift-wrapping hull walk.
pub const HULL_MAX_ITERATIONS: usize = 10_000;

/// `|a - b| < epsilon`.
#[must_use]
#[inline]
pub fn equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Returns `true` if every value equals the first one within `epsilon`.
///
/// An empty list is not equivalent to anything and returns `false`.
#[must_use]
pub fn equivalent_numbers(values: &[f64], epsilon: f64) -> bool {
    match values.split_first() {
        None => false,
        Some((first, rest)) => rest.iter().all(|v| equal(*first, *v, epsilon)),
    }
}

/// Component-wise equivalence of two n-dimensional vectors.
///
/// Vectors of different dimension are never equivalent.
#[must_use]
pub fn equivalent_vectors(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equal(*x, *y, epsilon))
}

/// Rectangular-bounds equivalence of two 2D points.
#[must_use]
#[inline]
pub fn equivalent2(a: &Point2, b: &Point2, epsilon: f64) -> bool {
    equal(a.x, b.x, epsilon) && equal(a.y, b.y, epsilon)
}

/// Rounds `value` to `decimal_places` digits after the point.
///
/// Used to remove floating-point residue, e.g. `cos(PI / 2)` becoming `0`.
/// Non-finite values pass through untouched.
#[must_use]
pub fn clean_number(value: f64, decimal_places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimal_places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    // adding +0.0 turns a rounded -0.0 into 0.0
    scaled.round() / scale + 0.0
}
