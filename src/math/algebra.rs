//! Vector algebra.
//!
//! The slice-based helpers work in any dimension. Binary helpers walk the
//! shorter of their two inputs, so extra components of the longer one are
//! ignored. Everything named `*2` is hard-coded to the plane.

use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Euclidean length `sqrt(Σ vᵢ²)`.
#[must_use]
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Divides every component by [`magnitude`].
///
/// A zero vector produces NaN components. Callers that can receive one must
/// check [`degenerate`] first.
#[must_use]
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let m = magnitude(v);
    v.iter().map(|c| c / m).collect()
}

/// Returns `true` if the vector has (near) zero length.
#[must_use]
pub fn degenerate(v: &[f64], epsilon: f64) -> bool {
    v.iter().map(|c| c.abs()).sum::<f64>() < epsilon
}

/// `Σ aᵢ·bᵢ` over the shorter length.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Component-wise `(a + b) / 2`.
#[must_use]
pub fn midpoint(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| (x + y) * 0.5).collect()
}

/// Component-wise mean of `points`, or `None` for an empty list.
///
/// The result has the dimension of the first point.
#[must_use]
pub fn average(points: &[&[f64]]) -> Option<Vec<f64>> {
    let (first, _) = points.split_first()?;
    let mut sum = vec![0.0; first.len()];
    for p in points {
        for (s, c) in sum.iter_mut().zip(p.iter()) {
            *s += c;
        }
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(sum.into_iter().map(|s| s / n).collect())
}

/// Linear interpolation `a + (b - a) * t`.
#[must_use]
pub fn lerp(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + (y - x) * t).collect()
}

/// Euclidean distance between two points of equal dimension.
#[must_use]
pub fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// `1 - |dot(â, b̂)| < epsilon`.
#[must_use]
pub fn parallel(a: &[f64], b: &[f64], epsilon: f64) -> bool {
    1.0 - dot(&normalize(a), &normalize(b)).abs() < epsilon
}

/// 2D cross product `a.x·b.y − a.y·b.x`: the signed area of the
/// parallelogram spanned by `a` and `b`.
///
/// Positive when `b` is counter-clockwise from `a`.
#[must_use]
#[inline]
pub fn cross2(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Distance between two 2D points.
#[must_use]
#[inline]
pub fn distance2(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Midpoint of two 2D points.
#[must_use]
#[inline]
pub fn midpoint2(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Rotates a vector a quarter turn counter-clockwise.
#[must_use]
#[inline]
pub fn rotate90(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Rotates a vector a quarter turn clockwise.
#[must_use]
#[inline]
pub fn rotate270(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Clockwise angle from absolute angle `a` to absolute angle `b`, in `[0, 2π)`.
#[must_use]
pub fn clockwise_angle2_radians(a: f64, b: f64) -> f64 {
    (a - b).rem_euclid(TAU)
}

/// Counter-clockwise angle from absolute angle `a` to absolute angle `b`, in `[0, 2π)`.
#[must_use]
pub fn counter_clockwise_angle2_radians(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(TAU)
}

/// Clockwise angle from vector `a` to vector `b`, in `[0, 2π)`.
#[must_use]
pub fn clockwise_angle2(a: &Vector2, b: &Vector2) -> f64 {
    let angle = cross2(b, a).atan2(b.dot(a));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Counter-clockwise angle from vector `a` to vector `b`, in `[0, 2π)`.
#[must_use]
pub fn counter_clockwise_angle2(a: &Vector2, b: &Vector2) -> f64 {
    let angle = cross2(a, b).atan2(a.dot(b));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// The two interior angles between `a` and `b`, counter-clockwise from `a`
/// first. They sum to `2π`.
#[must_use]
pub fn interior_angles2(a: &Vector2, b: &Vector2) -> [f64; 2] {
    let ccw = counter_clockwise_angle2(a, b);
    [ccw, TAU - ccw]
}

/// Whether `angle` lies counter-clockwise between `start` (inclusive) and
/// `end` (exclusive). All inputs are absolute angles in radians and may lie
/// outside `[0, 2π)`.
#[must_use]
pub fn is_counter_clockwise_between(angle: f64, start: f64, end: f64) -> bool {
    let span = (end - start).rem_euclid(TAU);
    let offset = (angle - start).rem_euclid(TAU);
    offset < span
}

/// Indices of `vectors` sorted counter-clockwise, rotated so the list starts
/// at index 0.
#[must_use]
pub fn counter_clockwise_vector_order(vectors: &[Vector2]) -> Vec<usize> {
    let radians: Vec<f64> = vectors.iter().map(|v| v.y.atan2(v.x)).collect();
    let mut order: Vec<usize> = (0..vectors.len()).collect();
    order.sort_by(|&a, &b| radians[a].total_cmp(&radians[b]));
    if let Some(start) = order.iter().position(|&i| i == 0) {
        order.rotate_left(start);
    }
    order
}

/// Bisects the angle between two vectors.
///
/// Returns `[small, large]`: the unit bisector of the smaller interior angle
/// and its opposite. For opposite vectors, the small bisector is `a` turned
/// a quarter counter-clockwise.
#[must_use]
pub fn bisect_vectors(a: &Vector2, b: &Vector2, epsilon: f64) -> [Vector2; 2] {
    let a_hat = a.normalize();
    let b_hat = b.normalize();
    let sum = a_hat + b_hat;
    let small = if sum.norm() < epsilon {
        rotate90(&a_hat)
    } else {
        sum.normalize()
    };
    [small, -small]
}

/// Angle bisectors of two lines, each given as `(origin, vector)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bisectors {
    /// Parallel (or coincident) lines have one bisector running midway
    /// between them along the first line's direction.
    Parallel((Point2, Vector2)),
    /// Crossing lines have two perpendicular bisectors through the crossing.
    /// The first follows the bisector of the vectors' smaller angle.
    Crossing([(Point2, Vector2); 2]),
}

/// Bisects two lines given in `(origin, vector)` form.
#[must_use]
pub fn bisect_lines2(
    point_a: &Point2,
    vector_a: &Vector2,
    point_b: &Point2,
    vector_b: &Vector2,
    epsilon: f64,
) -> Bisectors {
    let denominator = cross2(vector_a, vector_b);
    if denominator.abs() < epsilon {
        return Bisectors::Parallel((midpoint2(point_a, point_b), *vector_a));
    }
    let t = cross2(&(point_b - point_a), vector_b) / denominator;
    let crossing = point_a + vector_a * t;
    let [small, large] = bisect_vectors(vector_a, vector_b, epsilon);
    Bisectors::Crossing([(crossing, small), (crossing, rotate270(&large))])
}
