//! Parametric line intersection.
//!
//! Lines, rays and segments share one form: `origin + t * vector`. They differ
//! only in which parameters `t` count as "on" the primitive, captured by
//! [`ParamRange`]. A segment `[a, b]` is `origin = a`, `vector = b - a`.
//!
//! One solver, [`intersect_lines`], serves every combination. The typed entry
//! points below fix the ranges for each pair of primitives.

use super::algebra::cross2;
use super::{Point2, Vector2};

/// Whether a parameter sitting exactly on an endpoint counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Endpoints (within epsilon) are accepted.
    #[default]
    Inclusive,
    /// Endpoints (within epsilon) are rejected.
    Exclusive,
}

/// The accepted parameter range of a primitive in `origin + t * vector` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRange {
    /// Every `t`.
    Line,
    /// `t ≥ −ε` (inclusive) or `t > ε` (exclusive).
    Ray(Boundary),
    /// `−ε ≤ t ≤ 1+ε` (inclusive) or `ε < t < 1−ε` (exclusive).
    Segment(Boundary),
}

impl ParamRange {
    /// Returns `true` if parameter `t` lies on the primitive.
    #[must_use]
    pub fn accepts(self, t: f64, epsilon: f64) -> bool {
        match self {
            Self::Line => true,
            Self::Ray(Boundary::Inclusive) => t >= -epsilon,
            Self::Ray(Boundary::Exclusive) => t > epsilon,
            Self::Segment(Boundary::Inclusive) => t >= -epsilon && t <= 1.0 + epsilon,
            Self::Segment(Boundary::Exclusive) => t > epsilon && t < 1.0 - epsilon,
        }
    }

    /// Clamps `t` into the range, ignoring the boundary policy.
    #[must_use]
    pub fn clamp(self, t: f64) -> f64 {
        match self {
            Self::Line => t,
            Self::Ray(_) => t.max(0.0),
            Self::Segment(_) => t.clamp(0.0, 1.0),
        }
    }
}

/// Result of a line-line intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    /// The intersection point, computed along the first line.
    pub point: Point2,
    /// Parameter on the first line.
    pub t0: f64,
    /// Parameter on the second line.
    pub t1: f64,
}

/// Solves `a_origin + t0 * a_vec = b_origin + t1 * b_vec` for `(t0, t1)`.
///
/// Returns `None` when `|cross(a_vec, b_vec)| < epsilon`. Parallel lines
/// report no intersection even when they are coincident.
#[must_use]
pub fn line_params(
    a_origin: &Point2,
    a_vec: &Vector2,
    b_origin: &Point2,
    b_vec: &Vector2,
    epsilon: f64,
) -> Option<(f64, f64)> {
    let denominator = cross2(a_vec, b_vec);
    if denominator.abs() < epsilon {
        return None;
    }
    let d = b_origin - a_origin;
    let t0 = cross2(&d, b_vec) / denominator;
    let t1 = cross2(&d, a_vec) / denominator;
    Some((t0, t1))
}

/// The generalized intersection: solves for both parameters, then reports a
/// hit only when `range_a` accepts `t0` and `range_b` accepts `t1`.
///
/// The point is built from the first line (`a_origin + t0 * a_vec`).
#[must_use]
pub fn intersect_lines(
    a_origin: &Point2,
    a_vec: &Vector2,
    b_origin: &Point2,
    b_vec: &Vector2,
    range_a: ParamRange,
    range_b: ParamRange,
    epsilon: f64,
) -> Option<LineHit> {
    let (t0, t1) = line_params(a_origin, a_vec, b_origin, b_vec, epsilon)?;
    if !(range_a.accepts(t0, epsilon) && range_b.accepts(t1, epsilon)) {
        return None;
    }
    Some(LineHit {
        point: point_at(a_origin, a_vec, t0),
        t0,
        t1,
    })
}

/// `origin + vector * t`.
#[must_use]
#[inline]
pub fn point_at(origin: &Point2, vector: &Vector2, t: f64) -> Point2 {
    origin + vector * t
}

/// Intersection of two infinite lines.
#[must_use]
pub fn intersect_line_line(
    a_origin: &Point2,
    a_vec: &Vector2,
    b_origin: &Point2,
    b_vec: &Vector2,
    epsilon: f64,
) -> Option<Point2> {
    intersect_lines(
        a_origin,
        a_vec,
        b_origin,
        b_vec,
        ParamRange::Line,
        ParamRange::Line,
        epsilon,
    )
    .map(|hit| hit.point)
}

/// Intersection of a line and a ray.
#[must_use]
pub fn intersect_line_ray(
    line_origin: &Point2,
    line_vec: &Vector2,
    ray_origin: &Point2,
    ray_vec: &Vector2,
    boundary: Boundary,
    epsilon: f64,
) -> Option<Point2> {
    intersect_lines(
        line_origin,
        line_vec,
        ray_origin,
        ray_vec,
        ParamRange::Line,
        ParamRange::Ray(boundary),
        epsilon,
    )
    .map(|hit| hit.point)
}

/// Intersection of a line and the segment `[s0, s1]`.
#[must_use]
pub fn intersect_line_segment(
    line_origin: &Point2,
    line_vec: &Vector2,
    s0: &Point2,
    s1: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> Option<Point2> {
    intersect_lines(
        line_origin,
        line_vec,
        s0,
        &(s1 - s0),
        ParamRange::Line,
        ParamRange::Segment(boundary),
        epsilon,
    )
    .map(|hit| hit.point)
}

/// Intersection of two rays.
#[must_use]
pub fn intersect_ray_ray(
    a_origin: &Point2,
    a_vec: &Vector2,
    b_origin: &Point2,
    b_vec: &Vector2,
    boundary: Boundary,
    epsilon: f64,
) -> Option<Point2> {
    intersect_lines(
        a_origin,
        a_vec,
        b_origin,
        b_vec,
        ParamRange::Ray(boundary),
        ParamRange::Ray(boundary),
        epsilon,
    )
    .map(|hit| hit.point)
}

/// Intersection of a ray and the segment `[s0, s1]`.
#[must_use]
pub fn intersect_ray_segment(
    ray_origin: &Point2,
    ray_vec: &Vector2,
    s0: &Point2,
    s1: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> Option<Point2> {
    intersect_lines(
        ray_origin,
        ray_vec,
        s0,
        &(s1 - s0),
        ParamRange::Ray(boundary),
        ParamRange::Segment(boundary),
        epsilon,
    )
    .map(|hit| hit.point)
}

/// Intersection of segments `[a0, a1]` and `[b0, b1]`.
#[must_use]
pub fn intersect_segment_segment(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> Option<Point2> {
    intersect_lines(
        a0,
        &(a1 - a0),
        b0,
        &(b1 - b0),
        ParamRange::Segment(boundary),
        ParamRange::Segment(boundary),
        epsilon,
    )
    .map(|hit| hit.point)
}
