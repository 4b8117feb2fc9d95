mod line;
mod polygon;
mod segment;

pub use line::{Line, Ray};
pub use polygon::{ConvexPolygon, Polygon};
pub use segment::Segment;

use crate::error::{GeometryError, Result};
use crate::math::distance_2d::nearest_point_on_line;
use crate::math::intersect_2d::{intersect_lines, point_at};
use crate::math::overlap_2d::overlap_lines;
use crate::math::{Boundary, ParamRange, Point2, Vector2};

/// A straight primitive in the form `origin + t * vector`.
///
/// Lines, rays and segments differ only in which `t` they accept.
pub trait Parametric {
    /// Point at `t = 0`.
    fn origin(&self) -> Point2;

    /// Direction, scaled so a segment ends at `t = 1`.
    fn vector(&self) -> Vector2;

    /// Accepted parameter range under the given boundary policy.
    fn range(&self, boundary: Boundary) -> ParamRange;

    /// Evaluates the primitive at parameter `t`, ignoring its range.
    fn point_at(&self, t: f64) -> Point2 {
        point_at(&self.origin(), &self.vector(), t)
    }

    /// The closest point on the primitive to `point`.
    fn nearest(&self, point: &Point2) -> Point2 {
        nearest_point_on_line(
            &self.origin(),
            &self.vector(),
            point,
            self.range(Boundary::Inclusive),
        )
    }
}

/// Intersection point of two primitives, if they cross within their ranges.
///
/// Parallel primitives never intersect, even when collinear.
#[must_use]
pub fn intersect<A, B>(a: &A, b: &B, boundary: Boundary, epsilon: f64) -> Option<Point2>
where
    A: Parametric + ?Sized,
    B: Parametric + ?Sized,
{
    intersect_lines(
        &a.origin(),
        &a.vector(),
        &b.origin(),
        &b.vector(),
        a.range(boundary),
        b.range(boundary),
        epsilon,
    )
    .map(|hit| hit.point)
}

/// Boolean form of [`intersect`].
#[must_use]
pub fn overlaps<A, B>(a: &A, b: &B, boundary: Boundary, epsilon: f64) -> bool
where
    A: Parametric + ?Sized,
    B: Parametric + ?Sized,
{
    overlap_lines(
        &a.origin(),
        &a.vector(),
        &b.origin(),
        &b.vector(),
        a.range(boundary),
        b.range(boundary),
        epsilon,
    )
}

pub(crate) fn check_point(p: &Point2, what: &'static str) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what }.into())
    }
}
