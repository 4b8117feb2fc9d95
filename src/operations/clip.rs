use crate::error::Result;
use crate::geometry::{ConvexPolygon, Line, Parametric, Ray, Segment};
use crate::math::clip_2d::{
    clip_line_in_convex_poly, clip_ray_in_convex_poly, clip_segment_in_convex_poly,
};
use crate::math::{Boundary, EPSILON};

use super::check_epsilon;

/// Clips lines, rays and segments to a convex polygon.
///
/// Each query returns `Ok(None)` when nothing of the primitive lies in the
/// polygon.
pub struct ClipConvex<'a> {
    polygon: &'a ConvexPolygon,
    boundary: Boundary,
    epsilon: f64,
}

impl<'a> ClipConvex<'a> {
    /// Creates a new `ClipConvex` query with an exclusive boundary.
    #[must_use]
    pub fn new(polygon: &'a ConvexPolygon) -> Self {
        Self {
            polygon,
            boundary: Boundary::Exclusive,
            epsilon: EPSILON,
        }
    }

    /// Boundary policy for rays and segments. Lines ignore it.
    #[must_use]
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    #[must_use]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Clips an infinite line.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or not finite.
    pub fn with_line(&self, line: &Line) -> Result<Option<Segment>> {
        check_epsilon(self.epsilon)?;
        Ok(clip_line_in_convex_poly(
            self.polygon.vertices(),
            &line.origin(),
            &line.vector(),
            self.epsilon,
        )
        .map(Segment::from))
    }

    /// Clips a ray.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or not finite.
    pub fn with_ray(&self, ray: &Ray) -> Result<Option<Segment>> {
        check_epsilon(self.epsilon)?;
        Ok(clip_ray_in_convex_poly(
            self.polygon.vertices(),
            &ray.origin(),
            &ray.vector(),
            self.boundary,
            self.epsilon,
        )
        .map(Segment::from))
    }

    /// Clips a segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or not finite.
    pub fn with_segment(&self, segment: &Segment) -> Result<Option<Segment>> {
        check_epsilon(self.epsilon)?;
        Ok(clip_segment_in_convex_poly(
            self.polygon.vertices(),
            segment.start(),
            segment.end(),
            self.boundary,
            self.epsilon,
        )
        .map(Segment::from))
    }
}
