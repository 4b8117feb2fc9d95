use crate::error::Result;
use crate::math::polygon_2d::point_on_segment;
use crate::math::tolerance::equivalent2;
use crate::math::{Affine2, Boundary, ParamRange, Point2, Vector2};

use super::{check_point, Parametric};

/// A line segment between two endpoints.
///
/// A zero-length segment is allowed; see [`Segment::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Point2,
    b: Point2,
}

impl Segment {
    /// Creates a segment from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint has a non-finite coordinate.
    pub fn new(a: Point2, b: Point2) -> Result<Self> {
        check_point(&a, "segment start")?;
        check_point(&b, "segment end")?;
        Ok(Self { a, b })
    }

    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.a
    }

    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.b
    }

    /// Do the endpoints coincide within `epsilon`?
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        equivalent2(&self.a, &self.b, epsilon)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.a, &self.b)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.a, &self.b)
    }

    /// Same endpoints, opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Is `point` on the segment?
    #[must_use]
    pub fn contains(&self, point: &Point2, boundary: Boundary, epsilon: f64) -> bool {
        point_on_segment(&self.a, &self.b, point, boundary, epsilon)
    }

    #[must_use]
    pub fn transform(&self, matrix: &Affine2) -> Self {
        Self {
            a: matrix.transform_point(&self.a),
            b: matrix.transform_point(&self.b),
        }
    }
}

impl Parametric for Segment {
    fn origin(&self) -> Point2 {
        self.a
    }

    fn vector(&self) -> Vector2 {
        self.b - self.a
    }

    fn range(&self, boundary: Boundary) -> ParamRange {
        ParamRange::Segment(boundary)
    }
}

impl From<[Point2; 2]> for Segment {
    fn from([a, b]: [Point2; 2]) -> Self {
        Self { a, b }
    }
}
