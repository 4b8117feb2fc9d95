use crate::error::{GeometryError, Result};
use crate::math::algebra::{cross2, midpoint2, rotate90};
use crate::math::{Affine2, Boundary, ParamRange, Point2, Vector2, EPSILON};

use super::{check_point, Parametric};

fn check_vector(vector: &Vector2) -> Result<()> {
    if !(vector.x.is_finite() && vector.y.is_finite()) {
        return Err(GeometryError::NonFinite { what: "vector" }.into());
    }
    if vector.norm() < EPSILON {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(())
}

/// An infinite line through `origin` along `vector`.
///
/// The vector is kept as given, not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point2,
    vector: Vector2,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is zero-length or any coordinate is
    /// not finite.
    pub fn new(origin: Point2, vector: Vector2) -> Result<Self> {
        check_point(&origin, "line origin")?;
        check_vector(&vector)?;
        Ok(Self { origin, vector })
    }

    /// The line through `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn from_points(a: Point2, b: Point2) -> Result<Self> {
        Self::new(a, b - a)
    }

    /// The line of points equidistant from `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn perpendicular_bisector(a: Point2, b: Point2) -> Result<Self> {
        Self::new(midpoint2(&a, &b), rotate90(&(b - a)))
    }

    /// Are the two lines parallel (or coincident)?
    #[must_use]
    pub fn is_parallel(&self, other: &Self, epsilon: f64) -> bool {
        cross2(&self.vector.normalize(), &other.vector.normalize()).abs() < epsilon
    }

    /// Maps the line through an affine transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform collapses the direction.
    pub fn transform(&self, matrix: &Affine2) -> Result<Self> {
        let (origin, vector) = matrix.transform_line(&self.origin, &self.vector);
        Self::new(origin, vector)
    }
}

impl Parametric for Line {
    fn origin(&self) -> Point2 {
        self.origin
    }

    fn vector(&self) -> Vector2 {
        self.vector
    }

    fn range(&self, _boundary: Boundary) -> ParamRange {
        ParamRange::Line
    }
}

/// A half-line starting at `origin` and extending along `vector`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point2,
    vector: Vector2,
}

impl Ray {
    /// Creates a new ray.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is zero-length or any coordinate is
    /// not finite.
    pub fn new(origin: Point2, vector: Vector2) -> Result<Self> {
        check_point(&origin, "ray origin")?;
        check_vector(&vector)?;
        Ok(Self { origin, vector })
    }

    /// The ray from `a` through `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn from_points(a: Point2, b: Point2) -> Result<Self> {
        Self::new(a, b - a)
    }

    /// The same ray pointing the other way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            origin: self.origin,
            vector: -self.vector,
        }
    }

    #[must_use]
    pub fn is_parallel(&self, other: &Self, epsilon: f64) -> bool {
        cross2(&self.vector.normalize(), &other.vector.normalize()).abs() < epsilon
    }

    /// Maps the ray through an affine transform.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform collapses the direction.
    pub fn transform(&self, matrix: &Affine2) -> Result<Self> {
        let (origin, vector) = matrix.transform_line(&self.origin, &self.vector);
        Self::new(origin, vector)
    }
}

impl Parametric for Ray {
    fn origin(&self) -> Point2 {
        self.origin
    }

    fn vector(&self) -> Vector2 {
        self.vector
    }

    fn range(&self, boundary: Boundary) -> ParamRange {
        ParamRange::Ray(boundary)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CreaseError;

    const TOL: f64 = 1e-12;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn zero_vector_rejected() {
        let err = Line::new(p(0.0, 0.0), Vector2::zeros()).unwrap_err();
        assert!(matches!(err, CreaseError::Geometry(GeometryError::ZeroVector)));
        assert!(Ray::from_points(p(1.0, 1.0), p(1.0, 1.0)).is_err());
    }

    #[test]
    fn non_finite_rejected() {
        let err = Line::new(p(f64::NAN, 0.0), Vector2::new(1.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            CreaseError::Geometry(GeometryError::NonFinite { what: "line origin" })
        ));
        assert!(Ray::new(p(0.0, 0.0), Vector2::new(f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn perpendicular_bisector_is_equidistant() {
        let (a, b) = (p(0.0, 0.0), p(4.0, 2.0));
        let bisector = Line::perpendicular_bisector(a, b).unwrap();
        for t in [-3.0, 0.0, 2.5] {
            let q = bisector.point_at(t);
            assert!((nalgebra::distance(&q, &a) - nalgebra::distance(&q, &b)).abs() < 1e-9);
        }
    }

    #[test]
    fn parallel_check_ignores_length() {
        let a = Line::new(p(0.0, 0.0), Vector2::new(1.0, 2.0)).unwrap();
        let b = Line::new(p(5.0, 0.0), Vector2::new(-3.0, -6.0)).unwrap();
        let c = Line::new(p(5.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
        assert!(a.is_parallel(&b, EPSILON));
        assert!(!a.is_parallel(&c, EPSILON));
    }

    #[test]
    fn transform_moves_origin_and_turns_vector() {
        let ray = Ray::new(p(1.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
        let turned = ray
            .transform(&Affine2::rotation(std::f64::consts::FRAC_PI_2, &Point2::origin()))
            .unwrap();
        assert!((turned.origin() - p(0.0, 1.0)).norm() < TOL);
        assert!((turned.vector() - Vector2::new(0.0, 1.0)).norm() < TOL);
        assert!(ray.transform(&Affine2::scale(0.0, 0.0, &Point2::origin())).is_err());
    }

    #[test]
    fn flipped_ray_points_back() {
        let ray = Ray::new(p(1.0, 1.0), Vector2::new(2.0, 0.0)).unwrap();
        assert!((ray.flipped().point_at(1.0) - p(-1.0, 1.0)).norm() < TOL);
    }
}
