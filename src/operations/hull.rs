use crate::error::{OperationError, Result};
use crate::geometry::ConvexPolygon;
use crate::math::hull_2d::{try_convex_hull, HullFailure};
use crate::math::{Point2, EPSILON_HIGH, HULL_MAX_ITERATIONS};

use super::check_epsilon;

/// Builds the convex hull of a point set by gift wrapping.
///
/// Defaults: collinear boundary points dropped, the fine tolerance tier,
/// and a 10 000 step ceiling.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point2>,
    include_collinear: bool,
    epsilon: f64,
    max_iterations: usize,
}

impl ConvexHull {
    /// Creates a new `ConvexHull` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            include_collinear: false,
            epsilon: EPSILON_HIGH,
            max_iterations: HULL_MAX_ITERATIONS,
        }
    }

    /// Keep points that lie along hull edges.
    #[must_use]
    pub fn include_collinear(mut self, include: bool) -> Self {
        self.include_collinear = include;
        self
    }

    #[must_use]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Executes the hull walk, returning a counter-clockwise polygon.
    ///
    /// # Errors
    ///
    /// - [`OperationError::InvalidInput`] for a bad tolerance, a non-finite
    ///   point, or fewer than three non-collinear points.
    /// - [`OperationError::NoConvergence`] if the walk does not close within
    ///   the iteration ceiling.
    pub fn execute(&self) -> Result<ConvexPolygon> {
        check_epsilon(self.epsilon)?;
        if self.points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(OperationError::InvalidInput("hull point is not finite".into()).into());
        }
        match try_convex_hull(
            &self.points,
            self.include_collinear,
            self.epsilon,
            self.max_iterations,
        ) {
            Ok(hull) => Ok(ConvexPolygon::from_ccw_unchecked(hull)),
            Err(HullFailure::TooFewPoints) => Err(OperationError::InvalidInput(format!(
                "{} points do not span a polygon",
                self.points.len()
            ))
            .into()),
            Err(HullFailure::NoConvergence) => Err(OperationError::NoConvergence {
                iterations: self.max_iterations,
            }
            .into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CreaseError;
    use crate::math::polygon_2d::is_convex;
    use crate::math::EPSILON;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn hull_of_square_with_interior_point() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
        let hull = ConvexHull::new(pts).execute().unwrap();
        assert_eq!(
            hull.vertices(),
            &[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
        );
        assert!(hull.is_counter_clockwise());
    }

    #[test]
    fn collinear_setting() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)];
        assert_eq!(ConvexHull::new(pts.clone()).execute().unwrap().len(), 3);
        let kept = ConvexHull::new(pts).include_collinear(true).execute().unwrap();
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn loose_tolerance_gives_convex_hull() {
        let pts = vec![p(2.0, 0.0), p(1.0, 0.0008), p(0.0, 0.0016), p(1.0, 5.0)];
        let hull = ConvexHull::new(pts).epsilon(1e-3).execute().unwrap();
        assert_eq!(hull.vertices(), &[p(2.0, 0.0), p(1.0, 5.0), p(0.0, 0.0016)]);
        assert!(is_convex(hull.vertices(), EPSILON));
        assert!(hull.signed_area() > 0.0);
    }

    #[test]
    fn collinear_input_is_invalid() {
        let err = ConvexHull::new(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)])
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            CreaseError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn ceiling_is_reported() {
        let err = ConvexHull::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)])
            .max_iterations(1)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            CreaseError::Operation(OperationError::NoConvergence { iterations: 1 })
        ));
    }

    #[test]
    fn bad_inputs_rejected() {
        let tri = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(ConvexHull::new(tri.clone()).epsilon(-1.0).execute().is_err());
        assert!(ConvexHull::new(tri).epsilon(f64::NAN).execute().is_err());
        assert!(ConvexHull::new(vec![p(f64::NAN, 0.0), p(1.0, 0.0), p(0.0, 1.0)])
            .execute()
            .is_err());
    }
}
