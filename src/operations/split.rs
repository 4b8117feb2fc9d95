use crate::error::Result;
use crate::geometry::{ConvexPolygon, Line, Parametric};
use crate::math::split_2d::split_convex_polygon;
use crate::math::EPSILON;

use super::check_epsilon;

/// Cuts a convex polygon in two along a line.
pub struct SplitConvex<'a> {
    polygon: &'a ConvexPolygon,
    line: Line,
    epsilon: f64,
}

impl<'a> SplitConvex<'a> {
    /// Creates a new `SplitConvex` operation.
    #[must_use]
    pub fn new(polygon: &'a ConvexPolygon, line: Line) -> Self {
        Self {
            polygon,
            line,
            epsilon: EPSILON,
        }
    }

    #[must_use]
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Executes the split.
    ///
    /// Returns two counter-clockwise faces, or the polygon alone when the
    /// line does not cut through it.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or not finite.
    pub fn execute(&self) -> Result<Vec<ConvexPolygon>> {
        check_epsilon(self.epsilon)?;
        let faces = split_convex_polygon(
            self.polygon.vertices(),
            &self.line.origin(),
            &self.line.vector(),
            self.epsilon,
        );
        Ok(faces
            .into_iter()
            .map(ConvexPolygon::from_ccw_unchecked)
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, Vector2};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> ConvexPolygon {
        ConvexPolygon::new(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]).unwrap()
    }

    #[test]
    fn vertical_cut_gives_two_rectangles() {
        let sq = square();
        let line = Line::new(p(5.0, -5.0), Vector2::new(0.0, 1.0)).unwrap();
        let faces = SplitConvex::new(&sq, line).execute().unwrap();
        assert_eq!(faces.len(), 2);
        for face in &faces {
            assert!((face.signed_area() - 50.0).abs() < 1e-9);
            assert!(face.is_counter_clockwise());
        }
        let left = faces[0].centroid();
        let right = faces[1].centroid();
        assert!((left - p(2.5, 5.0)).norm() < 1e-9);
        assert!((right - p(7.5, 5.0)).norm() < 1e-9);
    }

    #[test]
    fn missing_line_returns_original() {
        let sq = square();
        let line = Line::new(p(20.0, 0.0), Vector2::new(0.0, 1.0)).unwrap();
        let faces = SplitConvex::new(&sq, line).execute().unwrap();
        assert_eq!(faces, vec![sq]);
    }

    #[test]
    fn corner_graze_returns_original() {
        let sq = square();
        let line = Line::new(p(0.0, 5e-7), Vector2::new(1.0, -1e-4)).unwrap();
        let faces = SplitConvex::new(&sq, line).execute().unwrap();
        assert_eq!(faces, vec![sq]);
    }

    #[test]
    fn negative_epsilon_rejected() {
        let sq = square();
        let line = Line::new(p(5.0, 0.0), Vector2::new(0.0, 1.0)).unwrap();
        assert!(SplitConvex::new(&sq, line).epsilon(-1e-6).execute().is_err());
    }
}
