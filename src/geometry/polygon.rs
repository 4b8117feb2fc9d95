use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{nearest_point_on_polygon, PolygonNearest};
use crate::math::overlap_2d::overlap_convex_polygons;
use crate::math::polygon_2d::{
    centroid, enclosing_rectangle, is_convex, make_regular_polygon, point_in_convex_poly,
    point_in_poly, signed_area, Bounds,
};
use crate::math::{Affine2, Boundary, Point2, EPSILON};

use super::{check_point, Segment};

/// A simple polygon given by its vertex ring.
///
/// The ring is implicitly closed: the last vertex connects to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from at least three finite vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than three vertices or any
    /// coordinate is not finite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
                min: 3,
            }
            .into());
        }
        for v in &vertices {
            check_point(v, "polygon vertex")?;
        }
        Ok(Self { vertices })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a polygon has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Ray-casting containment. Boundary points are not guaranteed either
    /// way, so treat it as exclusive.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_in_poly(point, &self.vertices)
    }

    /// Positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Center of mass. NaN coordinates when the area is zero.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        centroid(&self.vertices)
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let coords: Vec<[f64; 2]> = self.vertices.iter().map(|p| [p.x, p.y]).collect();
        enclosing_rectangle(&coords)
    }

    /// Edges in ring order, the last one closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::from([self.vertices[i], self.vertices[(i + 1) % n]]))
    }

    /// Closest point on the boundary to `point`.
    #[must_use]
    pub fn nearest(&self, point: &Point2) -> Option<PolygonNearest> {
        nearest_point_on_polygon(&self.vertices, point)
    }

    #[must_use]
    pub fn transform(&self, matrix: &Affine2) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| matrix.transform_point(v))
                .collect(),
        }
    }

    /// Same ring, opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    #[must_use]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }
}

/// A convex polygon, always stored counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon {
    polygon: Polygon,
}

impl ConvexPolygon {
    /// Validates convexity. A clockwise ring is reversed.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices do not form a convex polygon, or
    /// for any error from [`Polygon::new`].
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        Self::from_polygon(Polygon::new(vertices)?)
    }

    /// Checks an existing polygon for convexity.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotConvex`] if the polygon is not convex.
    pub fn from_polygon(polygon: Polygon) -> Result<Self> {
        if !is_convex(polygon.vertices(), EPSILON) {
            return Err(GeometryError::NotConvex.into());
        }
        let polygon = if polygon.is_counter_clockwise() {
            polygon
        } else {
            polygon.reversed()
        };
        Ok(Self { polygon })
    }

    /// Wraps a ring already known to be convex and counter-clockwise.
    pub(crate) fn from_ccw_unchecked(vertices: Vec<Point2>) -> Self {
        debug_assert!(vertices.len() >= 3, "ring has {} vertices", vertices.len());
        debug_assert!(signed_area(&vertices) > 0.0, "ring is not counter-clockwise");
        Self {
            polygon: Polygon { vertices },
        }
    }

    /// A regular polygon whose edge midpoints lie `radius` from `center`.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than three sides or a radius that is not
    /// a positive finite number.
    pub fn regular(sides: usize, center: Point2, radius: f64) -> Result<Self> {
        if sides < 3 {
            return Err(GeometryError::TooFewVertices {
                count: sides,
                min: 3,
            }
            .into());
        }
        check_point(&center, "polygon center")?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::Degenerate(format!("radius {radius}")).into());
        }
        Ok(Self::from_ccw_unchecked(make_regular_polygon(
            sides, &center, radius,
        )))
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        self.polygon.vertices()
    }

    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[must_use]
    pub fn into_polygon(self) -> Polygon {
        self.polygon
    }

    /// Half-plane containment under the given boundary policy.
    #[must_use]
    pub fn contains(&self, point: &Point2, boundary: Boundary, epsilon: f64) -> bool {
        point_in_convex_poly(point, self.vertices(), boundary, epsilon)
    }

    /// Do the two polygons share interior (exclusive) or any point (inclusive)?
    #[must_use]
    pub fn overlaps(&self, other: &Self, boundary: Boundary, epsilon: f64) -> bool {
        overlap_convex_polygons(self.vertices(), other.vertices(), boundary, epsilon)
    }

    /// Maps the polygon through an affine transform, restoring
    /// counter-clockwise order if the transform mirrors it.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform collapses the polygon.
    pub fn transform(&self, matrix: &Affine2) -> Result<Self> {
        Self::from_polygon(self.polygon.transform(matrix))
    }
}

impl std::ops::Deref for ConvexPolygon {
    type Target = Polygon;

    fn deref(&self) -> &Polygon {
        &self.polygon
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CreaseError;
    use crate::math::Vector2;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square_cw() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(0.0, 2.0), p(2.0, 2.0), p(2.0, 0.0)]
    }

    #[test]
    fn too_few_vertices() {
        let err = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            CreaseError::Geometry(GeometryError::TooFewVertices { count: 2, min: 3 })
        ));
    }

    #[test]
    fn non_finite_vertex() {
        assert!(Polygon::new(vec![p(0.0, 0.0), p(1.0, f64::NAN), p(1.0, 1.0)]).is_err());
    }

    #[test]
    fn polygon_queries() {
        let poly = Polygon::new(square_cw()).unwrap();
        assert!(!poly.is_counter_clockwise());
        assert!((poly.signed_area() + 4.0).abs() < TOL);
        assert!((poly.centroid() - p(1.0, 1.0)).norm() < TOL);
        assert!(poly.contains(&p(1.0, 1.0)));
        assert!(!poly.contains(&p(3.0, 1.0)));
        assert_eq!(poly.edges().count(), 4);
        let last = poly.edges().nth(3).unwrap();
        assert!((last.end() - p(0.0, 0.0)).norm() < TOL);
        let b = poly.bounds().unwrap();
        assert_eq!(b.min, vec![0.0, 0.0]);
        assert_eq!(b.lengths, vec![2.0, 2.0]);
        let near = poly.nearest(&p(1.0, 5.0)).unwrap();
        assert!((near.point - p(1.0, 2.0)).norm() < TOL);
    }

    #[test]
    fn convex_is_stored_ccw() {
        let convex = ConvexPolygon::new(square_cw()).unwrap();
        assert!(convex.is_counter_clockwise());
        assert_eq!(convex.vertices()[0], p(2.0, 0.0));
    }

    #[test]
    fn concave_rejected() {
        let dart = vec![p(0.0, 0.0), p(4.0, 2.0), p(0.0, 4.0), p(1.0, 2.0)];
        let err = ConvexPolygon::new(dart).unwrap_err();
        assert!(matches!(err, CreaseError::Geometry(GeometryError::NotConvex)));
    }

    #[test]
    fn convex_containment_and_overlap() {
        let a = ConvexPolygon::new(square_cw()).unwrap();
        assert!(a.contains(&p(2.0, 1.0), Boundary::Inclusive, EPSILON));
        assert!(!a.contains(&p(2.0, 1.0), Boundary::Exclusive, EPSILON));
        let b = ConvexPolygon::regular(6, p(3.0, 1.0), 1.5).unwrap();
        assert!(a.overlaps(&b, Boundary::Exclusive, EPSILON));
        let far = ConvexPolygon::regular(3, p(30.0, 1.0), 1.0).unwrap();
        assert!(!a.overlaps(&far, Boundary::Inclusive, EPSILON));
    }

    #[test]
    fn regular_validation() {
        assert!(ConvexPolygon::regular(2, p(0.0, 0.0), 1.0).is_err());
        assert!(ConvexPolygon::regular(5, p(0.0, 0.0), -1.0).is_err());
        assert!(ConvexPolygon::regular(5, p(0.0, 0.0), f64::NAN).is_err());
        assert_eq!(ConvexPolygon::regular(5, p(0.0, 0.0), 1.0).unwrap().len(), 5);
    }

    #[test]
    fn mirrored_transform_restores_winding() {
        let sq = ConvexPolygon::regular(4, p(0.0, 0.0), 1.0).unwrap();
        let mirror = Affine2::reflection(&Vector2::new(0.0, 1.0), &Point2::origin());
        let mirrored = sq.transform(&mirror).unwrap();
        assert!(mirrored.is_counter_clockwise());
        assert!(sq.transform(&Affine2::scale(0.0, 1.0, &Point2::origin())).is_err());
    }
}
