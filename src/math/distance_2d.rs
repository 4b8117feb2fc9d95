use super::intersect_2d::{point_at, Boundary, ParamRange};
use super::{Point2, Vector2};

/// Squared-length floor below which a direction is treated as zero.
const DEGENERATE_LEN_SQ: f64 = 1e-20;

/// Projects `point` onto the primitive `origin + t * vector`, clamping `t`
/// to the primitive's range.
///
/// A zero-length `vector` collapses the primitive to `origin`.
#[must_use]
pub fn nearest_point_on_line(
    origin: &Point2,
    vector: &Vector2,
    point: &Point2,
    range: ParamRange,
) -> Point2 {
    let len_sq = vector.norm_squared();
    if len_sq < DEGENERATE_LEN_SQ {
        return *origin;
    }
    let t = (point - origin).dot(vector) / len_sq;
    point_at(origin, vector, range.clamp(t))
}

/// Returns the minimum distance from `point` to the segment `[a, b]`.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let closest = nearest_point_on_line(a, &(b - a), point, ParamRange::Segment(Boundary::Inclusive));
    nalgebra::distance(point, &closest)
}

/// Closest point on a polygon's boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonNearest {
    /// The closest boundary point.
    pub point: Point2,
    /// Index `i` of the edge `poly[i] → poly[i + 1]` the point lies on.
    pub edge: usize,
    /// Distance from the query point.
    pub distance: f64,
}

/// Finds the closest point on the boundary of `poly`.
///
/// Ties go to the lowest edge index. `None` for an empty polygon.
#[must_use]
pub fn nearest_point_on_polygon(poly: &[Point2], point: &Point2) -> Option<PolygonNearest> {
    let n = poly.len();
    let mut best: Option<PolygonNearest> = None;
    for i in 0..n {
        let a = &poly[i];
        let b = &poly[(i + 1) % n];
        let candidate = nearest_point_on_line(a, &(b - a), point, ParamRange::Segment(Boundary::Inclusive));
        let distance = nalgebra::distance(point, &candidate);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(PolygonNearest {
                point: candidate,
                edge: i,
                distance,
            });
        }
    }
    best
}
