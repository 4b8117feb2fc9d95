use std::f64::consts::{PI, TAU};

use super::algebra::cross2;
use super::intersect_2d::Boundary;
use super::tolerance::{clean_number, equivalent2, EPSILON_HIGH};
use super::{Point2, Vector2};

/// Tests whether `point` is inside a polygon by even-odd ray casting.
///
/// Works for any simple polygon. A horizontal ray is cast from the point and
/// every edge whose endpoints straddle the ray's y-level toggles the result.
/// Points exactly on an edge may land either way, so treat the test as
/// exclusive.
#[must_use]
pub fn point_in_poly(point: &Point2, poly: &[Point2]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&poly[i], &poly[j]);
        if (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Half-plane containment test for a counter-clockwise convex polygon.
///
/// For every edge `p → q`, the sign of `cross(q - p, point - p)` must be
/// `> −ε` ([`Boundary::Inclusive`]) or `> ε` ([`Boundary::Exclusive`]).
#[must_use]
pub fn point_in_convex_poly(
    point: &Point2,
    poly: &[Point2],
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    if poly.is_empty() {
        return false;
    }
    let threshold = match boundary {
        Boundary::Inclusive => -epsilon,
        Boundary::Exclusive => epsilon,
    };
    let n = poly.len();
    (0..n).all(|i| {
        let p = &poly[i];
        let q = &poly[(i + 1) % n];
        cross2(&(q - p), &(point - p)) > threshold
    })
}

/// Is `point` collinear with the line through `origin` along `vector`?
#[must_use]
pub fn point_on_line(origin: &Point2, vector: &Vector2, point: &Point2, epsilon: f64) -> bool {
    cross2(&(point - origin), vector).abs() < epsilon
}

/// Is `point` on the segment `[s0, s1]`?
///
/// Compares `|s0 s1|` against `|s0 p| + |p s1|`. The exclusive policy also
/// rejects points equivalent to an endpoint.
#[must_use]
pub fn point_on_segment(
    s0: &Point2,
    s1: &Point2,
    point: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    let edge = nalgebra::distance(s0, s1);
    let d0 = nalgebra::distance(point, s0);
    let d1 = nalgebra::distance(point, s1);
    if (edge - d0 - d1).abs() >= epsilon {
        return false;
    }
    match boundary {
        Boundary::Inclusive => true,
        Boundary::Exclusive => {
            !equivalent2(point, s0, epsilon) && !equivalent2(point, s1, epsilon)
        }
    }
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Center of mass of a simple polygon.
///
/// A zero-area polygon yields NaN coordinates.
#[must_use]
pub fn centroid(points: &[Point2]) -> Point2 {
    let sixth_area = 1.0 / (6.0 * signed_area(points));
    let n = points.len();
    let mut acc = Vector2::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let mag = a.x * b.y - b.x * a.y;
        acc += (a.coords + b.coords) * mag;
    }
    Point2::from(acc * sixth_area)
}

/// Axis-aligned bounds in any dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec<f64>,
    /// Extent along each axis.
    pub lengths: Vec<f64>,
}

/// The enclosing box (rectangle, cube, …) of a point set.
///
/// The dimension is taken from the first point. `None` for an empty set.
#[must_use]
pub fn enclosing_rectangle<P: AsRef<[f64]>>(points: &[P]) -> Option<Bounds> {
    let dim = points.first()?.as_ref().len();
    let mut min = vec![f64::INFINITY; dim];
    let mut max = vec![f64::NEG_INFINITY; dim];
    for p in points {
        for (i, c) in p.as_ref().iter().take(dim).enumerate() {
            min[i] = min[i].min(*c);
            max[i] = max[i].max(*c);
        }
    }
    let lengths = max.iter().zip(&min).map(|(hi, lo)| hi - lo).collect();
    Some(Bounds { min, lengths })
}

/// Regular polygon with `sides` vertices in counter-clockwise order.
///
/// `radius` measures from `center` to the midpoint of each edge; the first
/// edge's midpoint lies straight above the center.
#[must_use]
pub fn make_regular_polygon(sides: usize, center: &Point2, radius: f64) -> Vec<Point2> {
    #[allow(clippy::cast_precision_loss)]
    let n = sides as f64;
    let half_wedge = PI / n;
    let r = radius / half_wedge.cos();
    (0..sides)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let a = -TAU * (i as f64) / n + half_wedge;
            Point2::new(
                clean_number(center.x + r * a.sin(), 14),
                clean_number(center.y + r * a.cos(), 14),
            )
        })
        .collect()
}

/// Is the polygon convex?
///
/// Every turn must bend the same way (collinear vertices are tolerated) and
/// the turns must add up to one full revolution, which rejects star shapes.
#[must_use]
pub fn is_convex(points: &[Point2], epsilon: f64) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut turning: Option<bool> = None;
    let mut total_turn = 0.0;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let c = &points[(i + 2) % n];
        let ab = b - a;
        let bc = c - b;
        let cross = cross2(&ab, &bc);
        total_turn += cross.atan2(ab.dot(&bc));
        if cross.abs() < epsilon {
            continue;
        }
        let left = cross > 0.0;
        match turning {
            None => turning = Some(left),
            Some(dir) if dir != left => return false,
            Some(_) => {}
        }
    }
    turning.is_some() && (total_turn.abs() - TAU).abs() < 1e-6
}

/// Rotates a closed polygon so it starts at the bottom-most vertex (smallest
/// y), breaking ties by smallest x. Gives a deterministic start for
/// comparisons.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.y < b.y - EPSILON_HIGH || (pt.y - b.y).abs() < EPSILON_HIGH && pt.x < b.x {
            best = i;
        }
    }
    let mut rotated = points.to_vec();
    rotated.rotate_left(best);
    rotated
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    #[test]
    fn ray_casting_inside_outside() {
        let sq = square();
        assert!(point_in_poly(&p(5.0, 5.0), &sq));
        assert!(!point_in_poly(&p(15.0, 5.0), &sq));
        assert!(!point_in_poly(&p(-1.0, -1.0), &sq));
    }

    #[test]
    fn ray_casting_concave() {
        // U shape opening upward
        let u = vec![
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 3.0),
            p(2.0, 3.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 3.0),
            p(0.0, 3.0),
        ];
        assert!(point_in_poly(&p(0.5, 2.0), &u));
        assert!(!point_in_poly(&p(1.5, 2.0), &u));
        assert!(point_in_poly(&p(1.5, 0.5), &u));
    }

    #[test]
    fn ray_casting_needs_three_vertices() {
        assert!(!point_in_poly(&p(0.0, 0.0), &[p(-1.0, -1.0), p(1.0, 1.0)]));
    }

    #[test]
    fn convex_containment_policies() {
        let sq = square();
        let inside = p(3.0, 4.0);
        let outside = p(11.0, 4.0);
        let on_edge = p(5.0, 0.0);
        for b in [Boundary::Inclusive, Boundary::Exclusive] {
            assert!(point_in_convex_poly(&inside, &sq, b, EPSILON));
            assert!(!point_in_convex_poly(&outside, &sq, b, EPSILON));
        }
        assert!(point_in_convex_poly(&on_edge, &sq, Boundary::Inclusive, EPSILON));
        assert!(!point_in_convex_poly(&on_edge, &sq, Boundary::Exclusive, EPSILON));
        assert!(point_in_convex_poly(&p(10.0, 10.0), &sq, Boundary::Inclusive, EPSILON));
        assert!(!point_in_convex_poly(&p(1.0, 1.0), &[], Boundary::Inclusive, EPSILON));
    }

    #[test]
    fn on_line_and_segment() {
        let o = p(0.0, 0.0);
        let v = Vector2::new(1.0, 1.0);
        assert!(point_on_line(&o, &v, &p(-3.0, -3.0), EPSILON));
        assert!(!point_on_line(&o, &v, &p(-3.0, -2.0), EPSILON));

        let (s0, s1) = (p(0.0, 0.0), p(4.0, 0.0));
        assert!(point_on_segment(&s0, &s1, &p(2.0, 0.0), Boundary::Exclusive, EPSILON));
        assert!(point_on_segment(&s0, &s1, &p(4.0, 0.0), Boundary::Inclusive, EPSILON));
        assert!(!point_on_segment(&s0, &s1, &p(4.0, 0.0), Boundary::Exclusive, EPSILON));
        assert!(!point_on_segment(&s0, &s1, &p(5.0, 0.0), Boundary::Inclusive, EPSILON));
        assert!(!point_on_segment(&s0, &s1, &p(2.0, 0.1), Boundary::Inclusive, EPSILON));
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area(&pts) - 1.0).abs() < TOL);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area(&pts) + 1.0).abs() < TOL);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[p(0.0, 0.0)]).abs() < TOL);
        assert!(signed_area(&[]).abs() < TOL);
    }

    #[test]
    fn centroid_of_rectangle() {
        let rect = vec![p(1.0, 2.0), p(4.0, 2.0), p(4.0, 6.0), p(1.0, 6.0)];
        let c = centroid(&rect);
        assert!((c.x - 2.5).abs() < TOL);
        assert!((c.y - 4.0).abs() < TOL);
    }

    #[test]
    fn bounds_any_dimension() {
        let b = enclosing_rectangle(&[[1.0, 2.0, 3.0], [4.0, -2.0, 3.0], [2.0, 0.0, 5.0]]).unwrap();
        assert_eq!(b.min, vec![1.0, -2.0, 3.0]);
        assert_eq!(b.lengths, vec![3.0, 4.0, 2.0]);
        assert!(enclosing_rectangle::<[f64; 2]>(&[]).is_none());
    }

    #[test]
    fn regular_square_is_ccw_and_clean() {
        let sq = make_regular_polygon(4, &p(0.0, 0.0), 1.0);
        assert_eq!(sq.len(), 4);
        assert!((sq[0] - p(1.0, 1.0)).norm() < TOL);
        assert!((sq[1] - p(-1.0, 1.0)).norm() < TOL);
        assert!((signed_area(&sq) - 4.0).abs() < TOL);
        assert!(is_convex(&sq, EPSILON));
    }

    #[test]
    fn regular_hexagon_edge_midpoint_radius() {
        let hex = make_regular_polygon(6, &p(2.0, 3.0), 1.0);
        let mid = nalgebra::center(&hex[0], &hex[1]);
        assert!((nalgebra::distance(&mid, &p(2.0, 3.0)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn convexity() {
        assert!(is_convex(&square(), EPSILON));
        let mut cw = square();
        cw.reverse();
        assert!(is_convex(&cw, EPSILON));
        // collinear vertex on an edge is tolerated
        assert!(is_convex(&[p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)], EPSILON));
        let dart = vec![p(0.0, 0.0), p(4.0, 2.0), p(0.0, 4.0), p(1.0, 2.0)];
        assert!(!is_convex(&dart, EPSILON));
        assert!(!is_convex(&[p(0.0, 0.0), p(1.0, 0.0)], EPSILON));
    }

    #[test]
    fn pentagram_is_not_convex() {
        let star: Vec<Point2> = (0..5)
            .map(|i| {
                let a = f64::from(i) * 2.0 * TAU / 5.0;
                p(a.cos(), a.sin())
            })
            .collect();
        assert!(!is_convex(&star, EPSILON));
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        let rotated = rotate_to_canonical_start(&pts);
        assert!(rotated[0].x.abs() < TOL && rotated[0].y.abs() < TOL);
        assert!((rotated[1] - p(1.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn canonical_start_already_first() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert_eq!(rotate_to_canonical_start(&pts), pts);
    }
}
