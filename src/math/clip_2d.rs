//! Clipping lines, rays and segments against a convex polygon.
//!
//! Every routine intersects the primitive with each polygon edge, then folds
//! the hits into at most one segment. An empty result is `None`, never an
//! error.

use tracing::debug;

use super::intersect_2d::{
    intersect_line_segment, intersect_ray_segment, intersect_segment_segment, Boundary,
};
use super::polygon_2d::point_in_convex_poly;
use super::tolerance::equivalent2;
use super::{Point2, Vector2};

/// The first hit plus the first later hit that is not equivalent to it.
fn unique_pair(hits: &[Point2], epsilon: f64) -> Option<[Point2; 2]> {
    let first = *hits.first()?;
    hits.iter()
        .skip(1)
        .find(|h| !equivalent2(&first, h, epsilon))
        .map(|second| [first, *second])
}

/// Edge hits of `f` against every edge `poly[i] → poly[i + 1]`, in edge order.
fn edge_hits<F>(poly: &[Point2], mut f: F) -> Vec<Point2>
where
    F: FnMut(&Point2, &Point2) -> Option<Point2>,
{
    let n = poly.len();
    (0..n)
        .filter_map(|i| f(&poly[i], &poly[(i + 1) % n]))
        .collect()
}

/// Clips an infinite line against a convex polygon.
///
/// Needs two distinct boundary crossings. A line that only touches the
/// polygon (tangent at a vertex) yields `None`.
#[must_use]
pub fn clip_line_in_convex_poly(
    poly: &[Point2],
    origin: &Point2,
    vector: &Vector2,
    epsilon: f64,
) -> Option<[Point2; 2]> {
    let hits = edge_hits(poly, |e0, e1| {
        intersect_line_segment(origin, vector, e0, e1, Boundary::Inclusive, epsilon)
    });
    let pair = unique_pair(&hits, epsilon);
    if pair.is_none() && !hits.is_empty() {
        debug!(hits = hits.len(), "line touches polygon at a single point");
    }
    pair
}

/// Clips a ray against a convex polygon.
///
/// With [`Boundary::Exclusive`] the edge tests are inclusive only when the
/// origin is strictly inside, so an origin sitting on the boundary is not
/// counted as a crossing. [`Boundary::Inclusive`] always tests edges
/// inclusively. A ray that produces a single distinct hit clips to the
/// segment from its origin to that hit.
#[must_use]
pub fn clip_ray_in_convex_poly(
    poly: &[Point2],
    origin: &Point2,
    vector: &Vector2,
    boundary: Boundary,
    epsilon: f64,
) -> Option<[Point2; 2]> {
    let edge_boundary = match boundary {
        Boundary::Inclusive => Boundary::Inclusive,
        Boundary::Exclusive => {
            if point_in_convex_poly(origin, poly, Boundary::Exclusive, epsilon) {
                Boundary::Inclusive
            } else {
                Boundary::Exclusive
            }
        }
    };
    let hits = edge_hits(poly, |e0, e1| {
        intersect_ray_segment(origin, vector, e0, e1, edge_boundary, epsilon)
    });
    let first = *hits.first()?;
    Some(unique_pair(&hits, epsilon).unwrap_or([*origin, first]))
}

/// Clips the segment `[s0, s1]` against a convex polygon.
///
/// Zero crossings keep the whole segment when either endpoint is strictly
/// inside or both are on or inside the boundary. One crossing runs from the
/// inside endpoint to the crossing. More crossings are deduplicated, falling
/// back to the inside endpoint and the first crossing.
#[must_use]
pub fn clip_segment_in_convex_poly(
    poly: &[Point2],
    s0: &Point2,
    s1: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> Option<[Point2; 2]> {
    let inclusive = [
        point_in_convex_poly(s0, poly, Boundary::Inclusive, epsilon),
        point_in_convex_poly(s1, poly, Boundary::Inclusive, epsilon),
    ];
    let exclusive = [
        point_in_convex_poly(s0, poly, Boundary::Exclusive, epsilon),
        point_in_convex_poly(s1, poly, Boundary::Exclusive, epsilon),
    ];
    let edge_boundary = match boundary {
        Boundary::Inclusive => Boundary::Inclusive,
        Boundary::Exclusive if inclusive[0] || inclusive[1] => Boundary::Inclusive,
        Boundary::Exclusive => Boundary::Exclusive,
    };
    let hits = edge_hits(poly, |e0, e1| {
        intersect_segment_segment(s0, s1, e0, e1, edge_boundary, epsilon)
    });

    // prefer an endpoint strictly inside, then one on the boundary
    let inside = if exclusive[0] {
        Some(*s0)
    } else if exclusive[1] {
        Some(*s1)
    } else if inclusive[0] {
        Some(*s0)
    } else if inclusive[1] {
        Some(*s1)
    } else {
        None
    };

    match hits.as_slice() {
        [] => {
            if exclusive[0] || exclusive[1] || (inclusive[0] && inclusive[1]) {
                Some([*s0, *s1])
            } else {
                None
            }
        }
        [hit] => {
            let start = inside?;
            if equivalent2(&start, hit, epsilon) {
                debug!(?hit, "segment clip collapsed to a point");
                return None;
            }
            Some([start, *hit])
        }
        [first, ..] => unique_pair(&hits, epsilon).or_else(|| {
            let start = inside?;
            if equivalent2(&start, first, epsilon) {
                debug!(?first, "segment clip collapsed to a point");
                return None;
            }
            Some([start, *first])
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]
    }

    /// Compares a clip result to an expected segment, in either direction.
    fn assert_segment(seg: [Point2; 2], a: Point2, b: Point2) {
        let forward = (seg[0] - a).norm() < TOL && (seg[1] - b).norm() < TOL;
        let backward = (seg[0] - b).norm() < TOL && (seg[1] - a).norm() < TOL;
        assert!(forward || backward, "seg={seg:?}, expected {a:?}-{b:?}");
    }

    // ── line ──

    #[test]
    fn line_through_square() {
        let seg = clip_line_in_convex_poly(&square(), &p(-5.0, 5.0), &Vector2::new(1.0, 0.0), EPSILON).unwrap();
        assert_segment(seg, p(10.0, 5.0), p(0.0, 5.0));
    }

    #[test]
    fn line_through_opposite_corners() {
        // both corners are hit twice, once per adjacent edge
        let seg = clip_line_in_convex_poly(&square(), &p(0.0, 0.0), &Vector2::new(1.0, 1.0), EPSILON).unwrap();
        assert_segment(seg, p(0.0, 0.0), p(10.0, 10.0));
    }

    #[test]
    fn line_tangent_at_vertex_is_none() {
        let clip = clip_line_in_convex_poly(&square(), &p(10.0, 10.0), &Vector2::new(1.0, -1.0), EPSILON);
        assert!(clip.is_none());
    }

    #[test]
    fn line_missing_square_is_none() {
        let clip = clip_line_in_convex_poly(&square(), &p(0.0, 20.0), &Vector2::new(1.0, 0.0), EPSILON);
        assert!(clip.is_none());
    }

    // ── ray ──

    #[test]
    fn ray_from_inside() {
        let seg = clip_ray_in_convex_poly(
            &square(),
            &p(5.0, 5.0),
            &Vector2::new(1.0, 0.0),
            Boundary::Exclusive,
            EPSILON,
        )
        .unwrap();
        assert_segment(seg, p(5.0, 5.0), p(10.0, 5.0));
    }

    #[test]
    fn ray_from_outside_crosses_twice() {
        let seg = clip_ray_in_convex_poly(
            &square(),
            &p(-5.0, 3.0),
            &Vector2::new(1.0, 0.0),
            Boundary::Inclusive,
            EPSILON,
        )
        .unwrap();
        assert_segment(seg, p(0.0, 3.0), p(10.0, 3.0));
    }

    #[test]
    fn ray_from_boundary_pointing_in() {
        let seg = clip_ray_in_convex_poly(
            &square(),
            &p(0.0, 5.0),
            &Vector2::new(1.0, 0.0),
            Boundary::Exclusive,
            EPSILON,
        )
        .unwrap();
        assert_segment(seg, p(0.0, 5.0), p(10.0, 5.0));
    }

    #[test]
    fn ray_pointing_away_is_none() {
        let clip = clip_ray_in_convex_poly(
            &square(),
            &p(-5.0, 5.0),
            &Vector2::new(-1.0, 0.0),
            Boundary::Inclusive,
            EPSILON,
        );
        assert!(clip.is_none());
    }

    // ── segment ──

    #[test]
    fn segment_spanning_square() {
        let seg = clip_segment_in_convex_poly(&square(), &p(-1.0, 5.0), &p(11.0, 5.0), Boundary::Exclusive, EPSILON)
            .unwrap();
        assert_segment(seg, p(0.0, 5.0), p(10.0, 5.0));
    }

    #[test]
    fn segment_fully_inside_is_kept() {
        let seg = clip_segment_in_convex_poly(&square(), &p(2.0, 2.0), &p(8.0, 3.0), Boundary::Exclusive, EPSILON)
            .unwrap();
        assert_segment(seg, p(2.0, 2.0), p(8.0, 3.0));
    }

    #[test]
    fn segment_fully_outside_is_none() {
        let clip = clip_segment_in_convex_poly(&square(), &p(12.0, 0.0), &p(12.0, 10.0), Boundary::Inclusive, EPSILON);
        assert!(clip.is_none());
    }

    #[test]
    fn segment_half_inside() {
        let seg = clip_segment_in_convex_poly(&square(), &p(5.0, 5.0), &p(15.0, 5.0), Boundary::Exclusive, EPSILON)
            .unwrap();
        assert_segment(seg, p(5.0, 5.0), p(10.0, 5.0));
    }

    #[test]
    fn segment_on_boundary_chord() {
        // both endpoints on the boundary, interior of the segment inside
        let seg = clip_segment_in_convex_poly(&square(), &p(0.0, 5.0), &p(10.0, 5.0), Boundary::Exclusive, EPSILON)
            .unwrap();
        assert_segment(seg, p(0.0, 5.0), p(10.0, 5.0));
    }

    #[test]
    fn unique_pair_skips_duplicates() {
        let hits = [p(1.0, 1.0), p(1.0, 1.0 + 1e-9), p(2.0, 2.0)];
        let pair = unique_pair(&hits, EPSILON).unwrap();
        assert!((pair[1] - p(2.0, 2.0)).norm() < TOL);
        assert!(unique_pair(&hits[..2], EPSILON).is_none());
        assert!(unique_pair(&[], EPSILON).is_none());
    }
}
