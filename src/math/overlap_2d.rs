//! Boolean overlap predicates.
//!
//! Same case analysis as [`super::intersect_2d`], but only the parameters are
//! solved for; no intersection point is built.

use super::intersect_2d::{line_params, Boundary, ParamRange};
use super::polygon_2d::point_in_convex_poly;
use super::{Point2, Vector2};

/// Returns `true` if the two primitives cross within their ranges.
///
/// Parallel inputs never overlap, even when collinear.
#[must_use]
pub fn overlap_lines(
    a_origin: &Point2,
    a_vec: &Vector2,
    b_origin: &Point2,
    b_vec: &Vector2,
    range_a: ParamRange,
    range_b: ParamRange,
    epsilon: f64,
) -> bool {
    line_params(a_origin, a_vec, b_origin, b_vec, epsilon)
        .is_some_and(|(t0, t1)| range_a.accepts(t0, epsilon) && range_b.accepts(t1, epsilon))
}

#[must_use]
pub fn overlap_line_line(
    a_origin: &Point2,
    a_vec: &Vector2,
    b_origin: &Point2,
    b_vec: &Vector2,
    epsilon: f64,
) -> bool {
    overlap_lines(
        a_origin,
        a_vec,
        b_origin,
        b_vec,
        ParamRange::Line,
        ParamRange::Line,
        epsilon,
    )
}

#[must_use]
pub fn overlap_line_ray(
    line_origin: &Point2,
    line_vec: &Vector2,
    ray_origin: &Point2,
    ray_vec: &Vector2,
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    overlap_lines(
        line_origin,
        line_vec,
        ray_origin,
        ray_vec,
        ParamRange::Line,
        ParamRange::Ray(boundary),
        epsilon,
    )
}

#[must_use]
pub fn overlap_line_segment(
    line_origin: &Point2,
    line_vec: &Vector2,
    s0: &Point2,
    s1: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    overlap_lines(
        line_origin,
        line_vec,
        s0,
        &(s1 - s0),
        ParamRange::Line,
        ParamRange::Segment(boundary),
        epsilon,
    )
}

#[must_use]
pub fn overlap_ray_ray(
    a_origin: &Point2,
    a_vec: &Vector2,
    b_origin: &Point2,
    b_vec: &Vector2,
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    overlap_lines(
        a_origin,
        a_vec,
        b_origin,
        b_vec,
        ParamRange::Ray(boundary),
        ParamRange::Ray(boundary),
        epsilon,
    )
}

#[must_use]
pub fn overlap_ray_segment(
    ray_origin: &Point2,
    ray_vec: &Vector2,
    s0: &Point2,
    s1: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    overlap_lines(
        ray_origin,
        ray_vec,
        s0,
        &(s1 - s0),
        ParamRange::Ray(boundary),
        ParamRange::Segment(boundary),
        epsilon,
    )
}

#[must_use]
pub fn overlap_segment_segment(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    overlap_lines(
        a0,
        &(a1 - a0),
        b0,
        &(b1 - b0),
        ParamRange::Segment(boundary),
        ParamRange::Segment(boundary),
        epsilon,
    )
}

/// Do two convex polygons overlap?
///
/// True if any pair of edges crosses, or one polygon contains a vertex of
/// the other (which covers full containment). With [`Boundary::Exclusive`],
/// polygons that only share an edge or a vertex do not overlap.
#[must_use]
pub fn overlap_convex_polygons(
    a: &[Point2],
    b: &[Point2],
    boundary: Boundary,
    epsilon: f64,
) -> bool {
    let edges = |poly: &[Point2]| -> Vec<(Point2, Point2)> {
        (0..poly.len())
            .map(|i| (poly[i], poly[(i + 1) % poly.len()]))
            .collect()
    };
    let ea = edges(a);
    let eb = edges(b);
    let crossing = ea.iter().any(|(a0, a1)| {
        eb.iter()
            .any(|(b0, b1)| overlap_segment_segment(a0, a1, b0, b1, boundary, epsilon))
    });
    if crossing {
        return true;
    }
    b.iter()
        .any(|p| point_in_convex_poly(p, a, boundary, epsilon))
        || a.iter()
            .any(|p| point_in_convex_poly(p, b, boundary, epsilon))
}
