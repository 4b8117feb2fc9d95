//! Gift-wrapping (Jarvis march) convex hull.

use std::f64::consts::TAU;

use tracing::{trace, warn};

use super::tolerance::equivalent2;
use super::Point2;

/// Why a hull walk produced no polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullFailure {
    /// Fewer than three distinct, non-collinear points.
    TooFewPoints,
    /// The walk did not return to its start within the iteration ceiling.
    NoConvergence,
}

/// Computes the convex hull of `points` by gift wrapping.
///
/// The walk starts at the lowest point (smallest y, then smallest x) and
/// repeatedly takes the smallest counter-clockwise turn, so the hull comes
/// out counter-clockwise. Among candidates on the same bearing the farthest
/// is taken; `include_collinear` takes the nearest instead, keeping points
/// that lie along hull edges.
///
/// Returns `None` for fewer than three hull points (empty, single or
/// collinear input) and when `max_iterations` steps pass without closing
/// the loop. [`try_convex_hull`] tells the two apart.
#[must_use]
pub fn convex_hull(
    points: &[Point2],
    include_collinear: bool,
    epsilon: f64,
    max_iterations: usize,
) -> Option<Vec<Point2>> {
    try_convex_hull(points, include_collinear, epsilon, max_iterations).ok()
}

/// [`convex_hull`] with the reason for failure.
///
/// # Errors
///
/// [`HullFailure::TooFewPoints`] for degenerate input,
/// [`HullFailure::NoConvergence`] when the iteration ceiling is hit.
pub fn try_convex_hull(
    points: &[Point2],
    include_collinear: bool,
    epsilon: f64,
    max_iterations: usize,
) -> Result<Vec<Point2>, HullFailure> {
    // Exact comparison: tolerant ties can chain and pick an interior start.
    let start = (0..points.len())
        .min_by(|&a, &b| {
            let (pa, pb) = (&points[a], &points[b]);
            pa.y.total_cmp(&pb.y).then(pa.x.total_cmp(&pb.x))
        })
        .ok_or(HullFailure::TooFewPoints)?;

    let mut hull = vec![start];
    let mut current = start;
    let mut sweep = 0.0;
    for step in 0..max_iterations {
        let here = &points[current];
        let mut best: Option<(usize, f64, f64)> = None;
        for candidate in 0..points.len() {
            let there = &points[candidate];
            if candidate == current || equivalent2(here, there, epsilon) {
                continue;
            }
            let mut angle = (there.y - here.y).atan2(there.x - here.x);
            while angle < sweep {
                angle += TAU;
            }
            let distance = nalgebra::distance(here, there);
            best = match best {
                None => Some((candidate, angle, distance)),
                Some((_, best_angle, best_distance)) => {
                    let replace = if (angle - best_angle).abs() < epsilon {
                        if include_collinear {
                            distance < best_distance
                        } else {
                            distance > best_distance
                        }
                    } else {
                        angle < best_angle
                    };
                    if replace {
                        Some((candidate, angle, distance))
                    } else {
                        best
                    }
                }
            };
        }
        let (next, angle, _) = best.ok_or(HullFailure::TooFewPoints)?;
        trace!(step, next, angle, "hull step");
        if hull.contains(&next) {
            if hull.len() < 3 {
                return Err(HullFailure::TooFewPoints);
            }
            return Ok(hull.iter().map(|&i| points[i]).collect());
        }
        hull.push(next);
        current = next;
        sweep = angle;
    }
    warn!(max_iterations, "convex hull did not close");
    Err(HullFailure::NoConvergence)
}
