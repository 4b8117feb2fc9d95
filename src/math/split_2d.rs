//! Cutting a convex polygon in two along a line.

use tracing::debug;

use super::intersect_2d::{intersect_line_segment, Boundary};
use super::polygon_2d::point_on_line;
use super::{Point2, Vector2};

/// Where the cutting line meets the polygon boundary.
#[derive(Debug, Clone, Copy)]
struct CutHit {
    /// Vertex index, or the index of the edge's first vertex.
    index: usize,
    point: Point2,
    on_edge: bool,
}

/// Splits a counter-clockwise convex polygon by the line through `origin`
/// along `vector`.
///
/// Returns two counter-clockwise faces sharing the cut edge, or the input
/// unchanged as a single face when the line misses the polygon, grazes one
/// vertex, or runs along an edge.
///
/// Vertices within `epsilon` of the line are cut points. Edges count only
/// when the line crosses them away from their endpoints. With cut points at
/// sorted indices `i < j`, the first face walks `poly[j + 1..]` then
/// `poly[..=i]` and closes through the cut; the second face walks
/// `poly[i + 1..=j]`. A vertex cut point stays in both faces.
#[must_use]
pub fn split_convex_polygon(
    poly: &[Point2],
    origin: &Point2,
    vector: &Vector2,
    epsilon: f64,
) -> Vec<Vec<Point2>> {
    let n = poly.len();
    let vertex_hits: Vec<CutHit> = poly
        .iter()
        .enumerate()
        .filter(|(_, p)| point_on_line(origin, vector, p, epsilon))
        .map(|(index, point)| CutHit {
            index,
            point: *point,
            on_edge: false,
        })
        .collect();
    let edge_hits: Vec<CutHit> = (0..n)
        .filter_map(|i| {
            intersect_line_segment(
                origin,
                vector,
                &poly[i],
                &poly[(i + 1) % n],
                Boundary::Exclusive,
                epsilon,
            )
            .map(|point| CutHit {
                index: i,
                point,
                on_edge: true,
            })
        })
        .collect();

    let faces = match (vertex_hits.as_slice(), edge_hits.as_slice()) {
        ([], [a, b]) => split_at_edges(poly, a, b),
        ([v], [e]) => {
            if v.index == e.index || v.index == (e.index + 1) % n {
                debug!(vertex = v.index, edge = e.index, "cut grazes a corner; polygon left whole");
                return vec![poly.to_vec()];
            }
            let (first, second) = if v.index <= e.index { (v, e) } else { (e, v) };
            split_at_mixed(poly, first, second)
        }
        ([a, b], []) => {
            let adjacent = b.index - a.index == 1 || (a.index == 0 && b.index == n - 1);
            if adjacent {
                debug!(a = a.index, b = b.index, "cut runs along an edge; polygon left whole");
                vec![poly.to_vec()]
            } else {
                split_at_vertices(poly, a.index, b.index)
            }
        }
        (vertices, edges) => {
            debug!(
                vertex_hits = vertices.len(),
                edge_hits = edges.len(),
                "cut does not split polygon"
            );
            vec![poly.to_vec()]
        }
    };
    if faces.iter().any(|face| face.len() < 3) {
        debug!("cut leaves a face with fewer than three vertices; polygon left whole");
        return vec![poly.to_vec()];
    }
    faces
}

/// The vertex arc `poly[j + 1..]` followed by `poly[..=i]`.
fn outer_arc(poly: &[Point2], i: usize, j: usize) -> Vec<Point2> {
    poly[j + 1..].iter().chain(&poly[..=i]).copied().collect()
}

fn split_at_edges(poly: &[Point2], a: &CutHit, b: &CutHit) -> Vec<Vec<Point2>> {
    let mut face_a = outer_arc(poly, a.index, b.index);
    face_a.extend([a.point, b.point]);
    let mut face_b = poly[a.index + 1..=b.index].to_vec();
    face_b.extend([b.point, a.point]);
    vec![face_a, face_b]
}

fn split_at_mixed(poly: &[Point2], first: &CutHit, second: &CutHit) -> Vec<Vec<Point2>> {
    let mut face_a = outer_arc(poly, first.index, second.index);
    if first.on_edge {
        face_a.push(first.point);
    }
    face_a.push(second.point);
    let mut face_b = poly[first.index + 1..=second.index].to_vec();
    if second.on_edge {
        face_b.push(second.point);
    }
    face_b.push(first.point);
    vec![face_a, face_b]
}

fn split_at_vertices(poly: &[Point2], i: usize, j: usize) -> Vec<Vec<Point2>> {
    let face_a = poly[j..].iter().chain(&poly[..=i]).copied().collect();
    let face_b = poly[i..=j].to_vec();
    vec![face_a, face_b]
}
