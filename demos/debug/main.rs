//! Crease debug runner: prints kernel results for a few named patterns.
//!
//! Usage:
//! ```text
//! cargo run --example debug                 # every pattern
//! cargo run --example debug -- split        # one pattern
//! RUST_LOG=crease=debug cargo run --example debug -- clip
//! ```

use crease::geometry::{ConvexPolygon, Line, Ray, Segment};
use crease::math::overlap_2d::overlap_segment_segment;
use crease::math::{Boundary, Point2, Vector2, EPSILON};
use crease::operations::{ClipConvex, ConvexHull, SplitConvex};
use tracing::{info, warn};

type Pattern = fn() -> crease::Result<()>;

const PATTERNS: &[(&str, Pattern)] = &[
    ("split", split),
    ("clip", clip),
    ("hull", hull),
    ("overlap", overlap),
];

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn square() -> crease::Result<ConvexPolygon> {
    ConvexPolygon::new(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)])
}

fn split() -> crease::Result<()> {
    let sq = square()?;
    for (origin, vector) in [
        (p(5.0, -5.0), Vector2::new(0.0, 1.0)),
        (p(0.0, 0.0), Vector2::new(1.0, 1.0)),
        (p(0.0, 0.0), Vector2::new(2.0, 1.0)),
        (p(20.0, 0.0), Vector2::new(0.0, 1.0)),
    ] {
        let line = Line::new(origin, vector)?;
        let faces = SplitConvex::new(&sq, line).execute()?;
        info!(?origin, ?vector, faces = faces.len(), "split");
        for face in &faces {
            info!(vertices = ?face.vertices(), area = face.signed_area(), "  face");
        }
    }
    Ok(())
}

fn clip() -> crease::Result<()> {
    let sq = square()?;
    let clip = ClipConvex::new(&sq);
    let seg = Segment::new(p(-1.0, 5.0), p(11.0, 5.0))?;
    let result = clip.with_segment(&seg)?;
    info!(?result, "segment (-1,5)-(11,5)");
    let ray = Ray::new(p(5.0, 5.0), Vector2::new(1.0, 1.0))?;
    let result = clip.with_ray(&ray)?;
    info!(?result, "ray from center");
    let tangent = Line::new(p(10.0, 10.0), Vector2::new(1.0, -1.0))?;
    let result = clip.with_line(&tangent)?;
    info!(?result, "line tangent at corner");
    Ok(())
}

fn hull() -> crease::Result<()> {
    let points = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
    let polygon = ConvexHull::new(points).execute()?;
    info!(vertices = ?polygon.vertices(), "hull");
    match ConvexHull::new(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]).execute() {
        Ok(polygon) => info!(vertices = ?polygon.vertices(), "collinear hull"),
        Err(err) => warn!(%err, "collinear hull"),
    }
    Ok(())
}

fn overlap() -> crease::Result<()> {
    let crossing = overlap_segment_segment(
        &p(0.0, 0.0),
        &p(2.0, 2.0),
        &p(0.0, 2.0),
        &p(2.0, 0.0),
        Boundary::Exclusive,
        EPSILON,
    );
    let collinear = overlap_segment_segment(
        &p(0.0, 0.0),
        &p(1.0, 1.0),
        &p(2.0, 2.0),
        &p(3.0, 3.0),
        Boundary::Exclusive,
        EPSILON,
    );
    info!(crossing, collinear, "segment overlap");
    Ok(())
}

fn main() -> crease::Result<()> {
    // Default: WARN for everything, INFO for crease and this runner.
    // Override with RUST_LOG (e.g. RUST_LOG=crease=trace for hull steps).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("debug=info".parse().unwrap_or_default())
        .add_directive("crease=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let selected = std::env::args().nth(1);
    let mut ran = false;
    for (name, run) in PATTERNS {
        if selected.as_deref().is_none_or(|s| s == *name) {
            info!("── {name} ──");
            run()?;
            ran = true;
        }
    }
    if !ran {
        let names: Vec<&str> = PATTERNS.iter().map(|(name, _)| *name).collect();
        warn!(?selected, ?names, "unknown pattern");
    }
    Ok(())
}
