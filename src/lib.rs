//! Crease: a 2D computational geometry kernel.
//!
//! - [`math`]: the core. Pure functions for tolerance-aware comparison,
//!   vector and affine algebra, parametric line intersection, containment,
//!   convex clipping and splitting, and convex hulls.
//! - [`geometry`]: validated shape types that feed the core canonical values.
//! - [`operations`]: configurable hull / split / clip operations on those shapes.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{CreaseError, GeometryError, OperationError, Result};
pub use math::{Point2, Vector2};
