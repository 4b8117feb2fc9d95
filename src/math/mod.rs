pub mod algebra;
pub mod clip_2d;
pub mod distance_2d;
pub mod hull_2d;
pub mod intersect_2d;
pub mod matrix;
pub mod overlap_2d;
pub mod polygon_2d;
pub mod split_2d;
pub mod tolerance;

pub use intersect_2d::{Boundary, LineHit, ParamRange};
pub use matrix::Affine2;
pub use tolerance::{EPSILON, EPSILON_HIGH, EPSILON_LOW, HULL_MAX_ITERATIONS};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
