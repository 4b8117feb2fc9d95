//! 2D affine matrices.
//!
//! A matrix is six numbers `[a, b, c, d, tx, ty]`: the linear part
//! `[[a, c], [b, d]]` followed by the translation `(tx, ty)`.

use nalgebra::Matrix2;

use super::tolerance::clean_number;
use super::{Point2, Vector2};

/// Decimal places kept by the trigonometric builders.
const CLEAN_PLACES: i32 = 14;

/// 2D affine map `x ↦ M x + t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    /// Linear part.
    pub m: Matrix2<f64>,
    /// Translation.
    pub t: Vector2,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    /// `[1, 0, 0, 1, 0, 0]`.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Builds a matrix from `[a, b, c, d, tx, ty]`.
    #[must_use]
    pub fn from_array(v: [f64; 6]) -> Self {
        let [a, b, c, d, tx, ty] = v;
        Self {
            m: Matrix2::new(a, c, b, d),
            t: Vector2::new(tx, ty),
        }
    }

    /// Returns `[a, b, c, d, tx, ty]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.m[(0, 0)],
            self.m[(1, 0)],
            self.m[(0, 1)],
            self.m[(1, 1)],
            self.t.x,
            self.t.y,
        ]
    }

    /// Pure translation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(tx, ty),
        }
    }

    /// Scale by `(sx, sy)` about `origin`.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, origin: &Point2) -> Self {
        Self::about(Matrix2::new(sx, 0.0, 0.0, sy), origin)
    }

    /// Counter-clockwise rotation by `angle` radians about `origin`.
    #[must_use]
    pub fn rotation(angle: f64, origin: &Point2) -> Self {
        let (s, c) = angle.sin_cos();
        Self::about(Matrix2::new(c, -s, s, c), origin).cleaned()
    }

    /// Reflection across the line through `origin` along `vector`.
    ///
    /// Rotates the axis onto +x, flips y, rotates back.
    #[must_use]
    pub fn reflection(vector: &Vector2, origin: &Point2) -> Self {
        let (s, c) = vector.y.atan2(vector.x).sin_cos();
        let align = Matrix2::new(c, -s, s, c);
        let flip = Matrix2::new(1.0, 0.0, 0.0, -1.0);
        Self::about(align * flip * align.transpose(), origin).cleaned()
    }

    /// Conjugates a linear map by the translation to `origin`, so `origin`
    /// is its fixed point.
    fn about(m: Matrix2<f64>, origin: &Point2) -> Self {
        let o = origin.coords;
        Self { m, t: o - m * o }
    }

    fn cleaned(self) -> Self {
        Self {
            m: self.m.map(|v| clean_number(v, CLEAN_PLACES)),
            t: self.t.map(|v| clean_number(v, CLEAN_PLACES)),
        }
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.m[(0, 0)] * self.m[(1, 1)] - self.m[(0, 1)] * self.m[(1, 0)]
    }

    /// Inverse map.
    ///
    /// `None` if the determinant is zero or NaN, or the translation is not
    /// finite.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || det.is_nan() || !self.t.x.is_finite() || !self.t.y.is_finite() {
            return None;
        }
        let [a, b, c, d, tx, ty] = self.to_array();
        Some(Self::from_array([
            d / det,
            -b / det,
            -c / det,
            a / det,
            (c * ty - d * tx) / det,
            (b * tx - a * ty) / det,
        ]))
    }

    /// Composition `self ∘ other`: applies `other` first, then `self`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Applies the full affine map to a point.
    #[must_use]
    pub fn transform_point(&self, p: &Point2) -> Point2 {
        Point2::from(self.m * p.coords + self.t)
    }

    /// Applies only the linear part to a direction vector.
    #[must_use]
    pub fn transform_vector(&self, v: &Vector2) -> Vector2 {
        self.m * v
    }

    /// Maps a line in `(origin, vector)` form.
    #[must_use]
    pub fn transform_line(&self, origin: &Point2, vector: &Vector2) -> (Point2, Vector2) {
        (self.transform_point(origin), self.transform_vector(vector))
    }
}

impl std::ops::Mul for Affine2 {
    type Output = Affine2;
    #[inline]
    fn mul(self, rhs: Affine2) -> Self::Output {
        self.multiply(&rhs)
    }
}
