//! 2D affine transforms for placing tiles in scene space.
//!
//! An [`Affine`] is a 2x3 row-major matrix: the left 2x2 block is the linear
//! part (scale, rotation, skew) and the last column is the translation.
//! Composition goes through `cgmath::Matrix3` in homogeneous coordinates.

use std::ops::Mul;

use cgmath::{Matrix3, Point2, SquareMatrix, Vector2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine(pub [[f32; 3]; 2]);

impl Affine {
    pub const IDENTITY: Affine = Affine([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    /// Maps the unit square onto a `width` x `height` tile whose origin sits at
    /// (`x`, `y`).
    pub fn tile(width: f32, height: f32, x: f32, y: f32) -> Self {
        Affine([[width, 0.0, x], [0.0, height, y]])
    }

    pub fn translation(&self) -> Vector2<f32> {
        Vector2::new(self.0[0][2], self.0[1][2])
    }

    pub fn scale(&self) -> Vector2<f32> {
        Vector2::new(self.0[0][0], self.0[1][1])
    }

    pub fn transform_point(&self, p: Point2<f32>) -> Point2<f32> {
        let [[a, b, c], [d, e, f]] = self.0;
        Point2::new(a * p.x + b * p.y + c, d * p.x + e * p.y + f)
    }

    /// Homogeneous 3x3 form (column-major, as cgmath stores it).
    pub fn to_matrix(&self) -> Matrix3<f32> {
        let [[a, b, c], [d, e, f]] = self.0;
        Matrix3::new(a, d, 0.0, b, e, 0.0, c, f, 1.0)
    }

    /// Drops the projective row of `m`; it is assumed to be `[0, 0, 1]`.
    pub fn from_matrix(m: Matrix3<f32>) -> Self {
        Affine([[m.x.x, m.y.x, m.z.x], [m.x.y, m.y.y, m.z.y]])
    }

    pub fn inverse(&self) -> Option<Self> {
        self.to_matrix().invert().map(Self::from_matrix)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Matrix3<f32>> for Affine {
    fn from(m: Matrix3<f32>) -> Self {
        Self::from_matrix(m)
    }
}

/// `parent * child` applies `child` first, then `parent`.
impl Mul<Affine> for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Self::Output {
        Affine::from_matrix(self.to_matrix() * rhs.to_matrix())
    }
}

impl Mul<&Affine> for &Affine {
    type Output = Affine;

    fn mul(self, rhs: &Affine) -> Self::Output {
        Affine::from_matrix(self.to_matrix() * rhs.to_matrix())
    }
}
