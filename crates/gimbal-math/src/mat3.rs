//! 3×3 companion matrix — carries pure rotations in and out of [`Mat4`].
//! Column-major storage: element at (row, col) = data[row + 3 * col].
//!
//! [`Mat4`]: crate::Mat4

use std::ops::Mul;

use crate::scalar::Tolerance;
use crate::vec::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [f32; 9]);

impl Default for Mat3 {
    fn default() -> Self { Self::IDENTITY }
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3([
        1., 0., 0.,
        0., 1., 0.,
        0., 0., 1.,
    ]);

    /// Build from three basis columns.
    pub fn from_cols(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Mat3([x.x, x.y, x.z, y.x, y.y, y.z, z.x, z.y, z.z])
    }

    #[inline] pub fn get(&self, row: usize, col: usize) -> f32 { self.0[row + 3 * col] }

    #[inline] pub fn set(&mut self, row: usize, col: usize, value: f32) { self.0[row + 3 * col] = value; }

    pub fn col(&self, col: usize) -> Vec3 {
        Vec3::new(self.get(0, col), self.get(1, col), self.get(2, col))
    }

    pub fn transpose(&self) -> Mat3 {
        let m = &self.0;
        Mat3([m[0], m[3], m[6],
              m[1], m[4], m[7],
              m[2], m[5], m[8]])
    }

    pub fn determinant(&self) -> f32 {
        let a = |r, c| self.get(r, c);
        a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
      - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
      + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
    }

    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.get(0, 0) * v.x + self.get(0, 1) * v.y + self.get(0, 2) * v.z,
            self.get(1, 0) * v.x + self.get(1, 1) * v.y + self.get(1, 2) * v.z,
            self.get(2, 0) * v.x + self.get(2, 1) * v.y + self.get(2, 2) * v.z,
        )
    }

    pub fn approx_eq(&self, other: &Mat3) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    pub fn approx_eq_with(&self, other: &Mat3, tolerance: Tolerance) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(&a, &b)| tolerance.approx_eq(a, b))
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [0.0f32; 9];
        for row in 0..3 {
            for col in 0..3 {
                for k in 0..3 {
                    out[row + 3 * col] += self.get(row, k) * rhs.get(k, col);
                }
            }
        }
        Mat3(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_addressing() {
        let m = Mat3::from_cols(Vec3::new(1., 2., 3.), Vec3::new(4., 5., 6.), Vec3::new(7., 8., 9.));
        assert_eq!(m.get(1, 0), 2.0);
        assert_eq!(m.get(0, 2), 7.0);
        assert_eq!(m.transpose().get(0, 2), 3.0);
    }

    #[test]
    fn identity_product_and_determinant() {
        let m = Mat3([2., 0., 1., 0., 3., 0., 0., 0., 4.]);
        assert_eq!(m * Mat3::IDENTITY, m);
        assert_eq!(Mat3::IDENTITY * m, m);
        assert_eq!(m.determinant(), 24.0);
    }
}
