//! 4×4 transform matrix — storage, element access and arithmetic.
//! Column-major storage: element at (row, col) = data[row + 4 * col].
//!
//! Vectors are columns (`M * v`); translation lives in entries 12..14.
//! Constructors are in `transform`, inversion in `inverse`, and
//! basis/rotation/frustum extraction in `extract`.

mod extract;
mod inverse;
mod transform;

use std::ops::{Index, Mul};

use crate::scalar::Tolerance;
use crate::vec::{Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Default for Mat4 {
    fn default() -> Self { Self::IDENTITY }
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4([
        1., 0., 0., 0.,  // col 0
        0., 1., 0., 0.,  // col 1
        0., 0., 1., 0.,  // col 2
        0., 0., 0., 1.,  // col 3
    ]);

    pub const ZERO: Mat4 = Mat4([0.0; 16]);

    pub const fn from_cols_array(data: [f32; 16]) -> Self { Mat4(data) }

    pub fn as_array(&self) -> &[f32; 16] { &self.0 }

    // ─── Element access ──────────────────────────────────────────────────────
    //
    // Everything that addresses by (row, col) goes through these three; no
    // bounds beyond the array's own are checked.

    #[inline] pub fn get(&self, row: usize, col: usize) -> f32 { self.0[row + 4 * col] }

    #[inline] pub fn set(&mut self, row: usize, col: usize, value: f32) { self.0[row + 4 * col] = value; }

    #[inline]
    pub fn swap(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) {
        self.0.swap(r1 + 4 * c1, r2 + 4 * c2);
    }

    // ─── Arithmetic ──────────────────────────────────────────────────────────

    pub fn identity(&mut self) { *self = Self::IDENTITY; }

    pub fn fill(&mut self, value: f32) { self.0 = [value; 16]; }

    pub fn assign(&mut self, src: &Mat4) { self.0 = src.0; }

    pub fn is_identity(&self) -> bool { self.are_equal(&Self::IDENTITY) }

    pub fn is_identity_with(&self, tolerance: Tolerance) -> bool {
        self.are_equal_with(&Self::IDENTITY, tolerance)
    }

    /// Entry-wise approximate equality under the default tolerance (`1/64`).
    pub fn are_equal(&self, other: &Mat4) -> bool {
        self.are_equal_with(other, Tolerance::default())
    }

    pub fn are_equal_with(&self, other: &Mat4, tolerance: Tolerance) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(&a, &b)| tolerance.approx_eq(a, b))
    }

    pub fn scalar_multiply(&mut self, factor: f32) {
        for v in self.0.iter_mut() { *v *= factor; }
    }

    /// `self := self * rhs`.
    ///
    /// The product is built in a temporary and committed at the end, so
    /// `m.multiply(&m.clone())` and friends are safe.
    pub fn multiply(&mut self, rhs: &Mat4) {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[row + 4 * col] = (0..4).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
            }
        }
        self.0 = out;
    }

    pub fn transpose(&mut self) {
        let mut t = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                t[row + 4 * col] = self.get(col, row);
            }
        }
        self.0 = t;
    }

    pub fn transposed(&self) -> Mat4 {
        let mut t = *self;
        t.transpose();
        t
    }

    /// Closed-form cofactor expansion. Diagnostic only; inversion does not use it.
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[12] * m[9] * m[6] * m[3] - m[8] * m[13] * m[6] * m[3] - m[12] * m[5] * m[10] * m[3]
            + m[4] * m[13] * m[10] * m[3] + m[8] * m[5] * m[14] * m[3] - m[4] * m[9] * m[14] * m[3]
            - m[12] * m[9] * m[2] * m[7] + m[8] * m[13] * m[2] * m[7] + m[12] * m[1] * m[10] * m[7]
            - m[0] * m[13] * m[10] * m[7] - m[8] * m[1] * m[14] * m[7] + m[0] * m[9] * m[14] * m[7]
            + m[12] * m[5] * m[2] * m[11] - m[4] * m[13] * m[2] * m[11] - m[12] * m[1] * m[6] * m[11]
            + m[0] * m[13] * m[6] * m[11] + m[4] * m[1] * m[14] * m[11] - m[0] * m[5] * m[14] * m[11]
            - m[8] * m[5] * m[2] * m[15] + m[4] * m[9] * m[2] * m[15] + m[8] * m[1] * m[6] * m[15]
            - m[0] * m[9] * m[6] * m[15] - m[4] * m[1] * m[10] * m[15] + m[0] * m[5] * m[10] * m[15]
    }

    // ─── Matrix-vector ───────────────────────────────────────────────────────

    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let row = |r: usize| {
            self.get(r, 0) * v.x + self.get(r, 1) * v.y + self.get(r, 2) * v.z + self.get(r, 3) * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }

    /// Transform a point (w = 1); translation applies.
    pub fn transform_point(&self, p: Vec3) -> Vec3 { self.mul_vec4(Vec4::point(p)).xyz() }

    /// Transform a direction (w = 0); translation is ignored.
    pub fn transform_vector(&self, d: Vec3) -> Vec3 { self.mul_vec4(Vec4::direction(d)).xyz() }
}

impl Index<usize> for Mat4 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 { &self.0[i] }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(mut self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs);
        self
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, v: Vec4) -> Vec4 { self.mul_vec4(v) }
}
