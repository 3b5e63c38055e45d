//! Small vector types used at the edges of the matrix API.

use std::ops::{Add, Mul, Neg, Sub};

use crate::scalar::Tolerance;

// ─── Vec3 ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self { Self { x, y, z } }

    pub fn dot(self, rhs: Vec3) -> f32 { self.x * rhs.x + self.y * rhs.y + self.z * rhs.z }

    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn length_squared(self) -> f32 { self.dot(self) }

    pub fn length(self) -> f32 { self.length_squared().sqrt() }

    /// Scale to unit length in place.
    ///
    /// A zero-length vector is left unchanged rather than turned into NaNs.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len == 0.0 {
            tracing::trace!("skipping normalization of zero-length vec3");
            return;
        }
        let inv = 1.0 / len;
        self.x *= inv;
        self.y *= inv;
        self.z *= inv;
    }

    pub fn normalized(mut self) -> Vec3 {
        self.normalize();
        self
    }

    pub fn approx_eq(&self, other: &Vec3) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    pub fn approx_eq_with(&self, other: &Vec3, tolerance: Tolerance) -> bool {
        tolerance.approx_eq(self.x, other.x)
            && tolerance.approx_eq(self.y, other.y)
            && tolerance.approx_eq(self.z, other.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 { Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 { Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 { Vec3::new(self.x * s, self.y * s, self.z * s) }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 { Vec3::new(-self.x, -self.y, -self.z) }
}

// ─── Vec4 ─────────────────────────────────────────────────────────────────────

/// Homogeneous 4-vector; only used as the operand of `Mat4 * Vec4`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self { Self { x, y, z, w } }

    pub fn point(p: Vec3) -> Self { Self::new(p.x, p.y, p.z, 1.0) }

    pub fn direction(d: Vec3) -> Self { Self::new(d.x, d.y, d.z, 0.0) }

    pub fn xyz(self) -> Vec3 { Vec3::new(self.x, self.y, self.z) }
}
