//! Rotation quaternion. Used to move between rotation matrices and axis-angle form.

use crate::mat3::Mat3;
use crate::vec::Vec3;

/// `x, y, z` is the vector part, `w` the scalar part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self { Self::IDENTITY }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self { Self { x, y, z, w } }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit length; a zero quaternion is left as is.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len == 0.0 {
            tracing::trace!("skipping normalization of zero quaternion");
            return;
        }
        let inv = 1.0 / len;
        self.x *= inv;
        self.y *= inv;
        self.z *= inv;
        self.w *= inv;
    }

    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Quaternion {
        let (s, c) = (radians * 0.5).sin_cos();
        let a = axis.normalized();
        Quaternion::new(a.x * s, a.y * s, a.z * s, c)
    }

    /// Quaternion of a pure rotation matrix (Shepperd's method: branch on the
    /// largest diagonal term to keep the square root well away from zero).
    pub fn from_rotation_matrix(m: &Mat3) -> Quaternion {
        let r = |row, col| m.get(row, col);
        let trace = r(0, 0) + r(1, 1) + r(2, 2);

        let mut q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quaternion::new(
                (r(2, 1) - r(1, 2)) / s,
                (r(0, 2) - r(2, 0)) / s,
                (r(1, 0) - r(0, 1)) / s,
                0.25 * s,
            )
        } else if r(0, 0) > r(1, 1) && r(0, 0) > r(2, 2) {
            let s = (1.0 + r(0, 0) - r(1, 1) - r(2, 2)).sqrt() * 2.0;
            Quaternion::new(
                0.25 * s,
                (r(0, 1) + r(1, 0)) / s,
                (r(0, 2) + r(2, 0)) / s,
                (r(2, 1) - r(1, 2)) / s,
            )
        } else if r(1, 1) > r(2, 2) {
            let s = (1.0 + r(1, 1) - r(0, 0) - r(2, 2)).sqrt() * 2.0;
            Quaternion::new(
                (r(0, 1) + r(1, 0)) / s,
                0.25 * s,
                (r(1, 2) + r(2, 1)) / s,
                (r(0, 2) - r(2, 0)) / s,
            )
        } else {
            let s = (1.0 + r(2, 2) - r(0, 0) - r(1, 1)).sqrt() * 2.0;
            Quaternion::new(
                (r(0, 2) + r(2, 0)) / s,
                (r(1, 2) + r(2, 1)) / s,
                0.25 * s,
                (r(1, 0) - r(0, 1)) / s,
            )
        };
        // q and -q are the same rotation; keep w >= 0 so the angle lands in [0, π].
        if q.w < 0.0 {
            q = Quaternion::new(-q.x, -q.y, -q.z, -q.w);
        }
        q.normalize();
        q
    }

    /// Unit axis and angle in radians.
    ///
    /// The angle is in `[0, 2π]` in general and in `[0, π]` when `w >= 0`,
    /// which always holds for the output of [`Quaternion::from_rotation_matrix`].
    ///
    /// A (near-)identity rotation has no defined axis; `+Z` is returned with angle 0.
    pub fn to_axis_angle(&self) -> (Vec3, f32) {
        let mut q = *self;
        if q.w.abs() > 1.0 {
            q.normalize();
        }
        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();
        let scale = (q.x * q.x + q.y * q.y + q.z * q.z).sqrt();
        if scale < f32::EPSILON {
            return (Vec3::Z, 0.0);
        }
        (Vec3::new(q.x / scale, q.y / scale, q.z / scale), angle)
    }
}
