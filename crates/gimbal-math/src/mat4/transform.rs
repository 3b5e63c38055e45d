//! Affine and rotation constructors. Each one writes all 16 entries.
//!
//! Angles are radians; rotations are right-handed and act on column vectors.

use super::Mat4;
use crate::mat3::Mat3;
use crate::quat::Quaternion;
use crate::vec::Vec3;

impl Mat4 {
    pub fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4([
            x,  0., 0., 0.,
            0., y,  0., 0.,
            0., 0., z,  0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4([
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            x,  y,  z,  1.,
        ])
    }

    pub fn rotation_x(radians: f32) -> Mat4 {
        let (s, c) = radians.sin_cos();
        Mat4([
            1., 0., 0., 0.,
            0., c,  s,  0.,
            0., -s, c,  0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn rotation_y(radians: f32) -> Mat4 {
        let (s, c) = radians.sin_cos();
        Mat4([
            c,  0., -s, 0.,
            0., 1., 0., 0.,
            s,  0., c,  0.,
            0., 0., 0., 1.,
        ])
    }

    pub fn rotation_z(radians: f32) -> Mat4 {
        let (s, c) = radians.sin_cos();
        Mat4([
            c,  s,  0., 0.,
            -s, c,  0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.,
        ])
    }

    /// Rotation matrix of a unit quaternion. Non-unit input is used as given.
    pub fn rotation_quaternion(q: &Quaternion) -> Mat4 {
        let Quaternion { x, y, z, w } = *q;
        Mat4([
            1. - 2. * (y * y + z * z),
            2. * (x * y + w * z),
            2. * (x * z - w * y),
            0.,

            2. * (x * y - w * z),
            1. - 2. * (x * x + z * z),
            2. * (y * z + w * x),
            0.,

            2. * (x * z + w * y),
            2. * (y * z - w * x),
            1. - 2. * (x * x + y * y),
            0.,

            0., 0., 0., 1.,
        ])
    }

    /// Rodrigues' rotation about `axis`, which is normalized first.
    pub fn rotation_axis_angle(axis: Vec3, radians: f32) -> Mat4 {
        let (s, c) = radians.sin_cos();
        let t = 1. - c;
        let Vec3 { x, y, z } = axis.normalized();
        Mat4([
            c + x * x * t,
            z * s + y * x * t,
            -y * s + z * x * t,
            0.,

            -z * s + x * y * t,
            c + y * y * t,
            x * s + z * y * t,
            0.,

            y * s + x * z * t,
            -x * s + y * z * t,
            c + z * z * t,
            0.,

            0., 0., 0., 1.,
        ])
    }

    /// Euler rotation from pitch (X), yaw (Y) and roll (Z).
    ///
    /// The result is `(rotation_z(roll) * rotation_y(yaw) * rotation_x(pitch))ᵀ`,
    /// which is the same as `rotation_x(-pitch) * rotation_y(-yaw) * rotation_z(-roll)`.
    pub fn rotation_pitch_yaw_roll(pitch: f32, yaw: f32, roll: f32) -> Mat4 {
        let (sr, cr) = pitch.sin_cos();
        let (sp, cp) = yaw.sin_cos();
        let (sy, cy) = roll.sin_cos();
        let srsp = sr * sp;
        let crsp = cr * sp;
        Mat4([
            cp * cy,
            srsp * cy - cr * sy,
            crsp * cy + sr * sy,
            0.,

            cp * sy,
            srsp * sy + cr * cy,
            crsp * sy - sr * cy,
            0.,

            -sp,
            sr * cp,
            cr * cp,
            0.,

            0., 0., 0., 1.,
        ])
    }

    /// Affine transform from a 3×3 rotation block and a translation.
    pub fn rotation_translation(rotation: &Mat3, translation: Vec3) -> Mat4 {
        let r = &rotation.0;
        Mat4([
            r[0], r[1], r[2], 0.,
            r[3], r[4], r[5], 0.,
            r[6], r[7], r[8], 0.,
            translation.x, translation.y, translation.z, 1.,
        ])
    }
}
