//! Quantities derived from an existing transform: basis vectors, the
//! rotation block, axis-angle, and frustum clip planes.

use super::Mat4;
use crate::mat3::Mat3;
use crate::plane::{Plane, PlaneKind};
use crate::quat::Quaternion;
use crate::vec::Vec3;

impl Mat4 {
    fn col3(&self, col: usize) -> Vec3 {
        Vec3::new(self.get(0, col), self.get(1, col), self.get(2, col))
    }

    /// Row `row` as `(a, b, c, d)`, i.e. entries `row`, `row + 4`, `row + 8`, `row + 12`.
    fn row4(&self, row: usize) -> [f32; 4] {
        [self.get(row, 0), self.get(row, 1), self.get(row, 2), self.get(row, 3)]
    }

    /// Normalized first column.
    pub fn right_vec3(&self) -> Vec3 { self.col3(0).normalized() }

    /// Normalized second column.
    pub fn up_vec3(&self) -> Vec3 { self.col3(1).normalized() }

    /// Normalized third column.
    pub fn forward_vec3(&self) -> Vec3 { self.col3(2).normalized() }

    /// Upper-left 3×3 block; translation and the bottom row are dropped.
    pub fn extract_rotation(&self) -> Mat3 {
        Mat3::from_cols(self.col3(0), self.col3(1), self.col3(2))
    }

    /// Rotation block as unit axis and angle (radians, in `[0, π]`), via
    /// [`Quaternion::from_rotation_matrix`]. A rotation with no defined axis
    /// (the identity) comes back as `(+Z, 0)`.
    pub fn rotation_to_axis_angle(&self) -> (Vec3, f32) {
        Quaternion::from_rotation_matrix(&self.extract_rotation()).to_axis_angle()
    }

    /// Clip plane of a combined view-projection matrix (Gribb–Hartmann).
    ///
    /// Each plane is the fourth row plus or minus one of the first three,
    /// normalized so that `(a, b, c)` has unit length.
    pub fn extract_plane(&self, kind: PlaneKind) -> Plane {
        let w = self.row4(3);
        let (row, sign) = match kind {
            PlaneKind::Left   => (0, 1.0),
            PlaneKind::Right  => (0, -1.0),
            PlaneKind::Bottom => (1, 1.0),
            PlaneKind::Top    => (1, -1.0),
            PlaneKind::Near   => (2, 1.0),
            PlaneKind::Far    => (2, -1.0),
        };
        let r = self.row4(row);
        let mut plane = Plane::new(
            w[0] + sign * r[0],
            w[1] + sign * r[1],
            w[2] + sign * r[2],
            w[3] + sign * r[3],
        );
        plane.normalize();
        plane
    }

    /// All six planes in [`PlaneKind::ALL`] order.
    pub fn extract_frustum(&self) -> [Plane; 6] {
        PlaneKind::ALL.map(|kind| self.extract_plane(kind))
    }
}
