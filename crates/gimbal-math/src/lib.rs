//! Dense 4×4 transform math for rendering and simulation code.
//!
//! All types are plain `Copy` values in single precision. Matrices are
//! column-major and act on column vectors.

pub mod error;
pub mod mat3;
pub mod mat4;
pub mod plane;
pub mod quat;
pub mod scalar;
pub mod vec;

#[cfg(test)]
mod proptests;

pub use error::{MathError, Result};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use plane::{Plane, PlaneKind};
pub use quat::Quaternion;
pub use scalar::Tolerance;
pub use vec::{Vec3, Vec4};
