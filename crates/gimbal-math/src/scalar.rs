//! Scalar helpers shared by every vector/matrix type — single precision only.
//!
//! The approximate-equality predicate is an open interval test:
//! `a` and `b` are equal iff `a + eps > b` and `a - eps < b`.

use serde::{Deserialize, Serialize};

// ─── Constants ────────────────────────────────────────────────────────────────

pub const PI: f32 = std::f32::consts::PI;

/// Multiply degrees by this to get radians.
pub const PI_OVER_180: f32 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const PI_UNDER_180: f32 = 180.0 / PI;

/// Default absolute tolerance for approximate comparisons.
pub const EPSILON: f32 = 1.0 / 64.0;

// ─── Functions ────────────────────────────────────────────────────────────────

#[inline] pub fn sqr(s: f32) -> f32 { s * s }

#[inline] pub fn deg_to_rad(degrees: f32) -> f32 { degrees * PI_OVER_180 }

#[inline] pub fn rad_to_deg(radians: f32) -> f32 { radians * PI_UNDER_180 }

#[inline] pub fn min(lhs: f32, rhs: f32) -> f32 { if lhs < rhs { lhs } else { rhs } }

#[inline] pub fn max(lhs: f32, rhs: f32) -> f32 { if lhs > rhs { lhs } else { rhs } }

/// `almost_equal_with` under the default [`EPSILON`].
#[inline]
pub fn almost_equal(lhs: f32, rhs: f32) -> bool {
    Tolerance::default().approx_eq(lhs, rhs)
}

#[inline]
pub fn almost_equal_with(lhs: f32, rhs: f32, tolerance: Tolerance) -> bool {
    tolerance.approx_eq(lhs, rhs)
}

// ─── Tolerance ────────────────────────────────────────────────────────────────

/// Absolute tolerance used by every `*_with` comparison in the crate.
///
/// Serializable so host applications can carry it in their own config:
///
/// ```toml
/// [tolerance]
/// epsilon = 0.001
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    pub epsilon: f32,
}

impl Default for Tolerance {
    fn default() -> Self { Self { epsilon: EPSILON } }
}

impl Tolerance {
    pub const fn new(epsilon: f32) -> Self { Self { epsilon } }

    /// Both comparisons are strict, so a difference of exactly `epsilon` is unequal.
    #[inline]
    pub fn approx_eq(self, lhs: f32, rhs: f32) -> bool {
        lhs + self.epsilon > rhs && lhs - self.epsilon < rhs
    }
}
