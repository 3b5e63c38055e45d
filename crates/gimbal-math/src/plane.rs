//! Implicit plane `a·x + b·y + c·z + d = 0` and the frustum plane selector.

use std::fmt;
use std::str::FromStr;

use crate::error::MathError;
use crate::vec::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Plane {
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self { Self { a, b, c, d } }

    pub fn normal(&self) -> Vec3 { Vec3::new(self.a, self.b, self.c) }

    /// Divide all four coefficients by `|(a, b, c)|`. A zero normal is left as is.
    pub fn normalize(&mut self) {
        let len = self.normal().length();
        if len == 0.0 {
            tracing::trace!(d = self.d, "plane has zero normal, left unnormalized");
            return;
        }
        self.a /= len;
        self.b /= len;
        self.c /= len;
        self.d /= len;
    }

    /// Signed distance for a normalized plane; positive on the side the normal points to.
    pub fn distance_to_point(&self, p: Vec3) -> f32 {
        self.normal().dot(p) + self.d
    }
}

// ─── PlaneKind ────────────────────────────────────────────────────────────────

/// One of the six clip planes of a view frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneKind {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

impl PlaneKind {
    pub const ALL: [PlaneKind; 6] = [
        PlaneKind::Left, PlaneKind::Right,
        PlaneKind::Bottom, PlaneKind::Top,
        PlaneKind::Near, PlaneKind::Far,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlaneKind::Left   => "left",
            PlaneKind::Right  => "right",
            PlaneKind::Bottom => "bottom",
            PlaneKind::Top    => "top",
            PlaneKind::Near   => "near",
            PlaneKind::Far    => "far",
        }
    }
}

impl fmt::Display for PlaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaneKind {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaneKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| MathError::UnknownPlane(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in PlaneKind::ALL {
            assert_eq!(kind.to_string().parse::<PlaneKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!("middle".parse::<PlaneKind>(), Err(MathError::UnknownPlane("middle".into())));
    }

    #[test]
    fn normalize_and_distance() {
        let mut p = Plane::new(0.0, 2.0, 0.0, -4.0);
        p.normalize();
        assert_eq!(p, Plane::new(0.0, 1.0, 0.0, -2.0));
        assert_eq!(p.distance_to_point(Vec3::new(7.0, 5.0, 1.0)), 3.0);
    }

    #[test]
    fn zero_normal_is_left_alone() {
        let mut p = Plane::new(0.0, 0.0, 0.0, 1.0);
        p.normalize();
        assert_eq!(p, Plane::new(0.0, 0.0, 0.0, 1.0));
    }
}
