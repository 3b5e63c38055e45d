//! Property-based tests for matrix algebra and inversion.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::scalar::{almost_equal, PI};
    use crate::{Mat3, Mat4, Quaternion, Vec3};

    // Arbitrary matrix with moderate entries
    fn any_mat4() -> impl Strategy<Value = Mat4> {
        prop::array::uniform16(-10.0f32..10.0).prop_map(Mat4)
    }

    // Strictly diagonally dominant, so always invertible and well conditioned
    fn invertible_mat4() -> impl Strategy<Value = Mat4> {
        (prop::array::uniform16(-1.0f32..1.0), prop::array::uniform4(5.0f32..8.0)).prop_map(|(off, diag)| {
            let mut m = Mat4(off);
            for (i, d) in diag.into_iter().enumerate() {
                m.set(i, i, d);
            }
            m
        })
    }

    fn angle() -> impl Strategy<Value = f32> {
        -PI..PI
    }

    fn axis() -> impl Strategy<Value = Vec3> {
        (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
            .prop_filter("axis must not be degenerate", |v| v.length() > 0.1)
    }

    fn unit_quaternion() -> impl Strategy<Value = Quaternion> {
        prop::array::uniform4(-1.0f32..1.0)
            .prop_map(|[x, y, z, w]| Quaternion::new(x, y, z, w))
            .prop_filter("quaternion must not be degenerate", |q| q.length() > 0.1)
            .prop_map(|mut q| {
                q.normalize();
                q
            })
    }

    fn assert_rotation(m: &Mat4) -> Result<(), TestCaseError> {
        let r = m.extract_rotation();
        prop_assert!((r * r.transpose()).approx_eq(&Mat3::IDENTITY));
        prop_assert!(almost_equal(r.determinant(), 1.0));
        Ok(())
    }

    proptest! {
        // Arithmetic laws

        #[test]
        fn identity_is_neutral(m in any_mat4()) {
            prop_assert!((m * Mat4::IDENTITY).are_equal(&m));
            prop_assert!((Mat4::IDENTITY * m).are_equal(&m));
        }

        #[test]
        fn transpose_is_involution(m in any_mat4()) {
            let mut t = m;
            t.transpose();
            t.transpose();
            prop_assert_eq!(t, m);
        }

        #[test]
        fn transpose_preserves_determinant(m in invertible_mat4()) {
            let d = m.determinant();
            let dt = m.transposed().determinant();
            prop_assert!((d - dt).abs() <= d.abs() * 1e-4);
        }

        // Inversion

        #[test]
        fn inverse_round_trip(m in invertible_mat4()) {
            let inv = m.try_inverse().unwrap();
            prop_assert!((m * inv).is_identity());
            prop_assert!((inv * m).is_identity());
            prop_assert!(inv.try_inverse().unwrap().are_equal(&m));
        }

        #[test]
        fn auxiliary_agrees_with_primary(m in invertible_mat4()) {
            let mut a = m;
            let mut b = Mat4::IDENTITY;
            Mat4::gauss_jordan(&mut a, &mut b).unwrap();
            prop_assert!(a.are_equal(&b));
        }

        #[test]
        fn inverse_of_product_reverses_order(a in invertible_mat4(), b in invertible_mat4()) {
            let lhs = (a * b).try_inverse().unwrap();
            let rhs = b.try_inverse().unwrap() * a.try_inverse().unwrap();
            prop_assert!(lhs.are_equal(&rhs));
        }

        #[test]
        fn zero_row_is_singular(m in any_mat4(), row in 0usize..4) {
            let mut m = m;
            for col in 0..4 {
                m.set(row, col, 0.0);
            }
            let before = m;
            prop_assert!(m.invert().is_err());
            prop_assert_eq!(m, before);
        }

        // Rotations

        #[test]
        fn axis_rotations_are_orthogonal(a in angle()) {
            assert_rotation(&Mat4::rotation_x(a))?;
            assert_rotation(&Mat4::rotation_y(a))?;
            assert_rotation(&Mat4::rotation_z(a))?;
        }

        #[test]
        fn axis_angle_rotation_is_orthogonal(v in axis(), a in angle()) {
            assert_rotation(&Mat4::rotation_axis_angle(v, a))?;
        }

        #[test]
        fn quaternion_rotation_is_orthogonal(q in unit_quaternion()) {
            assert_rotation(&Mat4::rotation_quaternion(&q))?;
        }

        #[test]
        fn rotation_inverse_is_transpose(v in axis(), a in angle()) {
            let r = Mat4::rotation_axis_angle(v, a);
            prop_assert!(r.try_inverse().unwrap().are_equal(&r.transposed()));
        }

        #[test]
        fn axis_angle_survives_extraction(v in axis(), a in 0.1f32..3.0) {
            let (out_axis, out_angle) = Mat4::rotation_axis_angle(v, a).rotation_to_axis_angle();
            prop_assert!(out_axis.approx_eq(&v.normalized()));
            prop_assert!(almost_equal(out_angle, a));
        }

        // Frustum planes

        #[test]
        fn frustum_planes_are_normalized(m in invertible_mat4()) {
            for plane in m.extract_frustum() {
                prop_assert!(almost_equal(plane.normal().length(), 1.0));
            }
        }
    }
}
