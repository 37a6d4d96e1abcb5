/// Quaternion-producing operations
use nalgebra::{Matrix3, Rotation3, Unit, UnitQuaternion, Vector3};
use std::f32::consts::PI;

use crate::buffer::{quat_buffer, vector3, Quat, Vec3};

/// Create the shortest-arc rotation mapping direction `a` onto direction `b`.
///
/// Both inputs are assumed unit length; no normalization or validation is
/// performed. Antiparallel inputs have no unique shortest arc, in which case
/// the result is a half-turn about an arbitrary axis perpendicular to `a`.
pub fn rotation_to(a: &Vec3, b: &Vec3) -> Quat {
    let from = vector3(a);
    let q = UnitQuaternion::rotation_between(&from, &vector3(b))
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&perpendicular(&from), PI));
    quat_buffer(&q)
}

/// Create the orientation quaternion whose basis vectors are the given
/// view/right/up triple.
///
/// The triple is assumed orthonormal and is not checked; a skewed basis
/// produces whatever rotation nalgebra extracts from the assembled matrix.
pub fn set_axes(view: &Vec3, right: &Vec3, up: &Vec3) -> Quat {
    let m = Matrix3::new(
        right[0], right[1], right[2], //
        up[0], up[1], up[2], //
        -view[0], -view[1], -view[2],
    );
    let q = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(m));
    quat_buffer(&q)
}

/// An arbitrary unit axis perpendicular to `v`
fn perpendicular(v: &Vector3<f32>) -> Unit<Vector3<f32>> {
    Unit::try_new(v.cross(&Vector3::x()), 1e-6)
        .unwrap_or_else(|| Unit::new_normalize(v.cross(&Vector3::y())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Quaternion;

    fn unit(q: &Quat) -> UnitQuaternion<f32> {
        UnitQuaternion::from_quaternion(Quaternion::new(q[3], q[0], q[1], q[2]))
    }

    fn assert_quat_eq(q: &Quat, expected: &Quat) {
        for (got, want) in q.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{:?} != {:?}", q, expected);
        }
    }

    #[test]
    fn test_rotation_to_self_is_identity() {
        let q = rotation_to(&[0.0, 1.0, 0.0], &[0.0, 1.0, 0.0]);
        assert_quat_eq(&q, &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_rotation_to_maps_a_onto_b() {
        let b = Vector3::new(0.0, 0.6, 0.8);
        let q = unit(&rotation_to(&[1.0, 0.0, 0.0], &[0.0, 0.6, 0.8]));
        assert!((q * Vector3::x() - b).norm() < 1e-5);
    }

    #[test]
    fn test_rotation_to_antiparallel_is_half_turn() {
        let q = unit(&rotation_to(&[1.0, 0.0, 0.0], &[-1.0, 0.0, 0.0]));
        assert!((q * Vector3::x() + Vector3::x()).norm() < 1e-5);

        let q = unit(&rotation_to(&[0.0, 1.0, 0.0], &[0.0, -1.0, 0.0]));
        assert!((q * Vector3::y() + Vector3::y()).norm() < 1e-5);
    }

    #[test]
    fn test_set_axes_canonical_basis_is_identity() {
        let q = set_axes(&[0.0, 0.0, -1.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        assert_quat_eq(&q, &[0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_set_axes_maps_basis_to_world_axes() {
        let r = UnitQuaternion::from_euler_angles(0.4, -0.3, 1.2);
        let view = r * -Vector3::z();
        let right = r * Vector3::x();
        let up = r * Vector3::y();
        let q = unit(&set_axes(
            &[view.x, view.y, view.z],
            &[right.x, right.y, right.z],
            &[up.x, up.y, up.z],
        ));
        assert!((q * right - Vector3::x()).norm() < 1e-5);
        assert!((q * up - Vector3::y()).norm() < 1e-5);
        assert!((q * -view - Vector3::z()).norm() < 1e-5);
    }
}
