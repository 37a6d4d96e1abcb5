/// Matrix-producing operations
use nalgebra::Matrix3;

use crate::buffer::{mat3_buffer, matrix4, vector2, vector3, Mat3, Mat4, Vec2, Vec3};

/// Create a 3x3 scaling matrix diag(sx, sy, sz)
pub fn from_scaling(scale: &Vec3) -> Mat3 {
    mat3_buffer(&Matrix3::from_diagonal(&vector3(scale)))
}

/// Create a 3x3 homogeneous matrix translating 2D points by `offset`
pub fn from_translation(offset: &Vec2) -> Mat3 {
    mat3_buffer(&Matrix3::new_translation(&vector2(offset)))
}

/// Create the normal-transform matrix for `m`: the inverse transpose of its
/// upper-left 3x3 block. A singular upper block yields the identity.
pub fn normal_from_mat4(m: &Mat4) -> Mat3 {
    let upper = matrix4(m).fixed_view::<3, 3>(0, 0).into_owned();
    let inverse = upper.try_inverse().unwrap_or_else(Matrix3::identity);
    mat3_buffer(&inverse.transpose())
}
