/// Fixed-length numeric buffers exchanged across the binding boundary
///
/// Every operation takes and returns plain `[f32; N]` value buffers:
/// column-major for matrices, `[x, y, z, w]` for quaternions. Outputs are
/// owned arrays returned by value, so they never alias an input buffer.
use nalgebra::{Matrix3, Matrix4, Quaternion, Vector2, Vector3};

/// 2-component vector buffer
pub type Vec2 = [f32; 2];
/// 3-component vector buffer
pub type Vec3 = [f32; 3];
/// Quaternion buffer, stored [x, y, z, w]
pub type Quat = [f32; 4];
/// 3x3 matrix buffer, flattened column-major
pub type Mat3 = [f32; 9];
/// 4x4 matrix buffer, flattened column-major
pub type Mat4 = [f32; 16];

pub fn vector2(v: &Vec2) -> Vector2<f32> {
    Vector2::new(v[0], v[1])
}

pub fn vector3(v: &Vec3) -> Vector3<f32> {
    Vector3::new(v[0], v[1], v[2])
}

pub fn matrix4(m: &Mat4) -> Matrix4<f32> {
    Matrix4::from_column_slice(m)
}

/// Copy a matrix into a freshly allocated column-major buffer
pub fn mat3_buffer(m: &Matrix3<f32>) -> Mat3 {
    let mut out = [0.0; 9];
    out.copy_from_slice(m.as_slice());
    out
}

/// Copy a quaternion into a freshly allocated [x, y, z, w] buffer
pub fn quat_buffer(q: &Quaternion<f32>) -> Quat {
    let mut out = [0.0; 4];
    out.copy_from_slice(q.coords.as_slice());
    out
}
