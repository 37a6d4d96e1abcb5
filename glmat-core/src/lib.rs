/// GLMat Core Library - Matrix and quaternion constructors over nalgebra
///
/// This library exposes a small set of pure constructor operations as
/// functions over fixed-length numeric buffers. All math is delegated to
/// nalgebra; this crate only translates between flat buffers and typed
/// matrices.

pub mod buffer;
pub mod mat3;
pub mod quat;

// Re-export the buffer types
pub use buffer::{Mat3, Mat4, Quat, Vec2, Vec3};
