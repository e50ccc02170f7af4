//! Small, self-contained 3D math: [`Vector3`], [`Matrix4x4`] and the
//! [`look_at`] view transform.
//!
//! Conventions used throughout the crate:
//! - right-handed coordinates, a view looks down its local `-z` axis with `+y` up
//! - column vectors, a point `p` is transformed as `M * [p, 1]`
//! - matrices are stored row-major; [`Matrix4x4::to_cols_array`] yields the column-major
//!   layout expected by GPUs and `glam`
//! - projections map depth to `[0, 1]`

#![allow(
    missing_docs,
    reason = "most items are plain math operations named after what they compute"
)]

mod camera;
mod error;
mod look_at;
mod matrix;
mod projection;
mod random;
mod vector;

pub use camera::Camera;
pub use error::DegenerateInputError;
pub use look_at::{look_at, look_to};
pub use matrix::Matrix4x4;
pub use projection::Projection;
pub use random::random_vector3;
pub use vector::Vector3;

/// Lengths at or below this value are treated as zero when normalizing.
pub const EPSILON: f32 = 1e-6;

/// Size in bytes of a [`Vector3`].
pub const SIZE_OF_VECTOR3: u64 = size_of::<Vector3>() as u64;
/// Size in bytes of a [`Matrix4x4`].
///
/// Its `Pod` bytes are row-major; upload [`Matrix4x4::to_cols_array`] to column-major GPU buffers.
pub const SIZE_OF_MATRIX4X4: u64 = size_of::<Matrix4x4>() as u64;
