use std::{
    fmt::{self, Display},
    ops::{Mul, MulAssign},
};

use bytemuck::{Pod, Zeroable};

use crate::{look_at, DegenerateInputError, Vector3};

/// A 4x4 transform stored row-major.
///
/// Points are treated as column vectors, so the translation lives in the last column and
/// `a * b` applies `b` first.
///
/// The `Pod` bytes follow the row-major storage, which is the transpose of what column-major
/// GPU buffers expect. Upload [`Self::to_cols_array`] instead of `bytemuck::bytes_of`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4x4 {
    rows: [[f32; 4]; 4],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    #[must_use]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn to_rows(self) -> [[f32; 4]; 4] {
        self.rows
    }

    /// Builds a matrix from 16 values in column-major order.
    #[must_use]
    pub const fn from_cols_array(values: &[f32; 16]) -> Self {
        let [m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33] =
            *values;
        Self::from_rows([
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ])
    }

    /// The 16 values in column-major order, the layout GPU buffers expect.
    #[must_use]
    pub fn to_cols_array(&self) -> [f32; 16] {
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            self.rows;
        [
            m00, m10, m20, m30, //
            m01, m11, m21, m31, //
            m02, m12, m22, m32, //
            m03, m13, m23, m33,
        ]
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<[f32; 4]> {
        self.rows.get(row).copied()
    }

    #[must_use]
    pub fn column(&self, column: usize) -> Option<[f32; 4]> {
        let [row0, row1, row2, row3] = &self.rows;
        Some([
            *row0.get(column)?,
            *row1.get(column)?,
            *row2.get(column)?,
            *row3.get(column)?,
        ])
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f32> {
        self.rows.get(row)?.get(column).copied()
    }

    #[must_use]
    pub const fn from_translation(translation: Vector3) -> Self {
        let Vector3 { x, y, z } = translation;
        Self::from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation around the x axis by `angle` radians.
    #[must_use]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation around the y axis by `angle` radians.
    #[must_use]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation around the z axis by `angle` radians.
    #[must_use]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// See [`look_at`].
    ///
    /// # Errors
    ///
    /// [`DegenerateInputError`] if no orthonormal basis can be built.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Result<Self, DegenerateInputError> {
        look_at(eye, target, up)
    }

    /// Right-handed perspective projection mapping depth to `[0, 1]`.
    ///
    /// `fov_y` is the vertical field of view in radians.
    #[must_use]
    pub fn perspective_rh(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let height = 1.0 / (0.5 * fov_y).tan();
        let width = height / aspect_ratio;
        let range = z_far / (z_near - z_far);
        Self::from_rows([
            [width, 0.0, 0.0, 0.0],
            [0.0, height, 0.0, 0.0],
            [0.0, 0.0, range, range * z_near],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Right-handed orthographic projection mapping depth to `[0, 1]`.
    #[must_use]
    pub fn orthographic_rh(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let inverse_width = 1.0 / (right - left);
        let inverse_height = 1.0 / (top - bottom);
        let range = 1.0 / (z_near - z_far);
        Self::from_rows([
            [2.0 * inverse_width, 0.0, 0.0, -(left + right) * inverse_width],
            [0.0, 2.0 * inverse_height, 0.0, -(top + bottom) * inverse_height],
            [0.0, 0.0, range, range * z_near],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            self.rows;
        Self::from_rows([
            [m00, m10, m20, m30],
            [m01, m11, m21, m31],
            [m02, m12, m22, m32],
            [m03, m13, m23, m33],
        ])
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        Minors::new(self).determinant()
    }

    /// `None` if the matrix is singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            self.rows;
        let minors = Minors::new(self);
        let inverse_determinant = minors.determinant().recip();
        if !inverse_determinant.is_finite() {
            return None;
        }

        let [a0, a1, a2, a3, a4, a5] = minors.top;
        let [b0, b1, b2, b3, b4, b5] = minors.bottom;

        let adjugate = Self::from_rows([
            [
                m11 * b5 - m12 * b4 + m13 * b3,
                -m01 * b5 + m02 * b4 - m03 * b3,
                m31 * a5 - m32 * a4 + m33 * a3,
                -m21 * a5 + m22 * a4 - m23 * a3,
            ],
            [
                -m10 * b5 + m12 * b2 - m13 * b1,
                m00 * b5 - m02 * b2 + m03 * b1,
                -m30 * a5 + m32 * a2 - m33 * a1,
                m20 * a5 - m22 * a2 + m23 * a1,
            ],
            [
                m10 * b4 - m11 * b2 + m13 * b0,
                -m00 * b4 + m01 * b2 - m03 * b0,
                m30 * a4 - m31 * a2 + m33 * a0,
                -m20 * a4 + m21 * a2 - m23 * a0,
            ],
            [
                -m10 * b3 + m11 * b1 - m12 * b0,
                m00 * b3 - m01 * b1 + m02 * b0,
                -m30 * a3 + m31 * a1 - m32 * a0,
                m20 * a3 - m21 * a1 + m22 * a0,
            ],
        ]);

        Some(adjugate * inverse_determinant)
    }

    /// Transforms a point, applying translation. The bottom row is ignored.
    #[must_use]
    pub fn transform_point3(&self, point: Vector3) -> Vector3 {
        let [row0, row1, row2, _] = &self.rows;
        Vector3::new(
            dot4(row0, point, 1.0),
            dot4(row1, point, 1.0),
            dot4(row2, point, 1.0),
        )
    }

    /// Transforms a direction, ignoring translation.
    #[must_use]
    pub fn transform_vector3(&self, vector: Vector3) -> Vector3 {
        let [row0, row1, row2, _] = &self.rows;
        Vector3::new(
            dot4(row0, vector, 0.0),
            dot4(row1, vector, 0.0),
            dot4(row2, vector, 0.0),
        )
    }

    /// Transforms a point and applies the perspective divide.
    ///
    /// Points on the plane `w = 0` end up at infinity.
    #[must_use]
    pub fn project_point3(&self, point: Vector3) -> Vector3 {
        let [.., row3] = &self.rows;
        self.transform_point3(point) / dot4(row3, point, 1.0)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn dot4(row: &[f32; 4], vector: Vector3, w: f32) -> f32 {
    let [m0, m1, m2, m3] = *row;
    m0 * vector.x + m1 * vector.y + m2 * vector.z + m3 * w
}

/// 2x2 minors of the upper and lower row pairs, shared by determinant and inverse.
struct Minors {
    top: [f32; 6],
    bottom: [f32; 6],
}

impl Minors {
    fn new(matrix: &Matrix4x4) -> Self {
        let [[m00, m01, m02, m03], [m10, m11, m12, m13], [m20, m21, m22, m23], [m30, m31, m32, m33]] =
            matrix.rows;
        Self {
            top: [
                m00 * m11 - m01 * m10,
                m00 * m12 - m02 * m10,
                m00 * m13 - m03 * m10,
                m01 * m12 - m02 * m11,
                m01 * m13 - m03 * m11,
                m02 * m13 - m03 * m12,
            ],
            bottom: [
                m20 * m31 - m21 * m30,
                m20 * m32 - m22 * m30,
                m20 * m33 - m23 * m30,
                m21 * m32 - m22 * m31,
                m21 * m33 - m23 * m31,
                m22 * m33 - m23 * m32,
            ],
        }
    }

    fn determinant(&self) -> f32 {
        let [a0, a1, a2, a3, a4, a5] = self.top;
        let [b0, b1, b2, b3, b4, b5] = self.bottom;
        a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let columns = rhs.transpose().rows;
        Self::from_rows(self.rows.map(|row| {
            columns.map(|column| {
                row.iter()
                    .zip(column)
                    .map(|(left, right)| left * right)
                    .sum()
            })
        }))
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_rows(self.rows.map(|row| row.map(|value| value * rhs)))
    }
}

/// Same as [`Matrix4x4::transform_point3`].
impl Mul<Vector3> for Matrix4x4 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        self.transform_point3(rhs)
    }
}

impl Display for Matrix4x4 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, [m0, m1, m2, m3]) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }
            write!(formatter, "[{m0}, {m1}, {m2}, {m3}]")?;
        }
        Ok(())
    }
}

impl From<glam::Mat4> for Matrix4x4 {
    fn from(value: glam::Mat4) -> Self {
        Self::from_cols_array(&value.to_cols_array())
    }
}

impl From<Matrix4x4> for glam::Mat4 {
    fn from(value: Matrix4x4) -> Self {
        Self::from_cols_array(&value.to_cols_array())
    }
}
