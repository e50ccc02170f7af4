use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use crate::EPSILON;

/// A point or direction in 3D space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// positive z
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// negative z, the viewing direction of an identity view matrix
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// The canonical up direction `(0, 1, 0)`.
    #[must_use]
    pub const fn up() -> Self {
        Self::UP
    }

    /// Draws every component uniformly from `[0, 1)`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// `None` if the length is not above [`EPSILON`] or a component is NaN or infinite.
    /// Large finite vectors are scaled down first, so their squared length never overflows.
    #[must_use]
    pub fn try_normalize(self) -> Option<Self> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return None;
        }
        let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if scale <= 0.0 {
            return None;
        }
        let scaled = self / scale;
        let scaled_length = scaled.length();
        (scale * scaled_length > EPSILON).then(|| scaled / scaled_length)
    }

    /// Like [`Self::try_normalize`] but falls back to [`Self::ZERO`].
    #[must_use]
    pub fn normalize_or_zero(self) -> Self {
        self.try_normalize().unwrap_or(Self::ZERO)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Unsigned angle between both vectors in radians, `0` if either is zero.
    #[must_use]
    pub fn angle_rad(self, other: Self) -> f32 {
        let lengths = self.length() * other.length();
        if lengths > 0.0 {
            // rounding may push the cosine slightly out of acos' domain
            (self.dot(other) / lengths).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn angle_deg(self, other: Self) -> f32 {
        self.angle_rad(other).to_degrees()
    }

    /// Shortens the vector to `max_length` if it is longer.
    #[must_use]
    pub fn clamp_length(self, max_length: f32) -> Self {
        if self.length_squared() > max_length * max_length {
            self.normalize_or_zero() * max_length
        } else {
            self
        }
    }

    /// Linear interpolation with `factor` clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, factor: f32) -> Self {
        self.lerp_unclamped(other, factor.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn lerp_unclamped(self, other: Self, factor: f32) -> Self {
        self + (other - self) * factor
    }

    /// Moves toward `target` by at most `max_distance` without overshooting.
    #[must_use]
    pub fn move_towards(self, target: Self, max_distance: f32) -> Self {
        self + (target - self).clamp_length(max_distance)
    }

    /// Projection onto the line spanned by `normal`; zero for a zero `normal`.
    #[must_use]
    pub fn project_on(self, normal: Self) -> Self {
        let normal_length_squared = normal.length_squared();
        if normal_length_squared > 0.0 {
            normal * (self.dot(normal) / normal_length_squared)
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub fn project_on_plane(self, plane_normal: Self) -> Self {
        self - self.project_on(plane_normal)
    }

    /// Mirrors the vector at the plane defined by the unit vector `normal`.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Normal of the counter-clockwise triangle `first`, `second`, `third`. Not normalized.
    #[must_use]
    pub fn triangle_normal(first: Self, second: Self, third: Self) -> Self {
        (second - first).cross(third - first)
    }

    /// Lexicographic ordering by x, then y, then z.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.z.total_cmp(&other.z))
    }
}

impl Display for Vector3 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        value.to_array()
    }
}

impl From<glam::Vec3> for Vector3 {
    fn from(value: glam::Vec3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Vector3> for glam::Vec3 {
    fn from(value: Vector3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    /// # Panics
    ///
    /// If `index` is not in `0..3`.
    #[allow(clippy::panic, reason = "mirrors slice indexing")]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: Vector3 has 3 components but the index is {index}"),
        }
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// componentwise
impl Mul for Vector3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
