#[allow(unused_imports)]
use crate::core::prelude::*;

use itertools::Product;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Range, Sub, SubAssign},
};

/// A 2D vector with 32-bit floating point components.
///
/// # Equality and hashing
/// Two vectors are equal when their components differ by at most
/// [`EPSILON`](crate::core::config::EPSILON); this is the same tolerance used
/// by every other value type in the crate. Hashing uses the component bit
/// patterns, so values that compare equal only through the tolerance may
/// hash differently — hash-based lookups should use exact values.
///
/// # Examples
///
/// ```
/// use ferrite_core::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            calc::approx_eq(self.x, other.x) && calc::approx_eq(self.y, other.y)
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl Eq for Vec2 {}

impl PartialOrd<Self> for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deterministic lexicographic ordering (x, then y), tolerant of the same
/// epsilon as equality. Has no geometric meaning; exists so vectors can live
/// in `BTreeMap`/`BTreeSet` and be sorted stably.
impl Ord for Vec2 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if calc::approx_eq(self.x, other.x) {
            return self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                self.y.total_cmp(&other.y)
            });
        }
        if let Some(o) = self.x.partial_cmp(&other.x) {
            o
        } else {
            warn!("Vec2: partial_cmp() failed for x: {} vs. {}", self, other);
            match self.x.total_cmp(&other.x) {
                Ordering::Equal => self
                    .y
                    .partial_cmp(&other.y)
                    .unwrap_or_else(|| self.y.total_cmp(&other.y)),
                o => o,
            }
        }
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    /// Creates a new vector with both components set to the given value.
    #[must_use]
    pub const fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    #[must_use]
    pub const fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    #[must_use]
    pub const fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }

    /// Returns the unit vector along the positive x-axis.
    #[must_use]
    pub const fn unit_x() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }

    /// Returns the unit vector along the positive y-axis.
    #[must_use]
    pub const fn unit_y() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths, to
    /// avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a unit-length vector in the same direction as this vector.
    ///
    /// Normalizing a zero-length vector yields NaN components; no guard is
    /// applied and nothing panics. Callers that may hold a zero vector must
    /// check before normalizing.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let inv_len = 1.0 / self.len();
        Vec2 {
            x: self.x * inv_len,
            y: self.y * inv_len,
        }
    }

    /// Component-wise (Hadamard) product.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferrite_core::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.component_wise(v2), Vec2 { x: 8.0, y: 15.0 });
    /// ```
    #[must_use]
    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Component-wise division. Division by a zero component propagates
    /// NaN/Infinity.
    #[must_use]
    pub fn component_wise_div(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Converts to [`Vec2i`] by truncating each component toward zero.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn as_vec2i_lossy(&self) -> Vec2i {
        Vec2i {
            x: self.x as i32,
            y: self.y as i32,
        }
    }

    /// Extends to a [`Vec3`] with z = 0.
    #[must_use]
    pub fn as_vec3(&self) -> Vec3 {
        Into::<Vec3>::into(*self)
    }

    /// Extends to a homogeneous-point [`Vec4`] with z = 0, w = 1.
    #[must_use]
    pub fn as_vec4(&self) -> Vec4 {
        Into::<Vec4>::into(*self)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 2D vector with 32-bit integer components.
///
/// Integral semantics throughout: exact equality (no tolerance), no length
/// or normalization, and truncating division.
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Vec2i {
        Vec2i { x, y }
    }

    #[must_use]
    pub const fn splat(v: i32) -> Vec2i {
        Vec2i { x: v, y: v }
    }

    #[must_use]
    pub const fn zero() -> Vec2i {
        Vec2i { x: 0, y: 0 }
    }

    #[must_use]
    pub const fn one() -> Vec2i {
        Vec2i { x: 1, y: 1 }
    }

    #[must_use]
    pub const fn unit_x() -> Vec2i {
        Vec2i { x: 1, y: 0 }
    }

    #[must_use]
    pub const fn unit_y() -> Vec2i {
        Vec2i { x: 0, y: 1 }
    }

    /// Component-wise (Hadamard) product.
    #[must_use]
    pub fn component_wise(&self, other: Vec2i) -> Vec2i {
        Vec2i {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Component-wise division, truncating toward zero.
    #[must_use]
    pub fn component_wise_div(&self, other: Vec2i) -> Vec2i {
        Vec2i {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Converts a [`Vec2i`] to [`Vec2`].
    #[must_use]
    pub fn as_vec2(&self) -> Vec2 {
        Into::<Vec2>::into(*self)
    }

    /// Creates a Cartesian product of two ranges, from `start` to `end`
    /// (exclusive). Iterates through all integer coordinates in the
    /// rectangle, row-major.
    pub fn range(start: Vec2i, end: Vec2i) -> Product<Range<i32>, Range<i32>> {
        (start.x..end.x).cartesian_product(start.y..end.y)
    }

    /// Like [`range`](Vec2i::range), starting at the origin.
    pub fn range_from_zero(end: impl Into<Vec2i>) -> Product<Range<i32>, Range<i32>> {
        Self::range(Vec2i::zero(), end.into())
    }
}

impl Zero for Vec2i {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[i32; 2]> for Vec2i {
    fn from(value: [i32; 2]) -> Self {
        Vec2i {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2i> for [i32; 2] {
    fn from(value: Vec2i) -> Self {
        [value.x, value.y]
    }
}

impl From<Vec2i> for Vec2 {
    fn from(value: Vec2i) -> Self {
        Vec2 {
            x: value.x as f32,
            y: value.y as f32,
        }
    }
}

impl From<Vec2i> for Vec3 {
    fn from(value: Vec2i) -> Self {
        Vec3 {
            x: value.x as f32,
            y: value.y as f32,
            z: 0.0,
        }
    }
}

impl From<Vec2i> for Vec4 {
    fn from(value: Vec2i) -> Self {
        Vec4 {
            x: value.x as f32,
            y: value.y as f32,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl fmt::Display for Vec2i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

impl Add<Vec2i> for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2i> for Vec2i {
    fn add_assign(&mut self, rhs: Vec2i) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2i> for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2i> for Vec2i {
    fn sub_assign(&mut self, rhs: Vec2i) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i32> for Vec2i {
    type Output = Vec2i;

    fn mul(self, rhs: i32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2i> for i32 {
    type Output = Vec2i;

    fn mul(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<i32> for Vec2i {
    fn mul_assign(&mut self, rhs: i32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<i32> for Vec2i {
    type Output = Vec2i;

    fn div(self, rhs: i32) -> Self::Output {
        Vec2i {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<i32> for Vec2i {
    fn div_assign(&mut self, rhs: i32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2i {
    type Output = Vec2i;

    fn neg(self) -> Self::Output {
        Vec2i {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 3D vector with 32-bit floating point components.
///
/// Same equality/hash contract as [`Vec2`].
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PartialEq for Vec3 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            calc::approx_eq(self.x, other.x)
                && calc::approx_eq(self.y, other.y)
                && calc::approx_eq(self.z, other.z)
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z
        }
    }
}
impl Eq for Vec3 {}

impl Hash for Vec3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
    }
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[must_use]
    pub const fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    #[must_use]
    pub const fn zero() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[must_use]
    pub const fn one() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }

    #[must_use]
    pub const fn unit_x() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[must_use]
    pub const fn unit_y() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }

    #[must_use]
    pub const fn unit_z() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a unit-length vector in the same direction as this vector.
    ///
    /// Zero-length input yields NaN components; see [`Vec2::normed`].
    #[must_use]
    pub fn normed(&self) -> Vec3 {
        let inv_len = 1.0 / self.len();
        Vec3 {
            x: self.x * inv_len,
            y: self.y * inv_len,
            z: self.z * inv_len,
        }
    }

    /// Computes the dot product of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferrite_core::core::prelude::*;
    /// let a = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
    /// let b = Vec3 { x: 4.0, y: 5.0, z: 6.0 };
    /// assert_eq!(a.dot(b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[must_use]
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Component-wise (Hadamard) product.
    #[must_use]
    pub fn component_wise(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    /// Component-wise division. Division by a zero component propagates
    /// NaN/Infinity.
    #[must_use]
    pub fn component_wise_div(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
        }
    }

    /// Truncates to a [`Vec2`], dropping z.
    #[must_use]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Extends to a homogeneous-point [`Vec4`] with w = 1.
    #[must_use]
    pub fn as_vec4(&self) -> Vec4 {
        Into::<Vec4>::into(*self)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        Vec3 {
            x: value.x,
            y: value.y,
            z: 0.0,
        }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}, z: {}", self.x, self.y, self.z)
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sum<Vec3> for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), Vec3::add)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// A 4D vector with 32-bit floating point components.
///
/// Same equality/hash contract as [`Vec2`].
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            calc::approx_eq(self.x, other.x)
                && calc::approx_eq(self.y, other.y)
                && calc::approx_eq(self.z, other.z)
                && calc::approx_eq(self.w, other.w)
        } else {
            self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
        }
    }
}
impl Eq for Vec4 {}

impl Hash for Vec4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
        self.w.to_bits().hash(state);
    }
}

impl Vec4 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    #[must_use]
    pub const fn splat(v: f32) -> Vec4 {
        Vec4 {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }

    #[must_use]
    pub const fn zero() -> Vec4 {
        Vec4 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[must_use]
    pub const fn one() -> Vec4 {
        Vec4 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
            w: 1.0,
        }
    }

    #[must_use]
    pub const fn unit_x() -> Vec4 {
        Vec4 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[must_use]
    pub const fn unit_y() -> Vec4 {
        Vec4 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[must_use]
    pub const fn unit_z() -> Vec4 {
        Vec4 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            w: 0.0,
        }
    }

    #[must_use]
    pub const fn unit_w() -> Vec4 {
        Vec4 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a unit-length vector in the same direction as this vector.
    ///
    /// Zero-length input yields NaN components; see [`Vec2::normed`].
    #[must_use]
    pub fn normed(&self) -> Vec4 {
        let inv_len = 1.0 / self.len();
        Vec4 {
            x: self.x * inv_len,
            y: self.y * inv_len,
            z: self.z * inv_len,
            w: self.w * inv_len,
        }
    }

    /// Component-wise (Hadamard) product.
    #[must_use]
    pub fn component_wise(&self, other: Vec4) -> Vec4 {
        Vec4 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
            w: self.w * other.w,
        }
    }

    /// Component-wise division. Division by a zero component propagates
    /// NaN/Infinity.
    #[must_use]
    pub fn component_wise_div(&self, other: Vec4) -> Vec4 {
        Vec4 {
            x: self.x / other.x,
            y: self.y / other.y,
            z: self.z / other.z,
            w: self.w / other.w,
        }
    }

    /// Truncates to a [`Vec3`], dropping w.
    #[must_use]
    pub fn as_vec3(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Truncates to a [`Vec2`], dropping z and w.
    #[must_use]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl Zero for Vec4 {
    fn zero() -> Self {
        Vec4::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<Vec2> for Vec4 {
    fn from(value: Vec2) -> Self {
        Vec4 {
            x: value.x,
            y: value.y,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl From<Vec3> for Vec4 {
    fn from(value: Vec3) -> Self {
        Vec4 {
            x: value.x,
            y: value.y,
            z: value.z,
            w: 1.0,
        }
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Vec4 {
            x: value[0],
            y: value[1],
            z: value[2],
            w: value[3],
        }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}, y: {}, z: {}, w: {}",
            self.x, self.y, self.z, self.w
        )
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl AddAssign<Vec4> for Vec4 {
    fn add_assign(&mut self, rhs: Vec4) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl SubAssign<Vec4> for Vec4 {
    fn sub_assign(&mut self, rhs: Vec4) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl Sum<Vec4> for Vec4 {
    fn sum<I: Iterator<Item = Vec4>>(iter: I) -> Self {
        iter.fold(Vec4::zero(), Vec4::add)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec4> for f32 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
            w: self * rhs.w,
        }
    }
}
impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        Vec4 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}
impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
        self.w /= rhs;
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Vec4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

/// A row-major 3x3 matrix.
///
/// `m{row}{col}` layout:
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// | m20 m21 m22 |
/// ```
/// Matrix multiplication composes row-by-column and is non-commutative;
/// [`identity`](Mat3x3::identity) is the multiplicative unit. Equality is
/// per-element with the shared tolerance.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[must_use]
pub struct Mat3x3 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
}

impl Mat3x3 {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m20: f32,
        m21: f32,
        m22: f32,
    ) -> Mat3x3 {
        Mat3x3 {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
            m20,
            m21,
            m22,
        }
    }

    pub const fn identity() -> Mat3x3 {
        Mat3x3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    pub const fn zero() -> Mat3x3 {
        Mat3x3::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a new matrix with rows and columns swapped.
    pub fn transposed(&self) -> Mat3x3 {
        Mat3x3::new(
            self.m00, self.m10, self.m20, self.m01, self.m11, self.m21, self.m02, self.m12,
            self.m22,
        )
    }

    /// Extends to a [`Mat4x4`] with zero translation/bottom row and a unit
    /// bottom-right element.
    pub fn as_mat4x4(&self) -> Mat4x4 {
        Into::<Mat4x4>::into(*self)
    }

    pub fn is_finite(&self) -> bool {
        self.m00.is_finite()
            && self.m01.is_finite()
            && self.m02.is_finite()
            && self.m10.is_finite()
            && self.m11.is_finite()
            && self.m12.is_finite()
            && self.m20.is_finite()
            && self.m21.is_finite()
            && self.m22.is_finite()
    }
}

impl PartialEq for Mat3x3 {
    fn eq(&self, other: &Self) -> bool {
        calc::approx_eq(self.m00, other.m00)
            && calc::approx_eq(self.m01, other.m01)
            && calc::approx_eq(self.m02, other.m02)
            && calc::approx_eq(self.m10, other.m10)
            && calc::approx_eq(self.m11, other.m11)
            && calc::approx_eq(self.m12, other.m12)
            && calc::approx_eq(self.m20, other.m20)
            && calc::approx_eq(self.m21, other.m21)
            && calc::approx_eq(self.m22, other.m22)
    }
}
impl Eq for Mat3x3 {}

impl Hash for Mat3x3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.m00.to_bits().hash(state);
        self.m01.to_bits().hash(state);
        self.m02.to_bits().hash(state);
        self.m10.to_bits().hash(state);
        self.m11.to_bits().hash(state);
        self.m12.to_bits().hash(state);
        self.m20.to_bits().hash(state);
        self.m21.to_bits().hash(state);
        self.m22.to_bits().hash(state);
    }
}

impl One for Mat3x3 {
    fn one() -> Self {
        Self::identity()
    }
}

impl Zero for Mat3x3 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<Mat3x3> for Mat4x4 {
    fn from(m: Mat3x3) -> Self {
        Mat4x4::new(
            m.m00, m.m01, m.m02, 0.0, m.m10, m.m11, m.m12, 0.0, m.m20, m.m21, m.m22, 0.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }
}

impl fmt::Display for Mat3x3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m00: {}, m01: {}, m02: {}, m10: {}, m11: {}, m12: {}, m20: {}, m21: {}, m22: {}",
            self.m00,
            self.m01,
            self.m02,
            self.m10,
            self.m11,
            self.m12,
            self.m20,
            self.m21,
            self.m22
        )
    }
}

impl Add<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn add(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3::new(
            self.m00 + rhs.m00,
            self.m01 + rhs.m01,
            self.m02 + rhs.m02,
            self.m10 + rhs.m10,
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m20 + rhs.m20,
            self.m21 + rhs.m21,
            self.m22 + rhs.m22,
        )
    }
}

impl Sub<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn sub(self, rhs: Mat3x3) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Mat3x3 {
    type Output = Mat3x3;

    fn neg(self) -> Self::Output {
        Mat3x3::new(
            -self.m00, -self.m01, -self.m02, -self.m10, -self.m11, -self.m12, -self.m20,
            -self.m21, -self.m22,
        )
    }
}

impl Mul<f32> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Mat3x3> for f32 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3::new(
            self * rhs.m00,
            self * rhs.m01,
            self * rhs.m02,
            self * rhs.m10,
            self * rhs.m11,
            self * rhs.m12,
            self * rhs.m20,
            self * rhs.m21,
            self * rhs.m22,
        )
    }
}
impl MulAssign<f32> for Mat3x3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Mat3x3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: rhs.x * self.m00 + rhs.y * self.m01 + rhs.z * self.m02,
            y: rhs.x * self.m10 + rhs.y * self.m11 + rhs.z * self.m12,
            z: rhs.x * self.m20 + rhs.y * self.m21 + rhs.z * self.m22,
        }
    }
}

impl Mul<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3::new(
            self.m00 * rhs.m00 + self.m01 * rhs.m10 + self.m02 * rhs.m20,
            self.m00 * rhs.m01 + self.m01 * rhs.m11 + self.m02 * rhs.m21,
            self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02 * rhs.m22,
            self.m10 * rhs.m00 + self.m11 * rhs.m10 + self.m12 * rhs.m20,
            self.m10 * rhs.m01 + self.m11 * rhs.m11 + self.m12 * rhs.m21,
            self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12 * rhs.m22,
            self.m20 * rhs.m00 + self.m21 * rhs.m10 + self.m22 * rhs.m20,
            self.m20 * rhs.m01 + self.m21 * rhs.m11 + self.m22 * rhs.m21,
            self.m20 * rhs.m02 + self.m21 * rhs.m12 + self.m22 * rhs.m22,
        )
    }
}

/// A row-major 4x4 matrix; see [`Mat3x3`] for layout and contracts.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[must_use]
pub struct Mat4x4 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m03: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m30: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

impl Mat4x4 {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Mat4x4 {
        Mat4x4 {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        }
    }

    pub const fn identity() -> Mat4x4 {
        Mat4x4::new(
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        )
    }

    pub const fn zero() -> Mat4x4 {
        Mat4x4::new(
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        )
    }

    /// Creates a new matrix with rows and columns swapped.
    pub fn transposed(&self) -> Mat4x4 {
        Mat4x4::new(
            self.m00, self.m10, self.m20, self.m30, self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32, self.m03, self.m13, self.m23, self.m33,
        )
    }

    /// Truncates to a [`Mat3x3`], discarding row 3 and column 3.
    pub fn as_mat3x3(&self) -> Mat3x3 {
        Mat3x3::new(
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.m00.is_finite()
            && self.m01.is_finite()
            && self.m02.is_finite()
            && self.m03.is_finite()
            && self.m10.is_finite()
            && self.m11.is_finite()
            && self.m12.is_finite()
            && self.m13.is_finite()
            && self.m20.is_finite()
            && self.m21.is_finite()
            && self.m22.is_finite()
            && self.m23.is_finite()
            && self.m30.is_finite()
            && self.m31.is_finite()
            && self.m32.is_finite()
            && self.m33.is_finite()
    }
}

impl PartialEq for Mat4x4 {
    fn eq(&self, other: &Self) -> bool {
        calc::approx_eq(self.m00, other.m00)
            && calc::approx_eq(self.m01, other.m01)
            && calc::approx_eq(self.m02, other.m02)
            && calc::approx_eq(self.m03, other.m03)
            && calc::approx_eq(self.m10, other.m10)
            && calc::approx_eq(self.m11, other.m11)
            && calc::approx_eq(self.m12, other.m12)
            && calc::approx_eq(self.m13, other.m13)
            && calc::approx_eq(self.m20, other.m20)
            && calc::approx_eq(self.m21, other.m21)
            && calc::approx_eq(self.m22, other.m22)
            && calc::approx_eq(self.m23, other.m23)
            && calc::approx_eq(self.m30, other.m30)
            && calc::approx_eq(self.m31, other.m31)
            && calc::approx_eq(self.m32, other.m32)
            && calc::approx_eq(self.m33, other.m33)
    }
}
impl Eq for Mat4x4 {}

impl Hash for Mat4x4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.m00.to_bits().hash(state);
        self.m01.to_bits().hash(state);
        self.m02.to_bits().hash(state);
        self.m03.to_bits().hash(state);
        self.m10.to_bits().hash(state);
        self.m11.to_bits().hash(state);
        self.m12.to_bits().hash(state);
        self.m13.to_bits().hash(state);
        self.m20.to_bits().hash(state);
        self.m21.to_bits().hash(state);
        self.m22.to_bits().hash(state);
        self.m23.to_bits().hash(state);
        self.m30.to_bits().hash(state);
        self.m31.to_bits().hash(state);
        self.m32.to_bits().hash(state);
        self.m33.to_bits().hash(state);
    }
}

impl One for Mat4x4 {
    fn one() -> Self {
        Self::identity()
    }
}

impl Zero for Mat4x4 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl fmt::Display for Mat4x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m00: {}, m01: {}, m02: {}, m03: {}, m10: {}, m11: {}, m12: {}, m13: {}, \
             m20: {}, m21: {}, m22: {}, m23: {}, m30: {}, m31: {}, m32: {}, m33: {}",
            self.m00,
            self.m01,
            self.m02,
            self.m03,
            self.m10,
            self.m11,
            self.m12,
            self.m13,
            self.m20,
            self.m21,
            self.m22,
            self.m23,
            self.m30,
            self.m31,
            self.m32,
            self.m33
        )
    }
}

impl Add<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn add(self, rhs: Mat4x4) -> Self::Output {
        Mat4x4::new(
            self.m00 + rhs.m00,
            self.m01 + rhs.m01,
            self.m02 + rhs.m02,
            self.m03 + rhs.m03,
            self.m10 + rhs.m10,
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m13 + rhs.m13,
            self.m20 + rhs.m20,
            self.m21 + rhs.m21,
            self.m22 + rhs.m22,
            self.m23 + rhs.m23,
            self.m30 + rhs.m30,
            self.m31 + rhs.m31,
            self.m32 + rhs.m32,
            self.m33 + rhs.m33,
        )
    }
}

impl Sub<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn sub(self, rhs: Mat4x4) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Mat4x4 {
    type Output = Mat4x4;

    fn neg(self) -> Self::Output {
        Mat4x4::new(
            -self.m00, -self.m01, -self.m02, -self.m03, -self.m10, -self.m11, -self.m12,
            -self.m13, -self.m20, -self.m21, -self.m22, -self.m23, -self.m30, -self.m31,
            -self.m32, -self.m33,
        )
    }
}

impl Mul<f32> for Mat4x4 {
    type Output = Mat4x4;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Mat4x4> for f32 {
    type Output = Mat4x4;

    fn mul(self, rhs: Mat4x4) -> Self::Output {
        Mat4x4::new(
            self * rhs.m00,
            self * rhs.m01,
            self * rhs.m02,
            self * rhs.m03,
            self * rhs.m10,
            self * rhs.m11,
            self * rhs.m12,
            self * rhs.m13,
            self * rhs.m20,
            self * rhs.m21,
            self * rhs.m22,
            self * rhs.m23,
            self * rhs.m30,
            self * rhs.m31,
            self * rhs.m32,
            self * rhs.m33,
        )
    }
}
impl MulAssign<f32> for Mat4x4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Homogeneous point transform: the vector is treated as a point with an
/// implicit w = 1, so the translation column contributes.
impl Mul<Vec3> for Mat4x4 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: rhs.x * self.m00 + rhs.y * self.m01 + rhs.z * self.m02 + self.m03,
            y: rhs.x * self.m10 + rhs.y * self.m11 + rhs.z * self.m12 + self.m13,
            z: rhs.x * self.m20 + rhs.y * self.m21 + rhs.z * self.m22 + self.m23,
        }
    }
}

impl Mul<Vec4> for Mat4x4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: rhs.x * self.m00 + rhs.y * self.m01 + rhs.z * self.m02 + rhs.w * self.m03,
            y: rhs.x * self.m10 + rhs.y * self.m11 + rhs.z * self.m12 + rhs.w * self.m13,
            z: rhs.x * self.m20 + rhs.y * self.m21 + rhs.z * self.m22 + rhs.w * self.m23,
            w: rhs.x * self.m30 + rhs.y * self.m31 + rhs.z * self.m32 + rhs.w * self.m33,
        }
    }
}

impl Mul<Mat4x4> for Mat4x4 {
    type Output = Mat4x4;

    fn mul(self, rhs: Mat4x4) -> Self::Output {
        Mat4x4::new(
            self.m00 * rhs.m00 + self.m01 * rhs.m10 + self.m02 * rhs.m20 + self.m03 * rhs.m30,
            self.m00 * rhs.m01 + self.m01 * rhs.m11 + self.m02 * rhs.m21 + self.m03 * rhs.m31,
            self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02 * rhs.m22 + self.m03 * rhs.m32,
            self.m00 * rhs.m03 + self.m01 * rhs.m13 + self.m02 * rhs.m23 + self.m03 * rhs.m33,
            self.m10 * rhs.m00 + self.m11 * rhs.m10 + self.m12 * rhs.m20 + self.m13 * rhs.m30,
            self.m10 * rhs.m01 + self.m11 * rhs.m11 + self.m12 * rhs.m21 + self.m13 * rhs.m31,
            self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12 * rhs.m22 + self.m13 * rhs.m32,
            self.m10 * rhs.m03 + self.m11 * rhs.m13 + self.m12 * rhs.m23 + self.m13 * rhs.m33,
            self.m20 * rhs.m00 + self.m21 * rhs.m10 + self.m22 * rhs.m20 + self.m23 * rhs.m30,
            self.m20 * rhs.m01 + self.m21 * rhs.m11 + self.m22 * rhs.m21 + self.m23 * rhs.m31,
            self.m20 * rhs.m02 + self.m21 * rhs.m12 + self.m22 * rhs.m22 + self.m23 * rhs.m32,
            self.m20 * rhs.m03 + self.m21 * rhs.m13 + self.m22 * rhs.m23 + self.m23 * rhs.m33,
            self.m30 * rhs.m00 + self.m31 * rhs.m10 + self.m32 * rhs.m20 + self.m33 * rhs.m30,
            self.m30 * rhs.m01 + self.m31 * rhs.m11 + self.m32 * rhs.m21 + self.m33 * rhs.m31,
            self.m30 * rhs.m02 + self.m31 * rhs.m12 + self.m32 * rhs.m22 + self.m33 * rhs.m32,
            self.m30 * rhs.m03 + self.m31 * rhs.m13 + self.m32 * rhs.m23 + self.m33 * rhs.m33,
        )
    }
}

/// A rotation quaternion: imaginary vector part plus real scalar part.
///
/// [`identity`](Quat::identity) (0, 0, 0, 1) represents no rotation.
/// Multiplication is the Hamilton product and is non-commutative.
///
/// # Numerical boundaries
/// Normalizing a zero quaternion yields NaN components.
/// [`to_euler`](Quat::to_euler) can yield NaN pitch for inputs very close to
/// ±90° pitch (gimbal lock): the pitch term takes the square root of an
/// expression that floating-point round-off can push slightly negative. This
/// is deliberate — callers near the poles must guard the result.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Quat {
    pub imaginary: Vec3,
    pub real: f32,
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        self.imaginary == other.imaginary && calc::approx_eq(self.real, other.real)
    }
}
impl Eq for Quat {}

impl Hash for Quat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.imaginary.hash(state);
        self.real.to_bits().hash(state);
    }
}

impl Quat {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quat {
        Quat {
            imaginary: Vec3::new(x, y, z),
            real: w,
        }
    }

    #[must_use]
    pub const fn from_parts(imaginary: Vec3, real: f32) -> Quat {
        Quat { imaginary, real }
    }

    #[must_use]
    pub const fn zero() -> Quat {
        Quat::new(0.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn one() -> Quat {
        Quat::new(1.0, 1.0, 1.0, 1.0)
    }

    #[must_use]
    pub const fn unit_x() -> Quat {
        Quat::new(1.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn unit_y() -> Quat {
        Quat::new(0.0, 1.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn unit_z() -> Quat {
        Quat::new(0.0, 0.0, 1.0, 0.0)
    }

    #[must_use]
    pub const fn unit_w() -> Quat {
        Quat::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The no-rotation quaternion (0, 0, 0, 1).
    #[must_use]
    pub const fn identity() -> Quat {
        Quat::unit_w()
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.imaginary.x
    }

    #[must_use]
    pub fn y(&self) -> f32 {
        self.imaginary.y
    }

    #[must_use]
    pub fn z(&self) -> f32 {
        self.imaginary.z
    }

    #[must_use]
    pub fn w(&self) -> f32 {
        self.real
    }

    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.imaginary.len_squared() + self.real * self.real
    }

    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a unit-length quaternion. Zero-length input yields NaN
    /// components; no guard is applied.
    #[must_use]
    pub fn normed(&self) -> Quat {
        let len = self.len();
        Quat {
            imaginary: self.imaginary / len,
            real: self.real / len,
        }
    }

    /// Builds a rotation from Euler angles in radians: x = roll, y = pitch,
    /// z = yaw, combined as successive half-angle products.
    #[must_use]
    pub fn from_euler(v: Vec3) -> Quat {
        let cr = f32::cos(v.x * 0.5);
        let sr = f32::sin(v.x * 0.5);
        let cp = f32::cos(v.y * 0.5);
        let sp = f32::sin(v.y * 0.5);
        let cy = f32::cos(v.z * 0.5);
        let sy = f32::sin(v.z * 0.5);

        Quat::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Converts to Euler angles in radians: x = roll, y = pitch, z = yaw.
    ///
    /// The pitch term is computed as `2 * atan2(sqrt(1 + 2(wy - xz)),
    /// sqrt(1 - 2(wy - xz))) - pi/2`. Round-off can push either radicand
    /// slightly negative for inputs near ±90° pitch, in which case the pitch
    /// comes back NaN. The radicand is intentionally not clamped; this is a
    /// documented boundary, not an error path.
    #[must_use]
    pub fn to_euler(&self) -> Vec3 {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());

        // roll (x-axis rotation)
        let sinr_cosp = 2.0 * (w * x + y * z);
        let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
        let roll = f32::atan2(sinr_cosp, cosr_cosp);

        // pitch (y-axis rotation)
        let sinp = f32::sqrt(1.0 + 2.0 * (w * y - x * z));
        let cosp = f32::sqrt(1.0 - 2.0 * (w * y - x * z));
        let pitch = 2.0 * f32::atan2(sinp, cosp) - calc::HALF_PI;

        // yaw (z-axis rotation)
        let siny_cosp = 2.0 * (w * z + x * y);
        let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
        let yaw = f32::atan2(siny_cosp, cosy_cosp);

        Vec3 {
            x: roll,
            y: pitch,
            z: yaw,
        }
    }

    /// Truncates to the imaginary part.
    #[must_use]
    pub fn as_vec3(&self) -> Vec3 {
        self.imaginary
    }

    /// The four components as a [`Vec4`], (x, y, z, w).
    #[must_use]
    pub fn as_vec4(&self) -> Vec4 {
        Vec4 {
            x: self.x(),
            y: self.y(),
            z: self.z(),
            w: self.w(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.imaginary.is_finite() && self.real.is_finite()
    }
}

impl Zero for Quat {
    fn zero() -> Self {
        Quat::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<Quat> for Vec3 {
    fn from(q: Quat) -> Self {
        q.imaginary
    }
}

impl From<Quat> for Vec4 {
    fn from(q: Quat) -> Self {
        q.as_vec4()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}, y: {}, z: {}, w: {}",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

impl Add<Quat> for Quat {
    type Output = Quat;

    fn add(self, rhs: Quat) -> Self::Output {
        Quat {
            imaginary: self.imaginary + rhs.imaginary,
            real: self.real + rhs.real,
        }
    }
}
impl AddAssign<Quat> for Quat {
    fn add_assign(&mut self, rhs: Quat) {
        *self = *self + rhs;
    }
}

impl Sub<Quat> for Quat {
    type Output = Quat;

    fn sub(self, rhs: Quat) -> Self::Output {
        self + -rhs
    }
}
impl SubAssign<Quat> for Quat {
    fn sub_assign(&mut self, rhs: Quat) {
        *self = *self - rhs;
    }
}

impl Neg for Quat {
    type Output = Quat;

    fn neg(self) -> Self::Output {
        Quat {
            imaginary: -self.imaginary,
            real: -self.real,
        }
    }
}

impl Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Quat> for f32 {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        Quat {
            imaginary: self * rhs.imaginary,
            real: self * rhs.real,
        }
    }
}

impl Div<f32> for Quat {
    type Output = Quat;

    fn div(self, rhs: f32) -> Self::Output {
        Quat {
            imaginary: self.imaginary / rhs,
            real: self.real / rhs,
        }
    }
}

/// Hamilton product; operand order matters.
impl Mul<Quat> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        let (ax, ay, az, aw) = (self.x(), self.y(), self.z(), self.w());
        let (bx, by, bz, bw) = (rhs.x(), rhs.y(), rhs.z(), rhs.w());
        Quat::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}
impl MulAssign<Quat> for Quat {
    fn mul_assign(&mut self, rhs: Quat) {
        *self = *self * rhs;
    }
}
