#[allow(unused_imports)]
use crate::core::prelude::*;

use std::cmp::Ordering;
use std::iter::Sum;
use std::{fmt, fmt::Formatter, ops};

/// A 2D vector with double-precision floating point components.
///
/// [`Vector2`] offers two flavours of every arithmetic operation:
///
/// - **Mutating methods** ([`set`](Vector2::set), [`add`](Vector2::add),
///   [`sub`](Vector2::sub), [`times`](Vector2::times)) modify the receiver in place and return
///   `&mut Self`, so calls can be chained on a named binding.
/// - **Pure forms**: the free functions in this module ([`add`], [`sub`], [`times`], ...) and the
///   std operator traits (`+`, `-`, `*`, unary `-`) leave their operands untouched and return a
///   fresh value.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
///
/// let mut a = Vector2::new(1.0, 2.0);
/// let b = Vector2::new(3.0, 4.0);
/// a.add(b).times(2.0);
/// assert_eq!(a, Vector2::new(8.0, 12.0));
///
/// // The pure forms do not touch their operands.
/// let c = linalg::add(a, b);
/// assert_eq!(a, Vector2::new(8.0, 12.0));
/// assert_eq!(c, a + b);
/// ```
///
/// # Method resolution
/// If [`std::ops::Add`] or [`std::ops::Sub`] is imported by name, `v.add(w)` and `v.sub(w)`
/// resolve to the operator traits (which return a new value) rather than the in-place methods.
/// Write `v + w` for the pure form and keep the traits out of scope when chaining.
///
/// # Equality
/// Equality is exact, component-wise. Non-finite components compare the way `f64` does, so a
/// vector holding `NaN` is not equal to itself. Use [`almost_eq`](Vector2::almost_eq) for a
/// tolerant comparison.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vector2 {
        Vector2 { x: 1.0, y: 1.0 }
    }
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vector2 {
        Vector2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vector2 {
        Vector2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing up (positive y-axis).
    ///
    /// Note: y increases upward here, unlike most screen-space conventions.
    #[must_use]
    pub fn up() -> Vector2 {
        Vector2 { x: 0.0, y: 1.0 }
    }
    /// Returns a unit vector pointing down (negative y-axis).
    #[must_use]
    pub fn down() -> Vector2 {
        Vector2 { x: 0.0, y: -1.0 }
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Adds `v` to this vector in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// let mut v = Vector2::new(1.0, 2.0);
    /// v.add(Vector2::new(3.0, 4.0)).add(Vector2::one());
    /// assert_eq!(v, Vector2::new(5.0, 7.0));
    /// ```
    pub fn add(&mut self, v: Vector2) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    /// Subtracts `v` from this vector in place.
    pub fn sub(&mut self, v: Vector2) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    /// Scales this vector in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// let mut v = Vector2::new(1.0, -2.0);
    /// v.times(3.0).sub(Vector2::right());
    /// assert_eq!(v, Vector2::new(2.0, -6.0));
    /// ```
    pub fn times(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Returns a new vector pointing the opposite way. The receiver is left unchanged.
    #[must_use]
    pub fn inverse(&self) -> Vector2 {
        let mut rv = *self;
        *rv.times(-1.0)
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    /// ```
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns a vector with the same direction and unit length.
    ///
    /// There is no special case for the zero vector: dividing by a zero magnitude yields `NaN`
    /// components, exactly as plain `f64` division would. Check [`is_finite`](Vector2::is_finite)
    /// on the result if the input may be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2::core::prelude::*;
    /// assert!(Vector2::new(3.0, 4.0).normalized().almost_eq(Vector2::new(0.6, 0.8)));
    /// assert!(!Vector2::zero().normalized().is_finite());
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Vector2 {
        let magnitude = self.magnitude();
        Vector2 {
            x: self.x / magnitude,
            y: self.y / magnitude,
        }
    }

    /// Returns true if neither component is infinite or `NaN`.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vector2) -> bool {
        distance(*self, rhs) < EPSILON
    }

    /// Compares two vectors by magnitude.
    ///
    /// This first attempts [`partial_cmp()`](f64::partial_cmp), which fails if either vector has
    /// `NaN` components. In that case it logs a warning and falls back to
    /// [`total_cmp()`](f64::total_cmp), so the result is always deterministic.
    #[must_use]
    pub fn cmp_by_magnitude(&self, other: &Vector2) -> Ordering {
        let self_len = self.magnitude();
        let other_len = other.magnitude();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_magnitude(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

/// Returns `v1 + v2` as a new vector.
#[must_use]
pub fn add(v1: Vector2, v2: Vector2) -> Vector2 {
    let mut rv = v1;
    *rv.add(v2)
}

/// Returns `v1 - v2` as a new vector.
#[must_use]
pub fn sub(v1: Vector2, v2: Vector2) -> Vector2 {
    let mut rv = v1;
    *rv.sub(v2)
}

/// Returns `v1` scaled by `scalar` as a new vector.
#[must_use]
pub fn times(v1: Vector2, scalar: f64) -> Vector2 {
    let mut rv = v1;
    *rv.times(scalar)
}

/// Computes the dot product of two vectors.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// let v1 = Vector2::new(2.0, 3.0);
/// let v2 = Vector2::new(4.0, 5.0);
/// assert_eq!(linalg::dot(v1, v2), 23.0); // 2*4 + 3*5
/// ```
#[must_use]
pub fn dot(v1: Vector2, v2: Vector2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Computes the 2D cross product of two vectors.
///
/// In 2D, the cross product is a scalar representing the signed area of the
/// parallelogram formed by the two vectors. It is positive if `v2` is counter-clockwise
/// from `v1`, and negative otherwise.
///
/// # Examples
///
/// ```
/// use vector2::core::prelude::*;
/// assert_eq!(linalg::cross(Vector2::new(2.0, 0.0), Vector2::new(0.0, 3.0)), 6.0);
/// assert_eq!(linalg::cross(Vector2::new(2.0, 0.0), Vector2::new(0.0, -3.0)), -6.0);
/// ```
#[must_use]
pub fn cross(v1: Vector2, v2: Vector2) -> f64 {
    v1.x * v2.y - v1.y * v2.x
}

/// Computes the Euclidean distance between two points.
#[must_use]
pub fn distance(v1: Vector2, v2: Vector2) -> f64 {
    sub(v1, v2).magnitude()
}

/// True if the cross product is exactly zero. Zero vectors are parallel to everything.
///
/// The comparison has no tolerance, so rounding error can make nearly-parallel vectors fail;
/// see [`is_almost_parallel`] for a tolerant check.
#[must_use]
pub fn is_parallel(v1: Vector2, v2: Vector2) -> bool {
    cross(v1, v2) == 0.0
}

/// True if the dot product is exactly zero, i.e. the vectors are perpendicular.
///
/// Like [`is_parallel`], this uses exact equality; see [`is_almost_vertical`].
#[must_use]
pub fn is_vertical(v1: Vector2, v2: Vector2) -> bool {
    dot(v1, v2) == 0.0
}

#[must_use]
pub fn is_almost_parallel(v1: Vector2, v2: Vector2) -> bool {
    cross(v1, v2).abs() < EPSILON
}

#[must_use]
pub fn is_almost_vertical(v1: Vector2, v2: Vector2) -> bool {
    dot(v1, v2).abs() < EPSILON
}

impl num_traits::Zero for Vector2 {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(value: [f64; 2]) -> Self {
        Vector2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2 { x, y }
    }
}
impl From<Vector2> for [f64; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl TryFrom<&[f64]> for Vector2 {
    type Error = anyhow::Error;

    fn try_from(value: &[f64]) -> Result<Self> {
        match value {
            [x, y] => Ok(Vector2 { x: *x, y: *y }),
            _ => bail!(
                "Vector2::try_from(): expected 2 components, got {}",
                value.len()
            ),
        }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl ops::Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        add(self, rhs)
    }
}
impl ops::AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        Vector2::add(self, rhs);
    }
}

impl ops::Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        sub(self, rhs)
    }
}
impl ops::SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        Vector2::sub(self, rhs);
    }
}

impl Sum<Vector2> for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), add)
    }
}

impl ops::Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        times(self, rhs)
    }
}
impl ops::Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        times(rhs, self)
    }
}
impl ops::MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.times(rhs);
    }
}

impl ops::Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}
impl ops::Neg for &Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}
