use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::kernel;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;

/// A position in `N`-dimensional space.
///
/// A point has no identity beyond its coordinates: it is a plain `Copy`
/// value, always stack-resident, with its dimension fixed at compile time.
/// Equality for float elements is distance below
/// [`POSITION_TOLERANCE`](crate::POSITION_TOLERANCE), not exact comparison.
///
/// # Examples
///
/// ```
/// use geomat::{Point, Vector};
///
/// let a = Point::from_array([1.0, 2.0, 3.0]);
/// let b = a + Vector::from_array([1.0, 0.0, 0.0]);
/// assert_eq!(b[0], 2.0);
/// let d: Vector<f64, 3> = b - a;
/// assert!((d.norm() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point<T, const N: usize> {
    pub(crate) coords: [T; N],
}

/// A 2-D point.
pub type Point2<T> = Point<T, 2>;
/// A 3-D point.
pub type Point3<T> = Point<T, 3>;
/// A 4-D point.
pub type Point4<T> = Point<T, 4>;

impl<T, const N: usize> Point<T, N> {
    /// Number of coordinates.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Coordinates as a fixed-size array reference.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.coords
    }

    /// Coordinates as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    /// Iterate over coordinates.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.coords.iter()
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    /// Create a point from a coordinate array.
    #[inline]
    pub fn from_array(coords: [T; N]) -> Self {
        Self { coords }
    }

    /// Create a point with every coordinate set to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self { coords: [value; N] }
    }

    /// The origin (all coordinates zero).
    #[inline]
    pub fn origin() -> Self {
        Self::fill(T::zero())
    }

    /// Create a point by calling `f(i)` for each coordinate.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            coords: core::array::from_fn(f),
        }
    }

    /// Reinterpret as a displacement from the origin.
    #[inline]
    pub fn to_vector(self) -> Vector<T, N> {
        Vector::from_array(self.coords)
    }

    /// Dot product with another point's coordinates.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        kernel::dot(&self.coords, &rhs.coords)
    }

    /// Element-wise (Hadamard) product.
    pub fn component_mul(&self, rhs: &Self) -> Self {
        let mut out = *self;
        kernel::mul_elem(&mut out.coords, &rhs.coords);
        out
    }

    /// Squared Euclidean distance to another point. No sqrt, works with integers.
    pub fn distance_squared(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            let d = self.coords[i] - rhs.coords[i];
            sum = sum + d * d;
        }
        sum
    }
}

impl<T: FloatScalar, const N: usize> Point<T, N> {
    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, rhs: &Self) -> T {
        self.distance_squared(rhs).sqrt()
    }
}

// Positional-tolerance equality. Two points are equal when they are
// closer than POSITION_TOLERANCE, matching how downstream geometry
// treats coincident vertices.
impl<T: FloatScalar, const N: usize> PartialEq for Point<T, N> {
    fn eq(&self, other: &Self) -> bool {
        let tol = T::from(crate::POSITION_TOLERANCE).unwrap();
        self.distance_squared(other) < tol * tol
    }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

// ── Point / Vector arithmetic ───────────────────────────────────────

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Vector<T, N> {
        let mut out = self.coords;
        kernel::sub(&mut out, &rhs.coords);
        Vector::from_array(out)
    }
}

impl<T: Scalar, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn add(self, rhs: Vector<T, N>) -> Self {
        let mut out = self;
        kernel::add(&mut out.coords, rhs.as_array());
        out
    }
}

impl<T: Scalar, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn sub(self, rhs: Vector<T, N>) -> Self {
        let mut out = self;
        kernel::sub(&mut out.coords, rhs.as_array());
        out
    }
}

impl<T: Scalar, const N: usize> AddAssign<Vector<T, N>> for Point<T, N> {
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        kernel::add(&mut self.coords, rhs.as_array());
    }
}

impl<T: Scalar, const N: usize> SubAssign<Vector<T, N>> for Point<T, N> {
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        kernel::sub(&mut self.coords, rhs.as_array());
    }
}

// ── Scalar scale / divide ───────────────────────────────────────────

impl<T: Scalar, const N: usize> Mul<T> for Point<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        kernel::scale(&mut out.coords, rhs);
        out
    }
}

impl<T: Scalar, const N: usize> Div<T> for Point<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..N {
            out.coords[i] = out.coords[i] / rhs;
        }
        out
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Point<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        kernel::scale(&mut self.coords, rhs);
    }
}

// Dot product between two points, written as `a * b`.
impl<T: Scalar, const N: usize> Mul for Point<T, N> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for Point<T, N> {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.to_point()
    }
}
