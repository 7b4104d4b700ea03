use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::kernel;
use crate::point::Point;
use crate::traits::{FloatScalar, Scalar};

/// A displacement in `N`-dimensional space.
///
/// Vectors support the full algebra: addition, subtraction, scalar
/// scale/divide, element-wise multiply, and dot product (`a * b` between
/// two vectors). Length may be zero; see [`UnitVector`] for the norm-1
/// variant.
///
/// # Examples
///
/// ```
/// use geomat::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v * v, 25.0);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vector<T, const N: usize> {
    pub(crate) coords: [T; N],
}

/// A 2-D vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-D vector. Adds `cross()` in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-D vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T, const N: usize> Vector<T, N> {
    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Components as a fixed-size array reference.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.coords
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.coords
    }

    /// Iterate over components.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.coords.iter()
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector from a component array.
    #[inline]
    pub fn from_array(coords: [T; N]) -> Self {
        Self { coords }
    }

    /// Create a vector with every component set to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        Self { coords: [value; N] }
    }

    /// The zero vector.
    #[inline]
    pub fn zeros() -> Self {
        Self::fill(T::zero())
    }

    /// The unit vector along coordinate axis `k`.
    #[inline]
    pub fn axis(k: usize) -> Self {
        let mut v = Self::zeros();
        v.coords[k] = T::one();
        v
    }

    /// Create a vector by calling `f(i)` for each component.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            coords: core::array::from_fn(f),
        }
    }

    /// The point reached by following this displacement from the origin.
    #[inline]
    pub fn to_point(self) -> Point<T, N> {
        Point::from_array(self.coords)
    }

    /// Dot product.
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

    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Return a unit vector in the same direction.
    ///
    /// Panics if the norm is zero.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        assert!(n > T::zero(), "cannot normalize a zero vector");
        *self * (T::one() / n)
    }

    /// Index of the component with the largest magnitude.
    pub fn largest_axis(&self) -> usize {
        let mut best = 0;
        let mut best_val = self.coords[0].abs();
        for i in 1..N {
            let val = self.coords[i].abs();
            if val > best_val {
                best_val = val;
                best = i;
            }
        }
        best
    }

    /// An axis-aligned unit vector guaranteed linearly independent of `self`.
    ///
    /// Picks the first coordinate axis whose index is not
    /// [`largest_axis`](Self::largest_axis) — the same skip rule the
    /// orthonormal-basis builder uses, so bases seeded from this vector
    /// are reproducible. Requires `N >= 2`.
    pub fn independent(&self) -> Self {
        let skip = self.largest_axis();
        let k = if skip == 0 { 1 } else { 0 };
        Self::axis(k)
    }
}

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors (right-hand rule).
    ///
    /// ```
    /// use geomat::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y)[2], 1.0);
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

// Same positional tolerance as Point: a vector is a point used as a
// displacement.
impl<T: FloatScalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        let tol = T::from(crate::POSITION_TOLERANCE).unwrap();
        (*self - *other).norm_squared() < tol * tol
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

// ── Vector algebra ──────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        kernel::add(&mut out.coords, &rhs.coords);
        out
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        kernel::sub(&mut out.coords, &rhs.coords);
        out
    }
}

impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        kernel::add(&mut self.coords, &rhs.coords);
    }
}

impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        kernel::sub(&mut self.coords, &rhs.coords);
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        kernel::neg(&mut out.coords);
        out
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        kernel::scale(&mut out.coords, rhs);
        out
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..N {
            out.coords[i] = out.coords[i] / rhs;
        }
        out
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        kernel::scale(&mut self.coords, rhs);
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for i in 0..N {
            self.coords[i] = self.coords[i] / rhs;
        }
    }
}

// Dot product between two vectors, written as `a * b`.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for Vector<T, N> {
    #[inline]
    fn from(p: Point<T, N>) -> Self {
        p.to_vector()
    }
}

// scalar * vector (concrete impls to avoid orphan rules)
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

// ── Reference variants ──────────────────────────────────────────────
// Vector is Copy, so &Vector ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const N: usize> $Op<Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            fn $method(self, rhs: Vector<T, N>) -> Vector<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for Vector<T, N> {
            type Output = Vector<T, N>;
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Vector<T, N>> for &Vector<T, N> {
            type Output = Vector<T, N>;
            fn $method(self, rhs: &Vector<T, N>) -> Vector<T, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

impl<T: Scalar, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn neg(self) -> Vector<T, N> {
        (*self).neg()
    }
}

impl<T: Scalar, const N: usize> Mul<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: T) -> Vector<T, N> {
        (*self).mul(rhs)
    }
}

// ── Unit vector ─────────────────────────────────────────────────────

/// A vector with the invariant ‖v‖ = 1.
///
/// Every constructor and every mutating operation renormalizes before
/// returning. The single deliberate exception: scalar multiply and divide
/// are identity no-ops — scaling a unit vector does not change it.
///
/// ```
/// use geomat::{UnitVector, Vector};
///
/// let u = UnitVector::new(Vector::from_array([3.0_f64, 4.0]));
/// assert!((u.as_vector().norm() - 1.0).abs() < 1e-12);
/// assert_eq!(u * 100.0, u); // scale is a no-op
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitVector<T, const N: usize> {
    v: Vector<T, N>,
}

impl<T: FloatScalar, const N: usize> PartialEq for UnitVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl<T: FloatScalar, const N: usize> UnitVector<T, N> {
    /// Normalize a vector into a unit vector.
    ///
    /// Panics if the input norm is zero.
    #[inline]
    pub fn new(v: Vector<T, N>) -> Self {
        Self { v: v.normalize() }
    }

    /// Create from a component array, normalizing.
    #[inline]
    pub fn from_array(coords: [T; N]) -> Self {
        Self::new(Vector::from_array(coords))
    }

    /// The unit vector along coordinate axis `k`.
    #[inline]
    pub fn axis(k: usize) -> Self {
        Self {
            v: Vector::axis(k),
        }
    }

    /// Read access to the underlying vector.
    #[inline]
    pub fn as_vector(&self) -> &Vector<T, N> {
        &self.v
    }

    /// Consume into the underlying vector.
    #[inline]
    pub fn into_vector(self) -> Vector<T, N> {
        self.v
    }

    /// Replace the direction, renormalizing.
    #[inline]
    pub fn set(&mut self, v: Vector<T, N>) {
        self.v = v.normalize();
    }

    /// Dot product with a vector.
    #[inline]
    pub fn dot(&self, rhs: &Vector<T, N>) -> T {
        self.v.dot(rhs)
    }
}

impl<T, const N: usize> Index<usize> for UnitVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.v.coords[i]
    }
}

impl<T: FloatScalar, const N: usize> Add<Vector<T, N>> for UnitVector<T, N> {
    type Output = Self;

    fn add(self, rhs: Vector<T, N>) -> Self {
        Self::new(self.v + rhs)
    }
}

impl<T: FloatScalar, const N: usize> Sub<Vector<T, N>> for UnitVector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Vector<T, N>) -> Self {
        Self::new(self.v - rhs)
    }
}

impl<T: FloatScalar, const N: usize> Add for UnitVector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.v + rhs.v)
    }
}

impl<T: FloatScalar, const N: usize> Sub for UnitVector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.v - rhs.v)
    }
}

impl<T: FloatScalar, const N: usize> AddAssign<Vector<T, N>> for UnitVector<T, N> {
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.v = (self.v + rhs).normalize();
    }
}

impl<T: FloatScalar, const N: usize> SubAssign<Vector<T, N>> for UnitVector<T, N> {
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.v = (self.v - rhs).normalize();
    }
}

// Scaling a unit vector is defined as a no-op: the result of scaling
// and renormalizing would be the vector itself, so the scale is never
// applied at all.
impl<T: FloatScalar, const N: usize> Mul<T> for UnitVector<T, N> {
    type Output = Self;

    #[inline]
    fn mul(self, _rhs: T) -> Self {
        self
    }
}

impl<T: FloatScalar, const N: usize> Div<T> for UnitVector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, _rhs: T) -> Self {
        self
    }
}

impl<T: FloatScalar, const N: usize> MulAssign<T> for UnitVector<T, N> {
    #[inline]
    fn mul_assign(&mut self, _rhs: T) {}
}

impl<T: FloatScalar, const N: usize> DivAssign<T> for UnitVector<T, N> {
    #[inline]
    fn div_assign(&mut self, _rhs: T) {}
}

impl<T: FloatScalar, const N: usize> Neg for UnitVector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { v: -self.v }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_commutes() {
        let a = Vector::from_array([1.0, 2.0, 3.0]);
        let b = Vector::from_array([4.0, 5.0, 6.0]);
        assert_eq!(a * b, 32.0);
        assert_eq!(b * a, 32.0);
    }

    #[test]
    fn dot_bilinear() {
        let a = Vector::from_array([1.0_f64, -2.0, 0.5]);
        let b = Vector::from_array([3.0, 1.0, 4.0]);
        let c = Vector::from_array([-1.0, 2.0, 2.0]);
        let lhs = (a + b * 2.0) * c;
        let rhs = a * c + (b * c) * 2.0;
        assert!((lhs - rhs).abs() < 1e-12);
    }

    #[test]
    fn scale_divide_roundtrip() {
        let a = Vector::from_array([1.0, -2.0, 4.0]);
        let d = 3.7;
        assert_eq!((a * d) / d, a);
    }

    #[test]
    fn add_sub_neg() {
        let a = Vector::from_array([1.0, 2.0]);
        let b = Vector::from_array([3.0, 5.0]);
        assert_eq!((a + b)[1], 7.0);
        assert_eq!((b - a)[0], 2.0);
        assert_eq!((-a)[0], -1.0);

        let mut c = a;
        c += b;
        assert_eq!(c[0], 4.0);
        c -= b;
        assert_eq!(c[0], 1.0);
        c *= 2.0;
        assert_eq!(c[1], 4.0);
        c /= 2.0;
        assert_eq!(c[1], 2.0);
    }

    #[test]
    fn ref_operands() {
        let a = Vector::from_array([1.0_f64, 2.0]);
        let b = Vector::from_array([3.0, 5.0]);
        assert_eq!(&a + &b, a + b);
        assert_eq!(&a - &b, a - b);
        assert_eq!(a - &b, a - b);
        assert_eq!(&a - b, a - b);
        assert_eq!(-&a, -a);
        assert_eq!(&a * 2.0, a * 2.0);
    }

    #[test]
    fn scalar_on_the_left() {
        let a = Vector::from_array([1.0, 2.0]);
        assert_eq!(2.0 * a, a * 2.0);
    }

    #[test]
    fn norm_and_normalize() {
        let v = Vector::from_array([3.0_f64, 4.0]);
        assert_eq!(v.norm_squared(), 25.0);
        let u = v.normalize();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!((u[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn normalize_zero_panics() {
        let _ = Vector::<f64, 3>::zeros().normalize();
    }

    #[test]
    #[should_panic]
    fn unit_from_zero_panics() {
        let _ = UnitVector::new(Vector::<f64, 2>::zeros());
    }

    #[test]
    fn cross_right_hand_rule() {
        let x = Vector3::from_array([1.0, 0.0, 0.0]);
        let y = Vector3::from_array([0.0, 1.0, 0.0]);
        let z = x.cross(&y);
        assert_eq!(z[0], 0.0);
        assert_eq!(z[1], 0.0);
        assert_eq!(z[2], 1.0);
    }

    #[test]
    fn cross_anticommutes() {
        let a = Vector3::from_array([1.0, 2.0, 3.0]);
        let b = Vector3::from_array([4.0, 5.0, 6.0]);
        assert_eq!(a.cross(&b), -(b.cross(&a)));
    }

    #[test]
    fn largest_axis() {
        let v = Vector::from_array([1.0, -5.0, 3.0]);
        assert_eq!(v.largest_axis(), 1);
    }

    #[test]
    fn independent_is_independent() {
        let v = Vector::from_array([5.0, 1.0, 0.0]);
        let w = v.independent();
        // axis 0 is skipped (largest), so the sibling is axis 1
        assert_eq!(w[1], 1.0);
        assert!(v.cross(&w).norm_squared() > 0.0);
    }

    // ── UnitVector ──────────────────────────────────────────────

    #[test]
    fn unit_constructor_normalizes() {
        let u = UnitVector::from_array([3.0_f64, 4.0]);
        assert!((u.as_vector().norm() - 1.0).abs() < 1e-12);
        assert!((u[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn unit_scale_is_noop() {
        let u = UnitVector::from_array([1.0_f64, 2.0, 2.0]);
        assert_eq!(u * 5.0, u);
        assert_eq!(u / 5.0, u);

        let mut m = u;
        m *= 100.0;
        assert_eq!(m, u);
        m /= 0.001;
        assert_eq!(m, u);
    }

    #[test]
    fn unit_add_renormalizes() {
        let u = UnitVector::axis(0);
        let w = u + Vector::from_array([0.0_f64, 1.0, 0.0]);
        assert!((w.as_vector().norm() - 1.0).abs() < 1e-12);
        let s = core::f64::consts::FRAC_1_SQRT_2;
        assert!((w[0] - s).abs() < 1e-12);
        assert!((w[1] - s).abs() < 1e-12);
    }

    #[test]
    fn unit_set_renormalizes() {
        let mut u = UnitVector::<f64, 2>::axis(0);
        u.set(Vector::from_array([0.0, -7.0]));
        assert!((u[1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn unit_neg_stays_unit() {
        let u = UnitVector::from_array([1.0_f64, 1.0]);
        let n = -u;
        assert!((n.as_vector().norm() - 1.0).abs() < 1e-12);
    }
}
