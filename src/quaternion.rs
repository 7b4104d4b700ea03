use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::angle::Angle;
use crate::matrix::SqMatrix;
use crate::traits::FloatScalar;
use crate::vector::{UnitVector, Vector};

/// A quaternion `w + xi + yj + zk`, stored scalar-first.
///
/// Storage is a [`Vector<T, 4>`] in `[w, x, y, z]` order, so the vector
/// arithmetic (norm, dot, tolerance equality) is shared rather than
/// duplicated. General quaternions support the full Hamilton algebra;
/// rotations live on [`UnitQuaternion`].
///
/// ```
/// use geomat::Quaternion;
///
/// let i = Quaternion::new(0.0_f64, 1.0, 0.0, 0.0);
/// let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
/// let k = i * j;
/// assert!((k.z() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quaternion<T> {
    q: Vector<T, 4>,
}

impl<T: FloatScalar> Quaternion<T> {
    /// Create from components, scalar part first.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            q: Vector::from_array([w, x, y, z]),
        }
    }

    /// Create from a scalar part and a vector part.
    pub fn from_parts(w: T, v: Vector<T, 3>) -> Self {
        Self::new(w, v[0], v[1], v[2])
    }

    /// The identity quaternion `1 + 0i + 0j + 0k`.
    pub fn one() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn w(&self) -> T {
        self.q[0]
    }

    #[inline]
    pub fn x(&self) -> T {
        self.q[1]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.q[2]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.q[3]
    }

    /// The vector (imaginary) part.
    pub fn vector_part(&self) -> Vector<T, 3> {
        Vector::from_array([self.x(), self.y(), self.z()])
    }

    /// Conjugate: negated vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w(), -self.x(), -self.y(), -self.z())
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.q.dot(&rhs.q)
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.q.norm()
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.q.norm_squared()
    }

    /// Scale to unit length. Panics if the norm is zero.
    pub fn normalize(&self) -> UnitQuaternion<T> {
        UnitQuaternion::new(*self)
    }

    /// Multiplicative inverse: `conjugate / norm²`. Panics on the zero
    /// quaternion.
    pub fn inverse(&self) -> Self {
        let n2 = self.norm_squared();
        assert!(n2 > T::zero(), "cannot invert the zero quaternion");
        let c = self.conjugate();
        Self { q: c.q / n2 }
    }
}

impl<T: FloatScalar> PartialEq for Quaternion<T> {
    fn eq(&self, other: &Self) -> bool {
        self.q == other.q
    }
}

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { q: self.q + rhs.q }
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { q: self.q - rhs.q }
    }
}

impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    /// Hamilton product.
    fn mul(self, rhs: Self) -> Self {
        let (w1, x1, y1, z1) = (self.w(), self.x(), self.y(), self.z());
        let (w2, x2, y2, z2) = (rhs.w(), rhs.x(), rhs.y(), rhs.z());
        Self::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }
}

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self { q: self.q * rhs }
    }
}

impl<T: FloatScalar> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self { q: self.q / rhs }
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self { q: -self.q }
    }
}

impl<T: FloatScalar + fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}i + {}j + {}k",
            self.w(),
            self.x(),
            self.y(),
            self.z()
        )
    }
}

/// A unit quaternion representing a 3-D rotation.
///
/// Construction normalizes; products renormalize to keep drift from
/// accumulating over long composition chains. Scalar multiplication and
/// division are deliberate no-ops, mirroring [`UnitVector`]: scaling a
/// rotation has no meaning, and ignoring the scale keeps generic code from
/// corrupting the invariant.
///
/// ```
/// use geomat::{Angle, UnitQuaternion, UnitVector, Vector};
///
/// let q = UnitQuaternion::from_axis_angle(&UnitVector::axis(2), Angle::from_degrees(90.0_f64));
/// let v = q.rotate(&Vector::from_array([1.0, 0.0, 0.0]));
/// assert!(v[0].abs() < 1e-12);
/// assert!((v[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnitQuaternion<T> {
    q: Quaternion<T>,
}

impl<T: FloatScalar> UnitQuaternion<T> {
    /// Normalize an arbitrary quaternion. Panics if its norm is zero.
    pub fn new(q: Quaternion<T>) -> Self {
        let n = q.norm();
        assert!(n > T::zero(), "cannot normalize a zero quaternion");
        Self { q: q / n }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            q: Quaternion::one(),
        }
    }

    /// Rotation about `axis` by `angle`, right-hand rule.
    pub fn from_axis_angle(axis: &UnitVector<T, 3>, angle: Angle<T>) -> Self {
        let two = T::one() + T::one();
        let (s, c) = (angle / two).sin_cos();
        Self {
            q: Quaternion::from_parts(c, *axis.as_vector() * s),
        }
    }

    /// View the underlying quaternion.
    #[inline]
    pub fn as_quaternion(&self) -> &Quaternion<T> {
        &self.q
    }

    /// The inverse rotation. Unit norm makes this the conjugate.
    pub fn inverse(&self) -> Self {
        Self {
            q: self.q.conjugate(),
        }
    }

    /// Recover the rotation axis and angle.
    ///
    /// The identity rotation has no defined axis; the x axis with a zero
    /// angle is returned for it.
    pub fn to_axis_angle(&self) -> (UnitVector<T, 3>, Angle<T>) {
        let v = self.q.vector_part();
        let n = v.norm();
        let two = T::one() + T::one();
        if n == T::zero() {
            return (UnitVector::axis(0), Angle::zero());
        }
        (UnitVector::new(v), Angle::new(two * n.atan2(self.q.w())))
    }

    /// The equivalent rotation matrix.
    pub fn to_rotation_matrix(&self) -> SqMatrix<T, 3> {
        let two = T::one() + T::one();
        let (w, x, y, z) = (self.q.w(), self.q.x(), self.q.y(), self.q.z());
        SqMatrix::new([
            [
                T::one() - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
            ],
            [
                two * (x * y + w * z),
                T::one() - two * (x * x + z * z),
                two * (y * z - w * x),
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                T::one() - two * (x * x + y * y),
            ],
        ])
    }

    /// Rotate a vector without forming the matrix.
    ///
    /// Uses the cross-product expansion `v + 2w(u×v) + 2u×(u×v)` with `u`
    /// the vector part.
    pub fn rotate(&self, v: &Vector<T, 3>) -> Vector<T, 3> {
        let two = T::one() + T::one();
        let u = self.q.vector_part();
        let uv = u.cross(v);
        *v + uv * (two * self.q.w()) + u.cross(&uv) * two
    }

    /// Spherical linear interpolation from `self` (`t = 0`) to `other`
    /// (`t = 1`), along the shorter arc.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut b = other.q;
        let mut cos_half = self.q.dot(&b);
        // q and -q are the same rotation; flip to take the shorter arc
        if cos_half < T::zero() {
            b = -b;
            cos_half = -cos_half;
        }
        // Nearly parallel: fall back to a normalized lerp
        if cos_half > T::one() - T::from(1e-10).unwrap() {
            let q = self.q * (T::one() - t) + b * t;
            return Self::new(q);
        }
        let half = cos_half.acos();
        let sin_half = half.sin();
        let wa = ((T::one() - t) * half).sin() / sin_half;
        let wb = (t * half).sin() / sin_half;
        Self::new(self.q * wa + b * wb)
    }

    /// Composition: `self * rhs` applies `rhs` first. Renormalizes.
    pub fn compose(&self, rhs: &Self) -> Self {
        Self::new(self.q * rhs.q)
    }
}

impl<T: FloatScalar> PartialEq for UnitQuaternion<T> {
    fn eq(&self, other: &Self) -> bool {
        self.q == other.q
    }
}

impl<T: FloatScalar> Mul for UnitQuaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

// Scaling a rotation is meaningless: absorb it instead of breaking the
// unit-norm invariant.
impl<T: FloatScalar> Mul<T> for UnitQuaternion<T> {
    type Output = Self;

    fn mul(self, _rhs: T) -> Self {
        self
    }
}

impl<T: FloatScalar> Div<T> for UnitQuaternion<T> {
    type Output = Self;

    fn div(self, _rhs: T) -> Self {
        self
    }
}

impl<T: FloatScalar> Neg for UnitQuaternion<T> {
    type Output = Self;

    /// `-q` encodes the same rotation as `q`.
    fn neg(self) -> Self {
        Self { q: -self.q }
    }
}

impl<T: FloatScalar + fmt::Display> fmt::Display for UnitQuaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.q.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn hamilton_basis_products() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn conjugate_and_inverse() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let c = q.conjugate();
        assert_eq!(c.w(), 1.0);
        assert_eq!(c.x(), -2.0);

        let prod = q * q.inverse();
        assert!(close(prod.w(), 1.0));
        assert!(close(prod.x(), 0.0));
        assert!(close(prod.y(), 0.0));
        assert!(close(prod.z(), 0.0));
    }

    #[test]
    fn norm_and_normalize() {
        let q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
        assert!(close(q.norm(), 5.0));
        let u = q.normalize();
        assert!(close(u.as_quaternion().norm(), 1.0));
    }

    #[test]
    fn axis_angle_quarter_turn_about_z() {
        let q = UnitQuaternion::from_axis_angle(&UnitVector::axis(2), Angle::from_degrees(90.0));
        let v = q.rotate(&Vector::from_array([1.0, 0.0, 0.0]));
        assert!(close(v[0], 0.0));
        assert!(close(v[1], 1.0));
        assert!(close(v[2], 0.0));
    }

    #[test]
    fn rotate_matches_rotation_matrix() {
        let axis = UnitVector::new(Vector::from_array([1.0_f64, 1.0, 1.0]));
        let q = UnitQuaternion::from_axis_angle(&axis, Angle::from_degrees(72.0));
        let v = Vector::from_array([0.3, -1.2, 2.0]);
        let by_quat = q.rotate(&v);
        let by_matrix = q.to_rotation_matrix().mul_vector(&v);
        assert!((by_quat - by_matrix).norm() < 1e-12);
    }

    #[test]
    fn rotation_matrix_is_orthonormal() {
        let axis = UnitVector::new(Vector::from_array([2.0_f64, -1.0, 0.5]));
        let r = UnitQuaternion::from_axis_angle(&axis, Angle::from_degrees(33.0)).to_rotation_matrix();
        assert!((r * r.transpose()).close_to(&SqMatrix::identity(), 1e-12));
    }

    #[test]
    fn to_axis_angle_roundtrip() {
        let axis = UnitVector::new(Vector::from_array([1.0, 2.0, 2.0]));
        let angle = Angle::from_degrees(50.0);
        let q = UnitQuaternion::from_axis_angle(&axis, angle);
        let (a2, ang2) = q.to_axis_angle();
        assert!((a2.as_vector() - axis.as_vector()).norm() < 1e-12);
        assert!(close(ang2.radians(), angle.radians()));
    }

    #[test]
    fn to_axis_angle_identity() {
        let (_, ang) = UnitQuaternion::<f64>::identity().to_axis_angle();
        assert!(close(ang.radians(), 0.0));
    }

    #[test]
    fn composition_applies_right_factor_first() {
        let rz = UnitQuaternion::from_axis_angle(&UnitVector::axis(2), Angle::from_degrees(90.0));
        let rx = UnitQuaternion::from_axis_angle(&UnitVector::axis(0), Angle::from_degrees(90.0));
        // rx then rz: +y → +z (rx), then +z stays on +z (rz)
        let v = (rz * rx).rotate(&Vector::from_array([0.0, 1.0, 0.0]));
        assert!(close(v[2], 1.0));
    }

    #[test]
    fn inverse_undoes_rotation() {
        let axis = UnitVector::new(Vector::from_array([0.0_f64, 1.0, 3.0]));
        let q = UnitQuaternion::from_axis_angle(&axis, Angle::from_degrees(118.0));
        let v = Vector::from_array([1.0, 2.0, 3.0]);
        let back = q.inverse().rotate(&q.rotate(&v));
        assert!((back - v).norm() < 1e-12);
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let a = UnitQuaternion::<f64>::identity();
        let b = UnitQuaternion::from_axis_angle(&UnitVector::axis(2), Angle::from_degrees(90.0));

        let (_, start) = a.slerp(&b, 0.0).to_axis_angle();
        assert!(close(start.radians(), 0.0));

        let (_, end) = a.slerp(&b, 1.0).to_axis_angle();
        assert!(close(end.degrees(), 90.0));

        let (_, mid) = a.slerp(&b, 0.5).to_axis_angle();
        assert!(close(mid.degrees(), 45.0));
    }

    #[test]
    fn unit_scaling_is_a_no_op() {
        let q = UnitQuaternion::from_axis_angle(&UnitVector::axis(1), Angle::from_degrees(30.0_f64));
        assert_eq!(q * 5.0, q);
        assert_eq!(q / 0.0, q);
    }
}
