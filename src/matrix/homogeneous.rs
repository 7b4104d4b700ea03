use core::ops::Mul;

use crate::angle::Angle;
use crate::matrix::square::SqMatrix;
use crate::point::Point;
use crate::quaternion::UnitQuaternion;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::{UnitVector, Vector};

/// Homogeneous transform in `N`-dimensional space.
///
/// Physically an `(N+1)×(N+1)` square matrix: top-left `N×N` block is the
/// linear part (rotation/scale), top-right column the translation, bottom
/// row `(0,…,0,1)` by construction. Both dimensions are carried as const
/// parameters because `H = N + 1` cannot yet be computed in the type; the
/// relation is checked at compile time when any constructor is
/// instantiated, and the [`HqMatrix2`]/[`HqMatrix3`] aliases pin the valid
/// pairs.
///
/// Composition order is the core contract:
/// [`rotate`](HqMatrix::rotate)/[`translate`](HqMatrix::translate) compose
/// in the local (object) frame (`self = self · M`), while the `_global`
/// variants compose in the world frame (`self = M · self`). Swapping them
/// produces a wrong transform with no error signal.
///
/// ```
/// use geomat::{HqMatrix3, Point, Vector};
///
/// let mut t = HqMatrix3::identity();
/// t.translate(&Vector::from_array([1.0_f64, 0.0, 0.0]));
/// t.translate(&Vector::from_array([2.0, 0.0, 0.0]));
/// let p = t.transform_point(&Point::origin());
/// assert!((p[0] - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HqMatrix<T, const N: usize, const H: usize> {
    m: SqMatrix<T, H>,
}

/// Homogeneous transform in the plane (3×3 matrix).
pub type HqMatrix2<T> = HqMatrix<T, 2, 3>;
/// Homogeneous transform in 3-D space (4×4 matrix).
pub type HqMatrix3<T> = HqMatrix<T, 3, 4>;

impl<T: Scalar, const N: usize, const H: usize> HqMatrix<T, N, H> {
    const DIMS_OK: () = assert!(H == N + 1, "HqMatrix requires H == N + 1");

    /// The identity transform.
    pub fn identity() -> Self {
        let () = Self::DIMS_OK;
        Self {
            m: SqMatrix::identity(),
        }
    }

    /// Embed an `N×N` linear block; translation is zero.
    pub fn from_linear(r: &SqMatrix<T, N>) -> Self {
        let mut out = Self::identity();
        for i in 0..N {
            for j in 0..N {
                out.m.rows[i][j] = r.rows[i][j];
            }
        }
        out
    }

    /// Pure translation.
    pub fn from_translation(t: &Vector<T, N>) -> Self {
        let mut out = Self::identity();
        for i in 0..N {
            out.m.rows[i][N] = t[i];
        }
        out
    }

    /// Linear block plus translation.
    pub fn from_parts(r: &SqMatrix<T, N>, t: &Vector<T, N>) -> Self {
        let mut out = Self::from_linear(r);
        out.set_translation(t);
        out
    }

    /// The linear (rotation/scale) block.
    pub fn linear(&self) -> SqMatrix<T, N> {
        SqMatrix::from_fn(|i, j| self.m.rows[i][j])
    }

    /// The translation column.
    pub fn translation(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.m.rows[i][N])
    }

    /// Overwrite the translation column.
    pub fn set_translation(&mut self, t: &Vector<T, N>) {
        for i in 0..N {
            self.m.rows[i][N] = t[i];
        }
    }

    /// The full `(N+1)×(N+1)` matrix, usable wherever a square matrix is.
    #[inline]
    pub fn as_matrix(&self) -> &SqMatrix<T, H> {
        &self.m
    }

    /// Consume into the full square matrix.
    #[inline]
    pub fn into_matrix(self) -> SqMatrix<T, H> {
        self.m
    }

    /// Apply to a point: `R·p + t`.
    pub fn transform_point(&self, p: &Point<T, N>) -> Point<T, N> {
        Point::from_fn(|i| {
            let mut sum = self.m.rows[i][N];
            for j in 0..N {
                sum = sum + self.m.rows[i][j] * p[j];
            }
            sum
        })
    }

    /// Apply to a displacement: `R·v` (translation does not act on vectors).
    pub fn transform_vector(&self, v: &Vector<T, N>) -> Vector<T, N> {
        Vector::from_fn(|i| {
            let mut sum = T::zero();
            for j in 0..N {
                sum = sum + self.m.rows[i][j] * v[j];
            }
            sum
        })
    }

    /// Compose a rotation in the local (object) frame: `self = self · R`.
    pub fn rotate(&mut self, r: &SqMatrix<T, N>) {
        self.m = self.m * Self::from_linear(r).m;
    }

    /// Compose a translation in the local (object) frame: `self = self · T`.
    pub fn translate(&mut self, d: &Vector<T, N>) {
        self.m = self.m * Self::from_translation(d).m;
    }

    /// Compose a rotation in the world frame: `self = R · self`.
    pub fn rotate_global(&mut self, r: &SqMatrix<T, N>) {
        self.m.mul_left_in_place(&Self::from_linear(r).m);
    }

    /// Compose a translation in the world frame: `self = T · self`.
    pub fn translate_global(&mut self, d: &Vector<T, N>) {
        self.m.mul_left_in_place(&Self::from_translation(d).m);
    }
}

impl<T: FloatScalar, const N: usize, const H: usize> HqMatrix<T, N, H> {
    /// Rotation by `angle` in the plane of spatial axes `i` and `j`, no
    /// translation.
    ///
    /// Panics if either index reaches the homogeneous row (`i >= N` or
    /// `j >= N`), which would break the bottom-row invariant.
    pub fn rotation_in_plane(i: usize, j: usize, angle: Angle<T>) -> Self {
        assert!(i < N && j < N, "rotation plane must use spatial axes");
        let () = Self::DIMS_OK;
        Self {
            m: SqMatrix::rotation_in_plane(i, j, angle),
        }
    }

    /// Rotation by `angle` in the plane spanned by `u` and `v`.
    pub fn rotation_in_plane_spanned(u: &Vector<T, N>, v: &Vector<T, N>, angle: Angle<T>) -> Self {
        Self::from_linear(&SqMatrix::rotation_in_plane_spanned(u, v, angle))
    }

    /// General inverse via LU with row-scaled partial pivoting.
    ///
    /// Never fails; a singular linear block silently degrades (see
    /// [`SqMatrix::inverse`]). The bottom row is re-pinned to `(0,…,0,1)`.
    pub fn inverse(&self) -> Self {
        let mut m = self.m.inverse();
        for j in 0..N {
            m.rows[N][j] = T::zero();
        }
        m.rows[N][N] = T::one();
        Self { m }
    }

    /// Fast inverse when the linear block is orthonormal (pure rotation
    /// plus translation): `Rᵀ` block with translation `−Rᵀ·t`.
    ///
    /// Precondition (unchecked): the linear block is orthonormal. Anything
    /// else silently yields a wrong answer.
    pub fn inverse_orthonormal(&self) -> Self {
        let rt = self.linear().transpose();
        let t = self.translation();
        let new_t = -(rt.mul_vector(&t));
        Self::from_parts(&rt, &new_t)
    }
}

impl<T: FloatScalar> HqMatrix3<T> {
    /// Rotation about `axis` by `angle` (right-hand rule), no translation.
    pub fn from_axis_angle(axis: &UnitVector<T, 3>, angle: Angle<T>) -> Self {
        Self::from_quaternion(&UnitQuaternion::from_axis_angle(axis, angle))
    }

    /// Rotation from a unit quaternion, no translation.
    pub fn from_quaternion(q: &UnitQuaternion<T>) -> Self {
        Self::from_linear(&q.to_rotation_matrix())
    }
}

// Composition: `a * b` applies `b` first, then `a`.
impl<T: Scalar, const N: usize, const H: usize> Mul for HqMatrix<T, N, H> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self { m: self.m * rhs.m }
    }
}

impl<T: Scalar, const N: usize, const H: usize> Mul<&HqMatrix<T, N, H>> for &HqMatrix<T, N, H> {
    type Output = HqMatrix<T, N, H>;

    fn mul(self, rhs: &HqMatrix<T, N, H>) -> HqMatrix<T, N, H> {
        (*self).mul(*rhs)
    }
}
