use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::kernel;
use crate::traits::Scalar;
use crate::vector::Vector;
use crate::Matrix;

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..M {
            kernel::add(&mut out.rows[i], &rhs.rows[i]);
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..M {
            kernel::sub(&mut out.rows[i], &rhs.rows[i]);
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..M {
            kernel::add(&mut self.rows[i], &rhs.rows[i]);
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..M {
            kernel::sub(&mut self.rows[i], &rhs.rows[i]);
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign<&Matrix<T, M, N>> for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: &Matrix<T, M, N>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign<&Matrix<T, M, N>> for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: &Matrix<T, M, N>) {
        self.sub_assign(*rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        for i in 0..M {
            kernel::neg(&mut out.rows[i]);
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Neg for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn neg(self) -> Matrix<T, M, N> {
        (*self).neg()
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        kernel::strided::mat_mul::<T, M, N, P>(out.as_mut_slice(), self.as_slice(), rhs.as_slice());
        out
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Matrix-vector product `A · v`.
    ///
    /// Each output component is a dense dot of one row against `v`.
    pub fn mul_vector(&self, v: &Vector<T, N>) -> Vector<T, M> {
        let mut out = Vector::<T, M>::zeros();
        for i in 0..M {
            out[i] = kernel::dot(&self.rows[i], v.as_array());
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<Vector<T, N>> for Matrix<T, M, N> {
    type Output = Vector<T, M>;

    #[inline]
    fn mul(self, rhs: Vector<T, N>) -> Vector<T, M> {
        self.mul_vector(&rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<&Vector<T, N>> for &Matrix<T, M, N> {
    type Output = Vector<T, M>;

    #[inline]
    fn mul(self, rhs: &Vector<T, N>) -> Vector<T, M> {
        self.mul_vector(rhs)
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            kernel::scale(&mut out.rows[i], rhs);
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Div<T> for Matrix<T, M, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out.rows[i][j] = out.rows[i][j] / rhs;
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        for i in 0..M {
            kernel::scale(&mut self.rows[i], rhs);
        }
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const M: usize, const N: usize> $Op<Matrix<T, M, N>>
            for &Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: Matrix<T, M, N>) -> Matrix<T, M, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for &Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        (*self).mul(*rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;
    fn mul(self, rhs: T) -> Matrix<T, M, N> {
        (*self).mul(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    rhs * self
                }
            }

            impl<const M: usize, const N: usize> Mul<&Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: &Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
