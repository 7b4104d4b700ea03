//! Dimension-unrolled element kernels.
//!
//! Every operation here is parameterized by a const-generic dimension `N`,
//! so loop bounds are known at compile time and the compiler emits
//! straight-line code for the small dimensions (2–4) this crate targets.
//! The dense layer works on `[T; N]` buffers; [`strided`] runs the same
//! algorithms over vectors embedded in a larger backing buffer (matrix
//! rows, columns, diagonals) without copying.
//!
//! These are pure functions: no dimension checks, no side effects beyond
//! the output buffer. Bounds safety is the caller's responsibility.

pub mod strided;

use crate::traits::{FloatScalar, Scalar};

/// Fill a buffer with a single value.
#[inline(always)]
pub fn assign<T: Scalar, const N: usize>(out: &mut [T; N], value: T) {
    for i in 0..N {
        out[i] = value;
    }
}

/// Copy `src` into `out`.
#[inline(always)]
pub fn copy<T: Scalar, const N: usize>(out: &mut [T; N], src: &[T; N]) {
    for i in 0..N {
        out[i] = src[i];
    }
}

/// Negate in place.
#[inline(always)]
pub fn neg<T: Scalar, const N: usize>(out: &mut [T; N]) {
    for i in 0..N {
        out[i] = T::zero() - out[i];
    }
}

/// Scale in place by a scalar.
#[inline(always)]
pub fn scale<T: Scalar, const N: usize>(out: &mut [T; N], factor: T) {
    for i in 0..N {
        out[i] = out[i] * factor;
    }
}

/// Element-wise accumulate: `out[i] += rhs[i]`.
#[inline(always)]
pub fn add<T: Scalar, const N: usize>(out: &mut [T; N], rhs: &[T; N]) {
    for i in 0..N {
        out[i] = out[i] + rhs[i];
    }
}

/// Element-wise subtract: `out[i] -= rhs[i]`.
#[inline(always)]
pub fn sub<T: Scalar, const N: usize>(out: &mut [T; N], rhs: &[T; N]) {
    for i in 0..N {
        out[i] = out[i] - rhs[i];
    }
}

/// Element-wise (Hadamard) multiply: `out[i] *= rhs[i]`.
#[inline(always)]
pub fn mul_elem<T: Scalar, const N: usize>(out: &mut [T; N], rhs: &[T; N]) {
    for i in 0..N {
        out[i] = out[i] * rhs[i];
    }
}

/// Dot product of two dense buffers.
#[inline(always)]
pub fn dot<T: Scalar, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        sum = sum + a[i] * b[i];
    }
    sum
}

/// Decomposition step: `out[i] -= rhs[i] * factor`.
///
/// This is the projection-removal step of Gram–Schmidt
/// (`v -= u * (v·u)` for unit `u`).
#[inline(always)]
pub fn sub_scaled<T: Scalar, const N: usize>(out: &mut [T; N], rhs: &[T; N], factor: T) {
    for i in 0..N {
        out[i] = out[i] - rhs[i] * factor;
    }
}

/// In-plane rotation of two lanes, element by element:
/// `(a, b) -> (a·cos − b·sin, a·sin + b·cos)`.
#[inline(always)]
pub fn rotate_pair<T: FloatScalar, const N: usize>(
    a: &mut [T; N],
    b: &mut [T; N],
    sin: T,
    cos: T,
) {
    for i in 0..N {
        let x = a[i];
        let y = b[i];
        a[i] = x * cos - y * sin;
        b[i] = x * sin + y * cos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(dot::<f64, 3>(&a, &b), 32.0);
    }

    #[test]
    fn dot_commutes() {
        let a = [1.5, -2.0, 0.25, 7.0];
        let b = [3.0, 0.5, -1.0, 2.0];
        assert_eq!(dot::<f64, 4>(&a, &b), dot::<f64, 4>(&b, &a));
    }

    #[test]
    fn assign_and_copy() {
        let mut buf = [0.0; 3];
        assign(&mut buf, 7.0);
        assert_eq!(buf, [7.0, 7.0, 7.0]);

        let src = [1.0, 2.0, 3.0];
        copy(&mut buf, &src);
        assert_eq!(buf, src);
    }

    #[test]
    fn neg_scale() {
        let mut buf = [1.0, -2.0, 3.0];
        neg(&mut buf);
        assert_eq!(buf, [-1.0, 2.0, -3.0]);
        scale(&mut buf, 2.0);
        assert_eq!(buf, [-2.0, 4.0, -6.0]);
    }

    #[test]
    fn elementwise() {
        let mut a = [1.0, 2.0, 3.0];
        add(&mut a, &[4.0, 5.0, 6.0]);
        assert_eq!(a, [5.0, 7.0, 9.0]);
        sub(&mut a, &[1.0, 1.0, 1.0]);
        assert_eq!(a, [4.0, 6.0, 8.0]);
        mul_elem(&mut a, &[2.0, 0.5, 1.0]);
        assert_eq!(a, [8.0, 3.0, 8.0]);
    }

    #[test]
    fn sub_scaled_projection() {
        // v -= u * (v·u) with unit u leaves v orthogonal to u
        let u = [1.0, 0.0, 0.0];
        let mut v = [3.0, 4.0, 5.0];
        let f = dot::<f64, 3>(&v, &u);
        sub_scaled(&mut v, &u, f);
        assert_eq!(dot::<f64, 3>(&v, &u), 0.0);
    }

    #[test]
    fn rotate_pair_quarter_turn() {
        let mut a = [1.0_f64, 0.0];
        let mut b = [0.0, 1.0];
        rotate_pair(&mut a, &mut b, 1.0, 0.0); // 90°
        assert!((a[0]).abs() < 1e-12);
        assert!((b[0] - 1.0).abs() < 1e-12);
        assert!((a[1] + 1.0).abs() < 1e-12);
        assert!((b[1]).abs() < 1e-12);
    }
}
