//! Strided kernel variants.
//!
//! Each function reads or writes a logical `N`-vector embedded in a flat
//! backing buffer with an explicit element stride. A matrix column is a
//! strided vector with stride = the row width; a diagonal has stride =
//! width + 1. Callers must guarantee `buf.len() > (N - 1) * stride` for
//! every buffer passed in; there are no dimension checks here.

use crate::traits::{FloatScalar, Scalar};

/// Dot product of two strided vectors.
#[inline(always)]
pub fn dot<T: Scalar, const N: usize>(a: &[T], sa: usize, b: &[T], sb: usize) -> T {
    let mut sum = T::zero();
    for k in 0..N {
        sum = sum + a[k * sa] * b[k * sb];
    }
    sum
}

/// Copy a strided vector into another strided vector.
#[inline(always)]
pub fn copy<T: Scalar, const N: usize>(dst: &mut [T], sd: usize, src: &[T], ss: usize) {
    for k in 0..N {
        dst[k * sd] = src[k * ss];
    }
}

/// Scale a strided vector in place.
#[inline(always)]
pub fn scale<T: Scalar, const N: usize>(buf: &mut [T], stride: usize, factor: T) {
    for k in 0..N {
        buf[k * stride] = buf[k * stride] * factor;
    }
}

/// Decomposition step on a strided destination: `dst[k] -= src[k] * factor`.
#[inline(always)]
pub fn sub_scaled<T: Scalar, const N: usize>(
    dst: &mut [T],
    sd: usize,
    src: &[T],
    ss: usize,
    factor: T,
) {
    for k in 0..N {
        dst[k * sd] = dst[k * sd] - src[k * ss] * factor;
    }
}

/// In-plane rotation of two strided lanes sharing one backing buffer.
///
/// Lane `a` starts at `off_a`, lane `b` at `off_b`, both advancing by
/// `stride`. Rotating rows `i` and `j` of an `N×N` matrix by the same
/// angle is `rotate_pair(buf, i * N, j * N, 1, sin, cos)`.
#[inline(always)]
pub fn rotate_pair<T: FloatScalar, const N: usize>(
    buf: &mut [T],
    off_a: usize,
    off_b: usize,
    stride: usize,
    sin: T,
    cos: T,
) {
    for k in 0..N {
        let x = buf[off_a + k * stride];
        let y = buf[off_b + k * stride];
        buf[off_a + k * stride] = x * cos - y * sin;
        buf[off_b + k * stride] = x * sin + y * cos;
    }
}

/// Matrix product walking the row dimension of `a` and the column
/// dimension of `b`: `out = a · b` with `a` M×N, `b` N×P, all buffers
/// flat row-major.
///
/// Every inner product is a strided [`dot`]: rows of `a` have stride 1,
/// columns of `b` have stride `P`.
#[inline(always)]
pub fn mat_mul<T: Scalar, const M: usize, const N: usize, const P: usize>(
    out: &mut [T],
    a: &[T],
    b: &[T],
) {
    for i in 0..M {
        for j in 0..P {
            out[i * P + j] = dot::<T, N>(&a[i * N..], 1, &b[j..], P);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_dot_via_stride() {
        // 2x3 row-major matrix; column 1 is [2, 5] with stride 3
        let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = [1.0, 1.0];
        let d = dot::<f64, 2>(&m[1..], 3, &v, 1);
        assert_eq!(d, 7.0);
    }

    #[test]
    fn diagonal_via_stride() {
        // 3x3 row-major; diagonal has stride 4
        let m = [1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0];
        let ones = [1.0, 1.0, 1.0];
        let trace = dot::<f64, 3>(&m, 4, &ones, 1);
        assert_eq!(trace, 6.0);
    }

    #[test]
    fn strided_copy_transposes() {
        let src = [1.0, 2.0, 3.0, 4.0]; // 2x2 row-major
        let mut dst = [0.0; 4];
        // Write each source row as a destination column
        copy::<f64, 2>(&mut dst, 2, &src, 1);
        copy::<f64, 2>(&mut dst[1..], 2, &src[2..], 1);
        assert_eq!(dst, [1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn scale_column() {
        let mut m = [1.0, 2.0, 3.0, 4.0]; // 2x2 row-major
        scale::<f64, 2>(&mut m[1..], 2, 10.0);
        assert_eq!(m, [1.0, 20.0, 3.0, 40.0]);
    }

    #[test]
    fn sub_scaled_row_elimination() {
        let mut m = [2.0, 4.0, 1.0, 3.0]; // 2x2 row-major
        // row1 -= row0 * 0.5
        let (r0, r1) = m.split_at_mut(2);
        sub_scaled::<f64, 2>(r1, 1, r0, 1, 0.5);
        assert_eq!(m, [2.0, 4.0, 0.0, 1.0]);
    }

    #[test]
    fn mat_mul_2x2() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let mut out = [0.0; 4];
        mat_mul::<f64, 2, 2, 2>(&mut out, &a, &b);
        assert_eq!(out, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn mat_mul_rectangular() {
        // (2x3) * (3x2) -> (2x2)
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let b = [7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let mut out = [0.0; 4];
        mat_mul::<f64, 2, 3, 2>(&mut out, &a, &b);
        assert_eq!(out, [58.0, 64.0, 139.0, 154.0]);
    }
}
