mod homogeneous;
mod ops;
mod square;

pub mod aliases;

pub use homogeneous::{HqMatrix, HqMatrix2, HqMatrix3};
pub use square::SqMatrix;

use core::ops::{Index, IndexMut};

use crate::kernel;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;

/// Fixed-size matrix with `M` rows and `N` columns.
///
/// Storage is row-major: `M` stacked `N`-dimensional row vectors.
/// Stack-allocated, no-std compatible. Row access is a contiguous copy;
/// column access is synthesized through the strided kernels (stride `N`),
/// so no physical transpose is needed to read columns.
///
/// # Examples
///
/// ```
/// use geomat::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.col(1)[1], 4.0);
///
/// let id: Matrix<f64, 3, 3> = Matrix::identity();
/// assert_eq!(id[(0, 0)], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) rows: [[T; N]; M],
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix from a row-major 2D array.
    #[inline]
    pub fn new(rows: [[T; N]; M]) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        M
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        N
    }

    /// View the entire matrix as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.rows.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.rows.as_flattened_mut()
    }

    /// View row `i` as a slice. Zero-cost — rows are contiguous in memory.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.rows[i]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: core::array::from_fn(|i| core::array::from_fn(|j| f(i, j))),
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            rows: [[T::zero(); N]; M],
        }
    }

    /// Create a matrix with every element set to `value`.
    pub fn fill(value: T) -> Self {
        Self {
            rows: [[value; N]; M],
        }
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `slice.len() != M * N`.
    pub fn from_slice(slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            M * N,
            "slice length {} does not match {}x{} matrix",
            slice.len(),
            M,
            N
        );
        let mut m = Self::zeros();
        m.as_mut_slice().copy_from_slice(slice);
        m
    }

    /// Outer product: `result[i][j] = u[i] * v[j]`.
    pub fn outer(u: &Vector<T, M>, v: &Vector<T, N>) -> Self {
        Self::from_fn(|i, j| u[i] * v[j])
    }

    /// Extract row `i` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, N> {
        Vector::from_array(self.rows[i])
    }

    /// Extract column `j` as a vector, reading with stride `N`.
    pub fn col(&self, j: usize) -> Vector<T, M> {
        let mut out = [T::zero(); M];
        kernel::strided::copy::<T, M>(&mut out, 1, &self.as_slice()[j..], N);
        Vector::from_array(out)
    }

    /// Overwrite row `i`.
    #[inline]
    pub fn set_row(&mut self, i: usize, v: &Vector<T, N>) {
        kernel::copy(&mut self.rows[i], v.as_array());
    }

    /// Overwrite column `j`, writing with stride `N`.
    pub fn set_col(&mut self, j: usize, v: &Vector<T, M>) {
        kernel::strided::copy::<T, M>(&mut self.as_mut_slice()[j..], N, v.as_slice(), 1);
    }

    /// Scale each row by the corresponding entry of `factors`.
    pub fn scale_rows(&self, factors: &Vector<T, M>) -> Self {
        let mut out = *self;
        for i in 0..M {
            kernel::scale(&mut out.rows[i], factors[i]);
        }
        out
    }

    /// Element-wise (Hadamard) product: `c[i][j] = a[i][j] * b[i][j]`.
    pub fn component_mul(&self, rhs: &Self) -> Self {
        let mut out = *self;
        for i in 0..M {
            kernel::mul_elem(&mut out.rows[i], &rhs.rows[i]);
        }
        out
    }

    /// Transpose: (M×N) → (N×M) via per-row strided copy.
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for i in 0..M {
            // source row i (stride 1) becomes destination column i (stride M)
            kernel::strided::copy::<T, N>(
                &mut out.as_mut_slice()[i..],
                M,
                &self.as_slice()[i * N..],
                1,
            );
        }
        out
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.rows[i][i] = T::one();
        }
        m
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Element-wise closeness check against a tolerance.
    pub fn close_to(&self, rhs: &Self, tol: T) -> bool {
        for i in 0..M {
            for j in 0..N {
                if (self.rows[i][j] - rhs.rows[i][j]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

// Index by (row, col) tuple
impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_identity() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z[(0, 0)], 0.0);

        let id: Matrix<f64, 3, 3> = Matrix::identity();
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn new_and_index() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    fn row_major_slice() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    }

    #[test]
    fn from_slice_roundtrip() {
        let m: Matrix<f64, 2, 3> = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
    }

    #[test]
    #[should_panic]
    fn from_slice_wrong_length() {
        let _: Matrix<f64, 2, 2> = Matrix::from_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn row_and_col_extraction() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let r = m.row(1);
        assert_eq!(r.as_slice(), &[4.0, 5.0, 6.0]);

        let c = m.col(1);
        assert_eq!(c.as_slice(), &[2.0, 5.0]);
    }

    #[test]
    fn set_row_and_col() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m.set_row(0, &Vector::from_array([1.0, 2.0]));
        m.set_col(1, &Vector::from_array([7.0, 8.0]));
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 7.0);
        assert_eq!(m[(1, 1)], 8.0);
    }

    #[test]
    fn outer_product() {
        let u = Vector::from_array([1.0, 2.0, 3.0]);
        let v = Vector::from_array([4.0, 5.0]);
        let m = Matrix::outer(&u, &v);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m[(0, 0)], 4.0);
        assert_eq!(m[(2, 1)], 15.0);
    }

    #[test]
    fn scale_rows() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let s = m.scale_rows(&Vector::from_array([2.0, 10.0]));
        assert_eq!(s[(0, 1)], 4.0);
        assert_eq!(s[(1, 0)], 30.0);
    }

    #[test]
    fn component_mul() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
        let c = a.component_mul(&b);
        assert_eq!(c[(0, 0)], 5.0);
        assert_eq!(c[(1, 1)], 32.0);
    }

    #[test]
    fn transpose() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.nrows(), 3);
        assert_eq!(t[(0, 1)], 4.0);
        assert_eq!(t[(2, 0)], 3.0);
    }

    #[test]
    fn double_transpose_is_identity() {
        let a = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn from_fn() {
        let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(m, Matrix::identity());
    }

    #[test]
    fn integer_matrix() {
        let m: Matrix<i32, 2, 2> = Matrix::identity();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], 0);
    }
}
