use crate::angle::Angle;
use crate::linalg::gauss::PivotedLu;
use crate::linalg::ortho;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;
use crate::Matrix;

/// A square matrix.
///
/// `SqMatrix` is `Matrix<T, N, N>` by alias, so every square matrix can be
/// used wherever a general matrix is expected. The square-only surface adds
/// diagonal access, in-place transpose, basis change, rotation constructors,
/// and the two inversion strategies.
pub type SqMatrix<T, const N: usize> = Matrix<T, N, N>;

impl<T: Scalar, const N: usize> SqMatrix<T, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.rows[i][i];
        }
        sum
    }

    /// Extract the diagonal as a vector.
    pub fn diagonal(&self) -> Vector<T, N> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = self.rows[i][i];
        }
        v
    }

    /// Overwrite the diagonal.
    pub fn set_diagonal(&mut self, v: &Vector<T, N>) {
        for i in 0..N {
            self.rows[i][i] = v[i];
        }
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diagonal(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        m.set_diagonal(v);
        m
    }

    /// Transpose in place by swapping mirrored elements.
    pub fn transpose_in_place(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let tmp = self.rows[i][j];
                self.rows[i][j] = self.rows[j][i];
                self.rows[j][i] = tmp;
            }
        }
    }

    /// Basis change (conjugation): `Xᵀ · A · X`.
    ///
    /// Used when composing rotations expressed in different bases: with `X`
    /// holding the new basis, the result is `A` re-expressed in it.
    pub fn change_basis(&self, x: &Self) -> Self {
        x.transpose() * *self * *x
    }

    /// Multiply on the left, overwriting self: `self = lhs · self`.
    ///
    /// Works column by column through the strided column accessors, so no
    /// full-matrix temporary is needed.
    pub fn mul_left_in_place(&mut self, lhs: &Self) {
        for j in 0..N {
            let col = self.col(j);
            let new_col = lhs.mul_vector(&col);
            self.set_col(j, &new_col);
        }
    }

    /// Check if the matrix is symmetric (A == Aᵀ).
    pub fn is_symmetric(&self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if self.rows[i][j] != self.rows[j][i] {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: FloatScalar, const N: usize> SqMatrix<T, N> {
    /// Rotation by `angle` in the plane of coordinate axes `i` and `j`.
    ///
    /// Rotates axis `i` toward axis `j`; all other axes are fixed.
    pub fn rotation_in_plane(i: usize, j: usize, angle: Angle<T>) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.rows[i][i] = c;
        m.rows[i][j] = T::zero() - s;
        m.rows[j][i] = s;
        m.rows[j][j] = c;
        m
    }

    /// Rotation by `angle` in the plane spanned by `u` and `v`.
    ///
    /// The plane basis comes from [`basis_from_pair`](Self::basis_from_pair),
    /// and the axis-plane rotation is conjugated into it: `Bᵀ · R₀₁ · B`.
    pub fn rotation_in_plane_spanned(u: &Vector<T, N>, v: &Vector<T, N>, angle: Angle<T>) -> Self {
        let b = Self::basis_from_pair(u, v);
        Self::rotation_in_plane(0, 1, angle).change_basis(&b)
    }

    /// Orthonormal basis with `u` (normalized) as its first row.
    ///
    /// See [`linalg::ortho::basis_from_vector`](crate::linalg::ortho::basis_from_vector)
    /// for the construction and its tie-break rule.
    pub fn basis_from_vector(u: &Vector<T, N>) -> Self {
        ortho::basis_from_vector(u)
    }

    /// Orthonormal basis spanning `u` and `v` in its first two rows.
    pub fn basis_from_pair(u: &Vector<T, N>, v: &Vector<T, N>) -> Self {
        ortho::basis_from_pair(u, v)
    }

    /// LU decomposition with row-scaled partial pivoting.
    ///
    /// Always succeeds; inspect [`PivotedLu::near_singular`] to learn whether
    /// a degenerate pivot was patched.
    pub fn lu(&self) -> PivotedLu<T, N> {
        PivotedLu::new(self)
    }

    /// General inverse via LU with row-scaled partial pivoting.
    ///
    /// Never fails: a singular pivot is silently replaced by a tiny constant
    /// and the result degrades accordingly. Use [`lu`](Self::lu) to check
    /// [`PivotedLu::near_singular`] when that matters.
    pub fn inverse(&self) -> Self {
        self.lu().inverse()
    }

    /// Fast inverse for orthonormal matrices: the transpose.
    ///
    /// Precondition (unchecked): the matrix is orthonormal. Calling this on
    /// any other matrix silently returns a wrong answer.
    #[inline]
    pub fn inverse_orthonormal(&self) -> Self {
        self.transpose()
    }

    /// Solve `Ax = b` for `x`.
    pub fn solve(&self, b: &Vector<T, N>) -> Vector<T, N> {
        self.lu().solve(b)
    }

    /// Determinant via the LU factors.
    pub fn det(&self) -> T {
        self.lu().det()
    }
}
