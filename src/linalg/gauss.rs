use crate::matrix::SqMatrix;
use crate::traits::FloatScalar;
use crate::vector::Vector;

/// LU decomposition with row-scaled partial pivoting.
///
/// The pivot chosen in each column maximizes `|a[i][j]| / rowmax[i]`, where
/// `rowmax[i]` is the largest absolute element of the original row. Scaling
/// the comparison keeps a row of large entries from winning the pivot on
/// magnitude alone.
///
/// The factorization never fails. A pivot that comes out exactly zero is
/// replaced by [`SINGULAR_PIVOT_SUBSTITUTE`](crate::SINGULAR_PIVOT_SUBSTITUTE)
/// and [`near_singular`](PivotedLu::near_singular) is set; solves against a
/// patched factorization produce large but finite garbage rather than NaN.
///
/// ```
/// use geomat::{Matrix, Vector};
///
/// let a = Matrix::new([[2.0_f64, 1.0], [1.0, 3.0]]);
/// let lu = a.lu();
/// assert!(!lu.near_singular());
/// let x = lu.solve(&Vector::from_array([5.0, 10.0]));
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PivotedLu<T, const N: usize> {
    /// Combined factors: strict lower triangle holds L (unit diagonal
    /// implied), upper triangle holds U.
    lu: SqMatrix<T, N>,
    /// Row interchange record: at step `i`, row `i` was swapped with
    /// `perm[i]`.
    perm: [usize; N],
    /// Whether the permutation is even (determinant sign).
    even: bool,
    near_singular: bool,
}

impl<T: FloatScalar, const N: usize> PivotedLu<T, N> {
    /// Factor `a`. Always succeeds; check [`near_singular`](Self::near_singular).
    pub fn new(a: &SqMatrix<T, N>) -> Self {
        let tiny = T::from(crate::SINGULAR_PIVOT_SUBSTITUTE).unwrap();
        let mut lu = *a;
        let mut perm = [0usize; N];
        let mut even = true;
        let mut near_singular = false;

        // Implicit scaling: one over the largest |element| of each row.
        let mut inv_scale = [T::one(); N];
        for i in 0..N {
            let mut big = T::zero();
            for j in 0..N {
                let v = lu.rows[i][j].abs();
                if v > big {
                    big = v;
                }
            }
            if big == T::zero() {
                // All-zero row: pivoting cannot help, the zero pivot will
                // be patched below.
                near_singular = true;
            } else {
                inv_scale[i] = T::one() / big;
            }
        }

        for j in 0..N {
            // Upper part of column j
            for i in 0..j {
                let mut sum = lu.rows[i][j];
                for k in 0..i {
                    sum = sum - lu.rows[i][k] * lu.rows[k][j];
                }
                lu.rows[i][j] = sum;
            }

            // Lower part, tracking the best scaled pivot
            let mut big = T::zero();
            let mut imax = j;
            for i in j..N {
                let mut sum = lu.rows[i][j];
                for k in 0..j {
                    sum = sum - lu.rows[i][k] * lu.rows[k][j];
                }
                lu.rows[i][j] = sum;
                let weighted = inv_scale[i] * sum.abs();
                if weighted >= big {
                    big = weighted;
                    imax = i;
                }
            }

            if imax != j {
                lu.rows.swap(j, imax);
                inv_scale.swap(j, imax);
                even = !even;
            }
            perm[j] = imax;

            if lu.rows[j][j] == T::zero() {
                lu.rows[j][j] = tiny;
                near_singular = true;
            } else if lu.rows[j][j].abs() < tiny {
                // Pivot survives untouched, but the factorization is not
                // trustworthy at this magnitude
                near_singular = true;
            }

            if j + 1 < N {
                let inv_pivot = T::one() / lu.rows[j][j];
                for i in (j + 1)..N {
                    lu.rows[i][j] = lu.rows[i][j] * inv_pivot;
                }
            }
        }

        Self {
            lu,
            perm,
            even,
            near_singular,
        }
    }

    /// Whether a zero pivot was patched during factorization. Results from
    /// `solve`/`inverse`/`det` are unreliable when this is set.
    #[inline]
    pub fn near_singular(&self) -> bool {
        self.near_singular
    }

    /// Solve `Ax = b` by forward then back substitution.
    pub fn solve(&self, b: &Vector<T, N>) -> Vector<T, N> {
        let mut x = *b;

        // Forward substitution, unscrambling the row interchanges on the fly
        for i in 0..N {
            let ip = self.perm[i];
            let mut sum = x[ip];
            x[ip] = x[i];
            for k in 0..i {
                sum = sum - self.lu.rows[i][k] * x[k];
            }
            x[i] = sum;
        }

        // Back substitution
        for i in (0..N).rev() {
            let mut sum = x[i];
            for k in (i + 1)..N {
                sum = sum - self.lu.rows[i][k] * x[k];
            }
            x[i] = sum / self.lu.rows[i][i];
        }

        x
    }

    /// Inverse assembled column by column: each column is the solve of the
    /// corresponding unit basis vector.
    pub fn inverse(&self) -> SqMatrix<T, N> {
        let mut out = SqMatrix::zeros();
        for j in 0..N {
            let col = self.solve(&Vector::axis(j));
            out.set_col(j, &col);
        }
        out
    }

    /// Determinant: signed product of the U diagonal.
    pub fn det(&self) -> T {
        let mut d = if self.even {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..N {
            d = d * self.lu.rows[i][i];
        }
        d
    }
}
