use crate::matrix::SqMatrix;
use crate::traits::FloatScalar;
use crate::vector::Vector;

/// Residual norm below which an orthogonalized candidate is considered
/// linearly dependent on the rows already in the basis.
fn degenerate_tol<T: FloatScalar>() -> T {
    T::from(crate::POSITION_TOLERANCE).unwrap()
}

/// Orthonormal basis with `u` (normalized) as its first row.
///
/// The remaining rows are Gram–Schmidt-orthogonalized coordinate axes. The
/// axis aligned with `u`'s largest-magnitude component is skipped: it is
/// the one most nearly parallel to `u`, so excluding it keeps the
/// orthogonalization residuals well away from zero.
///
/// ```
/// use geomat::{SqMatrix, Vector};
///
/// let u = Vector::from_array([0.0_f64, 3.0, 0.0]);
/// let b = SqMatrix::basis_from_vector(&u);
/// assert!((b * b.transpose()).close_to(&SqMatrix::identity(), 1e-12));
/// assert!((b[(0, 1)] - 1.0).abs() < 1e-12);
/// ```
pub fn basis_from_vector<T: FloatScalar, const N: usize>(u: &Vector<T, N>) -> SqMatrix<T, N> {
    orthonormalize(&[*u])
}

/// Orthonormal basis spanning `u` and `v` in its first two rows.
///
/// Row 0 is `u` normalized; row 1 is `v` with its `u` component removed,
/// normalized. Coordinate axes fill the rest, skipping the axes aligned
/// with each seed's largest-magnitude component.
///
/// Panics if `u` and `v` are parallel (or either is zero).
pub fn basis_from_pair<T: FloatScalar, const N: usize>(
    u: &Vector<T, N>,
    v: &Vector<T, N>,
) -> SqMatrix<T, N> {
    orthonormalize(&[*u, *v])
}

/// Gram–Schmidt completion of `seeds` to a full orthonormal basis.
///
/// Seeds must be linearly independent; the axis-aligned fill candidates are
/// consumed in index order until the basis has `N` rows. Candidates whose
/// orthogonalized residual is degenerate are dropped, and the skipped axes
/// are revisited last as a fallback so the basis always completes.
fn orthonormalize<T: FloatScalar, const N: usize>(seeds: &[Vector<T, N>]) -> SqMatrix<T, N> {
    let tol = degenerate_tol::<T>();
    let mut basis = SqMatrix::zeros();
    let mut count = 0;

    let mut skip = [false; N];
    for s in seeds {
        skip[s.largest_axis()] = true;
    }

    for s in seeds {
        let w = orthogonalize(&basis, count, s);
        let n = w.norm();
        assert!(n > tol, "basis seeds are linearly dependent");
        basis.set_row(count, &(w / n));
        count += 1;
    }

    for pass in 0..2 {
        for k in 0..N {
            if count == N {
                return basis;
            }
            // First pass takes the non-skipped axes, second sweeps the rest
            if skip[k] != (pass == 1) {
                continue;
            }
            let w = orthogonalize(&basis, count, &Vector::axis(k));
            let n = w.norm();
            if n > tol {
                basis.set_row(count, &(w / n));
                count += 1;
            }
        }
    }

    basis
}

/// Remove from `v` its projection onto the first `count` rows of `basis`.
fn orthogonalize<T: FloatScalar, const N: usize>(
    basis: &SqMatrix<T, N>,
    count: usize,
    v: &Vector<T, N>,
) -> Vector<T, N> {
    let mut w = *v;
    for r in 0..count {
        let row = basis.row(r);
        w = w - row * row.dot(&w);
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_orthonormal<const N: usize>(b: &SqMatrix<f64, N>) -> bool {
        (*b * b.transpose()).close_to(&SqMatrix::identity(), 1e-12)
    }

    #[test]
    fn basis_from_axis_vector() {
        let b = basis_from_vector(&Vector::from_array([2.0, 0.0, 0.0]));
        assert!(is_orthonormal(&b));
        assert!((b[(0, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn basis_from_general_vector() {
        let b = basis_from_vector(&Vector::from_array([1.0, 2.0, -3.0]));
        assert!(is_orthonormal(&b));
        // Row 0 is the seed, normalized
        let u = Vector::from_array([1.0, 2.0, -3.0]).normalize();
        assert!((b.row(0) - u).norm() < 1e-12);
    }

    #[test]
    fn skip_rule_drops_dominant_axis() {
        // Largest component is index 1, so axes 0 and 2 fill the basis
        let b = basis_from_vector(&Vector::from_array([0.1, 5.0, 0.2]));
        assert!(is_orthonormal(&b));
        // Row 1 comes from e0 orthogonalized, so its largest entry is at 0
        assert!(b.row(1)[0].abs() > b.row(1)[1].abs());
        assert!(b.row(1)[0].abs() > b.row(1)[2].abs());
    }

    #[test]
    fn basis_from_pair_spans_seeds() {
        let u = Vector::from_array([1.0, 1.0, 0.0]);
        let v = Vector::from_array([0.0, 1.0, 1.0]);
        let b = basis_from_pair(&u, &v);
        assert!(is_orthonormal(&b));
        // u and v lie in the span of rows 0 and 1: projecting onto row 2
        // gives zero
        assert!(b.row(2).dot(&u).abs() < 1e-12);
        assert!(b.row(2).dot(&v).abs() < 1e-12);
    }

    #[test]
    fn basis_from_pair_first_row_is_u() {
        let u = Vector::from_array([3.0_f64, 0.0, 4.0]);
        let v = Vector::from_array([1.0, 1.0, 0.0]);
        let b = basis_from_pair(&u, &v);
        assert!((b.row(0) - u.normalize()).norm() < 1e-12);
        // Row 1 is orthogonal to row 0 but still in span(u, v)
        assert!(b.row(0).dot(&b.row(1)).abs() < 1e-12);
    }

    #[test]
    fn four_dimensional_basis() {
        let b = basis_from_vector(&Vector::from_array([1.0, -1.0, 2.0, 0.5]));
        assert!(is_orthonormal(&b));
    }

    #[test]
    fn seeds_sharing_dominant_axis() {
        // Both seeds peak at index 0; only that axis is skipped and the
        // basis still completes
        let u = Vector::from_array([5.0, 1.0, 0.0]);
        let v = Vector::from_array([4.0, 0.0, 1.0]);
        let b = basis_from_pair(&u, &v);
        assert!(is_orthonormal(&b));
    }

    #[test]
    #[should_panic]
    fn parallel_seeds_panic() {
        let u = Vector::from_array([1.0, 2.0, 3.0]);
        let v = Vector::from_array([2.0, 4.0, 6.0]);
        let _ = basis_from_pair(&u, &v);
    }
}
