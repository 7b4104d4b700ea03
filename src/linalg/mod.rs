//! Dense linear-algebra routines backing the matrix types.
//!
//! [`gauss`] holds the LU decomposition with row-scaled partial pivoting
//! used for [`SqMatrix::inverse`](crate::SqMatrix::inverse), `solve`, and
//! `det`. [`ortho`] holds the Gram–Schmidt basis construction used by the
//! spanned-plane rotation constructors.

pub mod gauss;
pub mod ortho;

pub use gauss::PivotedLu;
