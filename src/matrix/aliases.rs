//! Short names for the common small sizes.

use super::{Matrix, SqMatrix};

pub type Matrix2<T> = SqMatrix<T, 2>;
pub type Matrix3<T> = SqMatrix<T, 3>;
pub type Matrix4<T> = SqMatrix<T, 4>;

pub type Matrix2x3<T> = Matrix<T, 2, 3>;
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
