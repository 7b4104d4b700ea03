//! # geomat
//!
//! Fixed-dimension geometric primitives and the small dense linear algebra
//! they need: points, vectors, matrices, rotations, and affine transforms
//! with dimensions fixed at compile time via const generics.
//!
//! Everything is stack-allocated and `Copy`; the crate is `no_std`
//! compatible and never allocates. Dimensions are type parameters, so
//! mixing a 2-D point with a 3-D transform is a compile error rather than
//! a runtime check.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`point`] | [`Point`], positions with tolerance equality |
//! | [`vector`] | [`Vector`], [`UnitVector`], displacements and directions |
//! | [`order`] | [`PointOrder`], explicit point sort strategies |
//! | [`angle`] | [`Angle`], radians/degrees with period folding |
//! | [`matrix`] | [`Matrix`], [`SqMatrix`], [`HqMatrix`] affine transforms |
//! | [`linalg`] | [`PivotedLu`] factorization, orthonormal basis building |
//! | [`quaternion`] | [`Quaternion`], [`UnitQuaternion`] 3-D rotations |
//! | [`subspace`] | [`SubSpace`], [`Simplex`] affine subsets |
//! | [`serial`] | [`SepConfig`] separator-configurable text format |
//! | [`kernel`] | dimension-unrolled element loops behind everything |
//!
//! ## Example
//!
//! ```
//! use geomat::{Angle, HqMatrix3, Point, UnitVector, Vector};
//!
//! // Rotate 90° about z, then step along the rotated x axis
//! let mut t = HqMatrix3::from_axis_angle(&UnitVector::axis(2), Angle::from_degrees(90.0_f64));
//! t.translate(&Vector::from_array([1.0, 0.0, 0.0]));
//!
//! let p = t.transform_point(&Point::origin());
//! assert!(p[0].abs() < 1e-12);
//! assert!((p[1] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | yes | Use the standard library's float intrinsics |
//! | `libm` | no | Pure-Rust float math for `no_std` targets |
//!
//! One of `std` or `libm` must be enabled for the floating-point surface.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod angle;
pub mod kernel;
pub mod linalg;
pub mod matrix;
pub mod order;
pub mod point;
pub mod quaternion;
pub mod serial;
pub mod subspace;
pub mod traits;
pub mod vector;

pub use angle::Angle;
pub use linalg::PivotedLu;
pub use matrix::{
    HqMatrix, HqMatrix2, HqMatrix3, Matrix, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4,
    Matrix4, Matrix4x3, SqMatrix,
};
pub use order::PointOrder;
pub use point::{Point, Point2, Point3, Point4};
pub use quaternion::{Quaternion, UnitQuaternion};
pub use serial::{ParseError, SepConfig};
pub use subspace::{Line, Plane, Segment, Simplex, SubSpace, Tetrahedron, Triangle};
pub use traits::{FloatScalar, Scalar};
pub use vector::{UnitVector, Vector, Vector2, Vector3, Vector4};

/// Distance below which two points (or vectors) compare equal.
pub const POSITION_TOLERANCE: f64 = 1e-10;

/// Radians below which two angles compare equal.
pub const ANGLE_TOLERANCE: f64 = 1e-10;

/// Replacement for a pivot that comes out exactly zero during LU
/// factorization. Keeps elimination finite; see
/// [`PivotedLu::near_singular`].
pub const SINGULAR_PIVOT_SUBSTITUTE: f64 = 1e-20;
