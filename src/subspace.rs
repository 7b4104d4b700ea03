use crate::point::Point;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;

/// An `M`-dimensional affine subspace of `N`-space: an anchor point plus
/// `M` span vectors.
///
/// The span vectors are stored as given; call
/// [`orthonormalized`](SubSpace::orthonormalized) when parameters should
/// measure arc length along mutually orthogonal directions.
///
/// ```
/// use geomat::{Line, Point, Vector};
///
/// let l = Line::new(Point::from_array([1.0_f64, 0.0]), [Vector::from_array([0.0, 2.0])]);
/// let p = l.point_at([0.5]);
/// assert!((p[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SubSpace<T, const N: usize, const M: usize> {
    anchor: Point<T, N>,
    span: [Vector<T, N>; M],
}

// Inherits the positional tolerance of Point and Vector equality.
impl<T: FloatScalar, const N: usize, const M: usize> PartialEq for SubSpace<T, N, M> {
    fn eq(&self, other: &Self) -> bool {
        self.anchor == other.anchor && self.span == other.span
    }
}

/// A line: one-dimensional subspace.
pub type Line<T, const N: usize> = SubSpace<T, N, 1>;
/// A plane: two-dimensional subspace.
pub type Plane<T, const N: usize> = SubSpace<T, N, 2>;

impl<T: Scalar, const N: usize, const M: usize> SubSpace<T, N, M> {
    pub fn new(anchor: Point<T, N>, span: [Vector<T, N>; M]) -> Self {
        Self { anchor, span }
    }

    #[inline]
    pub fn anchor(&self) -> &Point<T, N> {
        &self.anchor
    }

    #[inline]
    pub fn span(&self) -> &[Vector<T, N>; M] {
        &self.span
    }

    /// The point `anchor + Σ params[k] · span[k]`.
    pub fn point_at(&self, params: [T; M]) -> Point<T, N> {
        let mut p = self.anchor;
        for k in 0..M {
            p = p + self.span[k] * params[k];
        }
        p
    }
}

impl<T: FloatScalar, const N: usize, const M: usize> SubSpace<T, N, M> {
    /// Gram–Schmidt the span into mutually orthogonal unit vectors.
    ///
    /// Panics if the span vectors are linearly dependent.
    pub fn orthonormalized(&self) -> Self {
        let tol = T::from(crate::POSITION_TOLERANCE).unwrap();
        let mut span = self.span;
        for k in 0..M {
            let mut w = span[k];
            for r in 0..k {
                w = w - span[r] * span[r].dot(&w);
            }
            let n = w.norm();
            assert!(n > tol, "span vectors are linearly dependent");
            span[k] = w / n;
        }
        Self {
            anchor: self.anchor,
            span,
        }
    }

    /// Orthogonal projection of `p` onto the subspace.
    ///
    /// Works on the orthonormalized span, so the input span may be any
    /// independent set.
    pub fn project_point(&self, p: &Point<T, N>) -> Point<T, N> {
        let ortho = self.orthonormalized();
        let d = *p - ortho.anchor;
        let mut out = ortho.anchor;
        for k in 0..M {
            out = out + ortho.span[k] * ortho.span[k].dot(&d);
        }
        out
    }

    /// Distance from `p` to the subspace.
    pub fn distance_to(&self, p: &Point<T, N>) -> T {
        self.project_point(p).distance(p)
    }
}

/// A simplex with `V` vertices in `N`-space.
///
/// `V = 2` is a segment, `V = 3` a triangle, `V = 4` a tetrahedron; the
/// aliases pin those. The affine hull of a simplex is a [`SubSpace`] of
/// dimension `V - 1`, available through `to_subspace` on the concrete
/// sizes.
#[derive(Debug, Clone, Copy)]
pub struct Simplex<T, const N: usize, const V: usize> {
    vertices: [Point<T, N>; V],
}

impl<T: FloatScalar, const N: usize, const V: usize> PartialEq for Simplex<T, N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

pub type Segment<T, const N: usize> = Simplex<T, N, 2>;
pub type Triangle<T, const N: usize> = Simplex<T, N, 3>;
pub type Tetrahedron<T, const N: usize> = Simplex<T, N, 4>;

impl<T: Scalar, const N: usize, const V: usize> Simplex<T, N, V> {
    pub fn new(vertices: [Point<T, N>; V]) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> &Point<T, N> {
        &self.vertices[i]
    }

    #[inline]
    pub fn vertices(&self) -> &[Point<T, N>; V] {
        &self.vertices
    }

    /// The displacement from vertex `i` to vertex `j`.
    #[inline]
    pub fn edge(&self, i: usize, j: usize) -> Vector<T, N> {
        self.vertices[j] - self.vertices[i]
    }
}

impl<T: FloatScalar, const N: usize, const V: usize> Simplex<T, N, V> {
    /// The arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point<T, N> {
        let count = T::from(V).unwrap();
        Point::from_fn(|i| {
            let mut sum = T::zero();
            for v in &self.vertices {
                sum = sum + v[i];
            }
            sum / count
        })
    }
}

// The affine hull, with vertex 0 as anchor and the edges out of it as
// span. Concrete impls because V - 1 cannot appear in the return type
// generically.
macro_rules! impl_to_subspace {
    ($($v:literal => $m:literal),*) => {
        $(
            impl<T: Scalar, const N: usize> Simplex<T, N, $v> {
                /// The affine hull of the simplex.
                pub fn to_subspace(&self) -> SubSpace<T, N, $m> {
                    let span = core::array::from_fn(|k| self.edge(0, k + 1));
                    SubSpace::new(self.vertices[0], span)
                }
            }
        )*
    };
}

impl_to_subspace!(2 => 1, 3 => 2, 4 => 3);

impl<T: FloatScalar, const N: usize> Segment<T, N> {
    /// Length of the segment.
    pub fn length(&self) -> T {
        self.edge(0, 1).norm()
    }

    /// The point at parameter `t` along the segment (`0` → first vertex,
    /// `1` → second).
    pub fn point_at(&self, t: T) -> Point<T, N> {
        self.vertices[0] + self.edge(0, 1) * t
    }
}

impl<T: FloatScalar> Triangle<T, 3> {
    /// Area via the cross product of two edges.
    pub fn area(&self) -> T {
        let two = T::one() + T::one();
        self.edge(0, 1).cross(&self.edge(0, 2)).norm() / two
    }

    /// Unit normal by the right-hand rule over the vertex order.
    ///
    /// Panics if the triangle is degenerate.
    pub fn normal(&self) -> crate::vector::UnitVector<T, 3> {
        crate::vector::UnitVector::new(self.edge(0, 1).cross(&self.edge(0, 2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_point_at() {
        let l = Line::new(
            Point::from_array([1.0_f64, 1.0, 0.0]),
            [Vector::from_array([2.0, 0.0, 0.0])],
        );
        let p = l.point_at([1.5]);
        assert!((p[0] - 4.0).abs() < 1e-12);
        assert!((p[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn plane_point_at() {
        let pl = Plane::new(
            Point::origin(),
            [
                Vector::from_array([1.0, 0.0, 0.0]),
                Vector::from_array([0.0, 1.0, 0.0]),
            ],
        );
        let p = pl.point_at([2.0_f64, 3.0]);
        assert!((p[0] - 2.0).abs() < 1e-12);
        assert!((p[1] - 3.0).abs() < 1e-12);
        assert!(p[2].abs() < 1e-12);
    }

    #[test]
    fn orthonormalized_span() {
        let pl = Plane::new(
            Point::origin(),
            [
                Vector::from_array([2.0_f64, 0.0, 0.0]),
                Vector::from_array([1.0, 1.0, 0.0]),
            ],
        );
        let o = pl.orthonormalized();
        let s = o.span();
        assert!((s[0].norm() - 1.0).abs() < 1e-12);
        assert!((s[1].norm() - 1.0).abs() < 1e-12);
        assert!(s[0].dot(&s[1]).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn dependent_span_panics() {
        let pl = Plane::new(
            Point::origin(),
            [
                Vector::from_array([1.0_f64, 0.0, 0.0]),
                Vector::from_array([2.0, 0.0, 0.0]),
            ],
        );
        let _ = pl.orthonormalized();
    }

    #[test]
    fn project_onto_plane() {
        let pl = Plane::new(
            Point::origin(),
            [
                Vector::from_array([3.0, 0.0, 0.0]),
                Vector::from_array([1.0, 1.0, 0.0]),
            ],
        );
        let p = Point::from_array([2.0_f64, 5.0, 7.0]);
        let proj = pl.project_point(&p);
        assert!((proj[0] - 2.0).abs() < 1e-12);
        assert!((proj[1] - 5.0).abs() < 1e-12);
        assert!(proj[2].abs() < 1e-12);
        assert!((pl.distance_to(&p) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn segment_length_and_interpolation() {
        let s = Segment::new([
            Point::from_array([0.0, 0.0]),
            Point::from_array([3.0_f64, 4.0]),
        ]);
        assert!((s.length() - 5.0).abs() < 1e-12);
        let mid = s.point_at(0.5);
        assert!((mid[0] - 1.5).abs() < 1e-12);
        assert!((mid[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn triangle_centroid_area_normal() {
        let t = Triangle::new([
            Point::from_array([0.0, 0.0, 0.0]),
            Point::from_array([3.0_f64, 0.0, 0.0]),
            Point::from_array([0.0, 3.0, 0.0]),
        ]);
        let c = t.centroid();
        assert!((c[0] - 1.0).abs() < 1e-12);
        assert!((c[1] - 1.0).abs() < 1e-12);
        assert!((t.area() - 4.5).abs() < 1e-12);
        let n = t.normal();
        assert!((n[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn edges_antisymmetric() {
        let t = Triangle::new([
            Point::from_array([0.0, 0.0]),
            Point::from_array([1.0, 0.0]),
            Point::from_array([0.0, 1.0]),
        ]);
        assert_eq!(t.edge(0, 1), -t.edge(1, 0));
        assert_eq!(t.edge(0, 1)[0], 1.0_f64);
    }

    #[test]
    fn tetrahedron_hull_is_three_dimensional() {
        let tet = Tetrahedron::new([
            Point::from_array([0.0, 0.0, 0.0]),
            Point::from_array([1.0, 0.0, 0.0]),
            Point::from_array([0.0, 1.0, 0.0]),
            Point::from_array([0.0, 0.0, 1.0]),
        ]);
        let hull = tet.to_subspace();
        assert_eq!(hull.span().len(), 3);
        // Any point is in the hull of a full-dimensional simplex
        let p = Point::from_array([0.3_f64, 0.4, 0.1]);
        assert!(hull.distance_to(&p) < 1e-12);
    }

    #[test]
    fn segment_hull_matches_line() {
        let s = Segment::new([
            Point::from_array([1.0_f64, 1.0]),
            Point::from_array([2.0, 3.0]),
        ]);
        let l = s.to_subspace();
        assert_eq!(l.point_at([0.0]), *s.vertex(0));
        assert_eq!(l.point_at([1.0]), *s.vertex(1));
    }
}
