use core::cmp::Ordering;

use crate::point::Point;
use crate::traits::FloatScalar;
use crate::vector::UnitVector;

/// An explicit comparison strategy for sorting points.
///
/// The comparator is a plain value passed at the call site — there is no
/// ambient "current sort mode" shared between points, so concurrent sorts
/// with different strategies cannot interfere.
///
/// # Examples
///
/// ```
/// use geomat::{Point, PointOrder};
///
/// let origin = Point::from_array([0.0_f64, 0.0]);
/// let order = PointOrder::ByDistance { origin };
///
/// let mut pts = [
///     Point::from_array([3.0, 0.0]),
///     Point::from_array([1.0, 0.0]),
///     Point::from_array([2.0, 0.0]),
/// ];
/// pts.sort_by(|a, b| order.compare(a, b));
/// assert_eq!(pts[0][0], 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum PointOrder<T, const N: usize> {
    /// Order by squared distance to a reference point.
    ByDistance { origin: Point<T, N> },
    /// Order by projection of the displacement from `origin` onto a
    /// reference direction.
    ByProjection {
        origin: Point<T, N>,
        direction: UnitVector<T, N>,
    },
    /// Order by angle in the plane spanned by `plane_u` and `plane_v`,
    /// measured from `plane_u` around `origin`. In 3-D this is the angle
    /// around the plane normal.
    ByAngle {
        origin: Point<T, N>,
        plane_u: UnitVector<T, N>,
        plane_v: UnitVector<T, N>,
    },
}

impl<T: FloatScalar, const N: usize> PointOrder<T, N> {
    /// The sort key this strategy assigns to a point.
    pub fn key(&self, p: &Point<T, N>) -> T {
        match self {
            PointOrder::ByDistance { origin } => p.distance_squared(origin),
            PointOrder::ByProjection { origin, direction } => {
                let d = *p - *origin;
                direction.dot(&d)
            }
            PointOrder::ByAngle {
                origin,
                plane_u,
                plane_v,
            } => {
                let d = *p - *origin;
                plane_v.dot(&d).atan2(plane_u.dot(&d))
            }
        }
    }

    /// Compare two points under this strategy. Suitable for `sort_by`.
    ///
    /// Incomparable keys (NaN) compare as equal.
    pub fn compare(&self, a: &Point<T, N>, b: &Point<T, N>) -> Ordering {
        self.key(a)
            .partial_cmp(&self.key(b))
            .unwrap_or(Ordering::Equal)
    }
}
