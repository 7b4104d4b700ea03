use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::traits::FloatScalar;

/// A plane angle stored in radians.
///
/// Construct and read in either radians or degrees; equality is
/// tolerance-based ([`ANGLE_TOLERANCE`](crate::ANGLE_TOLERANCE)).
/// [`to_period`](Angle::to_period) folds the value into an arbitrary
/// one-turn window.
///
/// ```
/// use geomat::Angle;
///
/// let a = Angle::from_degrees(90.0_f64);
/// assert!((a.radians() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(a, Angle::from_degrees(450.0).to_period(0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Angle<T> {
    rad: T,
}

impl<T: FloatScalar> Angle<T> {
    /// Create an angle from radians.
    #[inline]
    pub fn new(rad: T) -> Self {
        Self { rad }
    }

    /// Create an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: T) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Zero angle.
    #[inline]
    pub fn zero() -> Self {
        Self { rad: T::zero() }
    }

    /// The value in radians.
    #[inline]
    pub fn radians(&self) -> T {
        self.rad
    }

    /// The value in degrees.
    #[inline]
    pub fn degrees(&self) -> T {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn sin(&self) -> T {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(&self) -> T {
        self.rad.cos()
    }

    #[inline]
    pub fn tan(&self) -> T {
        self.rad.tan()
    }

    /// Sine and cosine in one call.
    #[inline]
    pub fn sin_cos(&self) -> (T, T) {
        self.rad.sin_cos()
    }

    /// Fold into the period `[start, start + 2π)`.
    pub fn to_period(&self, start: T) -> Self {
        let two_pi = T::from(core::f64::consts::TAU).unwrap();
        let mut r = (self.rad - start) % two_pi;
        if r < T::zero() {
            r = r + two_pi;
        }
        Self { rad: start + r }
    }
}

impl<T: FloatScalar> PartialEq for Angle<T> {
    fn eq(&self, other: &Self) -> bool {
        let tol = T::from(crate::ANGLE_TOLERANCE).unwrap();
        (self.rad - other.rad).abs() < tol
    }
}

impl<T: FloatScalar> Add for Angle<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            rad: self.rad + rhs.rad,
        }
    }
}

impl<T: FloatScalar> Sub for Angle<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            rad: self.rad - rhs.rad,
        }
    }
}

impl<T: FloatScalar> AddAssign for Angle<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.rad = self.rad + rhs.rad;
    }
}

impl<T: FloatScalar> SubAssign for Angle<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.rad = self.rad - rhs.rad;
    }
}

impl<T: FloatScalar> Neg for Angle<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            rad: T::zero() - self.rad,
        }
    }
}

impl<T: FloatScalar> Mul<T> for Angle<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            rad: self.rad * rhs,
        }
    }
}

impl<T: FloatScalar> Div<T> for Angle<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            rad: self.rad / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn degrees_radians_roundtrip() {
        let a = Angle::from_degrees(90.0_f64);
        assert!((a.radians() - FRAC_PI_2).abs() < 1e-12);
        assert!((a.degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn trig() {
        let a = Angle::new(FRAC_PI_2);
        assert!((a.sin() - 1.0).abs() < 1e-12);
        assert!(a.cos().abs() < 1e-12);
        let (s, c) = a.sin_cos();
        assert_eq!(s, a.sin());
        assert_eq!(c, a.cos());
    }

    #[test]
    fn to_period_wraps_positive() {
        let a = Angle::new(5.0 * PI);
        let p = a.to_period(0.0);
        assert!((p.radians() - PI).abs() < 1e-12);
    }

    #[test]
    fn to_period_wraps_negative() {
        let a = Angle::new(-FRAC_PI_2);
        let p = a.to_period(0.0);
        assert!((p.radians() - (TAU - FRAC_PI_2)).abs() < 1e-12);
    }

    #[test]
    fn to_period_custom_window() {
        let a = Angle::new(3.0 * PI);
        let p = a.to_period(-PI);
        assert!(p.radians() >= -PI && p.radians() < PI);
        assert!((p.radians() + PI).abs() < 1e-12);
    }

    #[test]
    fn tolerance_equality() {
        let a = Angle::new(1.0_f64);
        assert_eq!(a, Angle::new(1.0 + 1e-13));
        assert_ne!(a, Angle::new(1.0 + 1e-6));
    }

    #[test]
    fn arithmetic() {
        let a = Angle::new(1.0_f64) + Angle::new(0.5);
        assert!((a.radians() - 1.5).abs() < 1e-12);
        let b = a - Angle::new(0.5);
        assert!((b.radians() - 1.0).abs() < 1e-12);
        assert!(((-b).radians() + 1.0).abs() < 1e-12);
        assert!(((b * 2.0).radians() - 2.0).abs() < 1e-12);
        assert!(((b / 2.0).radians() - 0.5).abs() < 1e-12);

        let mut c = Angle::new(0.0_f64);
        c += Angle::new(2.0);
        c -= Angle::new(0.5);
        assert!((c.radians() - 1.5).abs() < 1e-12);
    }
}
