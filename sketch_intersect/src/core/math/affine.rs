use super::Vector2;
use crate::core::traits::Real;

/// Similarity transform (rotation, uniform scale, and translation) written as the complex map
/// `p -> linear * p + offset`.
///
/// Sampled lines keep their sample points in a local frame where the start point sits at `(0, 0)`
/// and the end point at `(1, 0)`, this transform moves points between such frames and absolute
/// space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2<T = f64> {
    linear: Vector2<T>,
    offset: Vector2<T>,
}

impl<T> Affine2<T>
where
    T: Real,
{
    #[inline]
    pub fn identity() -> Self {
        Affine2 {
            linear: Vector2::new(T::one(), T::zero()),
            offset: Vector2::zero(),
        }
    }

    /// Build the transform that maps `in1 -> out1` and `in2 -> out2`.
    ///
    /// Returns `None` if `in1` and `in2` are the same point (transform is undefined). If `out1`
    /// and `out2` coincide the transform collapses everything onto `out1` and has no inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sketch_intersect::core::math::*;
    /// let a = Affine2::from_point_pairs(
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(1.0, 0.0),
    ///     Vector2::new(2.0, 2.0),
    ///     Vector2::new(2.0, 4.0),
    /// )
    /// .unwrap();
    /// assert!(a.apply(Vector2::new(0.5, 0.0)).fuzzy_eq(Vector2::new(2.0, 3.0)));
    /// assert!(a.apply(Vector2::new(0.0, 1.0)).fuzzy_eq(Vector2::new(0.0, 2.0)));
    /// ```
    pub fn from_point_pairs(
        in1: Vector2<T>,
        in2: Vector2<T>,
        out1: Vector2<T>,
        out2: Vector2<T>,
    ) -> Option<Self> {
        let in_dir = in2 - in1;
        if in_dir.length_squared() <= T::zero() {
            return None;
        }

        let linear = (out2 - out1).complex_div(in_dir);
        let offset = out1 - in1.complex_mul(linear);
        Some(Affine2 { linear, offset })
    }

    /// Transform taking the unit frame (`(0, 0)` to `(1, 0)`) onto the chord `start` to `end`.
    #[inline]
    pub fn from_unit_frame(start: Vector2<T>, end: Vector2<T>) -> Self {
        Affine2 {
            linear: end - start,
            offset: start,
        }
    }

    #[inline]
    pub fn apply(&self, point: Vector2<T>) -> Vector2<T> {
        point.complex_mul(self.linear) + self.offset
    }

    /// Inverse transform, `None` if the transform is degenerate.
    pub fn inverse(&self) -> Option<Self> {
        if self.linear.length_squared() <= T::zero() {
            return None;
        }

        let one = Vector2::new(T::one(), T::zero());
        let linear = one.complex_div(self.linear);
        let offset = -self.offset.complex_mul(linear);
        Some(Affine2 { linear, offset })
    }

    /// Composition that applies `self` first and then `next`.
    #[inline]
    pub fn then(&self, next: &Self) -> Self {
        Affine2 {
            linear: self.linear.complex_mul(next.linear),
            offset: next.apply(self.offset),
        }
    }
}

impl<T> Default for Affine2<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}
