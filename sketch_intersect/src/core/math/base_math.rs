use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::core::math::*;
/// assert_eq!(min_max(8, 4), (4, 8));
/// assert_eq!(min_max(1.5, 2.5), (1.5, 2.5));
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Clamp `value` into `[min, max]`.
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: Real,
{
    num_traits::real::Real::min(num_traits::real::Real::max(value, min), max)
}

/// Median of four values, the mean of the two middle values after sorting.
///
/// For a unit interval `[0, 1]` and a second interval `[a, b]` that overlaps it, this is the
/// midpoint of the overlap.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::core::math::*;
/// assert_eq!(median_of_four(0.0, 1.0, 0.5, 1.5), 0.75);
/// assert_eq!(median_of_four(4.0, 1.0, 3.0, 2.0), 2.5);
/// ```
#[inline]
pub fn median_of_four<T>(a: T, b: T, c: T, d: T) -> T
where
    T: Real,
{
    let (lo1, hi1) = min_max(a, b);
    let (lo2, hi2) = min_max(c, d);
    // the smallest and largest of the four are discarded
    let lower_mid = num_traits::real::Real::max(lo1, lo2);
    let upper_mid = num_traits::real::Real::min(hi1, hi2);
    (lower_mid + upper_mid) * T::half()
}

/// Returns the point on the line segment going from `p0` to `p1` at parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value and position of the closest point on the segment `p0` to `p1` to
/// the `point` given. Parametric value is clamped to `[0, 1]`.
///
/// A zero length segment returns `(0, p0)`.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::core::math::*;
/// let (t, closest) =
///     line_seg_closest_point(Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0), Vector2::new(1.0, 3.0));
/// assert_eq!(t, 0.25);
/// assert_eq!(closest, Vector2::new(1.0, 0.0));
/// ```
#[inline]
pub fn line_seg_closest_point<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    point: Vector2<T>,
) -> (T, Vector2<T>)
where
    T: Real,
{
    // http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let c2 = v.length_squared();
    if c2 <= T::zero() {
        return (T::zero(), p0);
    }

    let c1 = (point - p0).dot(v);
    if c1 <= T::zero() {
        return (T::zero(), p0);
    }

    if c2 <= c1 {
        return (T::one(), p1);
    }

    let t = c1 / c2;
    (t, p0 + v.scale(t))
}
