use super::{
    base_math::{clamp, line_seg_closest_point, median_of_four, min_max, point_from_parametric},
    Affine2, Vector2,
};
use crate::core::{tolerance::Tolerances, traits::Real};

/// Result of intersecting two line segments.
///
/// Parametric values follow `P(t) = start + t * (end - start)` and always lie in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegSegIntr<T>
where
    T: Real,
{
    /// Segments do not touch. Also returned for parallel segments that are not collinear.
    NoIntersect,
    /// Segments meet at a single point. Degenerate (point) segments always report `0` for
    /// themselves.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// Segments are collinear and overlap by a non zero length.
    Overlapping {
        /// Representative parametric value on first segment (midpoint of the overlap).
        seg1_t: T,
        /// Parametric value on second segment of the representative point.
        seg2_t: T,
        /// Start of the overlap along the first segment.
        seg1_t0: T,
        /// End of the overlap along the first segment.
        seg1_t1: T,
    },
}

impl<T> SegSegIntr<T>
where
    T: Real,
{
    /// Representative `(seg1_t, seg2_t)` pair, `None` if there is no intersect.
    #[inline]
    pub fn params(&self) -> Option<(T, T)> {
        match *self {
            SegSegIntr::NoIntersect => None,
            SegSegIntr::TrueIntersect { seg1_t, seg2_t }
            | SegSegIntr::Overlapping { seg1_t, seg2_t, .. } => Some((seg1_t, seg2_t)),
        }
    }
}

/// Finds the intersect between the segments `start1 -> end1` and `start2 -> end2`.
///
/// Segments shorter than `tol.moderate` are treated as points. Segments are parallel when the sine
/// of the angle between them is below `tol.fine`, in which case the collinear overlap (if any) is
/// reported with its midpoint as the representative intersect. All end point inclusion checks use
/// `tol.moderate` as an absolute distance.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::core::math::*;
/// # use sketch_intersect::core::tolerance::Tolerances;
/// let tol = Tolerances::default();
/// let result = seg_seg_intr(
///     Vector2::new(0.0, 0.0),
///     Vector2::new(2.0, 0.0),
///     Vector2::new(1.5, -1.0),
///     Vector2::new(1.5, 3.0),
///     &tol,
/// );
/// assert_eq!(result, SegSegIntr::TrueIntersect { seg1_t: 0.75, seg2_t: 0.25 });
/// ```
pub fn seg_seg_intr<T>(
    start1: Vector2<T>,
    end1: Vector2<T>,
    start2: Vector2<T>,
    end2: Vector2<T>,
    tol: &Tolerances<T>,
) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    let eps = tol.moderate;
    let d1 = end1 - start1;
    let d2 = end2 - start2;
    let seg1_length = d1.length();
    let seg2_length = d2.length();
    let seg1_is_point = seg1_length < eps;
    let seg2_is_point = seg2_length < eps;

    if seg1_is_point && seg2_is_point {
        if start1.distance(start2) < eps {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    if seg1_is_point {
        let (seg2_t, closest) = line_seg_closest_point(start2, end2, start1);
        if closest.distance(start1) < eps {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t,
            };
        }
        return NoIntersect;
    }

    if seg2_is_point {
        let (seg1_t, closest) = line_seg_closest_point(start1, end1, start2);
        if closest.distance(start2) < eps {
            return TrueIntersect {
                seg1_t,
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    let denominator = d1.perp_dot(d2);
    if denominator.abs() < tol.fine * seg1_length * seg2_length {
        return parallel_seg_intr(start1, end1, start2, end2, seg1_length, seg2_length, eps);
    }

    // Cramer's rule on start1 + ua * d1 = start2 + ub * d2
    let w = start1 - start2;
    let ua = d2.perp_dot(w) / denominator;
    let ub = d1.perp_dot(w) / denominator;

    if !(ua * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, eps)
        || !(ub * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, eps)
    {
        return NoIntersect;
    }

    TrueIntersect {
        seg1_t: clamp(ua, T::zero(), T::one()),
        seg2_t: clamp(ub, T::zero(), T::one()),
    }
}

/// Parallel (or collinear) case of [seg_seg_intr], neither segment is a point.
fn parallel_seg_intr<T>(
    start1: Vector2<T>,
    end1: Vector2<T>,
    start2: Vector2<T>,
    end2: Vector2<T>,
    seg1_length: T,
    seg2_length: T,
    eps: T,
) -> SegSegIntr<T>
where
    T: Real,
{
    use SegSegIntr::*;

    let to_seg1_frame = match Affine2::from_unit_frame(start1, end1).inverse() {
        Some(a) => a,
        None => return NoIntersect,
    };

    // segment 1 runs from x = 0 to x = 1 in its own frame, y is the scaled offset from its line
    let a = to_seg1_frame.apply(start2);
    let b = to_seg1_frame.apply(end2);
    let eps_t = eps / seg1_length;
    if !a.y.fuzzy_eq_zero_eps(eps_t) || !b.y.fuzzy_eq_zero_eps(eps_t) {
        // parallel but offset
        return NoIntersect;
    }

    let (lo, hi) = min_max(a.x, b.x);
    if !hi.fuzzy_gt_eps(T::zero(), eps_t) || !lo.fuzzy_lt_eps(T::one(), eps_t) {
        return NoIntersect;
    }

    let seg1_t = clamp(median_of_four(T::zero(), T::one(), a.x, b.x), T::zero(), T::one());
    let point = point_from_parametric(start1, end1, seg1_t);
    let seg2_t = clamp(point.distance(start2) / seg2_length, T::zero(), T::one());

    let seg1_t0 = clamp(lo, T::zero(), T::one());
    let seg1_t1 = clamp(hi, T::zero(), T::one());
    if ((seg1_t1 - seg1_t0) * seg1_length).fuzzy_eq_zero_eps(eps) {
        // segments line up end to end
        return TrueIntersect { seg1_t, seg2_t };
    }

    Overlapping {
        seg1_t,
        seg2_t,
        seg1_t0,
        seg1_t1,
    }
}
