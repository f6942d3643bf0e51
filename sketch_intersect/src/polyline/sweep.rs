use super::TaggedPoint;
use crate::core::{
    math::{clamp, seg_seg_intr},
    tolerance::Tolerances,
    traits::{ControlFlow, Real},
};

/// Intersect found between one segment of each line, before normalization.
///
/// Segment end points are recorded in run order, which may be the reverse of the line's sample
/// order. Parametric values run from the `*_start` sample to the `*_end` sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawIntersect<T = f64> {
    pub line1_start: usize,
    pub line1_end: usize,
    pub line2_start: usize,
    pub line2_end: usize,
    pub seg1_t: T,
    pub seg2_t: T,
}

/// Trait for visiting raw intersects found by the sweep.
pub trait RawIntersectVisitor<T, C>
where
    T: Real,
    C: ControlFlow,
{
    fn visit_raw_intr(&mut self, intr: RawIntersect<T>) -> C;
}

impl<T, C, F> RawIntersectVisitor<T, C> for F
where
    T: Real,
    C: ControlFlow,
    F: FnMut(RawIntersect<T>) -> C,
{
    #[inline]
    fn visit_raw_intr(&mut self, intr: RawIntersect<T>) -> C {
        self(intr)
    }
}

/// Visit all intersects between two runs that are non-decreasing in x.
///
/// Walks both runs with one index each, only segment pairs whose x extents overlap (within
/// `tol.moderate`) are tested with [seg_seg_intr]. After a test the segment that ends first in x
/// is advanced, on a tie the second run advances. Parametric values are clamped into
/// `[param_margin, 1 - param_margin]` so intersects never sit exactly on a sample.
///
/// `tol` holds distances in the frame the runs are expressed in. `param_margin` is a fraction of a
/// segment and does not depend on that frame, callers normally pass
/// [Tolerances::param_margin] of the unscaled tolerances.
pub fn visit_monotone_pair_intersects<T, C, V>(
    run1: &[TaggedPoint<T>],
    run2: &[TaggedPoint<T>],
    tol: &Tolerances<T>,
    param_margin: T,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    V: RawIntersectVisitor<T, C>,
{
    if run1.len() < 2 || run2.len() < 2 {
        return C::continuing();
    }

    let eps = tol.moderate;
    let t_min = param_margin;
    let t_max = T::one() - param_margin;

    let mut i = 0;
    let mut j = 0;
    while i < run1.len() - 1 && j < run2.len() - 1 {
        let a1 = run1[i];
        let a2 = run1[i + 1];
        let b1 = run2[j];
        let b2 = run2[j + 1];

        if a2.pos.x < b1.pos.x - eps {
            i += 1;
            continue;
        }

        if a1.pos.x > b2.pos.x + eps {
            j += 1;
            continue;
        }

        if let Some((seg1_t, seg2_t)) = seg_seg_intr(a1.pos, a2.pos, b1.pos, b2.pos, tol).params() {
            let intr = RawIntersect {
                line1_start: a1.index,
                line1_end: a2.index,
                line2_start: b1.index,
                line2_end: b2.index,
                seg1_t: clamp(seg1_t, t_min, t_max),
                seg2_t: clamp(seg2_t, t_min, t_max),
            };
            log::trace!("sweep hit: {intr:?}");
            let cf = visitor.visit_raw_intr(intr);
            if cf.should_break() {
                return cf;
            }
        }

        if a2.pos.x < b2.pos.x {
            i += 1;
        } else {
            j += 1;
        }
    }

    C::continuing()
}
