use super::{
    monotone_runs, visit_monotone_pair_intersects, RawIntersect, RawIntersectVisitor,
    SampledLine, TaggedPoint,
};
use crate::core::{
    math::{point_from_parametric, Vector2},
    tolerance::Tolerances,
    traits::{ControlFlow, Real},
    try_cf, Control,
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};
use std::cmp::Ordering;

/// Intersect between two sampled lines after normalization.
///
/// `seg1_index` is the starting sample index of the segment on the first line (the segment runs
/// to `seg1_index + 1`), `seg1_t` is the parametric position along it. Same for the second line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineIntersect<T = f64> {
    pub seg1_index: usize,
    pub seg2_index: usize,
    pub seg1_t: T,
    pub seg2_t: T,
    /// Absolute position of the intersect.
    pub point: Vector2<T>,
}

impl<T> LineIntersect<T>
where
    T: Real,
{
    /// Order along the first line.
    #[inline]
    pub fn cmp_along_line1(&self, other: &Self) -> Ordering {
        cmp_position(self.seg1_index, self.seg1_t, other.seg1_index, other.seg1_t)
    }

    /// Order along the second line.
    #[inline]
    pub fn cmp_along_line2(&self, other: &Self) -> Ordering {
        cmp_position(self.seg2_index, self.seg2_t, other.seg2_index, other.seg2_t)
    }
}

#[inline]
fn cmp_position<T: Real>(index1: usize, t1: T, index2: usize, t2: T) -> Ordering {
    index1
        .cmp(&index2)
        .then_with(|| t1.partial_cmp(&t2).unwrap_or(Ordering::Equal))
}

/// Visit every raw segment intersect between `line1` and `line2`.
///
/// Both lines are expressed in `line1`'s local frame, split into monotone runs, and every pair of
/// runs whose bounding boxes overlap is swept. The same crossing may be visited more than once
/// (e.g. when it lands on a sample shared by two segments), see [find_intersects] for the
/// deduplicated result.
///
/// `tol` holds absolute distances, they are rescaled to the local frame internally.
pub fn visit_raw_intersects<T, C, V>(
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    tol: &Tolerances<T>,
    visitor: &mut V,
) -> C
where
    T: Real,
    C: ControlFlow,
    V: RawIntersectVisitor<T, C>,
{
    let to_line1 = match line1.frame().inverse() {
        Some(a) => a,
        None => return C::continuing(),
    };
    let local_tol = tol.scaled_to_unit(line1.chord_length());
    // parametric margin is scale free, take it from the caller's tolerances
    let param_margin = tol.param_margin();

    let points1 = line1.tagged_points(&Default::default());
    let points2 = line2.tagged_points(&line2.frame().then(&to_line1));
    let runs1 = monotone_runs(&points1);
    let runs2 = monotone_runs(&points2);
    log::debug!(
        "sweeping {} x {} monotone runs ({} x {} samples)",
        runs1.len(),
        runs2.len(),
        points1.len(),
        points2.len()
    );

    let (runs2_index, indexed_runs2) = match build_runs_index(&runs2) {
        Some(x) => x,
        None => return C::continuing(),
    };

    let eps = local_tol.moderate;
    for run1 in runs1.iter().filter(|r| r.len() > 1) {
        let (min_x, min_y, max_x, max_y) = run_extents(run1);
        let mut hits = runs2_index.query(min_x - eps, min_y - eps, max_x + eps, max_y + eps);
        // keep sweep order stable regardless of index layout
        hits.sort_unstable();
        for item in hits {
            let run2 = &runs2[indexed_runs2[item]];
            try_cf!(visit_monotone_pair_intersects(
                run1,
                run2,
                &local_tol,
                param_margin,
                visitor
            ));
        }
    }

    C::continuing()
}

/// Spatial index over the runs that have at least one segment, along with the mapping from index
/// item to run position.
fn build_runs_index<T>(runs: &[Vec<TaggedPoint<T>>]) -> Option<(StaticAABB2DIndex<T>, Vec<usize>)>
where
    T: Real,
{
    let indexed: Vec<usize> = runs
        .iter()
        .enumerate()
        .filter(|(_, r)| r.len() > 1)
        .map(|(i, _)| i)
        .collect();
    if indexed.is_empty() {
        return None;
    }

    let mut builder = StaticAABB2DIndexBuilder::new(indexed.len());
    for &i in &indexed {
        let (min_x, min_y, max_x, max_y) = run_extents(&runs[i]);
        builder.add(min_x, min_y, max_x, max_y);
    }

    match builder.build() {
        Ok(index) => Some((index, indexed)),
        Err(e) => {
            log::warn!("failed to build run index: {e}");
            None
        }
    }
}

fn run_extents<T>(run: &[TaggedPoint<T>]) -> (T, T, T, T)
where
    T: Real,
{
    let first = run[0].pos;
    run.iter().skip(1).fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (
                num_traits::real::Real::min(min_x, p.pos.x),
                num_traits::real::Real::min(min_y, p.pos.y),
                num_traits::real::Real::max(max_x, p.pos.x),
                num_traits::real::Real::max(max_y, p.pos.y),
            )
        },
    )
}

/// All raw intersects between `line1` and `line2`, see [visit_raw_intersects].
pub fn raw_intersects<T>(
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    tol: &Tolerances<T>,
) -> Vec<RawIntersect<T>>
where
    T: Real,
{
    let mut result = Vec::new();
    let _: () = visit_raw_intersects(line1, line2, tol, &mut |intr| result.push(intr));
    result
}

/// Normalize raw intersects so the lower sample index of each segment comes first (flipping the
/// parametric value to `1 - t` when swapped) and resolve their absolute position on `line1`.
pub fn clean_intersects<T>(raw: &[RawIntersect<T>], line1: &SampledLine<T>) -> Vec<LineIntersect<T>>
where
    T: Real,
{
    let local = line1.local_samples();
    let frame = line1.frame();
    raw.iter()
        .map(|r| {
            let (seg1_index, seg1_t) = lower_index_first(r.line1_start, r.line1_end, r.seg1_t);
            let (seg2_index, seg2_t) = lower_index_first(r.line2_start, r.line2_end, r.seg2_t);
            let local_point =
                point_from_parametric(local[seg1_index], local[seg1_index + 1], seg1_t);
            LineIntersect {
                seg1_index,
                seg2_index,
                seg1_t,
                seg2_t,
                point: frame.apply(local_point),
            }
        })
        .collect()
}

#[inline]
fn lower_index_first<T: Real>(start: usize, end: usize, t: T) -> (usize, T) {
    if start <= end {
        (start, t)
    } else {
        (end, T::one() - t)
    }
}

#[derive(Debug, Copy, Clone)]
struct Candidate<T> {
    intr: LineIntersect<T>,
    boundary: bool,
}

/// Drop candidates closer than `loose` to the previously kept one. A line end point boundary
/// always wins over a real intersect so that hits on end points disappear with the boundary.
fn collapse_sorted<T>(sorted: Vec<Candidate<T>>, loose: T) -> Vec<Candidate<T>>
where
    T: Real,
{
    let mut kept: Vec<Candidate<T>> = Vec::with_capacity(sorted.len());
    for c in sorted {
        if let Some(last) = kept.last_mut() {
            if last.intr.point.distance(c.intr.point) < loose {
                if c.boundary && !last.boundary {
                    *last = c;
                }
                continue;
            }
        }
        kept.push(c);
    }
    kept
}

/// Merge near coincident intersects and drop intersects on either line's end points.
///
/// Intersects are sorted along `line2` with `line2`'s end points added as boundaries and collapsed
/// by `tol.loose` distance, then the same is repeated along `line1`. Result is sorted along
/// `line1`.
pub fn filter_intersects<T>(
    cleaned: Vec<LineIntersect<T>>,
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    tol: &Tolerances<T>,
) -> Vec<LineIntersect<T>>
where
    T: Real,
{
    if cleaned.is_empty() {
        return cleaned;
    }

    let boundary = |seg1_index, seg1_t, seg2_index, seg2_t, point| Candidate {
        intr: LineIntersect {
            seg1_index,
            seg2_index,
            seg1_t,
            seg2_t,
            point,
        },
        boundary: true,
    };

    let mut candidates: Vec<Candidate<T>> = cleaned
        .into_iter()
        .map(|intr| Candidate {
            intr,
            boundary: false,
        })
        .collect();

    // along line2
    candidates.sort_by(|a, b| a.intr.cmp_along_line2(&b.intr));
    candidates.insert(0, boundary(0, T::zero(), 0, T::zero(), line2.p1()));
    let last2 = line2.segment_count() - 1;
    candidates.push(boundary(0, T::zero(), last2, T::one(), line2.p2()));
    let mut candidates: Vec<Candidate<T>> = collapse_sorted(candidates, tol.loose)
        .into_iter()
        .filter(|c| !c.boundary)
        .collect();

    // along line1
    candidates.sort_by(|a, b| a.intr.cmp_along_line1(&b.intr));
    candidates.insert(0, boundary(0, T::zero(), 0, T::zero(), line1.p1()));
    let last1 = line1.segment_count() - 1;
    candidates.push(boundary(last1, T::one(), 0, T::zero(), line1.p2()));
    collapse_sorted(candidates, tol.loose)
        .into_iter()
        .filter(|c| !c.boundary)
        .map(|c| c.intr)
        .collect()
}

/// Find all intersects between `line1` and `line2`, merged and sorted along `line1`.
///
/// Intersects within `tol.loose` of an end point of either line are not reported.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::sampled_line;
/// # use sketch_intersect::core::{math::Vector2, tolerance::Tolerances};
/// # use sketch_intersect::polyline::find_intersects;
/// let line1 = sampled_line![(0.0, 0.0), (4.0, 0.0), (8.0, 0.0)];
/// let line2 = sampled_line![(1.0, -1.0), (3.0, 1.0), (5.0, -1.0), (7.0, 1.0)];
/// let intersects = find_intersects(&line1, &line2, &Tolerances::default());
/// assert_eq!(intersects.len(), 3);
/// // crossing on the middle sample of line1 is reported once
/// assert!(intersects[1].point.fuzzy_eq_eps(Vector2::new(4.0, 0.0), 1e-9));
/// assert_eq!(intersects[2].seg1_index, 1);
/// assert_eq!(intersects[2].seg2_index, 2);
/// ```
pub fn find_intersects<T>(
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    tol: &Tolerances<T>,
) -> Vec<LineIntersect<T>>
where
    T: Real,
{
    let raw = raw_intersects(line1, line2, tol);
    let cleaned = clean_intersects(&raw, line1);
    let filtered = filter_intersects(cleaned, line1, line2, tol);
    log::debug!(
        "{} raw intersects filtered to {}",
        raw.len(),
        filtered.len()
    );
    filtered
}

/// Positions of all intersects between `line1` and `line2`, see [find_intersects].
pub fn intersection_positions<T>(
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    tol: &Tolerances<T>,
) -> Vec<Vector2<T>>
where
    T: Real,
{
    find_intersects(line1, line2, tol)
        .into_iter()
        .map(|intr| intr.point)
        .collect()
}

/// Returns `true` if the lines cross anywhere other than within `tol.loose` of an end point.
///
/// Stops at the first such crossing.
pub fn has_intersection<T>(
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    tol: &Tolerances<T>,
) -> bool
where
    T: Real,
{
    let end_points = [line1.p1(), line1.p2(), line2.p1(), line2.p2()];
    let mut visitor = |raw: RawIntersect<T>| {
        let point = clean_intersects(&[raw], line1)[0].point;
        if end_points.iter().any(|p| p.distance(point) < tol.loose) {
            Control::Continue
        } else {
            Control::Break(())
        }
    };

    let result: Control = visit_raw_intersects(line1, line2, tol, &mut visitor);
    result.should_break()
}
