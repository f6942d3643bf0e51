use super::TaggedPoint;
use crate::core::traits::Real;

/// Split `points` into runs whose x coordinate moves in one direction.
///
/// A run closes when the x step between consecutive points stops moving in the current direction
/// (reverses or is flat), the turning point is shared as the last point of one run and the first
/// point of the next. Scanning starts in the increasing direction so every odd indexed run is
/// decreasing, those runs are reversed so that all returned runs read in non-decreasing x.
///
/// A run of a single point is returned when the sequence starts out decreasing (or flat).
///
/// # Examples
///
/// ```
/// # use sketch_intersect::polyline::*;
/// # use sketch_intersect::core::math::Vector2;
/// let points: Vec<_> = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, -1.0), (3.0, 0.0)]
///     .iter()
///     .enumerate()
///     .map(|(i, &(x, y))| TaggedPoint::new(Vector2::new(x, y), i))
///     .collect();
///
/// let runs = monotone_runs(&points);
/// let indexes: Vec<Vec<usize>> = runs
///     .iter()
///     .map(|r| r.iter().map(|p| p.index).collect())
///     .collect();
/// assert_eq!(indexes, vec![vec![0, 1, 2], vec![3, 2], vec![3, 4]]);
/// ```
pub fn monotone_runs<T>(points: &[TaggedPoint<T>]) -> Vec<Vec<TaggedPoint<T>>>
where
    T: Real,
{
    let mut runs = Vec::new();
    if points.is_empty() {
        return runs;
    }

    let mut direction = T::one();
    let mut current = vec![points[0]];
    for pair in points.windows(2) {
        let delta = pair[1].pos.x - pair[0].pos.x;
        if delta * direction <= T::zero() {
            runs.push(std::mem::replace(&mut current, vec![pair[0]]));
            direction = -direction;
        }
        current.push(pair[1]);
    }
    runs.push(current);

    for run in runs.iter_mut().skip(1).step_by(2) {
        run.reverse();
    }

    runs
}
