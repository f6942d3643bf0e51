use super::{find_intersects, LineIntersect, SampledLine};
use crate::{
    core::{math::Vector2, tolerance::Tolerances, traits::Real},
    error::InvalidInputError,
};

/// Result of splitting two lines at their intersects.
#[derive(Debug, Clone)]
pub struct LineSplit<T = f64> {
    /// Intersect positions, ordered along the first line.
    pub points: Vec<Vector2<T>>,
    /// Positions into `points` ordered along the second line.
    pub line2_order: Vec<usize>,
    /// Pieces of the first line, `points.len() + 1` of them, in order from its start.
    pub line1_pieces: Vec<SampledLine<T>>,
    /// Pieces of the second line, in order from its start.
    pub line2_pieces: Vec<SampledLine<T>>,
}

impl<T> LineSplit<T>
where
    T: Real,
{
    /// `true` if no intersect was found and each line is its own single piece.
    #[inline]
    pub fn is_unsplit(&self) -> bool {
        self.points.is_empty()
    }
}

/// Cut position along a line.
#[derive(Debug, Copy, Clone)]
struct Cut<T> {
    seg_index: usize,
    point: Vector2<T>,
}

/// Split both lines at every intersect between them.
///
/// Each piece reuses the original sample points that fall strictly between its two cut points
/// and gets its own local frame. Pieces that meet at an intersect share the exact same end point.
/// Original samples within `tol.moderate` of a cut point are dropped to avoid near zero length
/// segments.
pub fn split_at_intersections<T>(
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    tol: &Tolerances<T>,
) -> Result<LineSplit<T>, InvalidInputError>
where
    T: Real,
{
    let intersects = find_intersects(line1, line2, tol);
    split_with_intersects(line1, line2, &intersects, tol)
}

/// Same as [split_at_intersections] with intersects already computed by
/// [find_intersects](super::find_intersects).
pub fn split_with_intersects<T>(
    line1: &SampledLine<T>,
    line2: &SampledLine<T>,
    intersects: &[LineIntersect<T>],
    tol: &Tolerances<T>,
) -> Result<LineSplit<T>, InvalidInputError>
where
    T: Real,
{
    let mut along1: Vec<usize> = (0..intersects.len()).collect();
    along1.sort_by(|&a, &b| intersects[a].cmp_along_line1(&intersects[b]));

    let mut line2_order: Vec<usize> = (0..along1.len()).collect();
    line2_order.sort_by(|&a, &b| {
        intersects[along1[a]].cmp_along_line2(&intersects[along1[b]])
    });

    let points: Vec<Vector2<T>> = along1.iter().map(|&i| intersects[i].point).collect();

    let cuts1: Vec<Cut<T>> = along1
        .iter()
        .map(|&i| Cut {
            seg_index: intersects[i].seg1_index,
            point: intersects[i].point,
        })
        .collect();
    let cuts2: Vec<Cut<T>> = line2_order
        .iter()
        .map(|&k| {
            let intr = &intersects[along1[k]];
            Cut {
                seg_index: intr.seg2_index,
                point: intr.point,
            }
        })
        .collect();

    let line1_pieces = split_line(line1, &cuts1, tol.moderate)?;
    let line2_pieces = split_line(line2, &cuts2, tol.moderate)?;
    log::debug!(
        "split at {} points into {} + {} pieces",
        points.len(),
        line1_pieces.len(),
        line2_pieces.len()
    );

    Ok(LineSplit {
        points,
        line2_order,
        line1_pieces,
        line2_pieces,
    })
}

/// Re-sample `line` into pieces between consecutive `cuts` (sorted along the line).
fn split_line<T>(
    line: &SampledLine<T>,
    cuts: &[Cut<T>],
    drop_eps: T,
) -> Result<Vec<SampledLine<T>>, InvalidInputError>
where
    T: Real,
{
    if cuts.is_empty() {
        return Ok(vec![line.clone()]);
    }

    let samples = line.sample_points();
    let last = samples.len() - 1;
    // outer pieces end exactly on the line's end points
    let start = Cut {
        seg_index: 0,
        point: line.p1(),
    };
    let end = Cut {
        seg_index: last - 1,
        point: line.p2(),
    };

    let mut bounds = Vec::with_capacity(cuts.len() + 2);
    bounds.push(start);
    bounds.extend_from_slice(cuts);
    bounds.push(end);

    let mut pieces = Vec::with_capacity(bounds.len() - 1);
    for pair in bounds.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let mut piece_samples = vec![a.point];
        if a.seg_index < b.seg_index {
            piece_samples.extend(samples[a.seg_index + 1..=b.seg_index].iter().filter(|p| {
                p.distance(a.point) >= drop_eps && p.distance(b.point) >= drop_eps
            }));
        }
        piece_samples.push(b.point);
        pieces.push(SampledLine::between_points(a.point, b.point, &piece_samples)?);
    }

    Ok(pieces)
}
