use super::{LineId, PointId, SketchEdit, SketchLine};
use crate::{
    core::{tolerance::Tolerances, traits::Real},
    error::SketchError,
    polyline::split_at_intersections,
};

/// Entities produced by [intersect_lines].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectLinesResult {
    /// New points, one per intersect, ordered along the first line.
    pub points: Vec<PointId>,
    /// Lines replacing the first line, in order from its start.
    pub line1_segments: Vec<LineId>,
    /// Lines replacing the second line, in order from its start.
    pub line2_segments: Vec<LineId>,
}

/// Split two sketch lines at every point where they cross.
///
/// The split is computed without touching the sketch. If the lines cross, one point per
/// intersect is added (colored halfway between the two line colors), both lines are removed, and
/// each is replaced by sub-lines between consecutive intersect points that keep the parent color
/// and the original end points. If they do not cross the sketch is left as is and each line is
/// reported as its own single segment. A line is never intersected with itself.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::core::{math::Vector2, tolerance::Tolerances};
/// # use sketch_intersect::sketch::*;
/// let mut sketch = Sketch::new();
/// let horizontal = sketch
///     .add_line_from_sample_points(
///         &[Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)],
///         Color::rgb(1.0, 0.0, 0.0),
///     )
///     .unwrap();
/// let vertical = sketch
///     .add_line_from_sample_points(
///         &[Vector2::new(5.0, -5.0), Vector2::new(5.0, 5.0)],
///         Color::rgb(0.0, 0.0, 1.0),
///     )
///     .unwrap();
///
/// let result = intersect_lines(&mut sketch, horizontal, vertical, &Tolerances::default()).unwrap();
/// assert_eq!(result.points.len(), 1);
/// assert_eq!(result.line1_segments.len(), 2);
/// assert_eq!(result.line2_segments.len(), 2);
/// assert_eq!(sketch.line_count(), 4);
/// assert_eq!(sketch.point(result.points[0]).unwrap().color, Color::rgb(0.5, 0.0, 0.5));
/// ```
pub fn intersect_lines<T, S>(
    sketch: &mut S,
    line1: LineId,
    line2: LineId,
    tol: &Tolerances<T>,
) -> Result<IntersectLinesResult, SketchError>
where
    T: Real,
    S: SketchEdit<T> + ?Sized,
{
    let geometry1 = sketch.sampled_line(line1)?;
    if line1 == line2 {
        log::debug!("not intersecting {line1:?} with itself");
        return Ok(IntersectLinesResult {
            points: Vec::new(),
            line1_segments: vec![line1],
            line2_segments: vec![line2],
        });
    }

    let geometry2 = sketch.sampled_line(line2)?;
    let (ends1, color1) = line_ends_and_color(sketch, line1)?;
    let (ends2, color2) = line_ends_and_color(sketch, line2)?;

    let split = split_at_intersections(&geometry1, &geometry2, tol)?;
    if split.is_unsplit() {
        log::debug!("lines {line1:?} and {line2:?} do not intersect");
        return Ok(IntersectLinesResult {
            points: Vec::new(),
            line1_segments: vec![line1],
            line2_segments: vec![line2],
        });
    }

    let point_color = color1.midpoint(color2);
    let points: Vec<PointId> = split
        .points
        .iter()
        .map(|&p| sketch.add_point(p, point_color))
        .collect();

    let mut chain1 = Vec::with_capacity(points.len() + 2);
    chain1.push(ends1.0);
    chain1.extend_from_slice(&points);
    chain1.push(ends1.1);

    let mut chain2 = Vec::with_capacity(points.len() + 2);
    chain2.push(ends2.0);
    chain2.extend(split.line2_order.iter().map(|&k| points[k]));
    chain2.push(ends2.1);

    sketch.remove_line(line1);
    sketch.remove_line(line2);

    // pieces already carry their local samples between the exact cut points, nothing below can
    // fail once the sketch is being edited
    let line1_segments: Vec<LineId> = split
        .line1_pieces
        .iter()
        .zip(chain1.windows(2))
        .map(|(piece, ends)| {
            sketch.add_line(SketchLine {
                p1: ends[0],
                p2: ends[1],
                local_samples: piece.local_samples().to_vec(),
                color: color1,
            })
        })
        .collect();

    let line2_segments: Vec<LineId> = split
        .line2_pieces
        .iter()
        .zip(chain2.windows(2))
        .map(|(piece, ends)| {
            sketch.add_line(SketchLine {
                p1: ends[0],
                p2: ends[1],
                local_samples: piece.local_samples().to_vec(),
                color: color2,
            })
        })
        .collect();

    log::debug!(
        "split {line1:?} into {} and {line2:?} into {} segments at {} points",
        line1_segments.len(),
        line2_segments.len(),
        points.len()
    );

    Ok(IntersectLinesResult {
        points,
        line1_segments,
        line2_segments,
    })
}

fn line_ends_and_color<T, S>(
    sketch: &S,
    id: LineId,
) -> Result<((PointId, PointId), super::Color), SketchError>
where
    T: Real,
    S: SketchEdit<T> + ?Sized,
{
    let line = sketch.line(id).ok_or(SketchError::UnknownLine(id))?;
    Ok(((line.p1, line.p2), line.color))
}
