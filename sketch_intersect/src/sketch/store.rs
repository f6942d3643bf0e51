use super::Color;
use crate::{
    core::{math::Vector2, traits::Real},
    error::SketchError,
    polyline::SampledLine,
};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a point in a sketch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u64);

/// Identifier of a line in a sketch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u64);

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SketchPoint<T = f64> {
    pub pos: Vector2<T>,
    pub color: Color,
}

/// Line entity, its shape is stored relative to its end points (`(0, 0)` at `p1`, `(1, 0)` at
/// `p2`) so it follows them when they move.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SketchLine<T = f64> {
    pub p1: PointId,
    pub p2: PointId,
    pub local_samples: Vec<Vector2<T>>,
    pub color: Color,
}

/// Editing interface of a sketch that owns points and lines.
///
/// [intersect_lines](super::intersect_lines) only talks to a sketch through this trait.
pub trait SketchEdit<T>
where
    T: Real,
{
    fn point(&self, id: PointId) -> Option<&SketchPoint<T>>;

    fn line(&self, id: LineId) -> Option<&SketchLine<T>>;

    fn add_point(&mut self, pos: Vector2<T>, color: Color) -> PointId;

    /// Remove a line, its end points stay in the sketch.
    fn remove_line(&mut self, id: LineId) -> Option<SketchLine<T>>;

    /// Insert a line as is. Its end point ids are expected to exist in the sketch.
    fn add_line(&mut self, line: SketchLine<T>) -> LineId;

    /// Add a line between two existing points shaped by absolute `sample_points`.
    fn add_line_between_points(
        &mut self,
        p1: PointId,
        p2: PointId,
        sample_points: &[Vector2<T>],
        color: Color,
    ) -> Result<LineId, SketchError> {
        let start = self.point(p1).ok_or(SketchError::UnknownPoint(p1))?.pos;
        let end = self.point(p2).ok_or(SketchError::UnknownPoint(p2))?.pos;
        let geometry = SampledLine::between_points(start, end, sample_points)?;
        Ok(self.add_line(SketchLine {
            p1,
            p2,
            local_samples: geometry.local_samples().to_vec(),
            color,
        }))
    }

    /// Geometry of a line resolved against its current end point positions.
    fn sampled_line(&self, id: LineId) -> Result<SampledLine<T>, SketchError> {
        let line = self.line(id).ok_or(SketchError::UnknownLine(id))?;
        let p1 = self.point(line.p1).ok_or(SketchError::UnknownPoint(line.p1))?;
        let p2 = self.point(line.p2).ok_or(SketchError::UnknownPoint(line.p2))?;
        Ok(SampledLine::new(
            p1.pos,
            p2.pos,
            line.local_samples.clone(),
        )?)
    }
}

/// In memory sketch, ids are never reused.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone)]
pub struct Sketch<T = f64> {
    points: BTreeMap<PointId, SketchPoint<T>>,
    lines: BTreeMap<LineId, SketchLine<T>>,
    next_id: u64,
}

impl<T> Default for Sketch<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sketch<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Sketch {
            points: BTreeMap::new(),
            lines: BTreeMap::new(),
            next_id: 0,
        }
    }

    #[inline]
    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a line along absolute `sample_points`, creating its two end points.
    pub fn add_line_from_sample_points(
        &mut self,
        sample_points: &[Vector2<T>],
        color: Color,
    ) -> Result<LineId, SketchError> {
        // validate before touching the sketch
        let geometry = SampledLine::from_sample_points(sample_points)?;
        let p1 = self.add_point(geometry.p1(), color);
        let p2 = self.add_point(geometry.p2(), color);
        Ok(self.add_line(SketchLine {
            p1,
            p2,
            local_samples: geometry.local_samples().to_vec(),
            color,
        }))
    }

    /// Move a point, lines attached to it follow.
    pub fn move_point(&mut self, id: PointId, pos: Vector2<T>) -> Result<(), SketchError> {
        let point = self.points.get_mut(&id).ok_or(SketchError::UnknownPoint(id))?;
        point.pos = pos;
        Ok(())
    }

    pub fn points(&self) -> impl Iterator<Item = (PointId, &SketchPoint<T>)> + '_ {
        self.points.iter().map(|(&id, p)| (id, p))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &SketchLine<T>)> + '_ {
        self.lines.iter().map(|(&id, l)| (id, l))
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl<T> SketchEdit<T> for Sketch<T>
where
    T: Real,
{
    #[inline]
    fn point(&self, id: PointId) -> Option<&SketchPoint<T>> {
        self.points.get(&id)
    }

    #[inline]
    fn line(&self, id: LineId) -> Option<&SketchLine<T>> {
        self.lines.get(&id)
    }

    fn add_point(&mut self, pos: Vector2<T>, color: Color) -> PointId {
        let id = PointId(self.take_id());
        self.points.insert(id, SketchPoint { pos, color });
        id
    }

    fn remove_line(&mut self, id: LineId) -> Option<SketchLine<T>> {
        self.lines.remove(&id)
    }

    fn add_line(&mut self, line: SketchLine<T>) -> LineId {
        let id = LineId(self.take_id());
        self.lines.insert(id, line);
        id
    }
}
