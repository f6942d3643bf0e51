use super::SampledLine;
use crate::{
    core::{
        math::{point_from_parametric, Vector2},
        tolerance::Tolerances,
        traits::Real,
    },
    error::InvalidInputError,
};

/// Unbounded line through `origin` along a unit `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InfiniteLine<T = f64> {
    origin: Vector2<T>,
    direction: Vector2<T>,
}

impl<T> InfiniteLine<T>
where
    T: Real,
{
    /// Line through `origin` along `direction` (normalized internally).
    pub fn new(origin: Vector2<T>, direction: Vector2<T>) -> Result<Self, InvalidInputError> {
        let length = direction.length();
        if !(length > T::zero()) || !origin.is_finite() || !direction.is_finite() {
            return Err(InvalidInputError::DegenerateFrame);
        }

        Ok(InfiniteLine {
            origin,
            direction: direction.scale(T::one() / length),
        })
    }

    /// Line through two distinct points.
    #[inline]
    pub fn from_points(a: Vector2<T>, b: Vector2<T>) -> Result<Self, InvalidInputError> {
        Self::new(a, b - a)
    }

    #[inline]
    pub fn origin(&self) -> Vector2<T> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.direction
    }

    /// Signed distance of `point` from the line, positive to the left of the direction.
    #[inline]
    pub fn signed_distance(&self, point: Vector2<T>) -> T {
        self.direction.perp_dot(point - self.origin)
    }
}

/// Positions where `line` meets `infinite`.
///
/// Every segment is tested on its own: end points within `tol.moderate` of the infinite line are
/// reported as is, segments with end points on opposite sides report the interpolated crossing.
/// A position within `tol.loose` of one already reported is dropped. Results are ordered along
/// `line`.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::sampled_line;
/// # use sketch_intersect::core::{math::Vector2, tolerance::Tolerances};
/// # use sketch_intersect::polyline::*;
/// let zigzag = sampled_line![(0.0, -1.0), (1.0, 1.0), (2.0, -1.0)];
/// let axis = InfiniteLine::from_points(Vector2::new(-5.0, 0.0), Vector2::new(5.0, 0.0)).unwrap();
/// let points = plain_line_intersection_positions(&zigzag, &axis, &Tolerances::default());
/// assert_eq!(points.len(), 2);
/// assert!(points[0].fuzzy_eq(Vector2::new(0.5, 0.0)));
/// assert!(points[1].fuzzy_eq(Vector2::new(1.5, 0.0)));
/// ```
pub fn plain_line_intersection_positions<T>(
    line: &SampledLine<T>,
    infinite: &InfiniteLine<T>,
    tol: &Tolerances<T>,
) -> Vec<Vector2<T>>
where
    T: Real,
{
    let samples = line.sample_points();
    let mut result: Vec<Vector2<T>> = Vec::new();
    let mut push_unique = |p: Vector2<T>| {
        if result.iter().all(|q| q.distance(p) >= tol.loose) {
            result.push(p);
        }
    };

    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let da = infinite.signed_distance(a);
        let db = infinite.signed_distance(b);
        let a_on = da.abs() < tol.moderate;
        let b_on = db.abs() < tol.moderate;

        if a_on {
            push_unique(a);
        }

        if !a_on && !b_on && (da < T::zero()) != (db < T::zero()) {
            let t = da / (da - db);
            push_unique(point_from_parametric(a, b, t));
        }

        if b_on {
            push_unique(b);
        }
    }

    result
}
