use crate::{
    core::{
        math::{point_from_parametric, Affine2, Vector2},
        traits::Real,
    },
    error::InvalidInputError,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sample point paired with its index in the parent line's sample sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TaggedPoint<T = f64> {
    pub pos: Vector2<T>,
    pub index: usize,
}

impl<T> TaggedPoint<T>
where
    T: Real,
{
    #[inline]
    pub fn new(pos: Vector2<T>, index: usize) -> Self {
        TaggedPoint { pos, index }
    }
}

/// Polyline approximating a curve between two end points.
///
/// Sample points are stored in the line's local frame: `p1` maps to `(0, 0)` and `p2` to `(1, 0)`.
/// Moving either end point therefore moves and scales the whole curve. The first and last local
/// samples are normally `(0, 0)` and `(1, 0)`, [SampledLine::from_sample_points] guarantees it.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        rename_all = "camelCase",
        try_from = "SampledLineData<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct SampledLine<T = f64> {
    p1: Vector2<T>,
    p2: Vector2<T>,
    local_samples: Vec<Vector2<T>>,
}

/// Unchecked line fields as read by serde, validated through [SampledLine::new].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampledLineData<T> {
    p1: Vector2<T>,
    p2: Vector2<T>,
    local_samples: Vec<Vector2<T>>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<SampledLineData<T>> for SampledLine<T>
where
    T: Real,
{
    type Error = InvalidInputError;

    fn try_from(data: SampledLineData<T>) -> Result<Self, Self::Error> {
        SampledLine::new(data.p1, data.p2, data.local_samples)
    }
}

impl<T> SampledLine<T>
where
    T: Real,
{
    /// Create a line from its end points and samples already expressed in the local frame.
    pub fn new(
        p1: Vector2<T>,
        p2: Vector2<T>,
        local_samples: Vec<Vector2<T>>,
    ) -> Result<Self, InvalidInputError> {
        if local_samples.len() < 2 {
            return Err(InvalidInputError::TooFewSamples {
                count: local_samples.len(),
            });
        }

        if let Some(index) = local_samples.iter().position(|p| !p.is_finite()) {
            return Err(InvalidInputError::NonFiniteSample { index });
        }

        if !p1.is_finite() || !p2.is_finite() || (p2 - p1).length_squared() <= T::zero() {
            return Err(InvalidInputError::DegenerateFrame);
        }

        Ok(SampledLine {
            p1,
            p2,
            local_samples,
        })
    }

    /// Create a line from absolute sample points, the first and last become the end points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sketch_intersect::polyline::SampledLine;
    /// # use sketch_intersect::core::math::Vector2;
    /// let line = SampledLine::from_sample_points(&[
    ///     Vector2::new(2.0, 2.0),
    ///     Vector2::new(3.0, 3.0),
    ///     Vector2::new(4.0, 2.0),
    /// ])
    /// .unwrap();
    /// assert!(line.local_samples()[1].fuzzy_eq(Vector2::new(0.5, 0.5)));
    /// assert!(line.sample_points()[1].fuzzy_eq(Vector2::new(3.0, 3.0)));
    /// ```
    pub fn from_sample_points(samples: &[Vector2<T>]) -> Result<Self, InvalidInputError> {
        if samples.len() < 2 {
            return Err(InvalidInputError::TooFewSamples {
                count: samples.len(),
            });
        }

        let p1 = samples[0];
        let p2 = samples[samples.len() - 1];
        Self::between_points(p1, p2, samples)
    }

    /// Create a line between `p1` and `p2` from absolute sample points, samples are re-expressed
    /// relative to `p1` and `p2`.
    pub fn between_points(
        p1: Vector2<T>,
        p2: Vector2<T>,
        samples: &[Vector2<T>],
    ) -> Result<Self, InvalidInputError> {
        if let Some(index) = samples.iter().position(|p| !p.is_finite()) {
            return Err(InvalidInputError::NonFiniteSample { index });
        }

        let to_local = Affine2::from_unit_frame(p1, p2)
            .inverse()
            .ok_or(InvalidInputError::DegenerateFrame)?;
        let local_samples = samples.iter().map(|&p| to_local.apply(p)).collect();
        Self::new(p1, p2, local_samples)
    }

    #[inline]
    pub fn p1(&self) -> Vector2<T> {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Vector2<T> {
        self.p2
    }

    /// Number of sample points.
    #[inline]
    pub fn len(&self) -> usize {
        self.local_samples.len()
    }

    /// Always `false`, a line holds at least 2 samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.local_samples.is_empty()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.local_samples.len() - 1
    }

    #[inline]
    pub fn local_samples(&self) -> &[Vector2<T>] {
        &self.local_samples
    }

    /// Distance between the end points.
    #[inline]
    pub fn chord_length(&self) -> T {
        self.p1.distance(self.p2)
    }

    /// Transform from the line's local frame to absolute space.
    #[inline]
    pub fn frame(&self) -> Affine2<T> {
        Affine2::from_unit_frame(self.p1, self.p2)
    }

    /// Copy of the sample points in absolute space.
    pub fn sample_points(&self) -> Vec<Vector2<T>> {
        let frame = self.frame();
        self.local_samples.iter().map(|&p| frame.apply(p)).collect()
    }

    /// Absolute position at parametric `t` along segment `seg_index`.
    #[inline]
    pub fn point_at(&self, seg_index: usize, t: T) -> Vector2<T> {
        let local = point_from_parametric(
            self.local_samples[seg_index],
            self.local_samples[seg_index + 1],
            t,
        );
        self.frame().apply(local)
    }

    /// Samples mapped through `transform` (applied to the local samples) and tagged with their
    /// index.
    pub fn tagged_points(&self, transform: &Affine2<T>) -> Vec<TaggedPoint<T>> {
        self.local_samples
            .iter()
            .enumerate()
            .map(|(i, &p)| TaggedPoint::new(transform.apply(p), i))
            .collect()
    }
}
