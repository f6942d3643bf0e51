use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Real number type the geometry is generic over (`f32` or `f64`).
///
/// Requires [IndexableNum] so run bounding boxes can be loaded into a spatial index.
pub trait Real:
    num_traits::real::Real + FuzzyOrd + Default + std::fmt::Debug + IndexableNum + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// `false` for infinities and NaN.
    #[inline]
    fn is_finite_num(&self) -> bool {
        (*self - *self).is_zero()
    }

    /// Lossy conversion from an `f64` literal, used for default tolerances.
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        <Self as num_traits::NumCast>::from(value).unwrap_or_else(Self::zero)
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }
}
