//! Tolerance tiers used to decide degeneracy, parallelism, and duplicate intersects.

use crate::{core::traits::Real, error::InvalidInputError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Three tier epsilon configuration passed into every intersection function.
///
/// All values are absolute distances except `fine` which is used as a sine of angle when testing
/// if two segments are parallel. Tiers must satisfy `0 < fine < moderate < loose`.
///
/// # Examples
///
/// ```
/// # use sketch_intersect::core::tolerance::Tolerances;
/// let tol: Tolerances<f64> = Tolerances::new(1e-9, 1e-6, 1e-4).unwrap();
/// assert!((tol.moderate_squared() - 1e-12).abs() < 1e-20);
/// assert!(Tolerances::new(1e-4, 1e-6, 1e-3).is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        rename_all = "camelCase",
        try_from = "TolerancesData<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    /// Tightest tier, parallel segment detection.
    pub fine: T,
    /// Proximity and degenerate segment detection.
    pub moderate: T,
    /// Merging of near coincident intersects.
    pub loose: T,
}

impl<T> Tolerances<T>
where
    T: Real,
{
    /// Create validated tolerances.
    pub fn new(fine: T, moderate: T, loose: T) -> Result<Self, InvalidInputError> {
        let tol = Tolerances {
            fine,
            moderate,
            loose,
        };
        tol.validate()?;
        Ok(tol)
    }

    /// Check the tier ordering, useful after deserializing.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let ordered = T::zero() < self.fine && self.fine < self.moderate && self.moderate < self.loose;
        if !ordered || !self.loose.is_finite_num() {
            return Err(InvalidInputError::InvalidTolerances);
        }

        Ok(())
    }

    /// Margin used to keep intersect parameters away from segment end points.
    #[inline]
    pub fn moderate_squared(&self) -> T {
        self.moderate * self.moderate
    }

    /// Fraction of a segment that intersect parameters are kept away from its end points,
    /// `moderate^2` capped at `0.25`.
    #[inline]
    pub fn param_margin(&self) -> T {
        let quarter = T::half() * T::half();
        num_traits::real::Real::min(self.moderate_squared(), quarter)
    }

    /// Same tiers with the distance tiers divided by `length`.
    ///
    /// Used to express absolute distances inside a frame where a chord of `length` has unit
    /// length.
    #[inline]
    pub(crate) fn scaled_to_unit(&self, length: T) -> Self {
        Tolerances {
            fine: self.fine,
            moderate: self.moderate / length,
            loose: self.loose / length,
        }
    }
}

/// Unchecked tiers as read by serde, validated on conversion.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TolerancesData<T> {
    fine: T,
    moderate: T,
    loose: T,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<TolerancesData<T>> for Tolerances<T>
where
    T: Real,
{
    type Error = InvalidInputError;

    fn try_from(data: TolerancesData<T>) -> Result<Self, Self::Error> {
        Tolerances::new(data.fine, data.moderate, data.loose)
    }
}

impl<T> Default for Tolerances<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Tolerances {
            fine: T::from_f64_lossy(1e-8),
            moderate: T::from_f64_lossy(1e-5),
            loose: T::from_f64_lossy(1e-3),
        }
    }
}
