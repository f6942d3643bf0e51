//! Error types for the few preconditions that are checked.
//!
//! Geometric degeneracy (parallel segments, zero length segments, no overlap) is never an error,
//! those cases resolve to "no intersect".

use crate::sketch::{LineId, PointId};

/// Input that violates a precondition of the intersection functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// A sampled line needs at least a start and an end sample.
    #[error("sampled line needs at least 2 sample points, got {count}")]
    TooFewSamples { count: usize },
    /// Line end points (or an infinite line's direction) coincide so no local frame exists.
    #[error("end points coincide, local frame is undefined")]
    DegenerateFrame,
    /// A sample point has a NaN or infinite coordinate.
    #[error("sample point at index {index} is not finite")]
    NonFiniteSample { index: usize },
    /// Tolerance tiers must satisfy `0 < fine < moderate < loose`.
    #[error("tolerances must satisfy 0 < fine < moderate < loose")]
    InvalidTolerances,
}

/// Failure applying an operation to a [Sketch](crate::sketch::Sketch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SketchError {
    #[error("sketch has no line {0:?}")]
    UnknownLine(LineId),
    #[error("sketch has no point {0:?}")]
    UnknownPoint(PointId),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}
