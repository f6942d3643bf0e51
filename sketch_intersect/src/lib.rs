//! Intersection of sampled sketch lines.
//!
//! A sketch line is a polyline of sample points stored relative to its two end points. This crate
//! finds where two such lines cross by splitting both into x-monotone runs and sweeping each pair
//! of runs, merges near duplicate hits, and can split both lines at the crossings (see
//! [sketch::intersect_lines]).
//!
//! All tolerances are passed in explicitly through [core::tolerance::Tolerances].
//!
//! # Examples
//!
//! ```
//! # use sketch_intersect::sampled_line;
//! # use sketch_intersect::core::{math::Vector2, tolerance::Tolerances};
//! # use sketch_intersect::polyline::intersection_positions;
//! let horizontal = sampled_line![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)];
//! let vertical = sampled_line![(5.0, -5.0), (5.0, 0.5), (5.0, 5.0)];
//! let points = intersection_positions(&horizontal, &vertical, &Tolerances::default());
//! assert_eq!(points.len(), 1);
//! assert!(points[0].fuzzy_eq_eps(Vector2::new(5.0, 0.0), 1e-9));
//! ```

#[macro_use]
mod macros;
pub mod core;
pub mod error;
pub mod polyline;
pub mod sketch;

pub use error::{InvalidInputError, SketchError};
